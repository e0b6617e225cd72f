pub mod config;
pub mod container;
pub mod data;
pub mod logging;
pub mod model;
pub mod network;
pub mod ui;
