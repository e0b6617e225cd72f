//! Configuration loading.
//!
//! Settings come from a TOML file; every section and field is optional
//! and falls back to defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, NetworkConfig, UiConfig, DEFAULT_BASE_URL};
