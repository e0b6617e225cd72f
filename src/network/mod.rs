//! HTTP access to the Mars photos endpoint.

pub mod error;
pub mod service;
pub mod timeout;

pub use error::NetworkError;
pub use service::{photos_url, HttpMarsApiService, MarsApiService, PHOTOS_PATH};
pub use timeout::TimeoutConfig;
