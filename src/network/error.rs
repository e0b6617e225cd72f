//! Error types for photo fetching.
//!
//! Separates transport failures (nothing usable came back) from protocol
//! failures (the server answered with a non-success status).

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while fetching photos.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Base URL could not be turned into a request URL
    #[error("Invalid base URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, DNS, timeout or body read failure
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Body was not a JSON array of photo records
    #[error("Failed to decode photo list: {0}")]
    Decode(#[from] serde_json::Error),

    /// Server responded with a non-success status
    #[error("HTTP error: {status}")]
    Http { status: StatusCode },
}

impl NetworkError {
    /// True for failures where no usable HTTP response was obtained.
    pub fn is_transport(&self) -> bool {
        !matches!(self, NetworkError::Http { .. })
    }

    /// Short classification string for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            NetworkError::InvalidUrl { .. } => "invalid_url",
            NetworkError::Client(_) => "client_error",
            NetworkError::Transport { .. } => "transport_error",
            NetworkError::Decode(_) => "decode_error",
            NetworkError::Http { .. } => "http_error",
        }
    }
}
