use std::time::Duration;

use crate::config::NetworkConfig;

/// Timeouts applied to every photo request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    pub request: Duration,
    pub connect: Duration,
}

impl From<&NetworkConfig> for TimeoutConfig {
    fn from(network: &NetworkConfig) -> Self {
        Self {
            request: Duration::from_secs(network.timeout_seconds as u64),
            connect: Duration::from_secs(network.connect_timeout_seconds as u64),
        }
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self::from(&NetworkConfig::default())
    }
}
