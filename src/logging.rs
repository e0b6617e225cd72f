use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Env var naming the log file prefix; takes precedence over the config.
pub const LOG_ENV_VAR: &str = "MARS_PHOTOS_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled unless `MARS_PHOTOS_LOG` or `[logging] file` is set,
/// since the TUI owns stdout. Files get a `{timestamp}.{pid}` suffix so
/// concurrent instances do not clobber each other.
///
/// Returns the path actually written to.
pub fn init_tracing(config: &LoggingConfig) -> Option<PathBuf> {
    let log_path = std::env::var(LOG_ENV_VAR)
        .ok()
        .or_else(|| config.file.clone())?;

    let unique_path = PathBuf::from(unique_log_path(&log_path));

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file = match std::fs::File::create(&unique_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "Warning: Failed to create log file {}: {}",
                unique_path.display(),
                err
            );
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
    if initialized.is_err() {
        return None;
    }

    Some(unique_path)
}

fn unique_log_path(prefix: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", prefix, timestamp, pid)
}
