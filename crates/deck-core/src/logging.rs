//! Tracing setup.
//!
//! The TUI owns the terminal, so logs go to `${DECK_HOME}/logs/deck.log`.
//! `DECK_LOG` takes precedence over the configured level.

use std::fs;

use anyhow::{Context, Result, anyhow};
pub use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, paths};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "DECK_LOG";

/// File name inside the log directory.
pub const LOG_FILE: &str = "deck.log";

/// Builds the filter from `DECK_LOG`, falling back to the configured level.
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global file subscriber.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes buffered lines.
///
/// # Errors
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init(config: &LogConfig) -> Result<WorkerGuard> {
    let dir = paths::log_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_is_used() {
        let config = LogConfig {
            level: "deck_core=trace".to_string(),
        };
        assert_eq!(env_filter(&config).to_string(), "deck_core=trace");
    }

    #[test]
    fn test_invalid_level_falls_back() {
        let config = LogConfig {
            level: "not a [valid directive".to_string(),
        };
        assert_eq!(env_filter(&config).to_string(), "info");
    }
}
