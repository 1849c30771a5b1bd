//! Logging subsystem for SoulChain
//!
//! Unified logging interface over the `tracing` crate. The env filter
//! (RUST_LOG) wins over the configured level when set.

use crate::config::LoggingConfig;
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod level;

pub use level::LogLevel;

/// Errors from logging initialization
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A global subscriber was already installed
    #[error("Logging initialization failed: {0}")]
    InitializationFailed(String),
}

/// Initialize logging with default settings
pub fn init_logging() -> Result<(), LoggingError> {
    init_logging_with_config(&LoggingConfig::default())
}

/// Initialize logging from the application configuration
pub fn init_logging_with_config(config: &LoggingConfig) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let fmt_layer = fmt::layer().with_target(config.with_target);

    if config.json_format {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .try_init()
            .map_err(|e| LoggingError::InitializationFailed(e.to_string()))?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LoggingError::InitializationFailed(e.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::Trace.as_str(), "trace");
        assert_eq!(LogLevel::Debug.as_str(), "debug");
        assert_eq!(LogLevel::Info.as_str(), "info");
        assert_eq!(LogLevel::Warn.as_str(), "warn");
        assert_eq!(LogLevel::Error.as_str(), "error");
    }

    #[test]
    fn test_default_config_level_parses() {
        let config = LoggingConfig::default();
        assert!(config.level.parse::<LogLevel>().is_ok());
    }
}
