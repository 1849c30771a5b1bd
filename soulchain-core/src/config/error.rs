use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Config I/O error: {0}")]
    Io(String),

    /// Failed to parse the configuration file
    #[error("Config parse error: {0}")]
    Parse(String),

    /// A value is out of range or unknown
    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}
