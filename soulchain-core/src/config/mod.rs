//! Configuration management for SoulChain
//!
//! Defaults first, then an optional TOML file, then environment
//! variable overrides (SOULCHAIN_*).

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

mod error;

pub use error::ConfigError;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Store configuration
    pub store: StoreConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Deferred-task configuration
    pub tasks: TaskConfig,
}

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Data directory for the file backend
    pub data_dir: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON formatting
    pub json_format: bool,

    /// Include target module
    pub with_target: bool,
}

/// Deferred-task configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskConfig {
    /// Latency used by simulated backend calls
    #[serde(with = "humantime_serde")]
    pub simulated_latency: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            logging: LoggingConfig::default(),
            tasks: TaskConfig::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            with_target: true,
        }
    }
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            simulated_latency: Duration::from_millis(1000),
        }
    }
}

impl Config {
    /// Load configuration: defaults, then the file (if given), then env
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Config::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply SOULCHAIN_* environment variable overrides
    fn apply_env(&mut self) {
        if let Ok(dir) = env::var("SOULCHAIN_DATA_DIR") {
            self.store.data_dir = PathBuf::from(dir);
        }
        if let Ok(level) = env::var("SOULCHAIN_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(ms) = env::var("SOULCHAIN_SIMULATED_LATENCY_MS") {
            if let Ok(ms) = ms.parse::<u64>() {
                self.tasks.simulated_latency = Duration::from_millis(ms);
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::InvalidValue(format!(
                "unknown log level: {}",
                self.logging.level
            )));
        }
        Ok(())
    }
}
