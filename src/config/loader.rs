use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::config::types::{Config, CounterConfig, LoggingConfig};
use crate::engine::{CounterActionKind, CounterError};

/// Keys the list view handles itself; counter bindings may not take them.
pub const RESERVED_KEYS: [char; 4] = ['q', 'd', 'r', '/'];

/// Accepted range for `ui.tick_rate_ms`.
const TICK_RATE_RANGE_MS: std::ops::RangeInclusive<u64> = 16..=5000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid counter binding for key '{key}': {source}")]
    InvalidBinding {
        key: String,
        #[source]
        source: CounterError,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/usercards/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("usercards").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The tick rate is within bounds
    /// - The log level parses as a level filter
    /// - Every counter binding is a single free key naming a known action
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !TICK_RATE_RANGE_MS.contains(&self.ui.tick_rate_ms) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.tick_rate_ms must be between {} and {}, got {}",
                    TICK_RATE_RANGE_MS.start(),
                    TICK_RATE_RANGE_MS.end(),
                    self.ui.tick_rate_ms
                ),
            });
        }

        if self.logging.level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::ValidationError {
                message: format!("Unknown log level '{}'", self.logging.level),
            });
        }

        self.counter.key_bindings()?;
        Ok(())
    }
}

impl CounterConfig {
    /// Resolves the binding table into key characters and action kinds.
    pub fn key_bindings(&self) -> Result<Vec<(char, CounterActionKind)>, ConfigError> {
        self.bindings
            .iter()
            .map(|(key, action)| {
                let mut chars = key.chars();
                let ch = match (chars.next(), chars.next()) {
                    (Some(ch), None) => ch,
                    _ => {
                        return Err(ConfigError::ValidationError {
                            message: format!(
                                "Counter binding key '{}' must be a single character",
                                key
                            ),
                        })
                    }
                };
                if RESERVED_KEYS.contains(&ch) {
                    return Err(ConfigError::ValidationError {
                        message: format!("Counter binding key '{}' is reserved", key),
                    });
                }
                let kind = action
                    .parse::<CounterActionKind>()
                    .map_err(|e| ConfigError::InvalidBinding {
                        key: key.clone(),
                        source: e,
                    })?;
                Ok((ch, kind))
            })
            .collect()
    }
}

impl LoggingConfig {
    /// Resolved log file path.
    pub fn log_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("usercards")
                .join("usercards.log")
        })
    }
}
