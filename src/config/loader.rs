use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/tenkey/config.toml` on Unix/macOS, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("tenkey").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error here: the user
    /// asked for that specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
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
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_ms must be greater than zero".to_string(),
            });
        }

        // f64 carries at most 17 significant decimal digits.
        if let Some(precision) = self.display.precision {
            if precision > 17 {
                return Err(ConfigError::ValidationError {
                    message: format!("display.precision {} exceeds the maximum of 17", precision),
                });
            }
        }

        Ok(())
    }
}
