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
    /// Uses `~/.config/movie-search/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("movie-search").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads, parses and validates the config file at `path`.
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
    ///
    /// Checks:
    /// - The OMDb base URL is present and parses as a URL
    /// - Request and connect timeouts are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.omdb.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "omdb.base_url must not be empty".to_string(),
            });
        }

        if let Err(err) = reqwest::Url::parse(base_url) {
            return Err(ConfigError::ValidationError {
                message: format!("omdb.base_url '{}' is not a valid URL: {}", base_url, err),
            });
        }

        if self.omdb.timeout_seconds == 0 || self.omdb.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "omdb timeouts must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
