use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable that replaces `api.base_url`.
pub const API_URL_ENV: &str = "COURSE_FEEDBACK_API_URL";

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
    /// Uses `~/.config/course-feedback/config.toml` on Linux, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("course-feedback").join("config.toml")
    }

    /// Loads `path` (or the default config file), applies the environment
    /// and `base_url` overrides, then validates the result.
    ///
    /// Validation runs last so an override can replace a bad value from
    /// the file.
    pub fn load_with_overrides(
        path: Option<&Path>,
        base_url: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::load_from(&Self::config_path())?,
        };
        config.apply_env_overrides();
        if let Some(url) = base_url {
            config.api.base_url = url.to_string();
        }
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path` without validating it.
    ///
    /// - A missing file yields `Config::default()`.
    /// - An existing file is parsed as TOML.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
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

        Ok(config)
    }

    /// Replaces the base URL with `COURSE_FEEDBACK_API_URL` when it is set
    /// and non-empty.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api.base_url = url.trim().to_string();
            }
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `api.base_url` is an absolute http(s) URL
    /// - timeouts and tick rate are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api.base_url).map_err(|e| ConfigError::ValidationError {
            message: format!("api.base_url '{}' is not a valid URL: {}", self.api.base_url, e),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "api.base_url must use http or https, got '{}'",
                    url.scheme()
                ),
            });
        }

        if self.api.connect_timeout_seconds == 0 || self.api.request_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "api timeouts must be greater than zero".to_string(),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
