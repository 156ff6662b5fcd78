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
    /// Uses `~/.config/postcraft/config.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if there is no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("postcraft").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
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
    /// - `gateway.base_url` is an http(s) URL
    /// - endpoint paths start with `/`
    /// - timeouts and notice duration are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let gateway = &self.gateway;

        let url = reqwest::Url::parse(&gateway.base_url).map_err(|e| invalid(format!(
            "gateway.base_url '{}' is not a valid URL: {}",
            gateway.base_url, e
        )))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "gateway.base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        for (field, path) in [
            ("gateway.generate_path", &gateway.generate_path),
            ("gateway.improve_path", &gateway.improve_path),
        ] {
            if !path.starts_with('/') {
                return Err(invalid(format!("{} must start with '/', got '{}'", field, path)));
            }
        }

        for (field, value) in [
            ("gateway.timeout_seconds", gateway.timeout_seconds),
            ("gateway.connect_timeout_seconds", gateway.connect_timeout_seconds),
            ("ui.notice_seconds", self.ui.notice_seconds),
            ("ui.tick_rate_ms", self.ui.tick_rate_ms),
        ] {
            if value == 0 {
                return Err(invalid(format!("{} must be greater than zero", field)));
            }
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError { message }
}
