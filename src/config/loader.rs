use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::ApiConfig;

/// Why an [`ApiConfig`] or [`AppIdentity`](crate::config::AppIdentity) was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read API settings from '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("API settings in '{path}' are not valid TOML: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid API settings: {message}")]
    ValidationError { message: String },

    #[error("app identity is already set, refusing to install '{name}'")]
    AlreadyInitialized { name: String },
}

impl ApiConfig {
    /// `reducer-kit/config.toml` under the platform config dir, or under `.`
    /// when the platform has none.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("reducer-kit").join("config.toml")
    }

    /// Settings from [`config_path`](Self::config_path); defaults when that
    /// file is absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(ApiConfig::default());
        }

        Self::load_from(&path)
    }

    /// Settings from the TOML file at `path`, validated before return.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: ApiConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects a suffix containing `/`, an accept version of 0 and an
    /// identity with a blank name or version.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.suffix.contains('/') {
            return Err(ConfigError::ValidationError {
                message: format!("suffix '{}' must not contain '/'", self.suffix),
            });
        }

        if self.accept_version == 0 {
            return Err(ConfigError::ValidationError {
                message: "accept_version must be at least 1".to_string(),
            });
        }

        if let Some(app) = &self.app {
            app.validate()?;
        }

        Ok(())
    }
}
