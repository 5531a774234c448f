//! Configuration module for arena-cli.
//!
//! Handles loading configuration from the TOML file, CLI arguments,
//! and environment variables.

pub mod file;

use crate::config::file::FileConfig;
use arena_sdk::governor::GovernorConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Validated configuration.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub governor: GovernorConfig,
    pub token: Option<String>,
}

/// Overrides taken from the command line or environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<Url>,
    pub token: Option<String>,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: PathBuf,
    overrides: Overrides,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, overrides: Overrides) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            overrides,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file (a missing file means all defaults)
    /// 2. Apply CLI / environment overrides
    /// 3. Validate the result
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let mut file_config = match std::fs::read_to_string(&self.config_path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = ?self.config_path, "config file not found, using defaults");
                FileConfig::default()
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(base_url) = &self.overrides.base_url {
            file_config.api.base_url = Some(base_url.clone());
        }
        if let Some(token) = &self.overrides.token {
            file_config.session.token = Some(token.clone());
        }

        self.validate(file_config)
    }

    fn validate(&self, config: FileConfig) -> Result<LoadedConfig, ConfigError> {
        let base_url = config.api.base_url.ok_or_else(|| {
            ConfigError::ValidationError(
                "api.base_url is not set (use --base-url or the config file)".to_string(),
            )
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError(format!(
                "api.base_url must be http or https, got {}",
                base_url.scheme()
            )));
        }
        if config.governor.limit == 0 {
            return Err(ConfigError::ValidationError(
                "governor.limit must be at least 1".to_string(),
            ));
        }
        if config.governor.window_ms == 0 {
            return Err(ConfigError::ValidationError(
                "governor.window_ms must be at least 1".to_string(),
            ));
        }

        Ok(LoadedConfig {
            base_url,
            timeout: Duration::from_secs(config.api.timeout_secs),
            governor: GovernorConfig {
                window: Duration::from_millis(config.governor.window_ms),
                limit: config.governor.limit,
            },
            token: config.session.token.filter(|t| !t.trim().is_empty()),
        })
    }
}
