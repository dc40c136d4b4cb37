use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project-local configuration file, created by the operator.
pub const PROJECT_CONFIG_PATH: &str = ".servicenow/config.yaml";

/// Optional local overrides, typically kept out of version control.
pub const LOCAL_CONFIG_PATH: &str = ".servicenow/local.yaml";

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "SERVICENOW_ADAPTER_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Adapter id cannot be empty")]
    EmptyAdapterId,

    #[error("Instance url cannot be empty")]
    EmptyUrl,

    #[error("Invalid instance url '{0}': {1}")]
    InvalidUrl(String, String),

    #[error("ServiceNow table name cannot be empty")]
    EmptyTable,

    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .servicenow/config.yaml (project config)
    /// 3. .servicenow/local.yaml (local overrides, optional)
    /// 4. Environment variables (SERVICENOW_ADAPTER_* prefix, `__` nesting)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(PROJECT_CONFIG_PATH))
            .merge(Yaml::file(LOCAL_CONFIG_PATH))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Environment overrides still apply on top of the file.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.adapter.id.trim().is_empty() {
            return Err(ConfigError::EmptyAdapterId);
        }

        let properties = &config.adapter.properties;
        if properties.url.trim().is_empty() {
            return Err(ConfigError::EmptyUrl);
        }
        if let Err(e) = reqwest::Url::parse(&properties.url) {
            return Err(ConfigError::InvalidUrl(properties.url.clone(), e.to_string()));
        }
        if properties.service_now_table.trim().is_empty() {
            return Err(ConfigError::EmptyTable);
        }
        if properties.auth.username.trim().is_empty() {
            return Err(ConfigError::EmptyUsername);
        }

        if config.http.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.http.timeout_secs));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}
