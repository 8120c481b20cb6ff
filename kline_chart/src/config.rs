//! Application configuration: file loading, environment overrides and
//! validation.
//!
//! Every section is optional; an empty file yields [`AppConfig::default`].
//!
//! ```toml
//! [source]
//! base_url = "http://localhost:8080"
//! endpoint = "/api/stock_data"
//! timeout_secs = 30
//!
//! [chart]
//! up_color = "#ff0000"
//! down_color = "#00ff00"
//! zoom_start_percent = 50
//!
//! [logging]
//! filter = "info"
//! ```

use std::path::Path;

use market_data_client::HttpProviderConfig;
use serde::{Deserialize, Serialize};
use shared_utils::{
    config::{ConfigFileError, load_toml},
    env::env_override,
};
use thiserror::Error;

use crate::render::ChartTheme;

/// Overrides `source.base_url`.
pub const BASE_URL_ENV: &str = "KLINE_API_BASE_URL";
/// Overrides `logging.filter`.
pub const LOG_FILTER_ENV: &str = "KLINE_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    File(#[from] ConfigFileError),

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub source: HttpProviderConfig,
    pub chart: ChartTheme,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".into(),
        }
    }
}

impl AppConfig {
    /// Reads and validates a config file. Environment overrides are not applied.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces configured values with the non-blank environment overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Some(base_url) = env_override(BASE_URL_ENV) {
            self.source.base_url = base_url;
        }
        if let Some(filter) = env_override(LOG_FILTER_ENV) {
            self.logging.filter = filter;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let zoom = self.chart.zoom_start_percent;
        if !(0.0..=100.0).contains(&zoom) {
            return Err(ConfigError::Invalid(format!(
                "chart.zoom_start_percent must be within 0..=100, got {zoom}"
            )));
        }
        if self.source.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("source.base_url must not be empty".into()));
        }
        if self.source.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("source.endpoint must not be empty".into()));
        }
        Ok(())
    }
}
