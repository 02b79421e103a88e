//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Name of the optional settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "devbr-i18n";

/// Main application configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
        }
    }
}

impl Settings {
    /// Load settings from `devbr-i18n.toml` if present, defaults otherwise
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(DEFAULT_SETTINGS_FILE).required(false))
            .build()?;

        settings.try_deserialize()
    }

    /// Load settings from an explicit file, which must exist
    pub fn from_file(path: &Path) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::I18nError> {
        super::validation::validate_settings(self)
    }
}
