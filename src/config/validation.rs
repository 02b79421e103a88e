//! Configuration validation module
//!
//! This module checks the logging settings before a subscriber is built
//! from them.

use tracing_subscriber::EnvFilter;

use super::Settings;
use crate::utils::errors::{I18nError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.trim().is_empty() {
        return Err(I18nError::Config("Logging level is required".to_string()));
    }

    if let Err(e) = EnvFilter::try_new(&config.level) {
        return Err(I18nError::Config(format!(
            "Invalid logging level '{}': {}",
            config.level, e
        )));
    }

    if let Some(ref file_path) = config.file_path {
        if file_path.trim().is_empty() {
            return Err(I18nError::Config(
                "Logging file path cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggingConfig;

    fn settings_with(level: &str, file_path: Option<&str>) -> Settings {
        Settings {
            logging: LoggingConfig {
                level: level.to_string(),
                file_path: file_path.map(str::to_string),
            },
        }
    }

    #[test]
    fn test_accepts_directive_levels() {
        assert!(validate_settings(&settings_with("debug", None)).is_ok());
        assert!(validate_settings(&settings_with("devbr_i18n=trace,warn", None)).is_ok());
    }

    #[test]
    fn test_rejects_empty_level() {
        assert!(validate_settings(&settings_with("  ", None)).is_err());
    }

    #[test]
    fn test_rejects_unparsable_level() {
        assert!(validate_settings(&settings_with("devbr_i18n=loud", None)).is_err());
    }

    #[test]
    fn test_rejects_empty_file_path() {
        assert!(validate_settings(&settings_with("info", Some(""))).is_err());
    }
}
