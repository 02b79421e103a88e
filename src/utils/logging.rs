//! Logging configuration and setup
//!
//! This module provides logging initialization and the structured log
//! events emitted by the translation store.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;
use crate::utils::errors::{I18nError, MissReason, Result};

/// Initialize logging based on configuration
///
/// Logs go to stderr, and additionally to a daily rolling file inside the
/// `file_path` directory when it is set. The returned guard flushes the file
/// writer when dropped, so keep it alive for as long as logging is needed.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| I18nError::Config(format!("Invalid logging level '{}': {}", config.level, e)))?;

    let (file_layer, guard) = match config.file_path {
        Some(ref dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "devbr-i18n.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| I18nError::Logging(e.to_string()))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a key path that did not resolve to a translated string
pub fn log_missing_translation(path: &str, reason: &MissReason) {
    warn!(key = %path, reason = %reason, "Translation key not found");
}

/// Log catalog statistics
pub fn log_catalog_stats(locale: &str, sections: usize, total_keys: usize) {
    info!(
        locale = locale,
        sections = sections,
        total_keys = total_keys,
        "Translation catalog loaded"
    );
}

/// Log the size of a catalog export
pub fn log_catalog_export(locale: &str, bytes: usize) {
    debug!(locale = locale, bytes = bytes, "Translation catalog exported");
}
