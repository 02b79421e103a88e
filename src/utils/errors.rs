//! Error handling for devbr-i18n
//!
//! This module defines the error types used throughout the crate. Lookup
//! misses are modelled here too, even though `TranslationStore::resolve`
//! never hands them to its caller.

use thiserror::Error;

/// Main error type for devbr-i18n
#[derive(Error, Debug)]
pub enum I18nError {
    #[error("Translation key not resolved: '{path}' ({reason})")]
    KeyNotResolved { path: String, reason: MissReason },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}

/// Why a key path did not end on a translated string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissReason {
    /// No child with this name under the current section
    UnknownSegment(String),
    /// The walk reached a message while segments were still left
    BelowLeaf(String),
    /// The full path names a section, not a message
    InteriorNode,
}

impl std::fmt::Display for MissReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissReason::UnknownSegment(segment) => write!(f, "unknown segment '{}'", segment),
            MissReason::BelowLeaf(segment) => {
                write!(f, "segment '{}' descends below a message", segment)
            }
            MissReason::InteriorNode => write!(f, "path names a section, not a message"),
        }
    }
}

/// Result type alias for devbr-i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

impl I18nError {
    /// Build a `KeyNotResolved` error for `path`
    pub fn not_resolved(path: &str, reason: MissReason) -> Self {
        I18nError::KeyNotResolved {
            path: path.to_string(),
            reason,
        }
    }

    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            I18nError::KeyNotResolved { .. } => true,
            I18nError::Config(_) => false,
            I18nError::Settings(_) => false,
            I18nError::Serialization(_) => false,
            I18nError::Logging(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            I18nError::KeyNotResolved { .. } => ErrorSeverity::Warning,
            I18nError::Config(_) => ErrorSeverity::Critical,
            I18nError::Settings(_) => ErrorSeverity::Critical,
            I18nError::Logging(_) => ErrorSeverity::Warning,
            I18nError::Serialization(_) => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
