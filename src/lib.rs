//! DevBr translations
//!
//! Brazilian Portuguese strings for the DevBr web IDE, keyed by feature area,
//! and a resolver that turns dotted key paths such as `"deploy.building"`
//! into display text.

pub mod config;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{I18nError, MissReason, Result};

// Re-export main components for easy access
pub use i18n::{t, Node, TranslationStats, TranslationStore, TranslationTree};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
