//! Internationalization module
//!
//! This module holds the compiled-in pt-BR catalog for the DevBr UI and the
//! key-path lookup used by presentation code. Lookups never fail: a path
//! without a translation comes back unchanged and is logged.

pub mod pt_br;
pub mod store;
pub mod tree;

// Re-export commonly used i18n components
pub use store::{t, TranslationStats, TranslationStore};
pub use tree::{Node, TranslationTree, KEY_SEPARATOR};
