//! Translation store and lookup
//!
//! This module holds the process-wide pt-BR catalog and resolves dotted key
//! paths against it. A path that does not end on a translated string falls
//! back to the path itself and is logged.

use once_cell::sync::Lazy;

use super::pt_br;
use super::tree::{Node, TranslationTree};
use crate::utils::errors::{I18nError, Result};
use crate::utils::logging::{log_catalog_export, log_missing_translation};

static PT_BR: Lazy<TranslationStore> =
    Lazy::new(|| TranslationStore::new(pt_br::LOCALE, pt_br::catalog()));

/// Read-only catalog of translated strings for one locale
#[derive(Debug, Clone)]
pub struct TranslationStore {
    locale: &'static str,
    tree: TranslationTree,
}

impl TranslationStore {
    /// Create a store over an already built tree
    pub fn new(locale: &'static str, tree: TranslationTree) -> Self {
        Self { locale, tree }
    }

    /// The process-wide Brazilian Portuguese store
    pub fn pt_br() -> &'static TranslationStore {
        &PT_BR
    }

    /// Get a translated message, or `path` itself if there is none
    pub fn resolve<'a>(&self, path: &'a str) -> &'a str {
        match self.tree.lookup(path) {
            Ok(text) => text,
            Err(reason) => {
                log_missing_translation(path, &reason);
                path
            }
        }
    }

    /// Get a translated message, reporting why a miss happened
    pub fn try_resolve(&self, path: &str) -> Result<&'static str> {
        self.tree
            .lookup(path)
            .map_err(|reason| I18nError::not_resolved(path, reason))
    }

    /// Get a translated message without logging misses
    pub fn get(&self, path: &str) -> Option<&'static str> {
        self.tree.lookup(path).ok()
    }

    /// Check whether `path` names a translated message
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Locale code of this store
    pub fn locale(&self) -> &'static str {
        self.locale
    }

    /// The underlying tree
    pub fn tree(&self) -> &TranslationTree {
        &self.tree
    }

    /// Top-level section
    pub fn section(&self, name: &str) -> Option<&Node> {
        self.tree.section(name)
    }

    /// Names of the top-level sections
    pub fn sections(&self) -> Vec<&'static str> {
        self.tree.section_names()
    }

    /// Every valid key path
    pub fn keys(&self) -> Vec<String> {
        self.tree.leaf_paths()
    }

    /// Get translation statistics
    pub fn stats(&self) -> TranslationStats {
        TranslationStats {
            locale: self.locale.to_string(),
            sections: self.tree.section_names().len(),
            total_keys: self.tree.count_leaves(),
        }
    }

    /// Export the catalog as pretty-printed nested JSON
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(&self.tree)?;
        log_catalog_export(self.locale, json.len());
        Ok(json)
    }
}

/// Translate `path` with the pt-BR store
pub fn t(path: &str) -> &str {
    TranslationStore::pt_br().resolve(path)
}

/// Translation statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationStats {
    pub locale: String,
    pub sections: usize,
    pub total_keys: usize,
}
