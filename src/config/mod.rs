//! Configuration management module
//!
//! This module handles loading and validation of the logging settings used
//! by the `devbr-i18n` binary. The translation store itself takes no
//! configuration.

pub mod settings;
pub mod validation;

pub use settings::{LoggingConfig, Settings};
