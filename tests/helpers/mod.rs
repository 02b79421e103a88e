//! Test helpers module
//!
//! Log capture for asserting on diagnostics, and the expected pt-BR
//! catalog contents.

#![allow(dead_code)]

pub mod log_capture;
pub mod test_data;

pub use log_capture::*;
pub use test_data::*;
