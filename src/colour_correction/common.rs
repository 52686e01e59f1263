//! Common utilities module
//!
//! This module contains shared utilities used across the colour correction stage.

pub mod error;

pub use error::{CorrectionError, Result};
