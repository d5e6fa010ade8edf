//! Error handling for the docwalker application
//!
//! This module provides the error handling system for the docwalker
//! application, including error types, result aliases, and error context
//! utilities.

pub mod context;
pub mod types;

pub use context::ResultExt;
pub use types::{DocError, ErrorSeverity, Result};
