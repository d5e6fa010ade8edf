//! Docwalker - a Python documentation extractor
//!
//! This library walks directory trees, parses Python source files, and
//! collects module docstrings, function names, parameters and function
//! docstrings into a single browsable HTML document (or JSON/CSV).

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;

// Re-export commonly used types
pub use error::{DocError, ErrorSeverity, Result, ResultExt};
pub use models::{
    config::Settings,
    doc::{DirectoryEntry, DocResults, DocSummary, FileEntry, FunctionInfo},
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
