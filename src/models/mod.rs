//! Data models and structures for docwalker

pub mod config;
pub mod doc;

pub use config::Settings;
pub use doc::{DirectoryEntry, DocResults, DocSummary, FileEntry, FunctionInfo};
