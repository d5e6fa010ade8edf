//! Error types and definitions for docwalker
//!
//! This module provides the error handling system for the docwalker
//! application, including error types, severity levels, and a result alias.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for docwalker operations
#[derive(Debug, Error)]
pub enum DocError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Source file read or decode errors
    #[error("Error reading source file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Syntax-tree parse failures for a single source file
    #[error("Failed to parse {path}")]
    ParseFailure { path: PathBuf },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied { path: PathBuf },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Directory traversal errors
    #[error("Directory traversal error for {path}: {message}")]
    DirectoryTraversal { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// Invalid output format
    #[error("Invalid output format: {format}")]
    InvalidOutputFormat { format: String },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// Documentation generation errors
    #[error("Documentation generation error: {message}")]
    Generation { message: String },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// CSV serialization error
    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },
}

impl DocError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - the affected file still gets an entry
            DocError::ParseFailure { .. } => ErrorSeverity::Warning,
            DocError::ReadFile { .. } => ErrorSeverity::Warning,
            DocError::PermissionDenied { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            DocError::InvalidPath { .. } => ErrorSeverity::Critical,
            DocError::Config { .. } => ErrorSeverity::Critical,
            DocError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            DocError::ConfigRead { .. } => ErrorSeverity::Critical,
            DocError::ConfigParse { .. } => ErrorSeverity::Critical,
            DocError::InvalidOutputFormat { .. } => ErrorSeverity::Critical,
            DocError::OutputWrite { .. } => ErrorSeverity::Critical,
            DocError::StdoutWrite { .. } => ErrorSeverity::Critical,

            // Regular errors - current operation fails but overall process can continue
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            DocError::PermissionDenied { path } => {
                format!(
                    "Cannot access '{}' due to permission denied. Check file permissions.",
                    path.display()
                )
            }
            DocError::ParseFailure { path } => {
                format!(
                    "'{}' contains syntax errors and contributes no documentation.",
                    path.display()
                )
            }
            DocError::ReadFile { path, source } => {
                format!(
                    "Could not read '{}': {}. The file is skipped.",
                    path.display(),
                    source
                )
            }
            DocError::InvalidPath { path } => {
                format!(
                    "Invalid path: '{}'. Please provide a valid directory path.",
                    path.display()
                )
            }
            DocError::ConfigNotFound { path } => {
                format!(
                    "Configuration file not found at '{}'. Create a config file or use command line options.",
                    path.display()
                )
            }
            DocError::OutputWrite { path, source } => {
                format!(
                    "Could not write '{}': {}. Check disk space and permissions.",
                    path.display(),
                    source
                )
            }
            DocError::Io { source } => {
                format!(
                    "File system error: {}. Check disk space and permissions.",
                    source
                )
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        DocError::Io { source }
    }

    /// Create a source-file read error
    pub fn read_file_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a parse failure for a single source file
    pub fn parse_failure(path: impl Into<PathBuf>) -> Self {
        DocError::ParseFailure { path: path.into() }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        DocError::Config {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        DocError::PermissionDenied { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        DocError::DirectoryTraversal {
            path: path.into(),
            message: message.into(),
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for DocError {
    fn from(err: std::io::Error) -> Self {
        DocError::io_error(err)
    }
}

impl From<glob::PatternError> for DocError {
    fn from(err: glob::PatternError) -> Self {
        DocError::GlobPattern { source: err }
    }
}

impl From<serde_json::Error> for DocError {
    fn from(err: serde_json::Error) -> Self {
        DocError::JsonSerialize { source: err }
    }
}

impl From<csv::Error> for DocError {
    fn from(err: csv::Error) -> Self {
        DocError::Csv { source: err }
    }
}

/// Result type alias for docwalker operations
pub type Result<T> = std::result::Result<T, DocError>;
