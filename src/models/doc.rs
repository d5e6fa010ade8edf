//! Documentation data model
//!
//! These types are built once during a single synchronous pass over the
//! input directories and are read-only inputs to the renderers afterwards.

use crate::error::DocError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Placeholder rendered for a function without parameters
pub const NO_PARAMETERS: &str = "No parameters";

/// Placeholder rendered for a missing docstring
pub const NO_DOCSTRING: &str = "No docstring";

/// A single discovered function or async-function definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionInfo {
    /// Declared name of the function
    pub name: String,

    /// Leading docstring content, empty when absent
    pub docstring: String,

    /// Ordered positional parameter names
    pub parameters: Vec<String>,
}

impl FunctionInfo {
    /// Render the parameter names joined with ", ", or the literal
    /// "No parameters" when the function takes none.
    pub fn parameter_list(&self) -> String {
        if self.parameters.is_empty() {
            NO_PARAMETERS.to_string()
        } else {
            self.parameters.join(", ")
        }
    }

    /// Render the docstring, or the literal "No docstring" when empty.
    pub fn docstring_text(&self) -> &str {
        if self.docstring.is_empty() {
            NO_DOCSTRING
        } else {
            &self.docstring
        }
    }
}

/// One documented source file
///
/// Files that fail to read or parse still appear, with an empty docstring
/// and no functions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the scanned directory root
    pub relative_path: PathBuf,

    /// Module-level docstring, empty when absent
    pub docstring: String,

    /// Functions in traversal order, nested definitions included
    pub functions: Vec<FunctionInfo>,

    /// Whether the file's syntax tree could not be produced
    pub parse_failed: bool,
}

/// One top-level input directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Base name of the directory as given on the command line
    pub name: String,

    /// Files in filesystem enumeration order
    pub files: Vec<FileEntry>,
}

/// A non-critical error recorded during the scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Path the error relates to
    pub path: PathBuf,

    /// Human-readable error message
    pub message: String,

    /// Severity as a string for serialization
    pub severity: String,
}

/// Summary statistics for a scan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocSummary {
    pub total_directories: usize,
    pub total_files: usize,
    pub total_functions: usize,
    pub files_with_docstring: usize,
    pub parse_failures: usize,
    pub errors_count: usize,
}

impl DocSummary {
    /// Update summary statistics with a directory entry
    pub fn update_with_directory(&mut self, directory: &DirectoryEntry) {
        self.total_directories += 1;
        for file in &directory.files {
            self.total_files += 1;
            self.total_functions += file.functions.len();
            if !file.docstring.is_empty() {
                self.files_with_docstring += 1;
            }
            if file.parse_failed {
                self.parse_failures += 1;
            }
        }
    }
}

/// Accumulated results of one documentation scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocResults {
    /// One entry per input directory, in argument order
    pub directories: Vec<DirectoryEntry>,

    /// Non-critical errors collected during traversal
    pub errors: Vec<ErrorRecord>,

    /// Summary statistics
    pub summary: DocSummary,

    /// Wall-clock duration of the scan
    pub scan_duration: Duration,

    /// When the scan ran
    pub generated_at: DateTime<Utc>,
}

impl DocResults {
    /// Create empty results
    pub fn new() -> Self {
        Self {
            directories: Vec::new(),
            errors: Vec::new(),
            summary: DocSummary::default(),
            scan_duration: Duration::default(),
            generated_at: Utc::now(),
        }
    }

    /// Add a completed directory entry and fold it into the summary
    pub fn add_directory(&mut self, directory: DirectoryEntry) {
        self.summary.update_with_directory(&directory);
        self.directories.push(directory);
    }

    /// Record a non-critical error
    pub fn add_error(&mut self, path: PathBuf, err: &DocError) {
        self.errors.push(ErrorRecord {
            path,
            message: err.user_message(),
            severity: err.severity().to_string(),
        });
        self.summary.errors_count = self.errors.len();
    }

    /// Set the scan duration
    pub fn set_scan_duration(&mut self, duration: Duration) {
        self.scan_duration = duration;
    }

    /// Every discovered function across all directories, paired with its
    /// owning file, preserving the nested tree's relative order.
    pub fn flat_functions(&self) -> impl Iterator<Item = (&FileEntry, &FunctionInfo)> {
        self.directories
            .iter()
            .flat_map(|dir| dir.files.iter())
            .flat_map(|file| file.functions.iter().map(move |func| (file, func)))
    }
}

impl Default for DocResults {
    fn default() -> Self {
        Self::new()
    }
}
