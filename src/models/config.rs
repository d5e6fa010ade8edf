//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fixed default name of the generated HTML document
pub const DEFAULT_OUTPUT_FILE: &str = "documentation.html";

/// Main configuration settings for docwalker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Root directories to scan for Python source files
    pub directories: Vec<PathBuf>,

    /// Patterns to exclude from scanning
    pub exclude_patterns: Vec<String>,

    /// Maximum directory depth to traverse
    pub max_depth: Option<usize>,

    /// Output format (html, json, csv)
    pub output_format: OutputFormat,

    /// Output file path; HTML defaults to `documentation.html`,
    /// json/csv default to stdout
    pub output_file: Option<PathBuf>,

    /// Whether to escape HTML in extracted text before embedding
    pub escape_html: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed progress and debug information
    pub verbose: bool,

    /// Whether to follow symbolic links during directory traversal
    pub follow_links: bool,

    /// Whether to use colors in console output
    pub use_colors: bool,

    /// Whether to show a progress indicator during the scan
    pub show_progress: bool,
}

impl Settings {
    /// Resolve the effective output file for the configured format.
    ///
    /// HTML always targets a file; json/csv go to stdout unless an output
    /// file was requested.
    pub fn resolved_output_file(&self) -> Option<PathBuf> {
        match (&self.output_file, &self.output_format) {
            (Some(path), _) => Some(path.clone()),
            (None, OutputFormat::Html) => Some(PathBuf::from(DEFAULT_OUTPUT_FILE)),
            (None, _) => None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            directories: Vec::new(),
            exclude_patterns: Vec::new(),
            max_depth: None,
            output_format: OutputFormat::Html,
            output_file: None,
            escape_html: false,
            quiet: false,
            verbose: false,
            follow_links: false,
            use_colors: true,
            show_progress: true,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Self-contained HTML document with tree and flat views
    Html,
    /// JSON output for programmatic consumption
    Json,
    /// CSV flat function list for spreadsheet analysis
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialSettings {
    pub directories: Option<Vec<PathBuf>>,
    pub exclude_patterns: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub escape_html: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub follow_links: Option<bool>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.directories.is_some() {
            self.directories = other.directories;
        }
        if other.exclude_patterns.is_some() {
            self.exclude_patterns = other.exclude_patterns;
        }
        if other.max_depth.is_some() {
            self.max_depth = other.max_depth;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.escape_html.is_some() {
            self.escape_html = other.escape_html;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.follow_links.is_some() {
            self.follow_links = other.follow_links;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(directories) = &self.directories {
            settings.directories = directories.clone();
        }
        if let Some(exclude_patterns) = &self.exclude_patterns {
            settings.exclude_patterns = exclude_patterns.clone();
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = Some(max_depth);
        }
        if let Some(output_format) = &self.output_format {
            settings.output_format = output_format.clone();
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(escape_html) = self.escape_html {
            settings.escape_html = escape_html;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(follow_links) = self.follow_links {
            settings.follow_links = follow_links;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(show_progress) = self.show_progress {
            settings.show_progress = show_progress;
        }

        settings
    }
}
