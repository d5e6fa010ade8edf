//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Docwalker - Python documentation extractor
#[derive(Parser, Debug)]
#[command(name = "docwalker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract docstrings and function signatures from Python sources into a single HTML page")]
#[command(long_about = "Docwalker walks one or more directory trees, parses every Python file it finds, \
and collects module docstrings, function names, parameters and function docstrings. \
The results are rendered as one self-contained HTML document with a collapsible file tree, \
a searchable flat function list, and a toggle between the two views.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Document a single project
    docwalker ./my-project

    # Document several trees in one page
    docwalker ./src ./scripts

    # Skip files matching glob patterns
    docwalker ./src --exclude '**/test_*.py' --exclude '**/.venv/**'

    # Limit directory traversal depth
    docwalker ./src --max-depth 3

Output Options:
    # Write the HTML page somewhere other than documentation.html
    docwalker ./src --output-file docs/index.html

    # Emit JSON to stdout instead of HTML
    docwalker ./src --format json

    # Generate a CSV function listing for spreadsheet analysis
    docwalker ./src --format csv --output-file functions.csv

    # Escape extracted text before embedding it in HTML
    docwalker ./src --escape-html

Configuration:
    # Use a specific configuration file
    docwalker ./src --config ./docwalker.toml

    # Create a default configuration file
    docwalker --init

Verbosity:
    # Quiet mode with minimal output
    docwalker ./src --quiet

    # Verbose mode with per-file detail
    docwalker ./src --verbose
")]
pub struct Args {
    /// Root directories to scan for Python source files
    #[arg(value_name = "DIR", help = "Directories to scan for Python files (each becomes a top-level node in the file tree)")]
    pub directories: Vec<PathBuf>,

    /// Exclude files matching these glob patterns
    #[arg(short, long, value_name = "PATTERN", help = "Glob patterns for files to exclude (can be specified multiple times, e.g., --exclude '**/test_*.py')")]
    pub exclude: Vec<String>,

    /// Maximum depth for directory traversal
    #[arg(long, value_name = "DEPTH", help = "Maximum directory depth to traverse (e.g., 3 will scan up to 3 levels deep from each root)")]
    pub max_depth: Option<usize>,

    /// Output format (html, json, csv)
    #[arg(short, long, value_enum, value_name = "FORMAT", help = "Output format: 'html' for the browsable page, 'json' for machine processing, 'csv' for spreadsheet analysis")]
    pub format: Option<OutputFormat>,

    /// Output file path
    #[arg(long, value_name = "FILE", help = "File to write output to (html defaults to documentation.html; json and csv default to stdout)")]
    pub output_file: Option<PathBuf>,

    /// Escape extracted text before embedding it in HTML
    #[arg(long, help = "HTML-escape docstrings, names and paths before embedding them in the generated page")]
    pub escape_html: bool,

    /// Suppress non-essential output
    #[arg(short, long, help = "Suppress non-essential output (only warnings, errors and the output itself)")]
    pub quiet: bool,

    /// Show detailed progress and debug information
    #[arg(short, long, help = "Show detailed progress and debug information (per-file detail and the effective configuration)")]
    pub verbose: bool,

    /// Follow symbolic links during directory traversal
    #[arg(long, help = "Follow symbolic links during directory traversal (may visit the same file twice if links form cycles)")]
    pub follow_links: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output (useful for terminals that don't support ANSI colors or for piping output)")]
    pub no_colors: bool,

    /// Disable the progress spinner
    #[arg(long, help = "Disable the progress spinner (useful for CI environments or when redirecting output)")]
    pub no_progress: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .docwalker.toml in current directory if not specified)")]
    pub config: Option<PathBuf>,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.docwalker.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Self-contained HTML document
    Html,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
