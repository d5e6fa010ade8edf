//! Output formatting and writing functionality

mod formatters;
pub mod html;
mod progress;
mod writers;

pub use self::html::HtmlRenderer;
pub use self::progress::{create_progress_callback, ProgressReporter};
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::doc::DocResults;

/// Trait for different output formatters
pub trait Formatter {
    /// Format scan results into a string
    fn format(&self, results: &DocResults) -> Result<String>;
}

/// HTML formatter producing the single-page document
pub struct HtmlFormatter {
    pub escape_html: bool,
}

impl HtmlFormatter {
    /// Create a new HTML formatter
    pub fn new(escape_html: bool) -> Self {
        Self { escape_html }
    }
}

impl Formatter for HtmlFormatter {
    fn format(&self, results: &DocResults) -> Result<String> {
        Ok(HtmlRenderer::new(self.escape_html).render(results))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, results: &DocResults) -> Result<String> {
        formatters::format_results_json(results, self.pretty)
    }
}

/// CSV formatter listing every function as one row
pub struct CsvFormatter;

impl CsvFormatter {
    /// Create a new CSV formatter
    pub fn new() -> Self {
        Self {}
    }
}

impl Formatter for CsvFormatter {
    fn format(&self, results: &DocResults) -> Result<String> {
        formatters::format_results_csv(results)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(format: &OutputFormat, escape_html: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Html => Box::new(HtmlFormatter::new(escape_html)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)), // Use pretty printing by default
        OutputFormat::Csv => Box::new(CsvFormatter::new()),
    }
}
