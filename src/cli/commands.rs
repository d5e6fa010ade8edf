//! Command implementations

use super::Args;
use crate::config::{self, CliArgs, ConfigSource};
use crate::core::DocWalker;
use crate::error::{DocError, Result};
use crate::models::config::OutputFormat;
use crate::models::doc::DocResults;
use crate::models::Settings;
use crate::output::{create_formatter, create_progress_callback, create_writer, ProgressReporter};
use ansi_term::Colour::{Green, Yellow};
use std::sync::Arc;

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Generate documentation for the specified directories
    Generate(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Generate(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Generate(args) => {
                self.validate()?;

                let settings = config::load_config(CliArgs::from_args(args))?;

                let reporter = Arc::new(ProgressReporter::new(settings.quiet, settings.verbose));

                // The default happy path prints nothing but the confirmation
                // line; banner and settings dump are verbose-only
                reporter.print_verbose(&format!(
                    "docwalker v{} - Python documentation extractor",
                    env!("CARGO_PKG_VERSION")
                ));
                for directory in &settings.directories {
                    reporter.print_verbose(&format!("Scanning: {}", directory.display()));
                }
                reporter.print_verbose(&format!("Settings: {:#?}", settings));

                let walker = DocWalker::new(settings.clone());

                let results = if settings.show_progress && !settings.quiet {
                    let progress_callback = create_progress_callback(reporter.clone());
                    let results = walker.scan_with_progress(progress_callback)?;
                    reporter.finish();
                    results
                } else {
                    walker.scan()?
                };

                let formatter = create_formatter(&settings.output_format, settings.escape_html);
                let output = formatter.format(&results)?;

                let output_file = settings.resolved_output_file();
                let writer = create_writer(output_file.as_ref());
                writer.write(&output)?;

                if settings.output_format == OutputFormat::Html {
                    if let Some(path) = &output_file {
                        reporter.print(&format!(
                            "HTML documentation written to {}",
                            path.display()
                        ));
                    }
                }

                print_summary(&reporter, &settings, &results);

                Ok(())
            }
            Command::Init => {
                let file_config = crate::config::FileConfig::new();

                if file_config.is_available() {
                    println!(
                        "Configuration file already exists at: {}",
                        file_config.path().display()
                    );
                    println!("To overwrite it, delete the file first and run this command again.");
                    return Ok(());
                }

                file_config.create_default()?;

                println!(
                    "Created default configuration file at: {}",
                    file_config.path().display()
                );
                println!("Edit it to set scan directories, exclude patterns and output options.");

                Ok(())
            }
        }
    }

    /// Validate the command arguments
    pub fn validate(&self) -> Result<()> {
        match self {
            Command::Generate(args) => {
                for directory in &args.directories {
                    if !directory.exists() {
                        return Err(DocError::InvalidPath {
                            path: directory.clone(),
                        });
                    }
                }

                if let Some(config_path) = &args.config {
                    if !config_path.exists() {
                        return Err(DocError::ConfigNotFound {
                            path: config_path.clone(),
                        });
                    }
                }

                Ok(())
            }
            Command::Init => Ok(()),
        }
    }

    /// Run the command and handle errors
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(_) => 0,
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());

                match err.severity() {
                    crate::error::ErrorSeverity::Warning => 0,
                    crate::error::ErrorSeverity::Error => 1,
                    crate::error::ErrorSeverity::Critical => 2,
                }
            }
        }
    }
}

/// Print the post-scan summary. Verbose-only, honoring color settings.
fn print_summary(reporter: &ProgressReporter, settings: &Settings, results: &DocResults) {
    if !reporter.is_verbose() {
        return;
    }

    let summary = &results.summary;

    reporter.print("\nScan Summary:");
    reporter.print("-------------");
    reporter.print(&format!("Directories scanned: {}", summary.total_directories));
    reporter.print(&format!("Python files: {}", summary.total_files));
    reporter.print(&format!("Functions found: {}", summary.total_functions));

    let with_docstring = format!(
        "Files with module docstring: {}",
        summary.files_with_docstring
    );
    if settings.use_colors {
        reporter.print(&Green.paint(with_docstring).to_string());
    } else {
        reporter.print(&with_docstring);
    }

    if summary.parse_failures > 0 {
        let failures = format!("Files that failed to parse: {}", summary.parse_failures);
        if settings.use_colors {
            reporter.print(&Yellow.paint(failures).to_string());
        } else {
            reporter.print(&failures);
        }
    }

    if summary.errors_count > 0 {
        reporter.print(&format!("Errors encountered: {}", summary.errors_count));
        for error in &results.errors {
            reporter.print_warning(&format!("{}: {}", error.path.display(), error.message));
        }
    }
}
