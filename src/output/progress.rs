//! Progress reporting functionality
//!
//! This module provides progress reporting for directory scans with
//! support for quiet and verbose modes. The number of matching files is
//! not known before the walk finishes, so the reporter shows a spinner
//! with a running file counter rather than a bounded bar.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

/// Progress reporter for directory scans
pub struct ProgressReporter {
    quiet: bool,
    verbose: bool,
    spinner: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool, verbose: bool) -> Self {
        // No spinner in quiet mode, and none in verbose mode either since
        // verbose prints one line per file
        let spinner = if quiet || verbose {
            None
        } else {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {pos} files scanned {wide_msg}")
                    .unwrap(),
            );
            spinner.enable_steady_tick(Duration::from_millis(100));
            Some(spinner)
        };

        Self {
            quiet,
            verbose,
            spinner,
        }
    }

    /// Record one processed file
    pub fn update(&self, processed: usize, path: &str) {
        if self.quiet {
            return;
        }

        if let Some(spinner) = &self.spinner {
            spinner.set_position(processed as u64);
            spinner.set_message(path.to_string());
        }

        if self.verbose {
            println!("[{}] {}", processed, path);
        }
    }

    /// Finish the scan, clearing the spinner so it leaves no residue in
    /// the terminal
    pub fn finish(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }

    /// Print a message (respects quiet mode)
    pub fn print(&self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    /// Print a verbose message (only in verbose mode)
    pub fn print_verbose(&self, message: &str) {
        if self.verbose {
            println!("{}", message);
        }
    }

    /// Print a warning message (always printed, even in quiet mode)
    pub fn print_warning(&self, message: &str) {
        eprintln!("Warning: {}", message);
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Create a progress callback function that updates a ProgressReporter
pub fn create_progress_callback(reporter: Arc<ProgressReporter>) -> impl Fn(usize, &str) {
    move |processed: usize, path: &str| {
        reporter.update(processed, path);
    }
}
