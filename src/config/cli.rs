//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::{Args, OutputFormat as CliOutputFormat};
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub directories: Vec<PathBuf>,
    pub exclude: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub escape_html: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub follow_links: bool,
    pub no_colors: bool,
    pub no_progress: bool,
    pub config: Option<PathBuf>,
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30, // Highest priority
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from_args(args))
    }
}

impl CliArgs {
    /// Convert parsed clap arguments into the configuration form
    pub fn from_args(args: &Args) -> Self {
        Self {
            directories: args.directories.clone(),
            exclude: if args.exclude.is_empty() {
                None
            } else {
                Some(args.exclude.clone())
            },
            max_depth: args.max_depth,
            output_format: args.format.map(|format| match format {
                CliOutputFormat::Html => OutputFormat::Html,
                CliOutputFormat::Json => OutputFormat::Json,
                CliOutputFormat::Csv => OutputFormat::Csv,
            }),
            output_file: args.output_file.clone(),
            escape_html: args.escape_html,
            quiet: args.quiet,
            verbose: args.verbose,
            follow_links: args.follow_links,
            no_colors: args.no_colors,
            no_progress: args.no_progress,
            config: args.config.clone(),
        }
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if !self.args.directories.is_empty() {
            settings.directories = Some(self.args.directories.clone());
        }

        if let Some(exclude) = &self.args.exclude {
            settings.exclude_patterns = Some(exclude.clone());
        }

        if let Some(max_depth) = self.args.max_depth {
            settings.max_depth = Some(max_depth);
        }

        if let Some(format) = &self.args.output_format {
            settings.output_format = Some(format.clone());
        }

        if let Some(output_file) = &self.args.output_file {
            settings.output_file = Some(output_file.clone());
        }

        // Boolean flags only override when set
        if self.args.escape_html {
            settings.escape_html = Some(true);
        }

        if self.args.quiet {
            settings.quiet = Some(true);
        }

        if self.args.verbose {
            settings.verbose = Some(true);
        }

        if self.args.follow_links {
            settings.follow_links = Some(true);
        }

        if self.args.no_colors {
            settings.use_colors = Some(false);
        }

        if self.args.no_progress {
            settings.show_progress = Some(false);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        // CLI args are always available
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
