//! Configuration management

pub mod cli;
pub mod file;
pub mod parser;
pub mod settings;

use crate::error::Result;
use crate::models::config::{PartialSettings, Settings};

pub use cli::{CliArgs, CliConfig};
pub use file::{EnvConfig, FileConfig};
pub use parser::{
    create_default_config, find_default_config, parse_config_content, parse_config_file,
};
pub use settings::SettingsValidator;

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;

    /// Get the name of this configuration source for logging
    fn name(&self) -> &str;

    /// Get the priority of this source (higher numbers take precedence)
    fn priority(&self) -> u8 {
        10 // Default priority
    }
}

/// Configuration builder for merging multiple sources
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Merge settings from a partial configuration
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Load and merge settings from a configuration source
    pub fn load_from<S: ConfigSource>(self, source: &S) -> Result<Self> {
        if source.is_available() {
            match source.load() {
                Ok(partial) => Ok(self.merge(partial)),
                Err(e) => Err(e),
            }
        } else {
            Ok(self)
        }
    }

    /// Try to load from a source, ignoring if not available
    pub fn try_load_from<S: ConfigSource>(self, source: &S) -> Self {
        if source.is_available() {
            match source.load() {
                Ok(partial) => self.merge(partial),
                Err(_) => self,
            }
        } else {
            self
        }
    }

    /// Build the final settings with validation
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.to_settings();

        settings::SettingsValidator::validate(&settings)?;

        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from multiple sources with proper precedence handling
pub fn load_config(cli_args: CliArgs) -> Result<Settings> {
    // CLI config source (highest priority)
    let cli_config = CliConfig::new(cli_args.clone());

    let mut builder = ConfigBuilder::new();

    // An explicitly requested config file must exist; only the default
    // locations are allowed to be absent
    if let Some(config_path) = cli_args.config {
        let file_config = FileConfig::with_path(config_path);
        builder = builder.merge(file_config.load()?);
    } else if let Ok(Some(default_config)) = parser::find_default_config() {
        builder = builder.merge(default_config);
    }

    // Try to load from environment variables
    let env_config = EnvConfig::new("DOCWALKER");
    builder = builder.try_load_from(&env_config);

    // Load from CLI args (highest priority)
    builder = builder.load_from(&cli_config)?;

    builder.build()
}
