//! Configuration settings validation

use crate::error::{DocError, Result};
use crate::models::config::Settings;
use std::path::Path;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        // Every scan root must be an existing directory
        for directory in &settings.directories {
            if !directory.is_dir() {
                return Err(DocError::InvalidPath {
                    path: directory.clone(),
                });
            }
        }

        // Validate exclude patterns
        for pattern in &settings.exclude_patterns {
            glob::Pattern::new(pattern).map_err(|e| {
                DocError::config_error(format!("Invalid exclude pattern '{}': {}", pattern, e))
            })?;
        }

        // Validate max depth is reasonable
        if let Some(depth) = settings.max_depth {
            if depth == 0 {
                return Err(DocError::Config {
                    message: "Max depth must be at least 1".to_string(),
                });
            }
        }

        // Validate output file path is writable if specified
        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// Validate that an output path is writable
    fn validate_output_path(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if parent.as_os_str().is_empty() {
                // Relative path in the current directory
                return Ok(());
            }
            if !parent.exists() {
                return Err(DocError::InvalidPath {
                    path: parent.to_path_buf(),
                });
            }

            match std::fs::metadata(parent) {
                Ok(metadata) => {
                    #[cfg(unix)]
                    {
                        use std::os::unix::fs::PermissionsExt;
                        let mode = metadata.permissions().mode();
                        if mode & 0o200 == 0 {
                            return Err(DocError::PermissionDenied {
                                path: parent.to_path_buf(),
                            });
                        }
                    }
                    #[cfg(not(unix))]
                    let _ = metadata;
                }
                Err(e) => {
                    return Err(DocError::io_error(e));
                }
            }
        }

        Ok(())
    }
}
