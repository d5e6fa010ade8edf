//! Error context utilities for docwalker
//!
//! This module provides utilities for adding context to errors in a
//! consistent way throughout the application.

use crate::error::{DocError, Result};
use std::path::Path;

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;

    /// Add file context to an error
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| DocError::Generation {
            message: format!("{}: {}", context(), err),
        })
    }

    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| {
            let err: &(dyn std::error::Error + 'static) = &err;
            if let Some(io_err) = err.downcast_ref::<std::io::Error>() {
                if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                    return DocError::PermissionDenied {
                        path: path.as_ref().to_path_buf(),
                    };
                }
            }

            DocError::DirectoryTraversal {
                path: path.as_ref().to_path_buf(),
                message: format!("{}", err),
            }
        })
    }
}
