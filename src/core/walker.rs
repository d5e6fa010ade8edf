//! Directory walking functionality
//!
//! Recursively enumerates Python source files under each input directory
//! and runs the per-file parse/extract/scan pipeline, accumulating results
//! in traversal order. A single corrupt or unreadable file never aborts the
//! overall walk.

use crate::error::{DocError, Result};
use crate::models::config::Settings;
use crate::models::doc::{DirectoryEntry, DocResults, FileEntry};
use crate::parsers::{extract_docstring, scan_functions, PythonParser};
use glob::Pattern;
use std::fs;
use std::path::Path;
use std::time::Instant;
use walkdir::WalkDir;

/// File suffix recognized as Python source
pub const SOURCE_SUFFIX: &str = ".py";

/// Main walker for directory traversal and docstring extraction
pub struct DocWalker {
    settings: Settings,
}

impl DocWalker {
    /// Create a new walker with the given settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Scan the configured directories and build documentation results
    pub fn scan(&self) -> Result<DocResults> {
        self.scan_with_progress(|_, _| {})
    }

    /// Scan with a progress callback invoked once per processed file with
    /// the running file count and the file's display path.
    pub fn scan_with_progress<F>(&self, progress_fn: F) -> Result<DocResults>
    where
        F: Fn(usize, &str),
    {
        let start_time = Instant::now();
        let mut results = DocResults::new();

        // An unreadable root is fatal; per-file problems are not
        for directory in &self.settings.directories {
            if !directory.is_dir() {
                return Err(DocError::InvalidPath {
                    path: directory.clone(),
                });
            }
        }

        let exclude_patterns = self.compile_exclude_patterns()?;

        let mut parser = PythonParser::new();
        let mut processed = 0usize;

        for directory in &self.settings.directories {
            let entry = self.scan_directory(
                directory,
                &exclude_patterns,
                &mut parser,
                &mut results,
                &mut processed,
                &progress_fn,
            );
            results.add_directory(entry);
        }

        results.set_scan_duration(start_time.elapsed());
        Ok(results)
    }

    /// Walk one root and build its directory entry
    fn scan_directory<F>(
        &self,
        root: &Path,
        exclude_patterns: &[Pattern],
        parser: &mut PythonParser,
        results: &mut DocResults,
        processed: &mut usize,
        progress_fn: &F,
    ) -> DirectoryEntry
    where
        F: Fn(usize, &str),
    {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());
        let mut files = Vec::new();

        let mut walk = WalkDir::new(root).follow_links(self.settings.follow_links);
        if let Some(max_depth) = self.settings.max_depth {
            walk = walk.max_depth(max_depth);
        }

        for entry in walk {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    // Record and keep walking
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.to_path_buf());
                    let doc_err = match err.io_error() {
                        Some(io) if io.kind() == std::io::ErrorKind::PermissionDenied => {
                            DocError::permission_denied(&path)
                        }
                        _ => DocError::directory_traversal_error(&path, err.to_string()),
                    };
                    results.add_error(path, &doc_err);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            if !entry.file_name().to_string_lossy().ends_with(SOURCE_SUFFIX) {
                continue;
            }
            if self.is_excluded(entry.path(), exclude_patterns) {
                continue;
            }

            *processed += 1;
            progress_fn(*processed, &entry.path().display().to_string());

            files.push(self.process_file(root, entry.path(), parser, results));
        }

        DirectoryEntry { name, files }
    }

    /// Run the per-file pipeline: read, parse, extract, scan.
    ///
    /// Never fails; a file whose text cannot be read or parsed contributes
    /// an entry with an empty docstring and no functions.
    fn process_file(
        &self,
        root: &Path,
        path: &Path,
        parser: &mut PythonParser,
        results: &mut DocResults,
    ) -> FileEntry {
        let relative_path = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_path_buf();

        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                let doc_err = DocError::read_file_error(path, err);
                results.add_error(path.to_path_buf(), &doc_err);
                return FileEntry {
                    relative_path,
                    docstring: String::new(),
                    functions: Vec::new(),
                    parse_failed: true,
                };
            }
        };

        let outcome = parser.parse(&source);
        if outcome.is_failed() {
            let doc_err = DocError::parse_failure(path);
            results.add_error(path.to_path_buf(), &doc_err);
        }

        FileEntry {
            relative_path,
            docstring: extract_docstring(&outcome),
            functions: scan_functions(&outcome),
            parse_failed: outcome.is_failed(),
        }
    }

    /// Compile exclude patterns into glob patterns
    fn compile_exclude_patterns(&self) -> Result<Vec<Pattern>> {
        self.settings
            .exclude_patterns
            .iter()
            .map(|pattern| Pattern::new(pattern).map_err(DocError::from))
            .collect()
    }

    /// Check if a path matches any exclude pattern
    fn is_excluded(&self, path: &Path, patterns: &[Pattern]) -> bool {
        let path_str = path.to_string_lossy();
        patterns.iter().any(|pattern| pattern.matches(&path_str))
    }
}
