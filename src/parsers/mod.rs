//! Syntax-tree parsing and extraction
//!
//! This module hosts the three per-file pipeline stages: the Python parser
//! adapter, the docstring extractor, and the function scanner.

pub mod docstring;
pub mod functions;
pub mod python;

pub use docstring::extract_docstring;
pub use functions::scan_functions;
pub use python::{NodeKind, ParseOutcome, ParsedModule, PythonParser};
