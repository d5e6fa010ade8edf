//! Python syntax-tree parsing via tree-sitter
//!
//! Wraps source text to syntax tree parsing behind a small adapter so the
//! extractor and scanner never touch the parser directly. A file whose tree
//! contains any syntax error yields `ParseOutcome::Failed`, which callers
//! must treat as "no information available".

use tree_sitter::{Language, Node, Parser, Tree};

/// Classified syntax-tree node kind
///
/// Only the kinds the pipeline cares about are distinguished; everything
/// else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Top-level module node
    Module,
    /// `def` function definition
    FunctionDef,
    /// `async def` function definition
    AsyncFunctionDef,
    /// Any other node
    Other,
}

impl NodeKind {
    /// Classify a raw tree-sitter node
    pub fn of(node: Node) -> Self {
        match node.kind() {
            "module" => NodeKind::Module,
            "function_definition" => {
                if has_async_keyword(node) {
                    NodeKind::AsyncFunctionDef
                } else {
                    NodeKind::FunctionDef
                }
            }
            _ => NodeKind::Other,
        }
    }

    /// Whether this kind is a function or async-function definition
    pub fn is_function(&self) -> bool {
        matches!(self, NodeKind::FunctionDef | NodeKind::AsyncFunctionDef)
    }
}

fn has_async_keyword(node: Node) -> bool {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "async" => return true,
            "def" => return false,
            _ => {}
        }
    }
    false
}

/// A successfully parsed module, owning its source text so extracted data
/// never borrows past the parse.
pub struct ParsedModule {
    tree: Tree,
    source: String,
}

impl ParsedModule {
    /// Root module node of the tree
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// The full source text the tree was parsed from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Source text covered by a node
    pub fn text_of(&self, node: Node) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }
}

impl std::fmt::Debug for ParsedModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedModule")
            .field("source_len", &self.source.len())
            .finish()
    }
}

/// Outcome of parsing one file's text
#[derive(Debug)]
pub enum ParseOutcome {
    /// The text parsed without syntax errors
    Parsed(ParsedModule),
    /// The text could not be parsed; no information is available
    Failed,
}

impl ParseOutcome {
    /// Whether parsing failed
    pub fn is_failed(&self) -> bool {
        matches!(self, ParseOutcome::Failed)
    }
}

/// Parser adapter for Python source text
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    /// Create a new parser with the Python grammar loaded
    pub fn new() -> Self {
        let mut parser = Parser::new();
        let language: Language = tree_sitter_python::LANGUAGE.into();
        parser
            .set_language(&language)
            .expect("tree-sitter-python grammar is incompatible with the linked tree-sitter runtime");
        Self { parser }
    }

    /// Parse source text into a module tree.
    ///
    /// Any syntax error anywhere in the text yields `ParseOutcome::Failed`,
    /// mirroring an all-or-nothing parser: callers get either a clean tree
    /// or nothing.
    pub fn parse(&mut self, source: &str) -> ParseOutcome {
        match self.parser.parse(source, None) {
            Some(tree) if !tree.root_node().has_error() => ParseOutcome::Parsed(ParsedModule {
                tree,
                source: source.to_string(),
            }),
            _ => ParseOutcome::Failed,
        }
    }
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}
