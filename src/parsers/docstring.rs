//! Docstring extraction
//!
//! A docstring is the leading bare string-literal statement of a module or
//! function body. The literal's content is passed through unmodified,
//! embedded newlines included; only the quote delimiters (and any string
//! prefix) are stripped. HTML-safety is the renderer's concern, not ours.

use crate::parsers::python::{ParseOutcome, ParsedModule};
use tree_sitter::Node;

/// Extract the module-level docstring, or an empty string when the module
/// has none or parsing failed.
pub fn extract_docstring(outcome: &ParseOutcome) -> String {
    match outcome {
        ParseOutcome::Parsed(module) => body_docstring(module.root(), module.source()),
        ParseOutcome::Failed => String::new(),
    }
}

/// Extract the docstring of a function definition node, or an empty string
/// when its body does not start with a bare string literal.
pub fn function_docstring(node: Node, module: &ParsedModule) -> String {
    match node.child_by_field_name("body") {
        Some(body) => body_docstring(body, module.source()),
        None => String::new(),
    }
}

/// Docstring rule shared by module and function bodies: the first statement
/// must be an expression statement holding a plain string literal.
fn body_docstring(body: Node, source: &str) -> String {
    let Some(first) = first_statement(body) else {
        return String::new();
    };
    if first.kind() != "expression_statement" {
        return String::new();
    }
    let Some(expr) = first.named_child(0) else {
        return String::new();
    };
    string_literal_content(expr, source).unwrap_or_default()
}

/// First named child that is an actual statement. Comments are extras in
/// the grammar and do not count as statements.
fn first_statement(body: Node) -> Option<Node> {
    let mut cursor = body.walk();
    let first = body
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment");
    first
}

/// Content of a plain string literal node, delimiters and prefix stripped.
///
/// Returns `None` for anything that is not a bare literal: f-strings carry
/// interpolations and are not docstrings. Implicitly concatenated literals
/// count as one literal, so their parts are joined.
fn string_literal_content(node: Node, source: &str) -> Option<String> {
    match node.kind() {
        "string" => single_string_content(node, source),
        "concatenated_string" => {
            let mut content = String::new();
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                if child.kind() != "string" {
                    return None;
                }
                content.push_str(&single_string_content(child, source)?);
            }
            Some(content)
        }
        _ => None,
    }
}

fn single_string_content(node: Node, source: &str) -> Option<String> {
    let mut start_end = None;
    let mut end_start = None;
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "string_start" => start_end = Some(child.end_byte()),
            "string_end" => end_start = Some(child.start_byte()),
            // An interpolation makes this an f-string, not a bare literal
            "interpolation" => return None,
            _ => {}
        }
    }
    let (start, end) = (start_end?, end_start?);
    source.get(start..end).map(|content| content.to_string())
}
