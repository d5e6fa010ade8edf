//! Function scanning
//!
//! Walks a parsed module pre-order and at unrestricted depth, so nested and
//! inner function definitions are reported as independent entries, in source
//! order.

use crate::models::FunctionInfo;
use crate::parsers::docstring::function_docstring;
use crate::parsers::python::{NodeKind, ParseOutcome, ParsedModule};
use tree_sitter::Node;

/// Collect every function and async-function definition in the module.
///
/// Returns an empty sequence when parsing failed.
pub fn scan_functions(outcome: &ParseOutcome) -> Vec<FunctionInfo> {
    match outcome {
        ParseOutcome::Parsed(module) => {
            let mut functions = Vec::new();
            visit(module.root(), module, &mut functions);
            functions
        }
        ParseOutcome::Failed => Vec::new(),
    }
}

fn visit(node: Node, module: &ParsedModule, out: &mut Vec<FunctionInfo>) {
    if NodeKind::of(node).is_function() {
        out.push(function_info(node, module));
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        visit(child, module, out);
    }
}

fn function_info(node: Node, module: &ParsedModule) -> FunctionInfo {
    let name = node
        .child_by_field_name("name")
        .map(|n| module.text_of(n).to_string())
        .unwrap_or_default();
    FunctionInfo {
        name,
        docstring: function_docstring(node, module),
        parameters: positional_parameters(node, module),
    }
}

/// Ordered positional parameter names.
///
/// Mirrors the positional-or-keyword bucket of a Python signature: plain,
/// typed, and defaulted parameters contribute their bare name; `*args`,
/// `**kwargs`, and everything after a bare `*` (keyword-only) are excluded.
/// Names before a `/` separator are positional-only, which also falls
/// outside that bucket, so a `/` discards what was collected before it.
fn positional_parameters(node: Node, module: &ParsedModule) -> Vec<String> {
    let Some(params) = node.child_by_field_name("parameters") else {
        return Vec::new();
    };

    let mut names = Vec::new();
    let mut cursor = params.walk();
    for param in params.named_children(&mut cursor) {
        match param.kind() {
            "identifier" => names.push(module.text_of(param).to_string()),
            "default_parameter" | "typed_default_parameter" => {
                if let Some(name) = param.child_by_field_name("name") {
                    names.push(module.text_of(name).to_string());
                }
            }
            "typed_parameter" => {
                // A typed *args/**kwargs also starts the keyword-only tail
                if contains_splat(param) {
                    break;
                }
                if let Some(name) = first_identifier(param) {
                    names.push(module.text_of(name).to_string());
                }
            }
            "positional_separator" => names.clear(),
            // *args or a bare *: everything after is keyword-only
            "list_splat_pattern" | "keyword_separator" => break,
            "dictionary_splat_pattern" => break,
            _ => {}
        }
    }
    names
}

fn contains_splat(node: Node) -> bool {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).any(|child| {
        matches!(
            child.kind(),
            "list_splat_pattern" | "dictionary_splat_pattern"
        )
    });
    found
}

fn first_identifier(node: Node) -> Option<Node> {
    let mut cursor = node.walk();
    let identifier = node
        .named_children(&mut cursor)
        .find(|child| child.kind() == "identifier");
    identifier
}
