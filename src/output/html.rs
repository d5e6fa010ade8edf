//! HTML rendering
//!
//! Serializes scan results into one self-contained HTML document: a
//! collapsible file tree, an initially hidden flat function list, a
//! view-toggle button, and a client-side substring search box.

use crate::models::doc::{DocResults, FileEntry, FunctionInfo};
use std::borrow::Cow;

/// Embedded page styling. The `nested`/`active` pair drives collapse state,
/// `caret`/`caret-down` the marker glyph.
const STYLE: &str = r#"<style>
    body { font-family: Arial, sans-serif; margin: 20px; }
    ul, #fileTree, #functionList { list-style-type: none; padding-left: 0; }
    li { margin-left: 20px; cursor: pointer; }
    .nested { display: none; }
    .active { display: block; }
    .caret { font-weight: bold; }
    .caret::before { content: "\25B6"; margin-right: 6px; }
    .caret-down::before { content: "\25BC"; }
    #functionList { display: none; }
    .toggle-btn { margin: 20px; padding: 10px; background-color: #007BFF; color: white; border: none; cursor: pointer; }
    .search-box { margin: 20px; }
    #viewTitle { display: none; font-weight: bold; margin-top: 20px; }
</style>"#;

/// Embedded client-side behavior: caret toggling, tree/flat view switching,
/// and case-insensitive substring filtering over every list item. Filtering
/// restores an item's own display but never expands a collapsed ancestor.
const SCRIPT: &str = r##"<script>
    document.addEventListener("DOMContentLoaded", function() {
        var togglers = document.getElementsByClassName("caret");
        for (var i = 0; i < togglers.length; i++) {
            togglers[i].addEventListener("click", function() {
                this.parentElement.querySelector(".nested").classList.toggle("active");
                this.classList.toggle("caret-down");
            });
        }

        document.getElementById("toggleViewBtn").addEventListener("click", function() {
            var fileTree = document.getElementById("fileTree");
            var functionList = document.getElementById("functionList");
            var viewTitle = document.getElementById("viewTitle");

            if (fileTree.style.display === "none") {
                fileTree.style.display = "block";
                functionList.style.display = "none";
                viewTitle.style.display = "none";
            } else {
                fileTree.style.display = "none";
                functionList.style.display = "block";
                viewTitle.style.display = "block";
            }
        });

        document.getElementById("searchBox").addEventListener("input", function() {
            var query = this.value.toLowerCase();
            var items = document.querySelectorAll("#fileTree li, #functionList li");
            items.forEach(function(item) {
                if (item.textContent.toLowerCase().includes(query)) {
                    item.style.display = "";
                } else {
                    item.style.display = "none";
                }
            });
        });
    });
</script>"##;

/// Renderer for the single-page HTML document
pub struct HtmlRenderer {
    escape_html: bool,
}

impl HtmlRenderer {
    /// Create a renderer; `escape_html` controls whether extracted text is
    /// HTML-escaped before embedding
    pub fn new(escape_html: bool) -> Self {
        Self { escape_html }
    }

    /// Render the full document
    pub fn render(&self, results: &DocResults) -> String {
        let mut html = Vec::new();
        html.push("<html><head><title>Project Documentation</title>".to_string());
        html.push(STYLE.to_string());
        html.push(SCRIPT.to_string());
        html.push("</head><body>".to_string());

        html.push("<h1>Project Documentation</h1>".to_string());
        html.push(
            "<div class=\"search-box\"><input type=\"text\" id=\"searchBox\" placeholder=\"Search functions or files...\"></div>"
                .to_string(),
        );
        html.push("<button id=\"toggleViewBtn\" class=\"toggle-btn\">Toggle View</button>".to_string());
        html.push("<div id=\"viewTitle\"></div>".to_string());

        self.render_tree(&mut html, results);
        self.render_flat_list(&mut html, results);

        html.push("</body></html>".to_string());
        html.join("\n")
    }

    /// The nested collapsible tree: directory, file, optional docstring
    /// leaf, function nodes
    fn render_tree(&self, html: &mut Vec<String>, results: &DocResults) {
        html.push("<ul id=\"fileTree\">".to_string());

        for directory in &results.directories {
            html.push(format!(
                "<li><span class=\"caret\">{}</span>",
                self.encode_text(&directory.name)
            ));
            html.push("<ul class=\"nested\">".to_string());

            for file in &directory.files {
                html.push(format!(
                    "<li><span class=\"caret\">{}</span>",
                    self.encode_text(&file.relative_path.display().to_string())
                ));
                html.push("<ul class=\"nested\">".to_string());

                if !file.docstring.is_empty() {
                    html.push(format!(
                        "<li><strong>File Docstring:</strong> {}</li>",
                        self.encode_text(&file.docstring)
                    ));
                }

                for function in &file.functions {
                    self.render_function_node(html, function);
                }

                html.push("</ul></li>".to_string());
            }

            html.push("</ul></li>".to_string());
        }

        html.push("</ul>".to_string());
    }

    fn render_function_node(&self, html: &mut Vec<String>, function: &FunctionInfo) {
        html.push(format!(
            "<li><span class=\"caret\">Function: {}</span>",
            self.encode_text(&function.name)
        ));
        html.push("<ul class=\"nested\">".to_string());
        html.push(format!(
            "<li><strong>Parameters:</strong> {}</li>",
            self.encode_text(&function.parameter_list())
        ));
        html.push(format!(
            "<li><strong>Docstring:</strong> {}</li>",
            self.encode_text(function.docstring_text())
        ));
        html.push("</ul></li>".to_string());
    }

    /// The initially hidden flat list of every function with its owning
    /// file path, preserving tree order
    fn render_flat_list(&self, html: &mut Vec<String>, results: &DocResults) {
        html.push("<ul id=\"functionList\">".to_string());
        html.push("<h2>Function List</h2>".to_string());

        for (file, function) in results.flat_functions() {
            self.render_flat_entry(html, file, function);
        }

        html.push("</ul>".to_string());
    }

    fn render_flat_entry(&self, html: &mut Vec<String>, file: &FileEntry, function: &FunctionInfo) {
        html.push(format!(
            "<li><strong>{}</strong> in <em>{}</em>",
            self.encode_text(&function.name),
            self.encode_text(&file.relative_path.display().to_string())
        ));
        html.push("<ul>".to_string());
        html.push(format!(
            "<li><strong>Parameters:</strong> {}</li>",
            self.encode_text(&function.parameter_list())
        ));
        html.push(format!(
            "<li><strong>Docstring:</strong> {}</li>",
            self.encode_text(function.docstring_text())
        ));
        html.push("</ul></li>".to_string());
    }

    /// The one place the escaping decision lives. Pass-through by default
    /// for parity with the reference output, which embeds extracted text
    /// raw; escaping is opt-in via settings.
    fn encode_text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !self.escape_html {
            return Cow::Borrowed(text);
        }
        if !text.contains(['&', '<', '>', '"', '\'']) {
            return Cow::Borrowed(text);
        }
        let mut escaped = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(ch),
            }
        }
        Cow::Owned(escaped)
    }
}
