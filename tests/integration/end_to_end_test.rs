//! End-to-end tests for the docwalker tool
//!
//! These tests run the full pipeline on real directory trees written to
//! temp directories: walk, parse, extract, render.

use std::fs;
use std::path::Path;
use tempfile::tempdir;

use docwalker::core::DocWalker;
use docwalker::error::Result;
use docwalker::models::config::Settings;
use docwalker::output::HtmlRenderer;

/// Create a small project with a documented module and function
fn create_basic_project(base_dir: &Path) -> Result<()> {
    fs::create_dir_all(base_dir.join("proj"))?;
    fs::write(
        base_dir.join("proj/m.py"),
        r#""""Module M"""

def add(x, y):
    """Adds two numbers"""
    return x + y
"#,
    )?;
    Ok(())
}

fn settings_for(dir: &Path) -> Settings {
    Settings {
        directories: vec![dir.to_path_buf()],
        ..Default::default()
    }
}

#[test]
fn test_basic_project_tree_and_flat_views() {
    let temp = tempdir().unwrap();
    create_basic_project(temp.path()).unwrap();
    let root = temp.path().join("proj");

    let results = DocWalker::new(settings_for(&root)).scan().unwrap();
    let html = HtmlRenderer::new(false).render(&results);

    // Tree view: directory, file, module docstring, function node
    assert!(html.contains("<span class=\"caret\">proj</span>"));
    assert!(html.contains("<span class=\"caret\">m.py</span>"));
    assert!(html.contains("<li><strong>File Docstring:</strong> Module M</li>"));
    assert!(html.contains("<span class=\"caret\">Function: add</span>"));
    assert!(html.contains("<li><strong>Parameters:</strong> x, y</li>"));
    assert!(html.contains("<li><strong>Docstring:</strong> Adds two numbers</li>"));

    // Flat view: function with its owning file
    assert!(html.contains("<li><strong>add</strong> in <em>m.py</em>"));
}

#[test]
fn test_rendered_page_is_self_contained() {
    let temp = tempdir().unwrap();
    create_basic_project(temp.path()).unwrap();
    let root = temp.path().join("proj");

    let results = DocWalker::new(settings_for(&root)).scan().unwrap();
    let html = HtmlRenderer::new(false).render(&results);

    // One document with inline style, script, and both views
    assert!(html.starts_with("<html><head><title>Project Documentation</title>"));
    assert!(html.contains("<style>"));
    assert!(html.contains("<script>"));
    assert!(html.contains("id=\"fileTree\""));
    assert!(html.contains("id=\"functionList\""));
    assert!(html.contains("id=\"toggleViewBtn\""));
    assert!(html.contains("id=\"searchBox\""));
    assert!(html.ends_with("</body></html>"));
    // No external references
    assert!(!html.contains("src=\"http"));
    assert!(!html.contains("href=\"http"));
}

#[test]
fn test_repeated_scans_produce_identical_html() {
    let temp = tempdir().unwrap();
    create_basic_project(temp.path()).unwrap();
    let root = temp.path().join("proj");

    let first = HtmlRenderer::new(false)
        .render(&DocWalker::new(settings_for(&root)).scan().unwrap());
    let second = HtmlRenderer::new(false)
        .render(&DocWalker::new(settings_for(&root)).scan().unwrap());

    assert_eq!(first, second);
}

#[test]
fn test_multiple_roots_in_one_document() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("alpha")).unwrap();
    fs::create_dir_all(temp.path().join("beta")).unwrap();
    fs::write(
        temp.path().join("alpha/a.py"),
        "def first():\n    pass\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("beta/b.py"),
        "def second():\n    pass\n",
    )
    .unwrap();

    let settings = Settings {
        directories: vec![temp.path().join("alpha"), temp.path().join("beta")],
        ..Default::default()
    };

    let results = DocWalker::new(settings).scan().unwrap();
    let html = HtmlRenderer::new(false).render(&results);

    assert_eq!(results.directories.len(), 2);
    assert!(html.contains("<span class=\"caret\">alpha</span>"));
    assert!(html.contains("<span class=\"caret\">beta</span>"));
    assert!(html.contains("Function: first"));
    assert!(html.contains("Function: second"));

    // Roots appear in the order they were given
    let alpha_pos = html.find("Function: first").unwrap();
    let beta_pos = html.find("Function: second").unwrap();
    assert!(alpha_pos < beta_pos);
}

#[test]
fn test_undocumented_function_gets_placeholders() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("proj");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("bare.py"), "def mystery():\n    return 42\n").unwrap();

    let results = DocWalker::new(settings_for(&root)).scan().unwrap();
    let html = HtmlRenderer::new(false).render(&results);

    assert!(html.contains("<li><strong>Parameters:</strong> No parameters</li>"));
    assert!(html.contains("<li><strong>Docstring:</strong> No docstring</li>"));
    // No module docstring means no File Docstring leaf
    assert!(!html.contains("File Docstring:"));
}

#[test]
fn test_summary_counts() {
    let temp = tempdir().unwrap();
    create_basic_project(temp.path()).unwrap();
    fs::write(
        temp.path().join("proj/extra.py"),
        "def one():\n    pass\n\ndef two():\n    pass\n",
    )
    .unwrap();
    let root = temp.path().join("proj");

    let results = DocWalker::new(settings_for(&root)).scan().unwrap();

    assert_eq!(results.summary.total_directories, 1);
    assert_eq!(results.summary.total_files, 2);
    assert_eq!(results.summary.total_functions, 3);
    assert_eq!(results.summary.files_with_docstring, 1);
    assert_eq!(results.summary.parse_failures, 0);
}
