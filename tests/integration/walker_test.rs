//! Integration tests for directory scanning

use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

use docwalker::core::DocWalker;
use docwalker::models::config::Settings;

fn settings_for(directories: Vec<PathBuf>) -> Settings {
    Settings {
        directories,
        ..Default::default()
    }
}

#[test]
fn test_nonexistent_root_is_fatal() {
    let settings = settings_for(vec![PathBuf::from("/definitely/not/a/real/dir")]);

    let result = DocWalker::new(settings).scan();

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.is_critical());
}

#[test]
fn test_zero_roots_yield_empty_results() {
    let results = DocWalker::new(settings_for(Vec::new())).scan().unwrap();

    assert!(results.directories.is_empty());
    assert_eq!(results.summary.total_files, 0);
}

#[test]
fn test_parse_failure_does_not_abort_scan() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("bad.py"), "def broken(:\n").unwrap();
    fs::write(
        temp.path().join("good.py"),
        "\"\"\"Fine module\"\"\"\n\ndef ok():\n    pass\n",
    )
    .unwrap();

    let results = DocWalker::new(settings_for(vec![temp.path().to_path_buf()]))
        .scan()
        .unwrap();

    assert_eq!(results.directories.len(), 1);
    let files = &results.directories[0].files;
    assert_eq!(files.len(), 2);

    let bad = files
        .iter()
        .find(|f| f.relative_path == PathBuf::from("bad.py"))
        .unwrap();
    assert!(bad.parse_failed);
    assert!(bad.docstring.is_empty());
    assert!(bad.functions.is_empty());

    let good = files
        .iter()
        .find(|f| f.relative_path == PathBuf::from("good.py"))
        .unwrap();
    assert!(!good.parse_failed);
    assert_eq!(good.docstring, "Fine module");
    assert_eq!(good.functions.len(), 1);

    assert_eq!(results.summary.parse_failures, 1);
    assert_eq!(results.summary.errors_count, 1);
}

#[test]
fn test_unreadable_file_is_recorded_not_fatal() {
    let temp = tempdir().unwrap();
    // Invalid UTF-8 fails fs::read_to_string
    fs::write(temp.path().join("binary.py"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
    fs::write(temp.path().join("ok.py"), "def fine():\n    pass\n").unwrap();

    let results = DocWalker::new(settings_for(vec![temp.path().to_path_buf()]))
        .scan()
        .unwrap();

    let files = &results.directories[0].files;
    assert_eq!(files.len(), 2);

    let binary = files
        .iter()
        .find(|f| f.relative_path == PathBuf::from("binary.py"))
        .unwrap();
    assert!(binary.parse_failed);
    assert!(binary.functions.is_empty());

    assert_eq!(results.summary.errors_count, 1);
}

#[test]
fn test_only_python_files_are_collected() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("code.py"), "def f():\n    pass\n").unwrap();
    fs::write(temp.path().join("notes.txt"), "not python").unwrap();
    fs::write(temp.path().join("data.pyc"), "binary").unwrap();

    let results = DocWalker::new(settings_for(vec![temp.path().to_path_buf()]))
        .scan()
        .unwrap();

    let files = &results.directories[0].files;
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].relative_path, PathBuf::from("code.py"));
}

#[test]
fn test_nested_directories_use_relative_paths() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("pkg/sub")).unwrap();
    fs::write(
        temp.path().join("pkg/sub/deep.py"),
        "def buried():\n    pass\n",
    )
    .unwrap();

    let results = DocWalker::new(settings_for(vec![temp.path().to_path_buf()]))
        .scan()
        .unwrap();

    let files = &results.directories[0].files;
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].relative_path, PathBuf::from("pkg/sub/deep.py"));
}

#[test]
fn test_exclude_patterns() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("keep.py"), "def kept():\n    pass\n").unwrap();
    fs::write(temp.path().join("test_skip.py"), "def skipped():\n    pass\n").unwrap();

    let settings = Settings {
        directories: vec![temp.path().to_path_buf()],
        exclude_patterns: vec!["**/test_*.py".to_string()],
        ..Default::default()
    };

    let results = DocWalker::new(settings).scan().unwrap();

    let files = &results.directories[0].files;
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].relative_path, PathBuf::from("keep.py"));
}

#[test]
fn test_max_depth_limits_traversal() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("deep/deeper")).unwrap();
    fs::write(temp.path().join("top.py"), "def top():\n    pass\n").unwrap();
    fs::write(
        temp.path().join("deep/deeper/bottom.py"),
        "def bottom():\n    pass\n",
    )
    .unwrap();

    let settings = Settings {
        directories: vec![temp.path().to_path_buf()],
        max_depth: Some(1),
        ..Default::default()
    };

    let results = DocWalker::new(settings).scan().unwrap();

    let files = &results.directories[0].files;
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].relative_path, PathBuf::from("top.py"));
}

#[test]
fn test_nested_functions_are_all_reported() {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("nested.py"),
        r#"def outer(a):
    """Outer"""
    def inner(b):
        """Inner"""
        return b
    return inner
"#,
    )
    .unwrap();

    let results = DocWalker::new(settings_for(vec![temp.path().to_path_buf()]))
        .scan()
        .unwrap();

    let functions = &results.directories[0].files[0].functions;
    let names: Vec<&str> = functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["outer", "inner"]);
}

#[test]
fn test_progress_callback_sees_every_file() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let temp = tempdir().unwrap();
    fs::write(temp.path().join("a.py"), "def a():\n    pass\n").unwrap();
    fs::write(temp.path().join("b.py"), "def b():\n    pass\n").unwrap();

    let count = AtomicUsize::new(0);
    DocWalker::new(settings_for(vec![temp.path().to_path_buf()]))
        .scan_with_progress(|_, _| {
            count.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn test_flat_function_iteration_matches_tree_order() {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("multi.py"),
        "def one():\n    pass\n\ndef two():\n    pass\n",
    )
    .unwrap();

    let results = DocWalker::new(settings_for(vec![temp.path().to_path_buf()]))
        .scan()
        .unwrap();

    let flat: Vec<&str> = results
        .flat_functions()
        .map(|(_, f)| f.name.as_str())
        .collect();
    assert_eq!(flat, vec!["one", "two"]);
}
