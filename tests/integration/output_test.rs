//! Integration tests for output formats and writers

use std::fs;
use tempfile::tempdir;

use docwalker::core::DocWalker;
use docwalker::models::config::{OutputFormat, Settings};
use docwalker::output::{create_formatter, FileWriter, OutputWriter};

fn scan_fixture() -> docwalker::DocResults {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("mod.py"),
        r#""""Fixture module"""

def shout(text, times=2):
    """Repeat text loudly"""
    return text.upper() * times
"#,
    )
    .unwrap();

    let settings = Settings {
        directories: vec![temp.path().to_path_buf()],
        ..Default::default()
    };
    DocWalker::new(settings).scan().unwrap()
}

#[test]
fn test_html_output_written_to_file() {
    let results = scan_fixture();
    let out_dir = tempdir().unwrap();
    let out_path = out_dir.path().join("documentation.html");

    let formatter = create_formatter(&OutputFormat::Html, false);
    let html = formatter.format(&results).unwrap();
    FileWriter::new(&out_path).write(&html).unwrap();

    let written = fs::read_to_string(&out_path).unwrap();
    assert_eq!(written, html);
    assert!(written.contains("Function: shout"));
    assert!(written.contains("<strong>Parameters:</strong> text, times"));
}

#[test]
fn test_json_output_round_trips() {
    let results = scan_fixture();

    let formatter = create_formatter(&OutputFormat::Json, false);
    let json = formatter.format(&results).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let file = &parsed["directories"][0]["files"][0];
    assert_eq!(file["docstring"], "Fixture module");
    assert_eq!(file["functions"][0]["name"], "shout");
    assert_eq!(file["functions"][0]["parameters"][0], "text");
    assert_eq!(file["functions"][0]["parameters"][1], "times");
}

#[test]
fn test_csv_output_lists_functions() {
    let results = scan_fixture();

    let formatter = create_formatter(&OutputFormat::Csv, false);
    let csv = formatter.format(&results).unwrap();

    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Directory,File,Function,Parameters,Docstring"
    );
    let row = lines.next().unwrap();
    assert!(row.contains("mod.py"));
    assert!(row.contains("shout"));
    assert!(row.contains("\"text, times\""));
    assert!(row.contains("Repeat text loudly"));
}

#[test]
fn test_escaped_html_output() {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("markup.py"),
        r#"def render():
    """Emits <div> & "quotes" inline"""
    pass
"#,
    )
    .unwrap();

    let settings = Settings {
        directories: vec![temp.path().to_path_buf()],
        ..Default::default()
    };
    let results = DocWalker::new(settings).scan().unwrap();

    let raw = create_formatter(&OutputFormat::Html, false)
        .format(&results)
        .unwrap();
    assert!(raw.contains("Emits <div> & \"quotes\""));

    let escaped = create_formatter(&OutputFormat::Html, true)
        .format(&results)
        .unwrap();
    assert!(escaped.contains("Emits &lt;div&gt; &amp; &quot;quotes&quot;"));
}
