//! Integration tests for command-line parsing and configuration layering

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

use docwalker::cli::{Args, Command};
use docwalker::config::{load_config, CliArgs, CliConfig, ConfigSource};
use docwalker::models::config::OutputFormat;

#[test]
fn test_parse_basic_invocation() {
    let args = Args::try_parse_from(["docwalker", "./src", "./scripts"]).unwrap();

    assert_eq!(
        args.directories,
        vec![PathBuf::from("./src"), PathBuf::from("./scripts")]
    );
    assert!(args.format.is_none());
    assert!(!args.quiet);
    assert!(!args.init);
}

#[test]
fn test_parse_all_options() {
    let args = Args::try_parse_from([
        "docwalker",
        "./src",
        "--exclude",
        "**/test_*.py",
        "--max-depth",
        "4",
        "--format",
        "json",
        "--output-file",
        "out.json",
        "--escape-html",
        "--quiet",
        "--follow-links",
        "--no-colors",
        "--no-progress",
        "--config",
        "custom.toml",
    ])
    .unwrap();

    assert_eq!(args.exclude, vec!["**/test_*.py".to_string()]);
    assert_eq!(args.max_depth, Some(4));
    assert!(matches!(
        args.format,
        Some(docwalker::cli::args::OutputFormat::Json)
    ));
    assert_eq!(args.output_file, Some(PathBuf::from("out.json")));
    assert!(args.escape_html);
    assert!(args.quiet);
    assert!(args.follow_links);
    assert!(args.no_colors);
    assert!(args.no_progress);
    assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
}

#[test]
fn test_invalid_format_is_rejected() {
    assert!(Args::try_parse_from(["docwalker", ".", "--format", "xml"]).is_err());
}

#[test]
fn test_init_flag_selects_init_command() {
    let args = Args::try_parse_from(["docwalker", "--init"]).unwrap();
    assert!(matches!(Command::from_args(args), Command::Init));

    let args = Args::try_parse_from(["docwalker", "./src"]).unwrap();
    assert!(matches!(Command::from_args(args), Command::Generate(_)));
}

#[test]
fn test_cli_args_convert_to_partial_settings() {
    let args = Args::try_parse_from([
        "docwalker",
        "./src",
        "--format",
        "csv",
        "--no-colors",
    ])
    .unwrap();

    let partial = CliConfig::from_args(&args).load().unwrap();

    assert_eq!(partial.directories, Some(vec![PathBuf::from("./src")]));
    assert!(matches!(partial.output_format, Some(OutputFormat::Csv)));
    assert_eq!(partial.use_colors, Some(false));
    // Unset options stay None so file and env layers can fill them in
    assert_eq!(partial.max_depth, None);
    assert_eq!(partial.quiet, None);
}

#[test]
fn test_cli_overrides_config_file() {
    let temp = tempdir().unwrap();
    let scan_dir = temp.path().join("code");
    fs::create_dir_all(&scan_dir).unwrap();

    let config_path = temp.path().join("docwalker.toml");
    fs::write(
        &config_path,
        format!(
            "directories = [\"{}\"]\nmax_depth = 2\noutput_format = \"json\"\n",
            scan_dir.display()
        ),
    )
    .unwrap();

    let cli_args = CliArgs {
        max_depth: Some(9),
        config: Some(config_path),
        ..Default::default()
    };

    let settings = load_config(cli_args).unwrap();

    // CLI wins where set, config file fills the rest
    assert_eq!(settings.max_depth, Some(9));
    assert_eq!(settings.output_format, OutputFormat::Json);
    assert_eq!(settings.directories, vec![scan_dir]);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let cli_args = CliArgs {
        config: Some(PathBuf::from("/no/such/config.toml")),
        ..Default::default()
    };

    assert!(load_config(cli_args).is_err());
}
