// Command-line parsing and config override tests

mod common;

use std::path::PathBuf;

use clap::Parser;
use codeshot::app::App;
use codeshot::cli::{Cli, CliResult, handle};
use codeshot_config::{Color, Config, LogLevel};
use common::{parse_cli, write_file};
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let options = parse_cli(&[]);
    assert_eq!(options.input, None);
    assert!(!options.json_tokens);
    assert_eq!(options.output, PathBuf::from("codeshot.png"));
    assert!(!options.writes_stdout());
    assert_eq!(options.log_level, None);
    assert_eq!(options.overrides, Default::default());
}

#[test]
fn test_all_flags() {
    let options = parse_cli(&[
        "main.rs",
        "--tokens",
        "-o",
        "-",
        "--font",
        "Fira Code",
        "--font-size",
        "18",
        "--style",
        "nord",
        "--no-line-numbers",
        "--no-window-controls",
        "--background",
        "#112233",
        "--padding-x",
        "10",
        "--padding-y",
        "12",
        "--log-level",
        "debug",
    ]);
    assert_eq!(options.input, Some(PathBuf::from("main.rs")));
    assert!(options.json_tokens);
    assert!(options.writes_stdout());
    assert_eq!(options.log_level, Some(LogLevel::Debug));

    let mut config = Config::default();
    options.overrides.apply(&mut config);
    assert_eq!(config.font_family.as_deref(), Some("Fira Code"));
    assert_eq!(config.font_size, 18.0);
    assert_eq!(config.style, "nord");
    assert!(!config.line_numbers);
    assert!(!config.window_controls);
    assert_eq!(config.background, Color::new(0x11, 0x22, 0x33));
    assert_eq!(config.padding_x, 10);
    assert_eq!(config.padding_y, 12);
}

#[test]
fn test_bad_values_are_rejected() {
    assert!(Cli::try_parse_from(["codeshot", "--background", "blue"]).is_err());
    assert!(Cli::try_parse_from(["codeshot", "--log-level", "loud"]).is_err());
    assert!(Cli::try_parse_from(["codeshot", "--font-size", "big"]).is_err());
}

#[test]
fn test_list_styles_exits() {
    let cli = Cli::try_parse_from(["codeshot", "--list-styles"]).unwrap();
    assert!(matches!(handle(cli), CliResult::Exit(0)));
}

#[test]
fn test_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = write_file(
        dir.path(),
        "config.yaml",
        "font_size: 30\nstyle: monokai\npadding_x: 5\n",
    );
    let options = parse_cli(&[
        "--config",
        config_path.to_str().unwrap(),
        "--font-size",
        "14",
    ]);

    let config = App::new(options).load_config().unwrap();
    assert_eq!(config.font_size, 14.0);
    assert_eq!(config.style, "monokai");
    assert_eq!(config.padding_x, 5);
}

#[test]
fn test_named_style_replaces_config_style_file() {
    let mut config = Config {
        style_file: Some(PathBuf::from("mine.yaml")),
        ..Config::default()
    };
    parse_cli(&["--style", "github"]).overrides.apply(&mut config);
    assert_eq!(config.style, "github");
    assert_eq!(config.style_file, None);
}

#[test]
fn test_invalid_override_fails_validation() {
    let dir = TempDir::new().unwrap();
    let config_path = write_file(dir.path(), "config.yaml", "");
    let options = parse_cli(&[
        "--config",
        config_path.to_str().unwrap(),
        "--style",
        "no-such-style",
    ]);

    let err = App::new(options).load_config().unwrap_err();
    assert!(format!("{err:#}").contains("unknown style"));
}

#[test]
fn test_missing_config_file_is_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.yaml");
    let options = parse_cli(&["--config", missing.to_str().unwrap()]);
    assert!(App::new(options).load_config().is_err());
}
