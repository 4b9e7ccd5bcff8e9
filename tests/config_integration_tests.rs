//! Tests for configuration file loading and layering
use std::path::PathBuf;

use tempfile::TempDir;
use turtle_ps::PageSize;
use turtle_ps::config::{Args, Config, OutputFormat};

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("turtle-ps.toml");
    std::fs::write(&path, content).expect("write config");
    path
}

#[test]
fn test_explicit_config_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "seed = 7\nformat = \"json\"\n\n[page]\nwidth = 300\nheight = 400\n",
    );

    let config = Config::from_args(Args {
        config: Some(path.clone()),
        ..Args::default()
    })
    .expect("create config");

    assert_eq!(config.config_file, Some(path));
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(
        config.page,
        PageSize {
            width: 300,
            height: 400
        }
    );
}

#[test]
fn test_command_line_wins_over_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "format = \"json\"\nlog_level = \"trace\"\n");

    let config = Config::from_args(Args {
        config: Some(path),
        format: Some(OutputFormat::Postscript),
        log_level: Some("error".to_string()),
        ..Args::default()
    })
    .expect("create config");

    assert_eq!(config.format, OutputFormat::Postscript);
    assert_eq!(config.log_level, "error");
    assert_eq!(config.page, PageSize::A4);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::from_args(Args {
        config: Some(dir.path().join("nope.toml")),
        ..Args::default()
    });
    assert!(result.is_err());
}

#[test]
fn test_malformed_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[page]\nwidth = \"wide\"\n");

    let err = Config::from_args(Args {
        config: Some(path),
        ..Args::default()
    })
    .unwrap_err();
    assert!(format!("{err:#}").contains("invalid configuration file"));
}
