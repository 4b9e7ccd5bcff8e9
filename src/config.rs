//! Configuration management for turtle-ps.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML configuration file
//! - Layering: command line over file over built-in defaults

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::interpreter::PageSize;

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "turtle-ps.toml";

/// Output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// PostScript text, one operator per line
    #[default]
    Postscript,
    /// Newline-delimited JSON primitives
    Json,
}

/// Command-line arguments
#[derive(Debug, Default, Parser)]
#[command(name = "turtle-ps")]
#[command(about = "Interpret turtle drawing commands into PostScript")]
#[command(version)]
pub struct Args {
    /// Program to interpret; standard input when absent or `-`
    pub input: Option<PathBuf>,

    /// Write output to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for the random walk; the clock is used when not set
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Page width in points
    #[arg(long)]
    pub width: Option<u32>,

    /// Page height in points
    #[arg(long)]
    pub height: Option<u32>,

    /// Configuration file (defaults to ./turtle-ps.toml, then the user
    /// config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Only parse the program and report malformed commands
    #[arg(long)]
    pub check: bool,
}

/// Page section of the configuration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Configuration file contents (matches TOML)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub seed: Option<u64>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
    #[serde(default)]
    pub page: PageConfig,
}

impl FileConfig {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid configuration file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Program file; `None` reads standard input
    pub input: Option<PathBuf>,
    /// Output file; `None` writes standard output
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
    pub format: OutputFormat,
    pub page: PageSize,
    pub log_level: String,
    pub check_only: bool,
    /// Configuration file that was loaded, if any
    pub config_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            seed: None,
            format: OutputFormat::default(),
            page: PageSize::default(),
            log_level: "warn".to_string(),
            check_only: false,
            config_file: None,
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let config_file = match &args.config {
            Some(path) => Some(path.clone()),
            None => default_config_file(),
        };

        let file = match &config_file {
            Some(path) => {
                log::debug!("loading configuration from {}", path.display());
                FileConfig::load(path)?
            }
            None => FileConfig::default(),
        };

        Ok(Self::merge(args, file, config_file))
    }

    /// Layer `args` over `file` over defaults.
    pub fn merge(args: Args, file: FileConfig, config_file: Option<PathBuf>) -> Self {
        let defaults = Config::default();

        let page = PageSize {
            width: args
                .width
                .or(file.page.width)
                .unwrap_or(defaults.page.width),
            height: args
                .height
                .or(file.page.height)
                .unwrap_or(defaults.page.height),
        };

        let input = args.input.filter(|path| path != Path::new("-"));

        Config {
            input,
            output: args.output,
            seed: args.seed.or(file.seed),
            format: args.format.or(file.format).unwrap_or(defaults.format),
            page,
            log_level: args
                .log_level
                .or(file.log_level)
                .unwrap_or(defaults.log_level),
            check_only: args.check,
            config_file,
        }
    }
}

/// First existing default configuration file, if any.
fn default_config_file() -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from(LOCAL_CONFIG_FILE)];

    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("turtle-ps").join("config.toml"));
    }

    candidates.into_iter().find(|path| path.is_file())
}
