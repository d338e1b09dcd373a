//! Command-line interface for config-compare
//!
//! A single command: compare the developer config against the sample config and exit 0
//! when their top-level keys match, 1 otherwise.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod check;

use crate::config::{CompareConfig, DEFAULT_DEVELOPER_FILE, DEFAULT_SAMPLE_FILE};
use crate::domain::{OutputFormat, ParseFailurePolicy};

/// Compare the projects sample config keys to the developer's config file
#[derive(Parser, Debug)]
#[command(name = "config-compare")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory where the config files are located, relative to the working directory
    #[arg(long, value_name = "DIR", default_value = "")]
    pub dir: String,

    /// Developer's config YAML file (not checked in)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_DEVELOPER_FILE)]
    pub file1: PathBuf,

    /// Sample config YAML file (checked in)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_SAMPLE_FILE)]
    pub file2: PathBuf,

    /// Fail instead of treating an unparsable config file as having no keys
    #[arg(long)]
    pub strict: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,

    /// Extra arguments (e.g. staged file names passed by pre-commit); ignored
    #[arg(value_name = "FILES", trailing_var_arg = true, allow_hyphen_values = true)]
    pub files: Vec<String>,
}

impl Cli {
    pub fn to_config(&self) -> CompareConfig {
        CompareConfig {
            dir: PathBuf::from(&self.dir),
            developer_file: self.file1.clone(),
            sample_file: self.file2.clone(),
            on_parse_failure: if self.strict {
                ParseFailurePolicy::Strict
            } else {
                ParseFailurePolicy::Lenient
            },
            format: self.format,
        }
    }
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if !cli.files.is_empty() {
        tracing::debug!("Ignoring {} extra argument(s)", cli.files.len());
    }

    let config = cli.to_config();
    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;

    let outcome = check::run(&config, &cwd)?;
    Ok(if outcome.equal { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
