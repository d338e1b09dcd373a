//! Compare command implementation

use anyhow::Result;
use std::path::Path;

use crate::compare::{compare, KeyComparison};
use crate::config::{load_keys, resolve_keys, CompareConfig};
use crate::domain::{KeySet, OutputFormat, ParseFailure, ParseFailurePolicy};
use crate::render::{render_json, render_text};

/// Load both files under `base`, compare them and print the report.
pub fn run(config: &CompareConfig, base: &Path) -> Result<KeyComparison> {
    let mut parse_errors = Vec::new();
    let developer = load_side(
        config,
        &config.developer_file,
        &config.developer_path(base),
        &mut parse_errors,
    )?;
    let sample =
        load_side(config, &config.sample_file, &config.sample_path(base), &mut parse_errors)?;

    let comparison = compare(&developer, &sample);
    tracing::debug!(
        "Compared {} developer keys with {} sample keys (equal: {})",
        developer.len(),
        sample.len(),
        comparison.equal
    );
    if !comparison.unused.is_empty() {
        tracing::debug!("Sample keys absent from developer config: {:?}", comparison.unused);
    }

    match config.format {
        OutputFormat::Text => println!("{}", render_text(&comparison, &config.sample_file)),
        OutputFormat::Json => println!(
            "{}",
            render_json(&comparison, &config.developer_file, &config.sample_file, &parse_errors)?
        ),
    }

    Ok(comparison)
}

/// Load one file. `file` is the name as configured, `path` the resolved location.
fn load_side(
    config: &CompareConfig,
    file: &Path,
    path: &Path,
    parse_errors: &mut Vec<ParseFailure>,
) -> Result<KeySet> {
    tracing::debug!("Loading config keys from {}", path.display());
    let parsed = load_keys(path)?;

    if let Some(message) = parsed.failure_message() {
        if config.on_parse_failure == ParseFailurePolicy::Lenient {
            // Text mode prints the parser message ahead of the report.
            if config.format == OutputFormat::Text {
                println!("{}", message);
            }
            parse_errors
                .push(ParseFailure { file: file.to_path_buf(), message: message.to_string() });
        }
    }

    Ok(resolve_keys(parsed, path, config.on_parse_failure)?)
}
