//! config-compare: pre-commit check for config/sample key drift

use anyhow::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    config_compare::cli::run()
}
