//! Core types shared by the loader, comparator and CLI

use clap::ValueEnum;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Top-level key names of one config document.
///
/// Ordered so reports are stable between runs; membership is all that matters.
pub type KeySet = BTreeSet<String>;

/// Outcome of parsing a document's top-level keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedKeys {
    Parsed(KeySet),
    ParseFailed(String),
}

impl ParsedKeys {
    /// Parser message when parsing failed.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            ParsedKeys::Parsed(_) => None,
            ParsedKeys::ParseFailed(message) => Some(message),
        }
    }
}

/// A config file that could not be parsed, as reported alongside the comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub file: PathBuf,
    pub message: String,
}

/// What to do when a config document cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseFailurePolicy {
    /// Print the parser message and continue with an empty key set.
    #[default]
    Lenient,
    /// Abort the run with an error.
    Strict,
}

/// Report format written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(ParseFailurePolicy::default(), ParseFailurePolicy::Lenient);
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_failure_message() {
        assert_eq!(ParsedKeys::ParseFailed("bad".into()).failure_message(), Some("bad"));
        assert_eq!(ParsedKeys::Parsed(KeySet::new()).failure_message(), None);
    }
}
