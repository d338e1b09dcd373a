//! Run configuration and config file loading
//!
//! `CompareConfig` is built once from the command line and handed to the loader and
//! driver; nothing reads global state after startup.

pub mod loader;

pub use loader::{load_keys, parse_top_level_keys, resolve_keys, LoadError};

use crate::domain::{OutputFormat, ParseFailurePolicy};
use std::path::{Path, PathBuf};

pub const DEFAULT_DEVELOPER_FILE: &str = "config.yaml";
pub const DEFAULT_SAMPLE_FILE: &str = "config-sample.yaml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareConfig {
    /// Directory holding both files, relative to the working directory. Empty means the
    /// working directory itself.
    pub dir: PathBuf,
    /// Developer's local, uncommitted config.
    pub developer_file: PathBuf,
    /// Checked-in sample config.
    pub sample_file: PathBuf,
    pub on_parse_failure: ParseFailurePolicy,
    pub format: OutputFormat,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::new(),
            developer_file: PathBuf::from(DEFAULT_DEVELOPER_FILE),
            sample_file: PathBuf::from(DEFAULT_SAMPLE_FILE),
            on_parse_failure: ParseFailurePolicy::default(),
            format: OutputFormat::default(),
        }
    }
}

impl CompareConfig {
    pub fn developer_path(&self, base: &Path) -> PathBuf {
        resolve_path(base, &self.dir, &self.developer_file)
    }

    pub fn sample_path(&self, base: &Path) -> PathBuf {
        resolve_path(base, &self.dir, &self.sample_file)
    }
}

/// Join `dir` and `file` onto `base`. An empty `dir` contributes nothing.
pub fn resolve_path(base: &Path, dir: &Path, file: &Path) -> PathBuf {
    if dir.as_os_str().is_empty() {
        base.join(file)
    } else {
        base.join(dir).join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path_empty_dir() {
        let path = resolve_path(Path::new("/work"), Path::new(""), Path::new("config.yaml"));
        assert_eq!(path, PathBuf::from("/work/config.yaml"));
    }

    #[test]
    fn test_resolve_path_with_dir() {
        let path =
            resolve_path(Path::new("/work"), Path::new("deployment"), Path::new("config.yaml"));
        assert_eq!(path, PathBuf::from("/work/deployment/config.yaml"));
    }

    #[test]
    fn test_default_config_paths() {
        let cfg = CompareConfig::default();
        let base = Path::new("/repo");
        assert_eq!(cfg.developer_path(base), PathBuf::from("/repo/config.yaml"));
        assert_eq!(cfg.sample_path(base), PathBuf::from("/repo/config-sample.yaml"));
        assert_eq!(cfg.on_parse_failure, ParseFailurePolicy::Lenient);
    }
}
