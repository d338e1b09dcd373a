//! config-compare: check that a developer's local config carries every sample key
//!
//! Loads the top-level keys of two YAML documents (the uncommitted developer config and
//! the checked-in sample) and reports developer keys that the sample does not document.
//! Intended to run as a pre-commit hook.

pub mod cli;
pub mod compare;
pub mod config;
pub mod domain;
pub mod render;
