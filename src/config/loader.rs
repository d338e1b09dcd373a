//! Config file loading
//!
//! Only the root mapping's key names are collected; values are skipped without being
//! materialised, so nested structure never matters.

use crate::domain::{KeySet, ParseFailurePolicy, ParsedKeys};
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_yaml::Value;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed reading config file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid YAML in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Read `path` and parse its top-level keys.
///
/// Read failures (missing file, permissions) are errors. Parse failures are not: they come
/// back as [`ParsedKeys::ParseFailed`] for the caller to decide on.
pub fn load_keys(path: &Path) -> Result<ParsedKeys, LoadError> {
    let content = fs::read_to_string(path)
        .map_err(|source| LoadError::Read { path: path.to_path_buf(), source })?;

    let parsed = parse_top_level_keys(&content);
    match &parsed {
        ParsedKeys::Parsed(keys) => {
            tracing::debug!("Loaded {} top-level keys from {}", keys.len(), path.display())
        }
        ParsedKeys::ParseFailed(message) => {
            tracing::debug!("Failed to parse {}: {}", path.display(), message)
        }
    }
    Ok(parsed)
}

/// Parse a YAML document and collect its top-level keys.
///
/// An empty (or comments-only) document has no keys. Duplicate keys collapse, and `<<`
/// merge keys contribute the keys of the merged mapping(s).
pub fn parse_top_level_keys(content: &str) -> ParsedKeys {
    match serde_yaml::from_str::<TopLevelKeys>(content) {
        Ok(TopLevelKeys(keys)) => ParsedKeys::Parsed(keys),
        Err(e) => ParsedKeys::ParseFailed(e.to_string()),
    }
}

/// Apply the parse-failure policy, turning a parse outcome into a key set.
pub fn resolve_keys(
    parsed: ParsedKeys,
    path: &Path,
    policy: ParseFailurePolicy,
) -> Result<KeySet, LoadError> {
    match parsed {
        ParsedKeys::Parsed(keys) => Ok(keys),
        ParsedKeys::ParseFailed(message) => match policy {
            ParseFailurePolicy::Strict => {
                Err(LoadError::Parse { path: path.to_path_buf(), message })
            }
            ParseFailurePolicy::Lenient => {
                tracing::warn!(
                    "Failed to parse {}: {}; treating it as having no keys",
                    path.display(),
                    message
                );
                Ok(KeySet::new())
            }
        },
    }
}

/// Root mapping keys, deserialized without going through `serde_yaml::Mapping` (which
/// rejects duplicate keys).
struct TopLevelKeys(KeySet);

impl<'de> Deserialize<'de> for TopLevelKeys {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TopLevelKeysVisitor)
    }
}

struct TopLevelKeysVisitor;

impl<'de> Visitor<'de> for TopLevelKeysVisitor {
    type Value = TopLevelKeys;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping of top-level config keys")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(TopLevelKeys(KeySet::new()))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(TopLevelKeys(KeySet::new()))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut keys = KeySet::new();
        while let Some(key) = map.next_key::<Value>()? {
            if is_merge_key(&key) {
                let MergeKeys(merged) = map.next_value()?;
                keys.extend(merged);
            } else {
                map.next_value::<IgnoredAny>()?;
                keys.insert(key_name(&key));
            }
        }
        Ok(TopLevelKeys(keys))
    }
}

/// Keys contributed by a `<<` merge value: one mapping or a sequence of mappings.
struct MergeKeys(KeySet);

impl<'de> Deserialize<'de> for MergeKeys {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MergeKeysVisitor)
    }
}

struct MergeKeysVisitor;

impl<'de> Visitor<'de> for MergeKeysVisitor {
    type Value = MergeKeys;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping or a sequence of mappings to merge")
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let TopLevelKeys(keys) = TopLevelKeysVisitor.visit_map(map)?;
        Ok(MergeKeys(keys))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut keys = KeySet::new();
        while let Some(MergeMapping(merged)) = seq.next_element()? {
            keys.extend(merged);
        }
        Ok(MergeKeys(keys))
    }
}

/// One element of a merge sequence; nested sequences are not allowed.
struct MergeMapping(KeySet);

impl<'de> Deserialize<'de> for MergeMapping {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let TopLevelKeys(keys) = deserializer.deserialize_map(TopLevelKeysVisitor)?;
        Ok(MergeMapping(keys))
    }
}

fn is_merge_key(key: &Value) -> bool {
    matches!(key, Value::String(s) if s == "<<")
}

// Non-string keys are named by their plain scalar text, so `1` and "1" (or `~` and
// "null") name the same key.
fn key_name(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        // Sequence/mapping/tagged keys: compact YAML rendering
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{:?}", other)),
    }
}
