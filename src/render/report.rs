//! Report generation for a key comparison.

use crate::compare::KeyComparison;
use crate::domain::{KeySet, ParseFailure};
use anyhow::Result;
use serde_json::{json, Map, Value};
use std::path::Path;

pub const SUCCESS_MESSAGE: &str = "Config files are same";

/// Human-readable one-line result.
pub fn render_text(comparison: &KeyComparison, sample_file: &Path) -> String {
    if comparison.equal {
        SUCCESS_MESSAGE.to_string()
    } else {
        format!("Missing values in {}: {}", sample_file.display(), set_literal(&comparison.missing))
    }
}

/// Pretty-printed JSON result for tooling.
///
/// `parse_errors` only appears when a file was unparsable and treated as having no keys.
pub fn render_json(
    comparison: &KeyComparison,
    developer_file: &Path,
    sample_file: &Path,
    parse_errors: &[ParseFailure],
) -> Result<String> {
    let mut report = Map::new();
    report.insert("equal".to_string(), Value::Bool(comparison.equal));
    report.insert(
        "developer_file".to_string(),
        Value::String(developer_file.display().to_string()),
    );
    report.insert("sample_file".to_string(), Value::String(sample_file.display().to_string()));
    report.insert("missing".to_string(), serde_json::to_value(&comparison.missing)?);
    report.insert("unused".to_string(), serde_json::to_value(&comparison.unused)?);
    if !parse_errors.is_empty() {
        let errors = parse_errors
            .iter()
            .map(|e| json!({ "file": e.file.display().to_string(), "message": e.message }))
            .collect::<Vec<_>>();
        report.insert("parse_errors".to_string(), Value::Array(errors));
    }
    Ok(serde_json::to_string_pretty(&Value::Object(report))?)
}

/// `{"a", "b"}`, or `{}` when empty.
fn set_literal(keys: &KeySet) -> String {
    format!("{:?}", keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare;
    use std::path::PathBuf;

    fn keys(names: &[&str]) -> KeySet {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_text_equal() {
        let cmp = compare(&keys(&["a"]), &keys(&["a"]));
        assert_eq!(render_text(&cmp, Path::new("config-sample.yaml")), "Config files are same");
    }

    #[test]
    fn test_render_text_missing() {
        let cmp = compare(&keys(&["a", "c", "b"]), &keys(&["a"]));
        assert_eq!(
            render_text(&cmp, Path::new("config-sample.yaml")),
            r#"Missing values in config-sample.yaml: {"b", "c"}"#
        );
    }

    #[test]
    fn test_render_text_unequal_without_missing() {
        let cmp = compare(&keys(&["a"]), &keys(&["a", "b"]));
        assert_eq!(
            render_text(&cmp, Path::new("config-sample.yaml")),
            "Missing values in config-sample.yaml: {}"
        );
    }

    #[test]
    fn test_render_json() {
        let cmp = compare(&keys(&["a", "c"]), &keys(&["a", "b"]));
        let out = render_json(&cmp, Path::new("config.yaml"), Path::new("config-sample.yaml"), &[])
            .expect("json");
        let value: Value = serde_json::from_str(&out).expect("parse");
        assert_eq!(value["equal"], Value::Bool(false));
        assert_eq!(value["missing"], json!(["c"]));
        assert_eq!(value["unused"], json!(["b"]));
        assert_eq!(value["sample_file"], json!("config-sample.yaml"));
        assert!(value.get("parse_errors").is_none());
    }

    #[test]
    fn test_render_json_lists_parse_errors() {
        let cmp = compare(&KeySet::new(), &keys(&["a"]));
        let errors = vec![ParseFailure {
            file: PathBuf::from("config.yaml"),
            message: "did not find expected node content".to_string(),
        }];
        let out = render_json(&cmp, Path::new("config.yaml"), Path::new("config-sample.yaml"), &errors)
            .expect("json");
        let value: Value = serde_json::from_str(&out).expect("parse");
        assert_eq!(
            value["parse_errors"],
            json!([{ "file": "config.yaml", "message": "did not find expected node content" }])
        );
    }
}
