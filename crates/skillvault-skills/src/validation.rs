use skillvault_core::Category;
use thiserror::Error;

use crate::document::SkillDocument;

/// Top-level fields every skill document must carry, in reporting order.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "name",
    "title",
    "version",
    "description",
    "metadata",
    "implementation",
    "schema_version",
];

/// Fields required under `metadata`.
pub const METADATA_FIELDS: [&str; 3] = ["author", "category", "tags"];

/// Fields required under `implementation`.
pub const IMPLEMENTATION_FIELDS: [&str; 3] = ["type", "language", "content"];

/// A single schema problem. `Display` yields the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Missing metadata field: {0}")]
    MissingMetadataField(&'static str),

    #[error("Missing implementation field: {0}")]
    MissingImplementationField(&'static str),

    #[error("Invalid metadata category: {0}")]
    InvalidCategory(String),
}

/// Check field presence only. Types and values are not inspected.
///
/// Nested fields are checked only when their parent is present: a document
/// without `metadata` gets a single "Missing required field: metadata" and
/// nothing about `author`, `category` or `tags`. A parent that is present but
/// not a mapping reports all of its children as missing.
pub fn validate(doc: &SkillDocument) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = REQUIRED_FIELDS
        .into_iter()
        .filter(|field| !doc.has(field))
        .map(ValidationError::MissingField)
        .collect();

    if doc.has("metadata") {
        let meta = doc.section("metadata");
        errors.extend(
            METADATA_FIELDS
                .into_iter()
                .filter(|field| !meta.is_some_and(|m| m.contains_key(*field)))
                .map(ValidationError::MissingMetadataField),
        );
    }

    if doc.has("implementation") {
        let implementation = doc.section("implementation");
        errors.extend(
            IMPLEMENTATION_FIELDS
                .into_iter()
                .filter(|field| !implementation.is_some_and(|i| i.contains_key(*field)))
                .map(ValidationError::MissingImplementationField),
        );
    }

    errors
}

/// [`validate`] plus a check that `metadata.category` names a known category.
pub fn validate_strict(doc: &SkillDocument) -> Vec<ValidationError> {
    let mut errors = validate(doc);

    if let Some(value) = doc.section("metadata").and_then(|m| m.get("category")) {
        let known = value
            .as_str()
            .is_some_and(|c| c.parse::<Category>().is_ok());
        if !known {
            let shown = value.as_str().map(str::to_string).unwrap_or_else(|| value.to_string());
            errors.push(ValidationError::InvalidCategory(shown));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn full() -> Value {
        json!({
            "name": "summarize",
            "title": "Summarizer",
            "version": "1.0.0",
            "description": "Summarizes text",
            "schema_version": "1",
            "metadata": {"author": "Revvel", "category": "bundled", "tags": ["text"]},
            "implementation": {"type": "prompt", "language": "markdown", "content": "Do it."}
        })
    }

    fn doc(value: Value) -> SkillDocument {
        match value {
            Value::Object(map) => SkillDocument::from_map(map),
            _ => panic!("test document must be an object"),
        }
    }

    fn without(mut value: Value, path: &[&str]) -> Value {
        let (last, parents) = path.split_last().unwrap();
        let mut cur = &mut value;
        for p in parents {
            cur = cur.get_mut(*p).unwrap();
        }
        cur.as_object_mut().unwrap().remove(*last);
        value
    }

    fn messages(errors: &[ValidationError]) -> Vec<String> {
        errors.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn fully_conforming_document_is_valid() {
        assert!(validate(&doc(full())).is_empty());
    }

    #[test]
    fn each_missing_top_level_field_reported_once() {
        for field in REQUIRED_FIELDS {
            let errors = validate(&doc(without(full(), &[field])));
            assert_eq!(messages(&errors), vec![format!("Missing required field: {field}")]);
        }
    }

    #[test]
    fn missing_fields_keep_declared_order() {
        let value = json!({"title": "t", "implementation": {"type": "x", "language": "y", "content": "z"}});
        let errors = validate(&doc(value));
        assert_eq!(
            messages(&errors),
            vec![
                "Missing required field: name",
                "Missing required field: version",
                "Missing required field: description",
                "Missing required field: metadata",
                "Missing required field: schema_version",
            ]
        );
    }

    #[test]
    fn missing_parent_skips_nested_checks() {
        let value = without(without(full(), &["metadata"]), &["implementation"]);
        let errors = validate(&doc(value));
        assert_eq!(
            errors,
            vec![
                ValidationError::MissingField("metadata"),
                ValidationError::MissingField("implementation"),
            ]
        );
    }

    #[test]
    fn missing_tags_only() {
        let errors = validate(&doc(without(full(), &["metadata", "tags"])));
        assert_eq!(messages(&errors), vec!["Missing metadata field: tags"]);
    }

    #[test]
    fn nested_errors_follow_top_level_errors() {
        let value = without(without(full(), &["implementation", "content"]), &["version"]);
        let value = without(value, &["metadata", "author"]);
        let errors = validate(&doc(value));
        assert_eq!(
            messages(&errors),
            vec![
                "Missing required field: version",
                "Missing metadata field: author",
                "Missing implementation field: content",
            ]
        );
    }

    #[test]
    fn non_mapping_parent_reports_all_children() {
        let mut value = full();
        value["implementation"] = json!("inline");
        let errors = validate(&doc(value));
        assert_eq!(
            messages(&errors),
            vec![
                "Missing implementation field: type",
                "Missing implementation field: language",
                "Missing implementation field: content",
            ]
        );
    }

    #[test]
    fn null_values_count_as_present() {
        let mut value = full();
        value["description"] = Value::Null;
        value["metadata"]["tags"] = Value::Null;
        assert!(validate(&doc(value)).is_empty());
    }

    #[test]
    fn default_validation_ignores_unknown_category() {
        let mut value = full();
        value["metadata"]["category"] = json!("official");
        assert!(validate(&doc(value)).is_empty());
    }

    #[test]
    fn strict_validation_flags_unknown_category() {
        let mut value = full();
        value["metadata"]["category"] = json!("official");
        let errors = validate_strict(&doc(value));
        assert_eq!(messages(&errors), vec!["Invalid metadata category: official"]);
    }

    #[test]
    fn strict_validation_accepts_any_case() {
        let mut value = full();
        value["metadata"]["category"] = json!("Community");
        assert!(validate_strict(&doc(value)).is_empty());
    }

    #[test]
    fn strict_validation_flags_non_string_category() {
        let mut value = full();
        value["metadata"]["category"] = json!(3);
        let errors = validate_strict(&doc(value));
        assert_eq!(messages(&errors), vec!["Invalid metadata category: 3"]);
    }
}
