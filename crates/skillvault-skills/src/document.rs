use serde_json::{Map, Value};
use std::path::Path;
use tracing::warn;

use skillvault_core::{Result, SkillVaultError};

/// On-disk serialization of a skill document, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.json` → JSON; anything else (including `.skill.yml`) → YAML.
    pub fn from_path(path: &Path) -> Self {
        if path.extension().is_some_and(|e| e == "json") {
            DocumentFormat::Json
        } else {
            DocumentFormat::Yaml
        }
    }
}

/// A parsed skill document.
///
/// The document is kept as a generic key-ordered mapping rather than a typed
/// struct: validation has to report which fields are *missing*, so a
/// document with holes must still load.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillDocument {
    fields: Map<String, Value>,
}

impl SkillDocument {
    /// Read and parse a skill file, picking the parser from its extension.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SkillVaultError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&content, DocumentFormat::from_path(path), path)
    }

    /// Parse document text. `source` is only used in error messages.
    pub fn parse(content: &str, format: DocumentFormat, source: &Path) -> Result<Self> {
        let load_err = |reason: String| SkillVaultError::Load {
            path: source.to_path_buf(),
            reason,
        };

        let value: Value = match format {
            DocumentFormat::Json => {
                serde_json::from_str(content).map_err(|e| load_err(e.to_string()))?
            }
            DocumentFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| load_err(e.to_string()))?
            }
        };

        match value {
            Value::Object(fields) if !fields.is_empty() => Ok(Self { fields }),
            Value::Null | Value::Object(_) => {
                Err(SkillVaultError::EmptyDocument(source.to_path_buf()))
            }
            _ => Err(SkillVaultError::NotAMapping(source.to_path_buf())),
        }
    }

    /// Build a document from an in-memory mapping.
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Whether a top-level key exists. A `null` value still counts as present.
    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// A top-level scalar rendered as text.
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_text)
    }

    /// A nested mapping such as `metadata` or `implementation`.
    /// Present-but-not-a-mapping values are treated as absent.
    pub fn section(&self, key: &str) -> Option<&Map<String, Value>> {
        self.get(key).and_then(Value::as_object)
    }

    pub fn section_text(&self, section: &str, key: &str) -> Option<String> {
        self.section(section)
            .and_then(|s| s.get(key))
            .and_then(scalar_text)
    }

    pub fn name(&self) -> Option<String> {
        self.text("name")
    }

    pub fn title(&self) -> Option<String> {
        self.text("title")
    }

    pub fn description(&self) -> Option<String> {
        self.text("description")
    }

    pub fn category(&self) -> Option<String> {
        self.section_text("metadata", "category")
    }

    pub fn author(&self) -> Option<String> {
        self.section_text("metadata", "author")
    }

    /// `metadata.tags`, or an empty list if absent. A bare string counts as one tag.
    pub fn tags(&self) -> Vec<String> {
        match self.section("metadata").and_then(|m| m.get("tags")) {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
            Some(other) => scalar_text(other).into_iter().collect(),
            None => Vec::new(),
        }
    }

    /// The implementation payload returned by `show`.
    pub fn content(&self) -> Option<String> {
        self.section_text("implementation", "content")
    }
}

/// Load a skill file, reporting failures on the diagnostic stream instead of
/// returning them. Callers treat `None` as "skip this file".
pub fn load_or_warn(path: &Path) -> Option<SkillDocument> {
    match SkillDocument::from_file(path) {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!(path = ?path, error = %e, "failed to load skill");
            None
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
