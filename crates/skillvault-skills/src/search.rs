use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::document::SkillDocument;

/// Optional search constraints. An unset or empty filter never excludes a
/// document; all set filters must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    /// Case-insensitive substring of `"<name> <title> <description>"`.
    pub query: Option<String>,
    /// Case-insensitive exact match on `metadata.category`.
    pub category: Option<String>,
    /// Case-insensitive membership in `metadata.tags`.
    pub tag: Option<String>,
}

impl SearchFilter {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn matches(&self, doc: &SkillDocument) -> bool {
        if let Some(category) = active(&self.category) {
            let doc_category = doc.category().unwrap_or_default();
            if doc_category.to_lowercase() != category.to_lowercase() {
                return false;
            }
        }

        if let Some(tag) = active(&self.tag) {
            let tag = tag.to_lowercase();
            if !doc.tags().iter().any(|t| t.to_lowercase() == tag) {
                return false;
            }
        }

        if let Some(query) = active(&self.query) {
            let haystack = format!(
                "{} {} {}",
                doc.name().unwrap_or_default(),
                doc.title().unwrap_or_default(),
                doc.description().unwrap_or_default(),
            )
            .to_lowercase();
            if !haystack.contains(&query.to_lowercase()) {
                return false;
            }
        }

        true
    }
}

fn active(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().filter(|f| !f.is_empty())
}

/// One search hit, as listed by `skillvault search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillSummary {
    pub name: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub path: PathBuf,
}

impl SkillSummary {
    pub fn from_document(doc: &SkillDocument, path: &Path) -> Self {
        Self {
            name: doc.name(),
            title: doc.title(),
            category: doc.category(),
            author: doc.author(),
            path: path.to_path_buf(),
        }
    }
}
