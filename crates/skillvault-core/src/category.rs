use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SkillVaultError;

/// A skill category. Each one maps to a subdirectory of `<vault>/skills`.
///
/// The set is closed and never derived from the filesystem: a vault is
/// scanned in the order of [`Category::ALL`], and category directories that
/// do not exist are simply skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Custom,
    Bundled,
    Community,
}

impl Category {
    /// Every category, in scan order.
    pub const ALL: [Category; 3] = [Category::Custom, Category::Bundled, Category::Community];

    /// Identifier used both as the directory name and in `metadata.category`.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Custom => "custom",
            Category::Bundled => "bundled",
            Category::Community => "community",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SkillVaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SkillVaultError::UnknownCategory(s.to_string()))
    }
}
