use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use skillvault_core::{Category, Result, SkillVaultError};

use crate::document::{self, SkillDocument};
use crate::search::{SearchFilter, SkillSummary};
use crate::validation::{self, ValidationError};

/// File-name suffix of a skill definition.
pub const SKILL_FILE_SUFFIX: &str = ".skill.yml";

/// Read-only view of a vault's `skills/` tree.
///
/// Category directories are visited in [`Category::ALL`] order; missing
/// ones are skipped. Within a directory, files are visited in whatever order
/// the filesystem lists them.
pub struct SkillRepository {
    root: PathBuf,
    skills_dir: PathBuf,
    categories: [Category; 3],
}

impl SkillRepository {
    /// Create a repository rooted at `root` without touching the disk.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            skills_dir: root.join("skills"),
            categories: Category::ALL,
        }
    }

    /// Create a repository, failing if `root` is not an accessible directory.
    pub fn open(root: &Path) -> Result<Self> {
        let meta = std::fs::metadata(root).map_err(|e| SkillVaultError::VaultRoot {
            path: root.to_path_buf(),
            reason: e.to_string(),
        })?;
        if !meta.is_dir() {
            return Err(SkillVaultError::VaultRoot {
                path: root.to_path_buf(),
                reason: "not a directory".into(),
            });
        }
        debug!(?root, "opened skill vault");
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn skills_dir(&self) -> &Path {
        &self.skills_dir
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.skills_dir.join(category.as_str())
    }

    /// Load one skill file. Failures are logged and yield `None`.
    pub fn load_document(&self, path: &Path) -> Option<SkillDocument> {
        document::load_or_warn(path)
    }

    pub fn validate(&self, doc: &SkillDocument) -> Vec<ValidationError> {
        validation::validate(doc)
    }

    /// Every loadable `*.skill.yml` in the category directories that matches `filter`.
    pub fn search(&self, filter: &SearchFilter) -> Vec<SkillSummary> {
        let mut results = Vec::new();

        for (category, dir) in self.existing_category_dirs() {
            let files = matching_files(&dir, SKILL_FILE_SUFFIX);
            debug!(%category, count = files.len(), "scanning category");

            for path in files {
                let Some(doc) = self.load_document(&path) else {
                    continue;
                };
                if filter.matches(&doc) {
                    results.push(SkillSummary::from_document(&doc, &path));
                }
            }
        }

        debug!(matched = results.len(), ?filter, "search complete");
        results
    }

    /// `implementation.content` of the first file matching `*<name>.skill.yml`.
    ///
    /// The lookup stops at the first category directory holding any matching
    /// file, even if that file fails to load or has no content.
    pub fn get_content(&self, name: &str) -> Option<String> {
        let suffix = format!("{name}{SKILL_FILE_SUFFIX}");

        for (category, dir) in self.existing_category_dirs() {
            let Some(path) = matching_files(&dir, &suffix).into_iter().next() else {
                continue;
            };
            debug!(skill = %name, %category, ?path, "resolved skill file");
            return self.load_document(&path).and_then(|doc| doc.content());
        }

        debug!(skill = %name, "no skill file matched");
        None
    }

    fn existing_category_dirs(&self) -> impl Iterator<Item = (Category, PathBuf)> + '_ {
        self.categories.iter().filter_map(|&category| {
            let dir = self.category_dir(category);
            if dir.is_dir() {
                Some((category, dir))
            } else {
                debug!(?dir, "category directory does not exist, skipping");
                None
            }
        })
    }
}

/// Regular files directly inside `dir` whose name ends with `suffix`.
/// Dot-files are included.
fn matching_files(dir: &Path, suffix: &str) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(?dir, error = %e, "failed to read category directory, skipping");
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(?dir, error = %e, "failed to read directory entry");
                None
            }
        })
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(suffix))
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_paths() {
        let repo = SkillRepository::new(Path::new("/vault"));
        assert_eq!(repo.skills_dir(), Path::new("/vault/skills"));
        assert_eq!(repo.category_dir(Category::Bundled), PathBuf::from("/vault/skills/bundled"));
        assert_eq!(repo.categories(), &Category::ALL);
    }

    #[test]
    fn open_rejects_missing_root() {
        let err = SkillRepository::open(Path::new("/nonexistent/vault")).err().unwrap();
        assert!(matches!(err, SkillVaultError::VaultRoot { .. }));
    }

    #[test]
    fn open_rejects_file_root() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("vault.txt");
        std::fs::write(&file, "not a dir").unwrap();
        let err = SkillRepository::open(&file).err().unwrap();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn matching_files_filters_by_suffix() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.skill.yml", "b.skill.yaml", "c.yml", ".hidden.skill.yml"] {
            std::fs::write(dir.path().join(name), "name: x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.skill.yml")).unwrap();

        let mut files = matching_files(dir.path(), SKILL_FILE_SUFFIX);
        files.sort();
        assert_eq!(
            files,
            vec![dir.path().join(".hidden.skill.yml"), dir.path().join("a.skill.yml")]
        );
    }

    #[test]
    fn matching_files_on_missing_dir_is_empty() {
        assert!(matching_files(Path::new("/nonexistent/dir"), SKILL_FILE_SUFFIX).is_empty());
    }
}
