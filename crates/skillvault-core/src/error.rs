use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for every skillvault crate.
#[derive(Error, Debug)]
pub enum SkillVaultError {
    // ── Document errors ────────────────────────────────────────
    #[error("failed to load {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },

    #[error("{} contains no skill data", .0.display())]
    EmptyDocument(PathBuf),

    #[error("{} is not a mapping at the top level", .0.display())]
    NotAMapping(PathBuf),

    // ── Vault errors ───────────────────────────────────────────
    #[error("vault root {} is not accessible: {reason}", .path.display())]
    VaultRoot { path: PathBuf, reason: String },

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SkillVaultError>;
