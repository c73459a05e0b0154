//! # skillvault-core
//!
//! Shared vocabulary for the skillvault crates: the unified error type and
//! the fixed set of skill categories that make up a vault.

pub mod category;
pub mod error;

pub use category::Category;
pub use error::{Result, SkillVaultError};
