//! # skillvault-config
//!
//! Configuration for skillvault. Reads from `skillvault.toml`, environment
//! variables, and CLI overrides — in that precedence order.

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{ConfigWarning, LoggingConfig, SkillVaultConfig, VaultConfig, WarningSeverity};
