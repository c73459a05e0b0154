//! # skillvault-cli
//!
//! Command-line interface for a skill vault.
//!
//! ## Commands
//!
//! - `skillvault search [query] [--category c] [--tag t]` — Find skills
//! - `skillvault show <name>` — Print a skill's implementation content
//! - `skillvault validate <path>` — Check a skill file against the schema
//! - `skillvault config` — Show the effective configuration
//! - `skillvault completions <shell>` — Generate shell completions

pub mod commands;

pub use commands::Cli;
