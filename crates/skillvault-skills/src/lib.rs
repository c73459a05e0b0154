//! # skillvault-skills
//!
//! Read-only access to a vault of skill definition files.
//!
//! A vault is laid out by category:
//!
//! ```text
//! <vault>/skills/custom/*.skill.yml
//! <vault>/skills/bundled/*.skill.yml
//! <vault>/skills/community/*.skill.yml
//! ```
//!
//! Each file is a YAML (or, with a `.json` extension, JSON) document:
//!
//! ```yaml
//! name: summarize
//! title: Summarizer
//! version: 1.0.0
//! schema_version: "1"
//! description: Summarizes text
//! metadata:
//!   author: Revvel
//!   category: bundled
//!   tags: [text, nlp]
//! implementation:
//!   type: prompt
//!   language: markdown
//!   content: |
//!     Summarize the following text...
//! ```
//!
//! Every call rescans the disk; nothing is cached between invocations.

pub mod document;
pub mod repository;
pub mod search;
pub mod validation;

pub use document::{DocumentFormat, SkillDocument};
pub use repository::SkillRepository;
pub use search::{SearchFilter, SkillSummary};
pub use validation::{ValidationError, validate, validate_strict};
