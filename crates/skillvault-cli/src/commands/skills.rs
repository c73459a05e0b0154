use std::fmt::Write as _;
use std::path::Path;
use std::process::ExitCode;

use skillvault_skills::document::load_or_warn;
use skillvault_skills::{
    SearchFilter, SkillRepository, SkillSummary, ValidationError, validate, validate_strict,
};

/// Maximum number of hits listed by `search`; the rest are only counted.
const SEARCH_DISPLAY_LIMIT: usize = 20;

pub(super) fn cmd_search(
    repo: &SkillRepository,
    filter: &SearchFilter,
) -> skillvault_core::Result<ExitCode> {
    let results = repo.search(filter);
    print!("{}", render_search(&results));
    Ok(ExitCode::SUCCESS)
}

pub(super) fn cmd_show(repo: &SkillRepository, name: &str) -> skillvault_core::Result<ExitCode> {
    match repo.get_content(name).filter(|c| !c.is_empty()) {
        Some(content) => {
            println!("{content}");
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("Skill '{name}' not found.");
            Ok(ExitCode::FAILURE)
        }
    }
}

pub(super) fn cmd_validate(path: &Path, strict: bool) -> skillvault_core::Result<ExitCode> {
    let Some(doc) = load_or_warn(path) else {
        println!("Could not load file.");
        return Ok(ExitCode::FAILURE);
    };

    let errors = if strict {
        validate_strict(&doc)
    } else {
        validate(&doc)
    };
    print!("{}", render_validation(&errors));

    if errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn render_search(results: &[SkillSummary]) -> String {
    let mut out = format!("Found {} skills:\n", results.len());
    for r in results.iter().take(SEARCH_DISPLAY_LIMIT) {
        let _ = writeln!(
            out,
            "- {} ({}) by {} [{}]",
            field(&r.title),
            field(&r.name),
            field(&r.author),
            field(&r.category),
        );
    }
    if results.len() > SEARCH_DISPLAY_LIMIT {
        let _ = writeln!(out, "... and {} more.", results.len() - SEARCH_DISPLAY_LIMIT);
    }
    out
}

fn render_validation(errors: &[ValidationError]) -> String {
    if errors.is_empty() {
        return "Skill is valid.\n".to_string();
    }
    let mut out = String::from("Validation failed:\n");
    for e in errors {
        let _ = writeln!(out, "  - {e}");
    }
    out
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("unknown")
}
