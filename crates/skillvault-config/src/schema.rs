use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration — maps to `skillvault.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillVaultConfig {
    pub vault: VaultConfig,
    pub logging: LoggingConfig,
}

// ── Vault ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Vault root directory (the one containing `skills/`).
    /// When unset, the parent of the directory holding the executable is used.
    pub root: Option<PathBuf>,
}

// ── Logging ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Output format: "pretty", "json", "compact".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

// ── Validation ─────────────────────────────────────────────────

/// A single config validation issue.
#[derive(Debug)]
pub struct ConfigWarning {
    pub field: String,
    pub message: String,
    pub severity: WarningSeverity,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let icon = match self.severity {
            WarningSeverity::Error => "❌",
            WarningSeverity::Warning => "⚠️ ",
            WarningSeverity::Info => "💡",
        };
        write!(f, "{} {}: {}", icon, self.field, self.message)?;
        if let Some(ref h) = self.hint {
            write!(f, "\n   ↳ {}", h)?;
        }
        Ok(())
    }
}

pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
pub const VALID_LOG_FORMATS: [&str; 3] = ["pretty", "json", "compact"];

impl SkillVaultConfig {
    /// Validate the config and return a list of warnings.
    /// Returns `Err` with all messages joined if any severity is Error.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, String> {
        let mut warnings = Vec::new();

        // ── Vault root ───
        match self.vault.root {
            Some(ref root) if root.as_os_str().is_empty() => {
                warnings.push(ConfigWarning {
                    field: "vault.root".into(),
                    message: "root is set but empty".into(),
                    severity: WarningSeverity::Error,
                    hint: Some("Remove the key to use the default, or set a directory path".into()),
                });
            }
            Some(ref root) if root.is_relative() => {
                warnings.push(ConfigWarning {
                    field: "vault.root".into(),
                    message: format!("root '{}' is relative to the working directory", root.display()),
                    severity: WarningSeverity::Info,
                    hint: Some("Use an absolute path so results do not depend on where you run from".into()),
                });
            }
            _ => {}
        }

        // ── Logging format ───
        if !VALID_LOG_FORMATS.contains(&self.logging.format.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.format".into(),
                message: format!("unknown log format '{}'", self.logging.format),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", VALID_LOG_FORMATS.join(", "))),
            });
        }

        // ── Logging level ───
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.level".into(),
                message: format!("unknown log level '{}'", self.logging.level),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", VALID_LOG_LEVELS.join(", "))),
            });
        }

        let errors: Vec<String> = warnings
            .iter()
            .filter(|w| w.severity == WarningSeverity::Error)
            .map(|w| format!("{}: {}", w.field, w.message))
            .collect();

        if !errors.is_empty() {
            return Err(format!("Configuration errors:\n  • {}", errors.join("\n  • ")));
        }

        Ok(warnings)
    }
}
