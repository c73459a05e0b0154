use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use skillvault_core::{Result, SkillVaultError};

use crate::schema::SkillVaultConfig;

/// Loads the skillvault configuration and resolves the vault root.
pub struct ConfigLoader {
    config: SkillVaultConfig,
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > SKILLVAULT_CONFIG env > ~/.skillvault/skillvault.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("SKILLVAULT_CONFIG") {
            return PathBuf::from(p);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".skillvault")
            .join("skillvault.toml")
    }

    /// Load the config from disk, falling back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = Self::resolve_path(path);
        let config = if config_path.exists() {
            info!(?config_path, "loading configuration");
            let raw = std::fs::read_to_string(&config_path)?;
            Self::parse(&raw, &config_path)?
        } else {
            debug!(?config_path, "config file not found, using defaults");
            SkillVaultConfig::default()
        };

        Self::from_config(Self::apply_env_overrides(config), config_path)
    }

    /// Build a loader around an already-parsed config, validating it.
    pub fn from_config(config: SkillVaultConfig, config_path: PathBuf) -> Result<Self> {
        match config.validate() {
            Ok(warnings) => {
                for w in &warnings {
                    warn!("{}", w);
                }
            }
            Err(e) => return Err(SkillVaultError::Config(e)),
        }

        Ok(Self {
            config,
            config_path,
        })
    }

    fn parse(raw: &str, config_path: &Path) -> Result<SkillVaultConfig> {
        toml::from_str::<SkillVaultConfig>(raw).map_err(|e| {
            SkillVaultError::Config(format!("failed to parse {}: {}", config_path.display(), e))
        })
    }

    /// Get a snapshot of the current config.
    pub fn get(&self) -> SkillVaultConfig {
        self.config.clone()
    }

    /// Path the config was (or would have been) read from.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Resolve the vault root: `--root` flag > `vault.root` (file or
    /// SKILLVAULT_ROOT) > parent of the executable's directory.
    pub fn vault_root(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(root) = cli_override {
            return Ok(root.to_path_buf());
        }
        if let Some(ref root) = self.config.vault.root {
            return Ok(root.clone());
        }
        Self::default_vault_root()
    }

    /// `<vault>/tools/skillvault` → `<vault>`.
    fn default_vault_root() -> Result<PathBuf> {
        let exe = std::env::current_exe()?;
        exe.parent()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .ok_or_else(|| SkillVaultError::VaultRoot {
                path: exe.clone(),
                reason: "executable has no grandparent directory; pass --root or set SKILLVAULT_ROOT"
                    .into(),
            })
    }

    /// Apply env var overrides (SKILLVAULT_ROOT, SKILLVAULT_LOG_LEVEL, SKILLVAULT_LOG_FORMAT).
    fn apply_env_overrides(mut config: SkillVaultConfig) -> SkillVaultConfig {
        if let Ok(v) = std::env::var("SKILLVAULT_ROOT") {
            config.vault.root = Some(PathBuf::from(v));
        }
        if let Ok(v) = std::env::var("SKILLVAULT_LOG_LEVEL") {
            config.logging.level = v;
        }
        if let Ok(v) = std::env::var("SKILLVAULT_LOG_FORMAT") {
            config.logging.format = v;
        }
        config
    }
}
