use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

use skillvault_config::ConfigLoader;
use skillvault_skills::{SearchFilter, SkillRepository};

mod skills;

/// Search, show and validate skill definitions in a vault
#[derive(Parser)]
#[command(name = "skillvault", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to skillvault.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Vault root directory (the one containing skills/)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search skills by text, category or tag
    Search {
        /// Text to look for in name, title and description
        query: Option<String>,
        /// Filter by metadata.category
        #[arg(long)]
        category: Option<String>,
        /// Filter by tag
        #[arg(short, long)]
        tag: Option<String>,
    },
    /// Print a skill's implementation content
    Show {
        /// Skill name, matched against *<name>.skill.yml
        name: String,
    },
    /// Validate a skill file
    Validate {
        /// Path to a .skill.yml (or .json) file
        path: PathBuf,
        /// Also require metadata.category to be custom, bundled or community
        #[arg(long)]
        strict: bool,
    },
    /// Show the effective configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions for bash, zsh, or fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    pub fn run(self) -> skillvault_core::Result<ExitCode> {
        let Cli {
            config,
            root,
            log_level,
            verbose,
            quiet,
            command,
        } = self;

        let config_loader = ConfigLoader::load(config.as_deref())?;
        let settings = config_loader.get();

        // Resolve log level: --verbose > --quiet > --log-level > config
        let log_level = if verbose {
            "debug"
        } else if quiet {
            "error"
        } else {
            log_level.as_deref().unwrap_or(&settings.logging.level)
        };
        init_tracing(&settings.logging.format, log_level);

        let Some(command) = command else {
            Cli::command().print_help()?;
            return Ok(ExitCode::SUCCESS);
        };

        match command {
            Commands::Search {
                query,
                category,
                tag,
            } => {
                let repo = open_repository(&config_loader, root.as_deref())?;
                skills::cmd_search(
                    &repo,
                    &SearchFilter {
                        query,
                        category,
                        tag,
                    },
                )
            }
            Commands::Show { name } => {
                let repo = open_repository(&config_loader, root.as_deref())?;
                skills::cmd_show(&repo, &name)
            }
            Commands::Validate { path, strict } => skills::cmd_validate(&path, strict),
            Commands::Config { json } => cmd_config(&config_loader, root.as_deref(), json),
            Commands::Completions { shell } => cmd_completions(shell),
        }
    }
}

fn init_tracing(format: &str, level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    // Diagnostics go to stderr; stdout carries command output only.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        "json" => builder.json().with_target(true).init(),
        "compact" => builder.compact().with_target(false).init(),
        _ => builder.with_target(false).init(),
    }
}

fn open_repository(
    config_loader: &ConfigLoader,
    root_override: Option<&Path>,
) -> skillvault_core::Result<SkillRepository> {
    let root = config_loader.vault_root(root_override)?;
    debug!(?root, "resolved vault root");
    SkillRepository::open(&root)
}

fn cmd_config(
    config_loader: &ConfigLoader,
    root_override: Option<&Path>,
    json: bool,
) -> skillvault_core::Result<ExitCode> {
    let mut effective = config_loader.get();
    effective.vault.root = Some(config_loader.vault_root(root_override)?);

    if json {
        println!("{}", serde_json::to_string_pretty(&effective)?);
    } else {
        let rendered = toml::to_string_pretty(&effective)
            .map_err(|e| skillvault_core::SkillVaultError::Config(e.to_string()))?;
        println!("# {}", config_loader.path().display());
        print!("{rendered}");
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_completions(shell: Shell) -> skillvault_core::Result<ExitCode> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "skillvault", &mut std::io::stdout());
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_arguments_are_optional() {
        let cli = Cli::try_parse_from(["skillvault", "search"]).unwrap();
        match cli.command {
            Some(Commands::Search {
                query,
                category,
                tag,
            }) => {
                assert!(query.is_none());
                assert!(category.is_none());
                assert!(tag.is_none());
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn search_parses_filters() {
        let cli = Cli::try_parse_from([
            "skillvault",
            "search",
            "summar",
            "--category",
            "bundled",
            "--tag",
            "nlp",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Search {
                query,
                category,
                tag,
            }) => {
                assert_eq!(query.as_deref(), Some("summar"));
                assert_eq!(category.as_deref(), Some("bundled"));
                assert_eq!(tag.as_deref(), Some("nlp"));
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn show_requires_name() {
        assert!(Cli::try_parse_from(["skillvault", "show"]).is_err());
    }

    #[test]
    fn validate_takes_path_and_strict() {
        let cli = Cli::try_parse_from(["skillvault", "validate", "a.skill.yml", "--strict"]).unwrap();
        match cli.command {
            Some(Commands::Validate { path, strict }) => {
                assert_eq!(path, PathBuf::from("a.skill.yml"));
                assert!(strict);
            }
            _ => panic!("expected validate"),
        }
    }

    #[test]
    fn global_root_after_subcommand() {
        let cli = Cli::try_parse_from(["skillvault", "show", "x", "--root", "/vault"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/vault")));
    }

    #[test]
    fn no_command_is_allowed() {
        let cli = Cli::try_parse_from(["skillvault"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["skillvault", "publish"]).is_err());
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["skillvault", "-v", "-q", "search"]).is_err());
    }
}
