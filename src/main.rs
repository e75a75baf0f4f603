//! Gatehouse - branch-aware commit gate and error-code catalog allocator.
//!
//! The CLI is the host for the pure checks in the library: it supplies
//! the current branch, the commit message text, the catalog document
//! and the namespace fallback, and turns verdicts into exit codes.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

mod hooks;

use gatehouse::branch::{self, Verdict};
use gatehouse::catalog;
use gatehouse::config::ProjectConfig;
use gatehouse::error::NEEDS_CONFIRMATION_EXIT;
use gatehouse::{git, locate, GatehouseError};

#[derive(Parser)]
#[command(name = "gatehouse")]
#[command(version = "0.1.0")]
#[command(about = "Branch-aware commit message gate and error-code catalog allocator", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(short, long, global = true, default_value = ".")]
    project: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a commit message against the branch prefix
    Check {
        /// Commit message text
        #[arg(short, long, conflicts_with = "file")]
        message: Option<String>,

        /// Read the commit message from a file (as git passes it to commit-msg hooks)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Branch name (defaults to the checked-out branch)
        #[arg(short, long)]
        branch: Option<String>,

        /// Emit the verdict as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the error-message catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Install the commit-msg git hook
    InstallHook {
        /// Overwrite an existing hook
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Allocate a code for a new entry and append it to the catalog
    Add {
        /// Entry key (e.g. product.not.found)
        key: String,

        /// Human-readable message for the entry
        #[arg(short, long)]
        message: String,

        /// Catalog file (defaults to searching the project tree)
        #[arg(long, env = "GATEHOUSE_CATALOG")]
        catalog: Option<PathBuf>,

        /// Code prefix (defaults to the in-document or configured one)
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Print the next unallocated code without writing anything
    Next {
        /// Code prefix (defaults to the in-document or configured one)
        #[arg(long)]
        prefix: Option<String>,

        /// Catalog file (defaults to searching the project tree)
        #[arg(long, env = "GATEHOUSE_CATALOG")]
        catalog: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "gatehouse=debug,info"
    } else {
        "gatehouse=info,warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Resolve project path
    let project_path = cli.project.canonicalize().unwrap_or(cli.project.clone());

    if !project_path.exists() {
        eprintln!(
            "{} Project directory does not exist: {}",
            "Error:".red().bold(),
            project_path.display()
        );
        std::process::exit(1);
    }

    match run(cli.command, &project_path) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(command: Commands, project: &Path) -> gatehouse::Result<i32> {
    match command {
        Commands::Check {
            message,
            file,
            branch,
            json,
        } => check_command(project, message, file, branch, json),

        Commands::Catalog { action } => match action {
            CatalogAction::Add {
                key,
                message,
                catalog,
                prefix,
            } => catalog_add(project, &key, &message, catalog, prefix),
            CatalogAction::Next { prefix, catalog } => catalog_next(project, prefix, catalog),
        },

        Commands::InstallHook { force } => {
            if hooks::install_commit_msg_hook(project, force)? {
                println!("{} .git/hooks/commit-msg", "Installed:".green().bold());
            } else {
                println!("commit-msg hook already present (use --force to overwrite)");
            }
            Ok(0)
        }
    }
}

// ============================================================================
// check
// ============================================================================

fn check_command(
    project: &Path,
    message: Option<String>,
    file: Option<PathBuf>,
    branch: Option<String>,
    json: bool,
) -> gatehouse::Result<i32> {
    let config = ProjectConfig::load(project).unwrap_or_default();
    if !config.commit.check {
        debug!("commit message check disabled in gatehouse.toml");
        return Ok(0);
    }

    let message = read_message(message, file)?;

    let branch_name = match branch {
        Some(name) => name,
        None => match git::current_branch(project) {
            Ok(name) => name,
            Err(e) => {
                // No branch means no gate; the commit is not ours to stop.
                debug!("could not determine branch, skipping check: {e}");
                return Ok(0);
            }
        },
    };

    let prefix = branch::extract_prefix(&branch_name);
    let verdict = match prefix.as_deref() {
        Some(p) => branch::validate(&message, p),
        None => Verdict::Pass,
    };

    if json {
        let payload = serde_json::json!({
            "branch": branch_name,
            "prefix": prefix,
            "verdict": match verdict {
                Verdict::Pass => "pass",
                Verdict::NeedsConfirmation => "needs-confirmation",
            },
            "expected": prefix.as_deref().map(branch::expected_format),
        });
        println!("{payload}");
    }

    match verdict {
        Verdict::Pass => Ok(0),
        Verdict::NeedsConfirmation => {
            if !json {
                let prefix = prefix.unwrap_or_default();
                eprintln!(
                    "{} commit message does not match the branch format",
                    "Warning:".yellow().bold()
                );
                eprintln!("Expected format: {}", branch::expected_format(&prefix));
            }
            Ok(NEEDS_CONFIRMATION_EXIT)
        }
    }
}

fn read_message(message: Option<String>, file: Option<PathBuf>) -> gatehouse::Result<String> {
    match (message, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

// ============================================================================
// catalog
// ============================================================================

fn catalog_add(
    project: &Path,
    key: &str,
    message: &str,
    catalog_path: Option<PathBuf>,
    prefix: Option<String>,
) -> gatehouse::Result<i32> {
    let config = ProjectConfig::load(project)?;
    let path = resolve_catalog(project, catalog_path, &config)?;
    let document = std::fs::read_to_string(&path)?;

    if catalog::key_exists(&document, key) {
        return Err(GatehouseError::DuplicateKey {
            key: key.to_string(),
        });
    }

    let prefix = prefix.unwrap_or_else(|| {
        catalog::infer_prefix(
            &document,
            &config.catalog.namespace,
            &config.catalog.root_marker,
        )
    });
    let code = catalog::next_code(&document, &prefix);
    let updated = catalog::append_entry(&document, key, &code, message);
    std::fs::write(&path, updated)?;

    debug!("appended '{key}' to {}", path.display());
    println!("{} {} -> {}", "Added:".green().bold(), key, code);
    Ok(0)
}

fn catalog_next(
    project: &Path,
    prefix: Option<String>,
    catalog_path: Option<PathBuf>,
) -> gatehouse::Result<i32> {
    let config = ProjectConfig::load(project)?;
    let path = resolve_catalog(project, catalog_path, &config)?;
    let document = std::fs::read_to_string(&path)?;

    let prefix = prefix.unwrap_or_else(|| {
        catalog::infer_prefix(
            &document,
            &config.catalog.namespace,
            &config.catalog.root_marker,
        )
    });
    println!("{}", catalog::next_code(&document, &prefix));
    Ok(0)
}

fn resolve_catalog(
    project: &Path,
    explicit: Option<PathBuf>,
    config: &ProjectConfig,
) -> gatehouse::Result<PathBuf> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(GatehouseError::CatalogNotFound {
                name: path.display().to_string(),
                root: project.to_path_buf(),
            });
        }
        return Ok(path);
    }

    locate::find_catalog(project, &config.catalog.file_name).ok_or_else(|| {
        GatehouseError::CatalogNotFound {
            name: config.catalog.file_name.clone(),
            root: project.to_path_buf(),
        }
    })
}
