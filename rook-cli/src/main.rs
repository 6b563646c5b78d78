//! Rook CLI - bulk GitHub issue importer
//!
//! Reads CSV batches listed in a manifest and files each batch's issues
//! under a milestone in the target repository.

mod commands;

use clap::{Parser, Subcommand};
use rook_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::ImportArgs;

/// Rook: bulk-import CSV issue batches into GitHub milestones
#[derive(Parser, Debug)]
#[command(name = "rook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Target repository, owner/repo or remote URL (overrides config and env)
    #[arg(long, global = true, env = "ROOK_REPO")]
    repo: Option<String>,

    /// Path to the gh executable (overrides config and env)
    #[arg(long, global = true, env = "ROOK_GH_PATH")]
    gh_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Import CSV issue batches as GitHub issues
    #[command(visible_alias = "i")]
    Import(ImportArgs),

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.repo.clone(), cli.gh_path.clone())?;

    if cli.verbose {
        tracing::info!(
            repo = ?config.import.repo,
            gh_path = %config.gh.path,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("rook {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Import(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Config) => {
            println!("Rook Configuration");
            println!("==================");
            println!();
            println!("Import Settings:");
            println!(
                "  repo: {}",
                config
                    .import
                    .repo
                    .as_deref()
                    .unwrap_or("(inferred from git remote)")
            );
            println!("  manifest: {}", config.import.manifest.display());
            println!("  backend: {}", config.import.backend);
            println!();
            println!("gh Settings:");
            println!("  path: {}", config.gh.path);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("Rook - bulk-import CSV issue batches into GitHub milestones");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
