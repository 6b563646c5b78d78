//! Import command

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use rook_core::{Backend, Config, GitRepo, Manifest};
use rook_github::{parse_repo, run_import, ApiCreator, GhCli, ImportOptions, IssueCreator};

/// Import CSV issue batches as GitHub issues
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Path to the batch manifest (defaults to the configured manifest)
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Construct and print requests without executing them
    #[arg(long)]
    dry_run: bool,

    /// Backend used to create issues
    #[arg(long, value_enum)]
    backend: Option<BackendArg>,

    /// Additional labels added to every issue
    #[arg(short, long)]
    label: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BackendArg {
    /// Shell out to the gh CLI
    Gh,
    /// Call the GitHub REST API directly
    Api,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Gh => Backend::Gh,
            BackendArg::Api => Backend::Api,
        }
    }
}

impl ImportArgs {
    /// Execute the import command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        // Repository first: nothing is read before the target is known.
        let repo_ref = resolve_repo(config)?;
        let (owner, repo) = parse_repo(&repo_ref).map_err(|e| anyhow::anyhow!("{}", e))?;
        let repo_ref = format!("{}/{}", owner, repo);

        let backend: Backend = self
            .backend
            .map(Into::into)
            .unwrap_or(config.import.backend);

        let creator: Box<dyn IssueCreator> = match backend {
            Backend::Gh => {
                let gh = GhCli::new(config.gh.path.clone(), repo_ref.clone());
                if !self.dry_run && !gh.is_available() {
                    anyhow::bail!(
                        "'{}' executable not found. Install the GitHub CLI or use --backend api.",
                        config.gh.path
                    );
                }
                Box::new(gh)
            }
            Backend::Api => {
                Box::new(ApiCreator::new(&repo_ref).map_err(|e| anyhow::anyhow!("{}", e))?)
            }
        };

        let manifest_path = self.manifest.as_ref().unwrap_or(&config.import.manifest);
        let manifest = Manifest::load(manifest_path)
            .with_context(|| format!("Failed to load manifest {}", manifest_path.display()))?;

        if verbose {
            tracing::info!(
                repo = %repo_ref,
                backend = %backend,
                batches = manifest.batches.len(),
                "Starting import"
            );
        }

        println!(
            "Importing into {} via {}{}",
            repo_ref,
            creator.name(),
            if self.dry_run { " (dry run)" } else { "" }
        );

        let options = ImportOptions {
            dry_run: self.dry_run,
            extra_labels: self.label.clone(),
        };

        let summary = run_import(creator.as_ref(), &manifest, &options)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?;

        println!();
        if self.dry_run {
            println!(
                "Dry run: {} request(s) printed, {} row(s) skipped, {} file(s) missing.",
                summary.created, summary.rows_skipped, summary.files_skipped
            );
            println!("Run again without --dry-run to create the issues.");
        } else {
            println!(
                "✅ Done importing issues: {} created, {} row(s) skipped, {} file(s) missing.",
                summary.created, summary.rows_skipped, summary.files_skipped
            );
        }

        Ok(())
    }
}

/// Resolve the target repository reference
///
/// Order: --repo flag / ROOK_REPO env (already merged into the config) >
/// config file > origin remote of the enclosing git repository.
fn resolve_repo(config: &Config) -> anyhow::Result<String> {
    if let Some(ref repo) = config.import.repo {
        return Ok(repo.clone());
    }

    if let Ok(git) = GitRepo::discover(".") {
        if let Some(url) = git.origin_url() {
            return Ok(url);
        }
    }

    anyhow::bail!(
        "No repository configured. Pass --repo owner/repo, set ROOK_REPO, \
         or run inside a git repository with an origin remote."
    )
}
