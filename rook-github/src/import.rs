//! Batch import engine
//!
//! Drives a whole import end to end: batch by batch in manifest order, row
//! by row in file order. Missing batch files and empty-title rows are
//! skipped with a warning; any creation failure aborts the run immediately.

use tracing::{debug, warn};

use rook_core::{read_batch, Manifest, RowOutcome};

use crate::{IssueCreator, NewIssue, Result};

/// Options controlling an import run
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Construct and print requests without executing them
    pub dry_run: bool,

    /// Labels appended to every issue, after the row's own labels
    pub extra_labels: Vec<String>,
}

/// Tally of one import run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Requests constructed (and, unless dry-run, executed)
    pub created: usize,
    /// Rows skipped for an empty title
    pub rows_skipped: usize,
    /// Batch files that were not found
    pub files_skipped: usize,
}

/// Run a whole import
///
/// Issues are created strictly one at a time; creation order matches row
/// order within a file and batch order across files. Rows already created
/// when a failure occurs stay created.
pub async fn run_import(
    creator: &dyn IssueCreator,
    manifest: &Manifest,
    options: &ImportOptions,
) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    for batch in &manifest.batches {
        if !batch.file.is_file() {
            warn!(file = %batch.file.display(), "Batch file not found");
            println!("⚠️  Skipping {}: file not found.", batch.file.display());
            summary.files_skipped += 1;
            continue;
        }

        println!();
        println!(
            "=== Importing {} -> milestone '{}' ===",
            batch.file.display(),
            batch.milestone
        );

        for outcome in read_batch(&batch.file)? {
            match outcome {
                RowOutcome::MissingTitle { line } => {
                    warn!(file = %batch.file.display(), line, "Row has empty title");
                    println!("⚠️  Skipping row at line {}: empty title.", line);
                    summary.rows_skipped += 1;
                }
                RowOutcome::Issue(row) => {
                    let mut labels = row.labels;
                    labels.extend(options.extra_labels.iter().cloned());

                    let issue = NewIssue {
                        title: row.title,
                        body: row.body,
                        milestone: batch.milestone.clone(),
                        labels,
                    };

                    println!("{}", creator.audit_line(&issue));

                    if options.dry_run {
                        debug!(title = %issue.title, "Dry run, not creating");
                    } else {
                        let created = creator.create(&issue).await?;
                        if let Some(number) = created.number {
                            println!("✅ Created #{}", number);
                        }
                    }

                    summary.created += 1;
                }
            }
        }
    }

    Ok(summary)
}
