//! Import manifest parsing
//!
//! A manifest is a TOML file listing the CSV batches to import and the
//! milestone each batch is filed under:
//!
//! ```toml
//! [[batch]]
//! file = "phase-1-issues.csv"
//! milestone = "Phase 1 – Ontology Ingestion & Canonical Model"
//! ```
//!
//! Batches are imported in declaration order.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// One (source file, milestone) pairing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Batch {
    /// CSV file holding the issue rows
    pub file: PathBuf,
    /// Milestone every issue in this batch is assigned to
    pub milestone: String,
}

/// An ordered list of batches to import
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Manifest {
    /// Batches, imported in declaration order
    #[serde(rename = "batch", default)]
    pub batches: Vec<Batch>,
}

impl Manifest {
    /// Load a manifest from a TOML file
    ///
    /// Relative batch file paths are resolved against the manifest's
    /// directory.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Manifest(format!("Failed to read {}: {}", path.display(), e)))?;

        let mut manifest: Manifest = toml::from_str(&contents)
            .map_err(|e| Error::Manifest(format!("Failed to parse {}: {}", path.display(), e)))?;

        if manifest.batches.is_empty() {
            return Err(Error::Manifest(format!(
                "{} declares no [[batch]] entries",
                path.display()
            )));
        }

        for batch in &manifest.batches {
            if batch.milestone.trim().is_empty() {
                return Err(Error::Manifest(format!(
                    "Batch {} has an empty milestone",
                    batch.file.display()
                )));
            }
        }

        if let Some(dir) = path.parent() {
            for batch in &mut manifest.batches {
                if batch.file.is_relative() {
                    batch.file = dir.join(&batch.file);
                }
            }
        }

        debug!(path = %path.display(), batches = manifest.batches.len(), "Loaded manifest");
        Ok(manifest)
    }
}
