//! Rook GitHub - issue creation backends and the batch import engine
//!
//! This crate provides the `IssueCreator` capability interface, its two
//! implementations (the `gh` CLI and the GitHub REST API), and the engine
//! that drives a whole import batch by batch.

mod api;
mod creator;
mod error;
mod gh;
mod import;

pub use api::{parse_repo, ApiCreator};
pub use creator::{CreatedIssue, IssueCreator, NewIssue};
pub use error::{Error, Result};
pub use gh::GhCli;
pub use import::{run_import, ImportOptions, ImportSummary};
