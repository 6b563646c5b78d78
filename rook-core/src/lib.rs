//! Rook Core - Core library for the rook bulk issue importer
//!
//! This crate provides the pieces of rook that know nothing about GitHub:
//! configuration, secrets, the batch manifest, CSV row parsing, and git
//! repository detection.

pub mod config;
pub mod error;
pub mod git;
pub mod manifest;
pub mod rows;
pub mod secrets;

pub use config::{Backend, Config};
pub use error::{Error, Result};
pub use git::GitRepo;
pub use manifest::{Batch, Manifest};
pub use rows::{read_batch, IssueRow, RowOutcome};
pub use secrets::Secrets;
