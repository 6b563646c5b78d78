//! Error types for issue creation

use thiserror::Error;

/// Result type for issue creation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while creating issues
#[derive(Error, Debug)]
pub enum Error {
    /// GitHub API error
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// Authentication error
    #[error("GitHub authentication error: {0}")]
    Auth(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the core layer (manifest, rows, config)
    #[error(transparent)]
    Core(#[from] rook_core::Error),

    /// External tool missing from the execution environment
    #[error("'{0}' executable not found. Is the GitHub CLI installed?")]
    ToolNotFound(String),

    /// External tool exited unsuccessfully
    #[error("{program} exited with {status}")]
    CommandFailed {
        /// Program that was invoked
        program: String,
        /// Exit status it returned
        status: std::process::ExitStatus,
    },

    /// Milestone title not found in the target repository
    #[error("Milestone '{title}' not found in {repo}")]
    MilestoneNotFound {
        /// Milestone title that was requested
        title: String,
        /// Repository that was searched
        repo: String,
    },

    /// Repository reference could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}
