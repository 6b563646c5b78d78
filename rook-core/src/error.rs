//! Error types for rook

use thiserror::Error;

/// Result type alias for rook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for rook operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parse error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Manifest error
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
