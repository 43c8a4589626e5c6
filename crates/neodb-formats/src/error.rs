//! Error types for neodb-formats operations.

use std::io;
use thiserror::Error;

/// The error type for neodb-formats operations.
///
/// Only problems that make a whole file unusable are errors. Individual bad
/// rows are reported as [`Warning`](crate::Warning)s instead.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading or writing.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV parsing or serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The file is well-formed but lacks something every record needs.
    #[error("Invalid data file: {0}")]
    InvalidFormat(String),
}

/// A specialized Result type for neodb-formats operations.
pub type Result<T> = std::result::Result<T, Error>;
