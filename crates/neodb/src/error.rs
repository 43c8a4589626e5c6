//! Error types for neodb operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for neodb operations.
///
/// Missing or malformed data inside otherwise readable files is reported
/// as a warning, not as an error; see
/// [`LoadWarning`](crate::database::LoadWarning).
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A data file could not be read or an export could not be written.
    #[error("Data file error: {0}")]
    Format(#[from] neodb_formats::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An approach time did not match any accepted format.
    #[error("Invalid approach time '{0}' (expected YYYY-MM-DD hh:mm)")]
    InvalidTime(String),

    /// Export path with an extension other than `.csv` or `.json`.
    #[error("Cannot export to '{}': the file extension must be .csv or .json", .0.display())]
    UnsupportedExport(PathBuf),
}

/// A specialized Result type for neodb operations.
pub type Result<T> = std::result::Result<T, Error>;
