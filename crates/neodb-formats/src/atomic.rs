//! Atomic export to files.
//!
//! Results are first written to a temporary sibling file (`<name>.tmp`),
//! flushed, and then renamed over the target. File renames within one
//! filesystem are atomic on POSIX systems, so an interrupted export never
//! leaves a half-written target behind. The temporary file may be left
//! over after a failure; the next successful export replaces it.
//!
//! # Examples
//!
//! ```no_run
//! use neodb_formats::{save_csv, ApproachRow};
//!
//! let rows: Vec<ApproachRow> = Vec::new();
//! let written = save_csv("results.csv", rows)?;
//! assert_eq!(written, 0);
//! # Ok::<(), neodb_formats::Error>(())
//! ```

use crate::record::ApproachRow;
use crate::{write_csv, write_json, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Atomically write rows to a CSV file. Returns the number of rows written.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created or written, or
/// if the final rename fails (e.g. a cross-filesystem move).
pub fn save_csv<P, I>(path: P, rows: I) -> Result<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = ApproachRow>,
{
    write_atomic(path.as_ref(), |writer| write_csv(writer, rows))
}

/// Atomically write rows to a JSON file. Returns the number of documents written.
///
/// # Errors
///
/// See [`save_csv`].
pub fn save_json<P, I>(path: P, rows: I) -> Result<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = ApproachRow>,
{
    write_atomic(path.as_ref(), |writer| write_json(writer, rows))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_atomic<F>(path: &Path, write: F) -> Result<usize>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<usize>,
{
    let temp = temp_path(path);

    let mut writer = BufWriter::new(File::create(&temp)?);
    let written = write(&mut writer)?;
    writer.flush()?;
    drop(writer);

    fs::rename(&temp, path)?;

    tracing::debug!(path = %path.display(), records = written, "Saved results");
    Ok(written)
}
