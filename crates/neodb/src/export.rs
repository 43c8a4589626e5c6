//! Exporting query results to CSV or JSON files.

use crate::database::Approach;
use crate::error::{Error, Result};
use neodb_formats::{save_csv, save_json, ApproachRow};
use std::path::Path;

impl From<Approach<'_>> for ApproachRow {
    fn from(approach: Approach<'_>) -> Self {
        let neo = approach.neo();
        Self {
            datetime_utc: approach.time.to_string(),
            distance_au: approach.distance,
            velocity_km_s: approach.velocity,
            designation: neo.designation.clone(),
            name: neo.name.clone(),
            diameter_km: neo.diameter,
            potentially_hazardous: neo.hazardous,
        }
    }
}

/// File format of an export, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values with a header row (`.csv`)
    Csv,
    /// A JSON array of nested documents (`.json`)
    Json,
}

impl ExportFormat {
    /// Pick the format from the path's extension, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedExport`] for any extension other than
    /// `.csv` or `.json`, or for a path without one.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(Error::UnsupportedExport(path.to_path_buf())),
        }
    }
}

/// Write results to `path` in the format its extension names, replacing
/// the file atomically. Returns the number of results written.
///
/// Results are consumed in order, so a lazy query is only evaluated as far
/// as the export reads it.
///
/// # Errors
///
/// Returns an error for an unsupported extension or if the file cannot be
/// written.
pub fn export<'a, I>(results: I, path: &Path) -> Result<usize>
where
    I: IntoIterator<Item = Approach<'a>>,
{
    let format = ExportFormat::from_path(path)?;
    let rows = results.into_iter().map(ApproachRow::from);

    let written = match format {
        ExportFormat::Csv => save_csv(path, rows)?,
        ExportFormat::Json => save_json(path, rows)?,
    };

    tracing::info!(path = %path.display(), results = written, "Exported results");
    Ok(written)
}
