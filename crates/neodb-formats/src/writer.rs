//! Writing query results as CSV or JSON.
//!
//! Both writers consume [`ApproachRow`]s in the order given and never
//! reorder them. Floating-point values are written in their shortest
//! round-trip form, so reading an export back yields the same numbers.

use crate::record::{ApproachDocument, ApproachRow, CSV_HEADER};
use crate::Result;
use std::io::Write;

/// Write rows as CSV with a fixed header. Returns the number of rows written.
///
/// A header is written even when there are no rows.
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails.
///
/// # Examples
///
/// ```
/// use neodb_formats::{write_csv, ApproachRow};
///
/// let row = ApproachRow {
///     datetime_utc: "2020-06-15 04:30".to_string(),
///     distance_au: 0.05,
///     velocity_km_s: 40.0,
///     designation: "433".to_string(),
///     name: Some("Eros".to_string()),
///     diameter_km: None,
///     potentially_hazardous: true,
/// };
/// let mut out = Vec::new();
/// write_csv(&mut out, [row])?;
///
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(text.lines().nth(1), Some("2020-06-15 04:30,0.05,40.0,433,Eros,nan,true"));
/// # Ok::<(), neodb_formats::Error>(())
/// ```
pub fn write_csv<W, I>(writer: W, rows: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = ApproachRow>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    let mut written = 0;
    for row in rows {
        csv_writer.serialize(row)?;
        written += 1;
    }
    csv_writer.flush()?;

    tracing::debug!(rows = written, "Wrote CSV results");
    Ok(written)
}

/// Write rows as a pretty-printed JSON array of nested documents.
/// Returns the number of documents written.
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails.
pub fn write_json<W, I>(mut writer: W, rows: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = ApproachRow>,
{
    let documents: Vec<ApproachDocument> = rows.into_iter().map(ApproachDocument::from).collect();
    serde_json::to_writer_pretty(&mut writer, &documents)?;
    writeln!(writer)?;
    writer.flush()?;

    tracing::debug!(rows = documents.len(), "Wrote JSON results");
    Ok(documents.len())
}
