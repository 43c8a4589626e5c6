//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

use crate::export::ExportFormat;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Accepted date format for `--date`, `--start-date` and `--end-date`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date in `YYYY-MM-DD` form.
///
/// Examples: `2020-01-01`, `1999-12-31`
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| format!("Invalid date '{s}'. Expected format: YYYY-MM-DD (e.g., 2020-01-01)"))
}

/// Parse a distance, velocity or diameter bound.
///
/// Bounds must be finite and not negative.
pub fn parse_bound(s: &str) -> Result<f64, String> {
    let s = s.trim();
    let value: f64 = s
        .parse()
        .map_err(|_| format!("Invalid number '{s}'"))?;

    if !value.is_finite() {
        return Err(format!("Bound must be a finite number, got '{s}'"));
    }
    if value < 0.0 {
        return Err(format!("Bound cannot be negative, got {value}"));
    }
    Ok(value)
}

/// Validate an export path: its extension must be `.csv` or `.json`.
pub fn validate_outfile(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    ExportFormat::from_path(&path).map_err(|e| e.to_string())?;
    Ok(path)
}

/// Validate a designation or name used for lookup.
pub fn validate_lookup(s: &str) -> Result<String, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Lookup value cannot be empty".to_string());
    }
    Ok(s.to_string())
}
