//! Output formatting for CLI commands.
//!
//! Results are printed either as human-readable text or as JSON for
//! programmatic use. Every printer has a writer-generic form so it can be
//! tested without capturing stdout.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers

pub mod color;

use crate::database::{Approach, Database};
use crate::domain::{CloseApproach, NearEarthObject};
use color::{colorize_name, dimmed};
use neodb_formats::{ApproachDocument, ApproachRow};
use serde::Serialize;
use std::env;
use std::io::{self, Write};

/// Printed by `inspect` when no object matches.
pub const NOT_FOUND_MESSAGE: &str = "No matching NEOs exist in the database.";

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    #[must_use]
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `NEODB_COLOR`: Set to "0" or "false" to disable colors (default: true)
    #[must_use]
    pub fn from_env() -> Self {
        // https://no-color.org/
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("NEODB_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self { use_colors }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

/// JSON shape of an inspected object.
#[derive(Serialize)]
struct NeoReport<'a> {
    #[serde(flatten)]
    neo: &'a NearEarthObject,

    #[serde(skip_serializing_if = "Option::is_none")]
    approaches: Option<Vec<&'a CloseApproach>>,
}

// ============================================================================
// Writer-generic printers
// ============================================================================

/// Format one approach as a sentence, coloring the object's name.
///
/// Without colors this is exactly the approach's `Display` output.
#[must_use]
pub fn format_approach(approach: &Approach<'_>, config: &OutputConfig) -> String {
    let neo = approach.neo();
    let name = colorize_name(&neo.full_name(), neo.hazardous, config);
    approach.summary(&name).to_string()
}

/// Write approaches as text, one per line. Returns the number written.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_approaches_text<'a, W, I>(
    w: &mut W,
    results: I,
    config: &OutputConfig,
) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Approach<'a>>,
{
    let mut count = 0;
    for approach in results {
        writeln!(w, "{}", format_approach(&approach, config))?;
        count += 1;
    }
    if count == 0 {
        writeln!(w, "{}", dimmed("No close approaches match the given filters.", config))?;
    }
    Ok(count)
}

/// Write approaches as a JSON array in the export document shape.
/// Returns the number written.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_approaches_json<'a, W, I>(w: &mut W, results: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Approach<'a>>,
{
    let documents: Vec<ApproachDocument> = results
        .into_iter()
        .map(|a| ApproachDocument::from(ApproachRow::from(a)))
        .collect();
    write_json(w, &documents)?;
    Ok(documents.len())
}

/// Write an object as text; with `verbose`, also list its approaches.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_neo_text<W: Write>(
    w: &mut W,
    db: &Database,
    neo: &NearEarthObject,
    verbose: bool,
    config: &OutputConfig,
) -> io::Result<()> {
    let name = colorize_name(&neo.full_name(), neo.hazardous, config);
    writeln!(w, "{}", neo.summary(&name))?;

    if verbose {
        for approach in db.approaches_of(neo) {
            writeln!(w, "- {}", format_approach(&approach, config))?;
        }
    }
    Ok(())
}

/// Write an object as JSON; with `verbose`, include its approaches.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_neo_json<W: Write>(
    w: &mut W,
    db: &Database,
    neo: &NearEarthObject,
    verbose: bool,
) -> io::Result<()> {
    let report = NeoReport {
        neo,
        approaches: verbose.then(|| db.approaches_of(neo).map(|a| a.approach()).collect()),
    };
    write_json(w, &report)
}

/// Write the "not found" result of an object lookup.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_not_found<W: Write>(w: &mut W, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Text => writeln!(w, "{NOT_FOUND_MESSAGE}"),
        OutputMode::Json => writeln!(w, "null"),
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, value).map_err(io::Error::other)?;
    writeln!(w)
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Print approaches to stdout in the specified format. Returns the number
/// printed.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_approaches<'a, I>(results: I, mode: OutputMode) -> io::Result<usize>
where
    I: IntoIterator<Item = Approach<'a>>,
{
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match mode {
        OutputMode::Text => write_approaches_text(&mut handle, results, &OutputConfig::from_env()),
        OutputMode::Json => write_approaches_json(&mut handle, results),
    }
}

/// Print an object to stdout in the specified format.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_neo(
    db: &Database,
    neo: &NearEarthObject,
    verbose: bool,
    mode: OutputMode,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match mode {
        OutputMode::Text => {
            write_neo_text(&mut handle, db, neo, verbose, &OutputConfig::from_env())
        }
        OutputMode::Json => write_neo_json(&mut handle, db, neo, verbose),
    }
}

/// Print the "not found" result of an object lookup to stdout.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_not_found(mode: OutputMode) -> io::Result<()> {
    write_not_found(&mut io::stdout().lock(), mode)
}

/// Print any serializable value as pretty JSON to stdout.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    write_json(&mut io::stdout().lock(), value)
}
