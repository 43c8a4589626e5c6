//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use anyhow::Result;

use super::args::{InspectArgs, QueryArgs};
use crate::app::App;
use crate::output::{self, OutputMode};

/// Execute the inspect command
///
/// A lookup that finds nothing is a normal outcome: it prints a message
/// and succeeds.
pub fn execute_inspect(app: &App, args: &InspectArgs, output_mode: OutputMode) -> Result<()> {
    let db = app.database();

    let found = match (&args.pdes, &args.name) {
        (Some(pdes), _) => db.get_neo_by_designation(pdes),
        (None, Some(name)) => db.get_neo_by_name(name),
        (None, None) => None,
    };

    match found {
        Some(neo) => output::print_neo(db, neo, args.verbose, output_mode)?,
        None => {
            tracing::debug!(pdes = ?args.pdes, name = ?args.name, "No matching object");
            output::print_not_found(output_mode)?;
        }
    }

    Ok(())
}

/// Execute the query command
pub fn execute_query(app: &App, args: &QueryArgs, output_mode: OutputMode) -> Result<()> {
    use crate::export::export;
    use crate::query::Query;

    let query = Query::new(args.criteria()).with_limit(args.effective_limit());
    let results = query.run(app.database());

    match &args.outfile {
        Some(path) => {
            let written = export(results, path)?;
            match output_mode {
                OutputMode::Json => output::print_json(&serde_json::json!({
                    "outfile": path.display().to_string(),
                    "written": written,
                }))?,
                OutputMode::Text => {
                    println!("Wrote {written} close approaches to {}", path.display());
                }
            }
        }
        None => {
            output::print_approaches(results, output_mode)?;
        }
    }

    Ok(())
}
