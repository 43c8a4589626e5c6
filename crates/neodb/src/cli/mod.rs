//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for neodb using clap's derive API.
//!
//! # Commands
//!
//! - `inspect`: Show one near-Earth object, found by designation or name
//! - `query`: List close approaches matching filter criteria
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format
//! - `--neofile`, `--cadfile`: Data files, overriding the configuration
//! - `--config`: Configuration file (default: `neodb.yaml` if present)
//!
//! # Example
//!
//! ```bash
//! neodb inspect --name Eros --verbose
//! neodb query --start-date 2020-01-01 --end-date 2020-12-31 --max-distance 0.1
//! neodb query --hazardous --min-diameter 2.5 --limit 0 --outfile hazards.csv
//! ```

mod args;
mod execute;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{InspectArgs, QueryArgs, DEFAULT_STDOUT_LIMIT};
pub use validators::{parse_bound, parse_date, validate_lookup, validate_outfile};

/// neodb - Explore near-Earth objects and their close approaches
///
/// Loads the NASA NEO catalogue and close-approach data, then answers
/// lookups and filtered queries.
#[derive(Parser, Debug)]
#[command(name = "neodb")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the NEO catalogue (CSV)
    #[arg(long, global = true, value_name = "PATH")]
    pub neofile: Option<PathBuf>,

    /// Path to the close-approach data (JSON)
    #[arg(long, global = true, value_name = "PATH")]
    pub cadfile: Option<PathBuf>,

    /// Path to a configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show a near-Earth object
    ///
    /// Looks the object up by primary designation or by exact IAU name.
    /// With `--verbose`, also lists its close approaches.
    Inspect(InspectArgs),

    /// Query close approaches
    ///
    /// Lists close approaches matching every given criterion, in dataset
    /// order. Results are printed, or written to a CSV or JSON file with
    /// `--outfile`.
    Query(QueryArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    ///
    /// # Errors
    ///
    /// Returns clap's error for invalid arguments.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or data cannot be loaded, or if
    /// the command fails.
    pub fn execute(&self) -> Result<()> {
        use crate::app::App;
        use crate::config::NeodbConfig;
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let config = match &self.config {
            Some(path) => NeodbConfig::load(path)?,
            None => NeodbConfig::discover(&std::env::current_dir()?)?,
        }
        .with_overrides(self.neofile.clone(), self.cadfile.clone());

        let app = App::from_config(&config)?;

        match &self.command {
            Commands::Inspect(args) => execute::execute_inspect(&app, args, output_mode),
            Commands::Query(args) => execute::execute_query(&app, args, output_mode),
        }
    }
}
