//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use chrono::NaiveDate;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use super::validators::{parse_bound, parse_date, validate_lookup, validate_outfile};
use crate::filters::Criteria;

/// Number of results printed when `--limit` is not given and no
/// `--outfile` is used
pub const DEFAULT_STDOUT_LIMIT: usize = 10;

/// Arguments for the `inspect` command
#[derive(Parser, Debug, Clone)]
#[command(group(ArgGroup::new("target").required(true).args(["pdes", "name"])))]
pub struct InspectArgs {
    /// Primary designation of the object (e.g., "433")
    #[arg(short, long, value_parser = validate_lookup)]
    pub pdes: Option<String>,

    /// IAU name of the object (e.g., "Eros"), matched exactly
    #[arg(short, long, value_parser = validate_lookup)]
    pub name: Option<String>,

    /// Also list every close approach of the object
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for the `query` command
#[derive(Parser, Debug, Clone)]
pub struct QueryArgs {
    /// Only approaches on this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Only approaches on or after this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub start_date: Option<NaiveDate>,

    /// Only approaches on or before this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub end_date: Option<NaiveDate>,

    /// Minimum approach distance in au
    #[arg(long, value_parser = parse_bound, value_name = "AU")]
    pub min_distance: Option<f64>,

    /// Maximum approach distance in au
    #[arg(long, value_parser = parse_bound, value_name = "AU")]
    pub max_distance: Option<f64>,

    /// Minimum relative velocity in km/s
    #[arg(long, value_parser = parse_bound, value_name = "KM_S")]
    pub min_velocity: Option<f64>,

    /// Maximum relative velocity in km/s
    #[arg(long, value_parser = parse_bound, value_name = "KM_S")]
    pub max_velocity: Option<f64>,

    /// Minimum object diameter in km; objects of unknown size never match
    #[arg(long, value_parser = parse_bound, value_name = "KM")]
    pub min_diameter: Option<f64>,

    /// Maximum object diameter in km; objects of unknown size never match
    #[arg(long, value_parser = parse_bound, value_name = "KM")]
    pub max_diameter: Option<f64>,

    /// Only potentially hazardous objects
    #[arg(long, conflicts_with = "not_hazardous")]
    pub hazardous: bool,

    /// Only objects that are not potentially hazardous
    #[arg(long)]
    pub not_hazardous: bool,

    /// Maximum number of results (0 for no limit)
    ///
    /// Defaults to 10 when printing and to no limit when writing a file.
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Write results to this file instead of printing them
    ///
    /// The extension chooses the format: `.csv` or `.json`.
    #[arg(short, long, value_parser = validate_outfile, value_name = "PATH")]
    pub outfile: Option<PathBuf>,
}

impl QueryArgs {
    /// The filter criteria given on the command line.
    #[must_use]
    pub fn criteria(&self) -> Criteria {
        let hazardous = match (self.hazardous, self.not_hazardous) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        Criteria {
            date: self.date,
            start_date: self.start_date,
            end_date: self.end_date,
            min_distance: self.min_distance,
            max_distance: self.max_distance,
            min_velocity: self.min_velocity,
            max_velocity: self.max_velocity,
            min_diameter: self.min_diameter,
            max_diameter: self.max_diameter,
            hazardous,
        }
    }

    /// The result limit in effect: the `--limit` value, or
    /// [`DEFAULT_STDOUT_LIMIT`] when printing without one.
    #[must_use]
    pub fn effective_limit(&self) -> Option<usize> {
        match (self.limit, &self.outfile) {
            (Some(limit), _) => Some(limit),
            (None, None) => Some(DEFAULT_STDOUT_LIMIT),
            (None, Some(_)) => None,
        }
    }
}
