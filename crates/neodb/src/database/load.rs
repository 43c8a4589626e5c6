//! Loading a database from the NEO and close-approach data files.

use super::{Database, LinkWarning};
use crate::domain::{NearEarthObject, NewCloseApproach};
use crate::error::{Error, Result};
use neodb_formats::{load_approaches, load_neos, Warning};
use std::fmt;
use std::path::Path;

/// A recoverable problem found while loading a database.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadWarning {
    /// A row of the NEO file was skipped or partially understood.
    Neo(Warning),

    /// A row of the close-approach file was skipped.
    Approach(Warning),

    /// A close approach had a time in no accepted format and was skipped.
    InvalidApproachTime {
        /// Designation of the approaching object
        designation: String,
        /// The time text as found in the file
        value: String,
    },

    /// A problem found while linking objects and approaches.
    Link(LinkWarning),
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neo(warning) => write!(f, "NEO file: {warning}"),
            Self::Approach(warning) => write!(f, "close-approach file: {warning}"),
            Self::InvalidApproachTime { designation, value } => write!(
                f,
                "close-approach file: skipped approach of '{designation}' with invalid time '{value}'"
            ),
            Self::Link(warning) => write!(f, "{warning}"),
        }
    }
}

impl Database {
    /// Load and link a database from a NEO CSV file and a close-approach
    /// JSON file.
    ///
    /// Rows that cannot be used are skipped and reported in the returned
    /// warnings, in file order (NEO file, then close-approach file, then
    /// linking).
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read or is not a document
    /// of the expected shape.
    pub fn load(
        neo_path: impl AsRef<Path>,
        cad_path: impl AsRef<Path>,
    ) -> Result<(Self, Vec<LoadWarning>)> {
        let neo_path = neo_path.as_ref();
        let cad_path = cad_path.as_ref();

        let (neo_records, neo_warnings) = load_neos(neo_path)?;
        let (approach_records, approach_warnings) = load_approaches(cad_path)?;

        let mut warnings: Vec<LoadWarning> = neo_warnings
            .into_iter()
            .map(LoadWarning::Neo)
            .chain(approach_warnings.into_iter().map(LoadWarning::Approach))
            .collect();

        let mut approaches = Vec::with_capacity(approach_records.len());
        for record in approach_records {
            let designation = record.designation.clone();
            match NewCloseApproach::try_from(record) {
                Ok(approach) => approaches.push(approach),
                Err(Error::InvalidTime(value)) => {
                    warnings.push(LoadWarning::InvalidApproachTime { designation, value });
                }
                Err(e) => return Err(e),
            }
        }

        for warning in &warnings {
            tracing::warn!("{warning}");
        }

        let db = Self::new(neo_records.into_iter().map(NearEarthObject::from), approaches);
        warnings.extend(db.warnings().iter().cloned().map(LoadWarning::Link));

        tracing::info!(
            neo_file = %neo_path.display(),
            cad_file = %cad_path.display(),
            neos = db.neo_count(),
            approaches = db.approach_count(),
            warnings = warnings.len(),
            "Loaded database"
        );

        Ok((db, warnings))
    }
}
