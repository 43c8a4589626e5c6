//! Warning types for non-fatal problems found while reading data files.
//!
//! The NASA files contain the occasional blank or malformed value. Rather
//! than rejecting a whole file, the readers skip (or partially keep) the
//! offending record and describe what happened with a [`Warning`].
//!
//! # Examples
//!
//! ```
//! use neodb_formats::Warning;
//!
//! let warning = Warning::SkippedRecord {
//!     record_number: 7,
//!     reason: "missing designation".to_string(),
//! };
//! assert_eq!(warning.record_number(), 7);
//! assert_eq!(warning.kind(), "skipped_record");
//! ```

/// A non-fatal warning that occurred while reading a data file.
///
/// Every variant carries the 1-based number of the data record (header rows
/// are not counted) it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The record could not be decoded at all.
    ///
    /// **Effect**: the record is skipped.
    MalformedRecord {
        /// The 1-based record number.
        record_number: usize,
        /// A description of the decoding error.
        error: String,
    },

    /// The record decoded, but a required value was missing or unusable.
    ///
    /// **Effect**: the record is skipped.
    SkippedRecord {
        /// The 1-based record number.
        record_number: usize,
        /// Why the record was skipped.
        reason: String,
    },

    /// An optional value could not be parsed and was treated as unknown.
    ///
    /// **Effect**: the record is kept with the field set to "unknown".
    InvalidField {
        /// The 1-based record number.
        record_number: usize,
        /// The source column name.
        field: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },
}

impl Warning {
    /// Returns the record number associated with this warning.
    #[must_use]
    pub fn record_number(&self) -> usize {
        match self {
            Self::MalformedRecord { record_number, .. }
            | Self::SkippedRecord { record_number, .. }
            | Self::InvalidField { record_number, .. } => *record_number,
        }
    }

    /// Returns a human-readable description of the warning.
    ///
    /// ```
    /// use neodb_formats::Warning;
    ///
    /// let warning = Warning::InvalidField {
    ///     record_number: 3,
    ///     field: "diameter",
    ///     value: "big".to_string(),
    /// };
    /// assert_eq!(
    ///     warning.description(),
    ///     "record 3: unparseable diameter 'big', treated as unknown"
    /// );
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::MalformedRecord {
                record_number,
                error,
            } => format!("record {record_number}: malformed: {error}"),
            Self::SkippedRecord {
                record_number,
                reason,
            } => format!("record {record_number}: skipped: {reason}"),
            Self::InvalidField {
                record_number,
                field,
                value,
            } => format!(
                "record {record_number}: unparseable {field} '{value}', treated as unknown"
            ),
        }
    }

    /// Returns a static string identifying the warning kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedRecord { .. } => "malformed_record",
            Self::SkippedRecord { .. } => "skipped_record",
            Self::InvalidField { .. } => "invalid_field",
        }
    }

    /// Returns `true` if the record this warning refers to was dropped.
    #[must_use]
    pub fn dropped_record(&self) -> bool {
        !matches!(self, Self::InvalidField { .. })
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::error::Error for Warning {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::malformed(
        Warning::MalformedRecord { record_number: 1, error: "bad quote".to_string() },
        "malformed_record",
        true
    )]
    #[case::skipped(
        Warning::SkippedRecord { record_number: 2, reason: "no designation".to_string() },
        "skipped_record",
        true
    )]
    #[case::invalid_field(
        Warning::InvalidField { record_number: 3, field: "diameter", value: "?".to_string() },
        "invalid_field",
        false
    )]
    fn kind_and_drop_status(
        #[case] warning: Warning,
        #[case] kind: &str,
        #[case] dropped: bool,
    ) {
        assert_eq!(warning.kind(), kind);
        assert_eq!(warning.dropped_record(), dropped);
    }

    #[test]
    fn display_matches_description() {
        let warning = Warning::SkippedRecord {
            record_number: 12,
            reason: "missing distance".to_string(),
        };
        assert_eq!(warning.to_string(), "record 12: skipped: missing distance");
    }

    #[test]
    fn record_number_is_reported_for_every_variant() {
        let warnings = [
            Warning::MalformedRecord {
                record_number: 4,
                error: String::new(),
            },
            Warning::SkippedRecord {
                record_number: 4,
                reason: String::new(),
            },
            Warning::InvalidField {
                record_number: 4,
                field: "diameter",
                value: String::new(),
            },
        ];
        assert!(warnings.iter().all(|w| w.record_number() == 4));
    }
}
