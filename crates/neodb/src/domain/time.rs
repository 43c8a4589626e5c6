//! Close-approach timestamps.

use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Canonical textual format of an approach time, e.g. `2020-06-15 04:30`.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format used by the NASA close-approach data, e.g. `2020-Jun-15 04:30`.
pub const SOURCE_TIME_FORMAT: &str = "%Y-%b-%d %H:%M";

/// The UTC date and time of a close approach, at minute precision.
///
/// Parsing accepts both [`TIME_FORMAT`] and [`SOURCE_TIME_FORMAT`];
/// `Display` and serde always use [`TIME_FORMAT`], so any canonical string
/// survives a parse/format round trip byte for byte.
///
/// ```
/// use neodb::domain::ApproachTime;
///
/// let time: ApproachTime = "2020-Jun-15 04:30".parse()?;
/// assert_eq!(time.to_string(), "2020-06-15 04:30");
///
/// let again: ApproachTime = time.to_string().parse()?;
/// assert_eq!(again, time);
/// # Ok::<(), neodb::error::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApproachTime(NaiveDateTime);

impl ApproachTime {
    /// Create an approach time, dropping anything finer than a minute.
    #[must_use]
    pub fn new(datetime: NaiveDateTime) -> Self {
        let minute = datetime
            .with_second(0)
            .and_then(|dt| dt.with_nanosecond(0))
            .unwrap_or(datetime);
        Self(minute)
    }

    /// Calendar day of the approach; date filters compare on this.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// The full date-time value.
    #[must_use]
    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for ApproachTime {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::new(datetime)
    }
}

impl FromStr for ApproachTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        NaiveDateTime::parse_from_str(s, TIME_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(s, SOURCE_TIME_FORMAT))
            .map(Self::new)
            .map_err(|_| Error::InvalidTime(s.to_string()))
    }
}

impl fmt::Display for ApproachTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

impl Serialize for ApproachTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ApproachTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::canonical("2020-06-15 04:30")]
    #[case::midnight("1900-01-01 00:00")]
    #[case::end_of_day("2199-12-31 23:59")]
    fn canonical_strings_round_trip(#[case] text: &str) {
        let time: ApproachTime = text.parse().unwrap();
        assert_eq!(time.to_string(), text);
    }

    #[rstest]
    #[case::jan("1900-Jan-01 00:11", "1900-01-01 00:11")]
    #[case::jun("2020-Jun-15 04:30", "2020-06-15 04:30")]
    #[case::dec("2020-Dec-31 23:59", "2020-12-31 23:59")]
    fn source_format_is_normalized(#[case] source: &str, #[case] canonical: &str) {
        let time: ApproachTime = source.parse().unwrap();
        assert_eq!(time.to_string(), canonical);
    }

    #[rstest]
    #[case::empty("")]
    #[case::date_only("2020-06-15")]
    #[case::bad_month("2020-Foo-15 04:30")]
    #[case::out_of_range("2020-02-30 10:00")]
    fn invalid_times_are_rejected(#[case] text: &str) {
        let err = text.parse::<ApproachTime>().unwrap_err();
        assert!(matches!(err, Error::InvalidTime(_)));
    }

    #[test]
    fn date_drops_time_of_day() {
        let time: ApproachTime = "2020-06-15 23:59".parse().unwrap();
        assert_eq!(time.date(), NaiveDate::from_ymd_opt(2020, 6, 15).unwrap());
    }

    #[test]
    fn new_truncates_to_minutes() {
        let precise = NaiveDate::from_ymd_opt(2020, 6, 15)
            .unwrap()
            .and_hms_milli_opt(4, 30, 59, 999)
            .unwrap();
        assert_eq!(ApproachTime::new(precise).to_string(), "2020-06-15 04:30");
    }

    #[test]
    fn serde_uses_canonical_format() {
        let time: ApproachTime = "2020-Jun-15 04:30".parse().unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "\"2020-06-15 04:30\"");

        let back: ApproachTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, time);
    }
}
