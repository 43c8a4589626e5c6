//! Filters over close approaches.
//!
//! A [`Filter`] tests one field of a close approach, or of the object that
//! makes it, against a single bound. Filters are independent and
//! stateless. A [`FilterSet`] is their conjunction: an approach matches a
//! set when it matches every filter in it, so the empty set matches every
//! approach.
//!
//! Bounds are inclusive. Date filters compare calendar days and ignore the
//! time of day. Diameter filters never match an object whose diameter is
//! unknown. Conflicting bounds (a minimum above a maximum) are accepted and
//! simply match nothing.
//!
//! # Examples
//!
//! ```
//! use neodb::filters::{Criteria, FilterSet};
//!
//! let criteria = Criteria {
//!     max_distance: Some(0.1),
//!     hazardous: Some(true),
//!     ..Criteria::default()
//! };
//! let filters = FilterSet::from(criteria);
//! assert_eq!(filters.to_string(), "distance <= 0.1 and hazardous == true");
//! ```

use crate::database::Approach;
use chrono::NaiveDate;
use std::fmt;

/// Something that can accept or reject a close approach.
///
/// Implemented by [`Filter`], [`FilterSet`], and any
/// `Fn(&Approach) -> bool` closure.
pub trait Predicate {
    /// Whether the approach is accepted.
    fn matches(&self, approach: &Approach<'_>) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&Approach<'_>) -> bool,
{
    fn matches(&self, approach: &Approach<'_>) -> bool {
        self(approach)
    }
}

/// A single test on a close approach or its object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    /// Approach happens on this calendar day
    Date(NaiveDate),
    /// Approach happens on or after this day
    StartDate(NaiveDate),
    /// Approach happens on or before this day
    EndDate(NaiveDate),
    /// Distance in au is at least this
    MinDistance(f64),
    /// Distance in au is at most this
    MaxDistance(f64),
    /// Velocity in km/s is at least this
    MinVelocity(f64),
    /// Velocity in km/s is at most this
    MaxVelocity(f64),
    /// Object diameter in km is known and at least this
    MinDiameter(f64),
    /// Object diameter in km is known and at most this
    MaxDiameter(f64),
    /// Object's potentially hazardous flag equals this
    Hazardous(bool),
}

impl Predicate for Filter {
    fn matches(&self, approach: &Approach<'_>) -> bool {
        let day = || approach.time.date();
        let diameter = || approach.neo().diameter;

        match *self {
            Self::Date(date) => day() == date,
            Self::StartDate(date) => day() >= date,
            Self::EndDate(date) => day() <= date,
            Self::MinDistance(min) => approach.distance >= min,
            Self::MaxDistance(max) => approach.distance <= max,
            Self::MinVelocity(min) => approach.velocity >= min,
            Self::MaxVelocity(max) => approach.velocity <= max,
            Self::MinDiameter(min) => diameter().is_some_and(|d| d >= min),
            Self::MaxDiameter(max) => diameter().is_some_and(|d| d <= max),
            Self::Hazardous(hazardous) => approach.neo().hazardous == hazardous,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "date == {date}"),
            Self::StartDate(date) => write!(f, "date >= {date}"),
            Self::EndDate(date) => write!(f, "date <= {date}"),
            Self::MinDistance(v) => write!(f, "distance >= {v}"),
            Self::MaxDistance(v) => write!(f, "distance <= {v}"),
            Self::MinVelocity(v) => write!(f, "velocity >= {v}"),
            Self::MaxVelocity(v) => write!(f, "velocity <= {v}"),
            Self::MinDiameter(v) => write!(f, "diameter >= {v}"),
            Self::MaxDiameter(v) => write!(f, "diameter <= {v}"),
            Self::Hazardous(v) => write!(f, "hazardous == {v}"),
        }
    }
}

/// The conjunction of zero or more filters, tested in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet(Vec<Filter>);

impl FilterSet {
    /// An empty set, which matches every approach.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter to the conjunction.
    pub fn push(&mut self, filter: Filter) {
        self.0.push(filter);
    }

    /// The filters in evaluation order.
    #[must_use]
    pub fn filters(&self) -> &[Filter] {
        &self.0
    }

    /// Number of filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no filters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Predicate for FilterSet {
    fn matches(&self, approach: &Approach<'_>) -> bool {
        self.0.iter().all(|filter| filter.matches(approach))
    }
}

impl FromIterator<Filter> for FilterSet {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Filter> for FilterSet {
    fn extend<I: IntoIterator<Item = Filter>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for FilterSet {
    type Item = Filter;
    type IntoIter = std::vec::IntoIter<Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for FilterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "no filters");
        }
        for (i, filter) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " and ")?;
            }
            write!(f, "{filter}")?;
        }
        Ok(())
    }
}

/// User criteria for a query. Every field is optional; an absent field
/// places no constraint on the results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    /// Exact calendar day
    pub date: Option<NaiveDate>,
    /// First calendar day, inclusive
    pub start_date: Option<NaiveDate>,
    /// Last calendar day, inclusive
    pub end_date: Option<NaiveDate>,
    /// Minimum distance in au
    pub min_distance: Option<f64>,
    /// Maximum distance in au
    pub max_distance: Option<f64>,
    /// Minimum velocity in km/s
    pub min_velocity: Option<f64>,
    /// Maximum velocity in km/s
    pub max_velocity: Option<f64>,
    /// Minimum diameter in km
    pub min_diameter: Option<f64>,
    /// Maximum diameter in km
    pub max_diameter: Option<f64>,
    /// Required potentially hazardous flag
    pub hazardous: Option<bool>,
}

impl Criteria {
    /// One filter per criterion that is set, in field order.
    #[must_use]
    pub fn into_filters(self) -> FilterSet {
        [
            self.date.map(Filter::Date),
            self.start_date.map(Filter::StartDate),
            self.end_date.map(Filter::EndDate),
            self.min_distance.map(Filter::MinDistance),
            self.max_distance.map(Filter::MaxDistance),
            self.min_velocity.map(Filter::MinVelocity),
            self.max_velocity.map(Filter::MaxVelocity),
            self.min_diameter.map(Filter::MinDiameter),
            self.max_diameter.map(Filter::MaxDiameter),
            self.hazardous.map(Filter::Hazardous),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl From<Criteria> for FilterSet {
    fn from(criteria: Criteria) -> Self {
        criteria.into_filters()
    }
}
