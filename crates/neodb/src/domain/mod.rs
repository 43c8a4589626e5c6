//! Domain types for near-Earth objects and their close approaches.
//!
//! A [`NearEarthObject`] owns the ids of its close approaches and a
//! [`CloseApproach`] holds the id of its object. Both sides of the link are
//! filled in by [`Database::new`](crate::database::Database::new); nothing
//! outside the database can build a linked `CloseApproach`, so an approach
//! without an object cannot exist.

mod time;

pub use time::{ApproachTime, SOURCE_TIME_FORMAT, TIME_FORMAT};

use crate::error::{Error, Result};
use neodb_formats::{ApproachRecord, NeoRecord};
use serde::Serialize;
use std::fmt;

/// Position of a [`NearEarthObject`] in its database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NeoId(pub(crate) usize);

impl NeoId {
    /// Index into [`Database::neos`](crate::database::Database::neos).
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Position of a [`CloseApproach`] in its database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApproachId(pub(crate) usize);

impl ApproachId {
    /// Index into the database's approach collection, in dataset order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A near-Earth object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearEarthObject {
    /// Primary designation, unique within a database
    pub designation: String,

    /// IAU name (optional)
    pub name: Option<String>,

    /// Diameter in kilometers, `None` when unknown
    #[serde(rename = "diameter_km")]
    pub diameter: Option<f64>,

    /// Potentially hazardous flag
    #[serde(rename = "potentially_hazardous")]
    pub hazardous: bool,

    /// Close approaches of this object, in dataset order
    #[serde(skip)]
    approaches: Vec<ApproachId>,
}

impl NearEarthObject {
    /// Create an object with no approaches yet.
    ///
    /// A blank name becomes `None`; a non-finite diameter becomes `None`.
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: Option<f64>,
        hazardous: bool,
    ) -> Self {
        Self {
            designation: designation.into(),
            name: name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            diameter: diameter.filter(|d| d.is_finite()),
            hazardous,
            approaches: Vec::new(),
        }
    }

    /// `"<designation> (<name>)"`, or just the designation when unnamed.
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }

    /// The `Display` sentence, with `name` in place of the full name.
    #[must_use]
    pub fn summary<'a>(&'a self, name: &'a str) -> NeoSummary<'a> {
        NeoSummary { neo: self, name }
    }

    /// Ids of this object's close approaches, in dataset order.
    #[must_use]
    pub fn approach_ids(&self) -> &[ApproachId] {
        &self.approaches
    }

    pub(crate) fn attach(&mut self, approach: ApproachId) {
        self.approaches.push(approach);
    }

    pub(crate) fn clear_approaches(&mut self) {
        self.approaches.clear();
    }
}

impl From<NeoRecord> for NearEarthObject {
    fn from(record: NeoRecord) -> Self {
        Self::new(
            record.designation,
            record.name,
            record.diameter,
            record.hazardous,
        )
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary(&self.full_name()))
    }
}

/// One-line summary of an object with the name rendered as given.
///
/// Returned by [`NearEarthObject::summary`].
#[derive(Debug, Clone, Copy)]
pub struct NeoSummary<'a> {
    neo: &'a NearEarthObject,
    name: &'a str,
}

impl fmt::Display for NeoSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NEO {} has ", self.name)?;
        match self.neo.diameter {
            Some(km) => write!(f, "a diameter of {km:.3} km")?,
            None => write!(f, "an unknown diameter")?,
        }
        if self.neo.hazardous {
            write!(f, " and is potentially hazardous.")
        } else {
            write!(f, " and is not potentially hazardous.")
        }
    }
}

/// A close approach that has not been linked to its object yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCloseApproach {
    /// Designation of the approaching object
    pub designation: String,

    /// When the approach happens
    pub time: ApproachTime,

    /// Nominal approach distance in astronomical units
    pub distance: f64,

    /// Relative approach velocity in kilometers per second
    pub velocity: f64,
}

impl TryFrom<ApproachRecord> for NewCloseApproach {
    type Error = Error;

    fn try_from(record: ApproachRecord) -> Result<Self> {
        Ok(Self {
            time: record.time.parse()?,
            designation: record.designation,
            distance: record.distance,
            velocity: record.velocity,
        })
    }
}

/// A close approach linked to its [`NearEarthObject`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloseApproach {
    /// Designation of the approaching object
    #[serde(skip)]
    pub designation: String,

    /// When the approach happens
    #[serde(rename = "datetime_utc")]
    pub time: ApproachTime,

    /// Nominal approach distance in astronomical units
    #[serde(rename = "distance_au")]
    pub distance: f64,

    /// Relative approach velocity in kilometers per second
    #[serde(rename = "velocity_km_s")]
    pub velocity: f64,

    #[serde(skip)]
    neo: NeoId,
}

impl CloseApproach {
    pub(crate) fn link(approach: NewCloseApproach, neo: NeoId) -> Self {
        Self {
            designation: approach.designation,
            time: approach.time,
            distance: approach.distance,
            velocity: approach.velocity,
            neo,
        }
    }

    /// Id of the object making this approach.
    #[must_use]
    pub fn neo_id(&self) -> NeoId {
        self.neo
    }
}
