//! Typed records exchanged with the outside world.
//!
//! [`NeoRecord`] and [`ApproachRecord`] are what the readers produce.
//! [`ApproachRow`] is what the writers consume; it is rendered flat for CSV
//! and as a nested [`ApproachDocument`] for JSON.

use serde::Serialize;

/// One near-Earth object as read from the NEO catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct NeoRecord {
    /// Primary designation (never empty).
    pub designation: String,

    /// IAU name, `None` when the source value is blank.
    pub name: Option<String>,

    /// Diameter in kilometers, `None` when unknown.
    pub diameter: Option<f64>,

    /// Whether the object is flagged as potentially hazardous (`pha == "Y"`).
    pub hazardous: bool,
}

/// One close approach as read from the close-approach document.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproachRecord {
    /// Designation of the approaching object (foreign key into the catalogue).
    pub designation: String,

    /// Approach date-time exactly as it appears in the source.
    pub time: String,

    /// Nominal approach distance in astronomical units.
    pub distance: f64,

    /// Relative approach velocity in kilometers per second.
    pub velocity: f64,
}

/// One query result, flattened for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApproachRow {
    /// Approach date-time in the canonical textual format.
    pub datetime_utc: String,

    /// Nominal approach distance in astronomical units.
    pub distance_au: f64,

    /// Relative approach velocity in kilometers per second.
    pub velocity_km_s: f64,

    /// Primary designation of the object.
    pub designation: String,

    /// IAU name; written as an empty field when absent.
    pub name: Option<String>,

    /// Diameter in kilometers; written as `nan` when unknown.
    #[serde(serialize_with = "serialize_diameter")]
    pub diameter_km: Option<f64>,

    /// Potentially hazardous flag.
    pub potentially_hazardous: bool,
}

/// Column order of the CSV export.
pub const CSV_HEADER: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

fn serialize_diameter<S>(diameter: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match diameter {
        Some(km) => serializer.serialize_f64(*km),
        None => serializer.serialize_str("nan"),
    }
}

/// JSON shape of a query result: approach fields plus a nested object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApproachDocument {
    /// Approach date-time in the canonical textual format.
    pub datetime_utc: String,
    /// Nominal approach distance in astronomical units.
    pub distance_au: f64,
    /// Relative approach velocity in kilometers per second.
    pub velocity_km_s: f64,
    /// The approaching object.
    pub neo: NeoDocument,
}

/// JSON shape of the object attached to an [`ApproachDocument`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeoDocument {
    /// Primary designation.
    pub designation: String,
    /// IAU name, `""` when absent.
    pub name: String,
    /// Diameter in kilometers, `null` when unknown.
    pub diameter_km: Option<f64>,
    /// Potentially hazardous flag.
    pub potentially_hazardous: bool,
}

impl From<ApproachRow> for ApproachDocument {
    fn from(row: ApproachRow) -> Self {
        Self {
            datetime_utc: row.datetime_utc,
            distance_au: row.distance_au,
            velocity_km_s: row.velocity_km_s,
            neo: NeoDocument {
                designation: row.designation,
                name: row.name.unwrap_or_default(),
                diameter_km: row.diameter_km,
                potentially_hazardous: row.potentially_hazardous,
            },
        }
    }
}
