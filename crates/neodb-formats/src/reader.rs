//! Reading the NEO catalogue and the close-approach document.
//!
//! Both readers are resilient: a bad row produces a [`Warning`] and reading
//! continues. Only problems that make the whole file unusable (I/O failure,
//! a document that is not JSON, a missing required column) are errors.
//!
//! # Examples
//!
//! ```
//! use neodb_formats::read_neos;
//!
//! let csv = "pdes,name,diameter,pha\n433,Eros,16.84,N\n2020 AB,,,Y\n";
//! let (neos, warnings) = read_neos(csv.as_bytes())?;
//!
//! assert!(warnings.is_empty());
//! assert_eq!(neos[0].name.as_deref(), Some("Eros"));
//! assert_eq!(neos[1].diameter, None);
//! assert!(neos[1].hazardous);
//! # Ok::<(), neodb_formats::Error>(())
//! ```

use crate::record::{ApproachRecord, NeoRecord};
use crate::{Error, Result, Warning};
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Catalogue columns the reader requires: primary designation and hazard flag.
pub const NEO_REQUIRED_COLUMNS: [&str; 2] = ["pdes", "pha"];

/// Close-approach fields the reader requires, in record order.
pub const APPROACH_FIELDS: [&str; 4] = ["des", "cd", "dist", "v_rel"];

/// Source encoding of a potentially hazardous object.
const HAZARDOUS_MARKER: &str = "Y";

/// The subset of catalogue columns we use. Every other column is ignored.
#[derive(Debug, Deserialize)]
struct NeoRow {
    #[serde(default)]
    pdes: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    diameter: String,
    #[serde(default)]
    pha: String,
}

/// The close-approach document: a field list plus rows of positional values.
#[derive(Debug, Deserialize)]
struct CadDocument {
    fields: Vec<String>,
    data: Vec<Vec<Value>>,
}

/// Positions of the required fields within each close-approach row.
struct ApproachColumns {
    designation: usize,
    time: usize,
    distance: usize,
    velocity: usize,
}

impl ApproachColumns {
    fn from_fields(fields: &[String]) -> Result<Self> {
        let position = |name: &str| {
            fields
                .iter()
                .position(|field| field == name)
                .ok_or_else(|| Error::InvalidFormat(format!("missing field '{name}'")))
        };
        let [des, cd, dist, v_rel] = APPROACH_FIELDS;
        Ok(Self {
            designation: position(des)?,
            time: position(cd)?,
            distance: position(dist)?,
            velocity: position(v_rel)?,
        })
    }
}

/// Read near-Earth objects from CSV data with a header row.
///
/// # Errors
///
/// Returns `Error::InvalidFormat` if the header lacks a `pdes` or `pha`
/// column, and `Error::Csv` if the underlying reader fails.
pub fn read_neos<R: Read>(reader: R) -> Result<(Vec<NeoRecord>, Vec<Warning>)> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?;
    if let Some(missing) = NEO_REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        return Err(Error::InvalidFormat(format!("missing column '{missing}'")));
    }

    let mut neos = Vec::new();
    let mut warnings = Vec::new();

    for (index, row) in csv_reader.deserialize::<NeoRow>().enumerate() {
        let record_number = index + 1;
        let row = match row {
            Ok(row) => row,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                warnings.push(Warning::MalformedRecord {
                    record_number,
                    error: e.to_string(),
                });
                continue;
            }
        };

        if let Some(neo) = neo_from_row(row, record_number, &mut warnings) {
            neos.push(neo);
        }
    }

    tracing::debug!(
        records = neos.len(),
        warnings = warnings.len(),
        "Read NEO catalogue"
    );
    Ok((neos, warnings))
}

fn neo_from_row(
    row: NeoRow,
    record_number: usize,
    warnings: &mut Vec<Warning>,
) -> Option<NeoRecord> {
    let designation = row.pdes.trim();
    if designation.is_empty() {
        warnings.push(Warning::SkippedRecord {
            record_number,
            reason: "missing designation".to_string(),
        });
        return None;
    }

    let name = Some(row.name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string);

    let raw_diameter = row.diameter.trim();
    let diameter = if raw_diameter.is_empty() || raw_diameter.eq_ignore_ascii_case("nan") {
        None
    } else {
        let parsed = parse_finite(raw_diameter);
        if parsed.is_none() {
            warnings.push(Warning::InvalidField {
                record_number,
                field: "diameter",
                value: raw_diameter.to_string(),
            });
        }
        parsed
    };

    Some(NeoRecord {
        designation: designation.to_string(),
        name,
        diameter,
        hazardous: row.pha.trim() == HAZARDOUS_MARKER,
    })
}

/// Read close approaches from a JSON document of the form
/// `{"fields": [...], "data": [[...], ...]}`.
///
/// # Errors
///
/// Returns `Error::Json` if the input is not such a document, and
/// `Error::InvalidFormat` if any of `des`, `cd`, `dist`, `v_rel` is missing
/// from `fields`.
pub fn read_approaches<R: Read>(reader: R) -> Result<(Vec<ApproachRecord>, Vec<Warning>)> {
    let document: CadDocument = serde_json::from_reader(reader)?;
    let columns = ApproachColumns::from_fields(&document.fields)?;

    let mut approaches = Vec::with_capacity(document.data.len());
    let mut warnings = Vec::new();

    for (index, row) in document.data.iter().enumerate() {
        let record_number = index + 1;
        match approach_from_row(row, &columns) {
            Ok(approach) => approaches.push(approach),
            Err(reason) => warnings.push(Warning::SkippedRecord {
                record_number,
                reason,
            }),
        }
    }

    tracing::debug!(
        records = approaches.len(),
        warnings = warnings.len(),
        "Read close-approach data"
    );
    Ok((approaches, warnings))
}

fn approach_from_row(
    row: &[Value],
    columns: &ApproachColumns,
) -> std::result::Result<ApproachRecord, String> {
    let designation = cell(row, columns.designation).ok_or("missing designation")?;
    let time = cell(row, columns.time).ok_or("missing approach time")?;
    let distance = cell(row, columns.distance).ok_or("missing distance")?;
    let velocity = cell(row, columns.velocity).ok_or("missing velocity")?;

    Ok(ApproachRecord {
        designation,
        time,
        distance: parse_finite(&distance).ok_or_else(|| format!("invalid distance '{distance}'"))?,
        velocity: parse_finite(&velocity).ok_or_else(|| format!("invalid velocity '{velocity}'"))?,
    })
}

/// Non-empty textual value of a row cell. Numbers are accepted as well.
fn cell(row: &[Value], index: usize) -> Option<String> {
    match row.get(index)? {
        Value::String(s) => Some(s.trim()).filter(|s| !s.is_empty()).map(str::to_string),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Read the NEO catalogue from a CSV file.
///
/// # Errors
///
/// See [`read_neos`]; additionally fails if the file cannot be opened.
pub fn load_neos<P: AsRef<Path>>(path: P) -> Result<(Vec<NeoRecord>, Vec<Warning>)> {
    let file = File::open(path.as_ref())?;
    read_neos(file)
}

/// Read close-approach data from a JSON file.
///
/// # Errors
///
/// See [`read_approaches`]; additionally fails if the file cannot be opened.
pub fn load_approaches<P: AsRef<Path>>(
    path: P,
) -> Result<(Vec<ApproachRecord>, Vec<Warning>)> {
    let file = File::open(path.as_ref())?;
    read_approaches(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const CAD_FIELDS: &str =
        r#""fields":["des","orbit_id","jd","cd","dist","dist_min","dist_max","v_rel","v_inf","t_sigma_f","h"]"#;

    fn cad(rows: &str) -> String {
        format!(r#"{{"signature":{{"version":"1.1"}},"count":"2",{CAD_FIELDS},"data":[{rows}]}}"#)
    }

    #[test]
    fn reads_neo_columns_and_ignores_the_rest() {
        let csv = "id,spkid,full_name,pdes,name,prefix,neo,pha,diameter\n\
                   a0000433,2000433,\"   433 Eros (A898 PA)\",433,Eros,,Y,N,16.84\n";
        let (neos, warnings) = read_neos(csv.as_bytes()).unwrap();

        assert!(warnings.is_empty());
        assert_eq!(
            neos,
            vec![NeoRecord {
                designation: "433".to_string(),
                name: Some("Eros".to_string()),
                diameter: Some(16.84),
                hazardous: false,
            }]
        );
    }

    #[rstest]
    #[case::yes("Y", true)]
    #[case::no("N", false)]
    #[case::blank("", false)]
    #[case::lowercase("y", false)]
    fn hazardous_flag_decoding(#[case] pha: &str, #[case] expected: bool) {
        let csv = format!("pdes,name,diameter,pha\n1,,,{pha}\n");
        let (neos, _) = read_neos(csv.as_bytes()).unwrap();
        assert_eq!(neos[0].hazardous, expected);
    }

    #[rstest]
    #[case::blank("", None)]
    #[case::nan("nan", None)]
    #[case::value("0.25", Some(0.25))]
    #[case::padded(" 3.0 ", Some(3.0))]
    fn diameter_normalization(#[case] raw: &str, #[case] expected: Option<f64>) {
        let csv = format!("pdes,name,diameter,pha\n1,,\"{raw}\",N\n");
        let (neos, warnings) = read_neos(csv.as_bytes()).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(neos[0].diameter, expected);
    }

    #[test]
    fn unparseable_diameter_keeps_record_as_unknown() {
        let csv = "pdes,name,diameter,pha\n1,,huge,N\n";
        let (neos, warnings) = read_neos(csv.as_bytes()).unwrap();

        assert_eq!(neos.len(), 1);
        assert_eq!(neos[0].diameter, None);
        assert_eq!(
            warnings,
            vec![Warning::InvalidField {
                record_number: 1,
                field: "diameter",
                value: "huge".to_string(),
            }]
        );
    }

    #[test]
    fn blank_name_becomes_none() {
        let csv = "pdes,name,diameter,pha\n2020 AB,  ,,N\n";
        let (neos, _) = read_neos(csv.as_bytes()).unwrap();
        assert_eq!(neos[0].name, None);
    }

    #[test]
    fn row_without_designation_is_skipped() {
        let csv = "pdes,name,diameter,pha\n,Ghost,,N\n433,Eros,16.84,N\n";
        let (neos, warnings) = read_neos(csv.as_bytes()).unwrap();

        assert_eq!(neos.len(), 1);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind(), "skipped_record");
        assert_eq!(warnings[0].record_number(), 1);
    }

    #[test]
    fn ragged_row_is_reported_and_reading_continues() {
        let csv = "pdes,name,diameter,pha\n1,a\n2,b,,N\n";
        let (neos, warnings) = read_neos(csv.as_bytes()).unwrap();

        assert_eq!(neos.len(), 1);
        assert_eq!(neos[0].designation, "2");
        assert_eq!(warnings[0].kind(), "malformed_record");
    }

    #[rstest]
    #[case::designation("name,diameter,pha\nEros,16.84,N\n", "pdes")]
    #[case::hazard_flag("pdes,name,diameter\n99942,Apophis,0.37\n", "pha")]
    fn missing_required_column_is_fatal(#[case] csv: &str, #[case] column: &str) {
        let err = read_neos(csv.as_bytes()).unwrap_err();
        match err {
            Error::InvalidFormat(message) => assert!(message.contains(column), "{message}"),
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let (neos, warnings) = read_neos("pdes,pha\n99942,Y\n".as_bytes()).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(neos[0].name, None);
        assert_eq!(neos[0].diameter, None);
        assert!(neos[0].hazardous);
    }

    #[test]
    fn reads_positional_approach_rows() {
        let json = cad(
            r#"["170903","105","2415020.507669610","1900-Jan-01 00:11","0.0921795123769547","0.0912006569517418","0.0931589328621254","16.7523040362574","16.7505784933163","01:00","18.1"]"#,
        );
        let (approaches, warnings) = read_approaches(json.as_bytes()).unwrap();

        assert!(warnings.is_empty());
        assert_eq!(
            approaches,
            vec![ApproachRecord {
                designation: "170903".to_string(),
                time: "1900-Jan-01 00:11".to_string(),
                distance: 0.092_179_512_376_954_7,
                velocity: 16.752_304_036_257_4,
            }]
        );
    }

    #[rstest]
    #[case::null_distance(
        r#"["1","1","0","2020-Jun-15 00:00",null,"0","0","5","5","0","1"]"#,
        "missing distance"
    )]
    #[case::bad_velocity(
        r#"["1","1","0","2020-Jun-15 00:00","0.1","0","0","fast","5","0","1"]"#,
        "invalid velocity 'fast'"
    )]
    #[case::no_time(r#"["1","1","0","","0.1","0","0","5","5","0","1"]"#, "missing approach time")]
    #[case::short_row(r#"["1"]"#, "missing approach time")]
    fn unusable_approach_rows_are_skipped(#[case] row: &str, #[case] reason: &str) {
        let (approaches, warnings) = read_approaches(cad(row).as_bytes()).unwrap();

        assert!(approaches.is_empty());
        assert_eq!(
            warnings,
            vec![Warning::SkippedRecord {
                record_number: 1,
                reason: reason.to_string(),
            }]
        );
    }

    #[test]
    fn missing_required_field_is_fatal() {
        let json = r#"{"fields":["des","cd","dist"],"data":[]}"#;
        let err = read_approaches(json.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("v_rel"));
    }

    #[test]
    fn non_json_input_is_fatal() {
        let err = read_approaches("des,cd\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
