//! Integration tests for loading and exporting data files.
//!
//! # Test Categories
//!
//! - Loading from disk keeps valid records in file order
//! - Bad records produce warnings with the right record numbers
//! - Exports read back to the same values

use neodb_formats::{
    load_approaches, load_neos, save_csv, save_json, ApproachRow, Error, Warning,
};
use rstest::{fixture, rstest};
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

// =============================================================================
// Fixtures
// =============================================================================

const NEOS_CSV: &str = "\
id,spkid,full_name,pdes,name,prefix,neo,pha,diameter,albedo
a0000433,2000433,\"   433 Eros (A898 PA)\",433,Eros,,Y,N,16.84,0.25
a0000719,2000719,\"   719 Albert (A911 TB)\",719,Albert,,Y,N,,
bK19A00A,3843010,\"       (2019 AA)\",2019 AA,,,Y,Y,,
,,broken,,,,Y,N,,
a0001036,2001036,\"  1036 Ganymed (A924 UB)\",1036,Ganymed,,Y,N,37.675,0.238
";

const CAD_JSON: &str = r#"{
  "signature": {"source": "NASA/JPL SBDB Close Approach Data API", "version": "1.1"},
  "count": "4",
  "fields": ["des", "orbit_id", "jd", "cd", "dist", "dist_min", "dist_max", "v_rel", "v_inf", "t_sigma_f", "h"],
  "data": [
    ["433", "659", "2415020.5", "1900-Dec-27 01:30", "0.314", "0.314", "0.314", "5.56", "5.55", "< 00:01", "10.4"],
    ["2019 AA", "9", "2458849.5", "2020-Jan-01 12:00", null, "0.1", "0.1", "8.0", "8.0", "00:10", "25.0"],
    ["719", "242", "2459014.5", "2020-Jun-15 04:30", "0.05", "0.05", "0.05", "12.0", "11.9", "00:01", "15.5"],
    ["1036", "1012", "2459015.5", "2020-Jun-16 23:59", "0.2", "0.2", "0.2", "40", "39.9", "00:01", "9.4"]
  ]
}"#;

fn file_with(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[fixture]
fn neo_file() -> NamedTempFile {
    file_with(NEOS_CSV)
}

#[fixture]
fn cad_file() -> NamedTempFile {
    file_with(CAD_JSON)
}

// =============================================================================
// Loading
// =============================================================================

#[rstest]
fn load_neos_keeps_valid_records_in_order(neo_file: NamedTempFile) {
    let (neos, warnings) = load_neos(neo_file.path()).unwrap();

    let designations: Vec<&str> = neos.iter().map(|n| n.designation.as_str()).collect();
    assert_eq!(designations, ["433", "719", "2019 AA", "1036"]);

    assert_eq!(
        warnings,
        vec![Warning::SkippedRecord {
            record_number: 4,
            reason: "missing designation".to_string(),
        }]
    );
}

#[rstest]
fn load_neos_normalizes_optional_fields(neo_file: NamedTempFile) {
    let (neos, _) = load_neos(neo_file.path()).unwrap();

    let albert = &neos[1];
    assert_eq!(albert.name.as_deref(), Some("Albert"));
    assert_eq!(albert.diameter, None);
    assert!(!albert.hazardous);

    let unnamed = &neos[2];
    assert_eq!(unnamed.name, None);
    assert!(unnamed.hazardous);
}

#[rstest]
fn load_approaches_skips_rows_missing_required_values(cad_file: NamedTempFile) {
    let (approaches, warnings) = load_approaches(cad_file.path()).unwrap();

    assert_eq!(approaches.len(), 3);
    assert_eq!(approaches[0].time, "1900-Dec-27 01:30");
    assert_eq!(approaches[2].velocity, 40.0);

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].record_number(), 2);
    assert!(warnings[0].to_string().contains("missing distance"));
}

#[test]
fn load_missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = load_neos(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn load_truncated_document_is_a_json_error() {
    let file = file_with(r#"{"fields": ["des", "cd", "dist", "v_rel"], "data": [["433""#);
    let err = load_approaches(file.path()).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

// =============================================================================
// Export round trips
// =============================================================================

fn rows() -> Vec<ApproachRow> {
    vec![
        ApproachRow {
            datetime_utc: "2020-06-15 04:30".to_string(),
            distance_au: 0.049_812_345_678_901_23,
            velocity_km_s: 12.000_000_000_000_1,
            designation: "719".to_string(),
            name: Some("Albert".to_string()),
            diameter_km: None,
            potentially_hazardous: false,
        },
        ApproachRow {
            datetime_utc: "2020-06-16 23:59".to_string(),
            distance_au: 0.2,
            velocity_km_s: 40.0,
            designation: "2019 AA".to_string(),
            name: None,
            diameter_km: Some(37.675),
            potentially_hazardous: true,
        },
    ]
}

#[test]
fn csv_export_reads_back_without_precision_loss() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    save_csv(&path, rows()).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();

    assert_eq!(records.len(), 2);
    assert_eq!(&records[0][0], "2020-06-15 04:30");
    assert_eq!(records[0][1].parse::<f64>().unwrap(), 0.049_812_345_678_901_23);
    assert_eq!(records[0][2].parse::<f64>().unwrap(), 12.000_000_000_000_1);
    assert_eq!(&records[0][5], "nan");
    assert_eq!(&records[1][4], "");
    assert_eq!(&records[1][6], "true");
}

#[test]
fn json_export_reads_back_without_precision_loss() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    save_json(&path, rows()).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(value[0]["datetime_utc"], "2020-06-15 04:30");
    assert_eq!(
        value[0]["distance_au"].as_f64(),
        Some(0.049_812_345_678_901_23)
    );
    assert!(value[0]["neo"]["diameter_km"].is_null());
    assert_eq!(value[1]["neo"]["name"], "");
    assert_eq!(value[1]["neo"]["diameter_km"].as_f64(), Some(37.675));
}
