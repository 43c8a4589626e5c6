//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Directory holding the sample data files
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Sample NEO catalogue
pub fn neo_fixture() -> PathBuf {
    fixtures_dir().join("neos.csv")
}

/// Sample close-approach document
pub fn cad_fixture() -> PathBuf {
    fixtures_dir().join("cad.json")
}

/// Run the neodb binary in `dir` with colors and logging disabled.
pub fn run_neodb_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_neodb"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute neodb binary")
}

/// Run the neodb binary against the sample data files.
pub fn run_neodb(dir: &Path, args: &[&str]) -> Output {
    let neofile = neo_fixture();
    let cadfile = cad_fixture();
    let mut full = vec![
        "--neofile",
        neofile.to_str().expect("fixture path is UTF-8"),
        "--cadfile",
        cadfile.to_str().expect("fixture path is UTF-8"),
    ];
    full.extend_from_slice(args);
    run_neodb_in_dir(dir, &full)
}

/// Stdout of a successful run, failing the test otherwise.
pub fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "neodb failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}
