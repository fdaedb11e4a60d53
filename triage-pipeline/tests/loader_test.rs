//! Loader tests: format dispatch, error surfacing, and table decoding.

use std::io::Write;
use std::path::Path;

use triage_core::errors::LoadError;
use triage_pipeline::loader::{decode_annotations, decode_controls, load_table};

fn write_csv(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn unknown_extension_is_rejected() {
    let err = load_table(Path::new("report.txt")).unwrap_err();
    assert!(matches!(err, LoadError::UnsupportedFormat { .. }));

    let err = load_table(Path::new("report")).unwrap_err();
    assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
}

#[test]
fn missing_file_surfaces_io_error() {
    let err = load_table(Path::new("definitely-not-here.csv")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn csv_preserves_columns_and_row_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "scan.csv",
        "title,control_title,status\nEC2,A,alarm\nS3,B,ok\n",
    );

    let table = load_table(&path).unwrap();
    assert_eq!(table.columns(), ["title", "control_title", "status"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell(0, 0), Some("EC2"));
    assert_eq!(table.cell(1, 2), Some("ok"));
}

#[test]
fn decode_controls_requires_join_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(dir.path(), "scan.csv", "title,status\nEC2,ok\n");
    let table = load_table(&path).unwrap();

    let err = decode_controls(&path, &table).unwrap_err();
    match err {
        LoadError::MissingColumn { column, .. } => assert_eq!(column, "control_title"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn decode_controls_defaults_descriptive_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "scan.csv",
        "title,control_title,status\nEC2,A,alarm\n",
    );
    let table = load_table(&path).unwrap();

    let rows = decode_controls(&path, &table).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "EC2");
    assert_eq!(rows[0].control_description, "");
    assert_eq!(rows[0].region, "");
    assert!(rows[0].status.is_open_issue());
}

#[test]
fn decode_annotations_finds_recommendation_by_fragment() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "annotations.csv",
        "control_title,priority,Recommendation Steps/Approach\nA,High,Enable MFA\nA,Low,duplicate ignored later\nB,2,Rotate keys\n",
    );
    let table = load_table(&path).unwrap();

    let records = decode_annotations(&path, &table).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].recommendation, "Enable MFA");
    // numeric code decodes like its word form
    assert_eq!(records[2].priority, triage_core::types::Priority::Medium);
}
