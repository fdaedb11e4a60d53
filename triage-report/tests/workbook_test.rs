//! Workbook and summary writer tests against a temp directory.

use triage_core::config::ServiceCategories;
use triage_core::types::{ControlRow, EnrichedControl, Priority, Status};
use triage_pipeline::aggregate::{
    category_summary, priority_counts, safe_subset, top_recommendations, top_risk_services,
    unsafe_subset,
};
use triage_report::summary::{executive_summary, write_summary};
use triage_report::workbook::{write_workbook, WorkbookData};
use triage_report::ReportPaths;

fn enriched(title: &str, control_title: &str, status: &str, priority: Priority, risk: f64) -> EnrichedControl {
    EnrichedControl {
        control: ControlRow {
            title: title.to_string(),
            control_title: control_title.to_string(),
            control_description: format!("{control_title} description"),
            status: Status::parse(status),
            region: "us-east-1".to_string(),
            account_id: "376921607482".to_string(),
            resource: format!("arn:aws:{title}"),
            reason: String::new(),
        },
        priority,
        recommendation: "remediate".to_string(),
        risk_score: risk,
    }
}

fn fixture() -> Vec<EnrichedControl> {
    vec![
        enriched("EC2", "A", "alarm", Priority::High, 15.0),
        enriched("S3", "B", "ok", Priority::Low, 0.2),
        enriched("RDS", "C", "info", Priority::NoPriority, 0.0),
    ]
}

#[test]
fn workbook_is_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let rows = fixture();
    let categories = ServiceCategories::builtin();

    let safe = safe_subset(&rows);
    let unsafe_rows = unsafe_subset(&rows);
    let data = WorkbookData {
        rows: &rows,
        priority_counts: &priority_counts(&rows),
        table: &category_summary(&rows, &categories),
        table_safe: &category_summary(&safe, &categories),
        safe: &safe,
        unsafe_rows: &unsafe_rows,
    };

    let path = dir.path().join("report.xlsx");
    write_workbook(&path, &data).unwrap();

    let metadata = std::fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn workbook_write_fails_into_missing_directory() {
    let rows = fixture();
    let data = WorkbookData {
        rows: &rows,
        priority_counts: &[],
        table: &[],
        table_safe: &[],
        safe: &[],
        unsafe_rows: &[],
    };

    let err = write_workbook(
        std::path::Path::new("no-such-dir/deeper/report.xlsx"),
        &data,
    )
    .unwrap_err();
    assert!(err.to_string().contains("report.xlsx"));
}

#[test]
fn summary_json_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let rows = fixture();

    let value = executive_summary(
        "2026-08-06 12:00:00",
        66.666,
        rows.len(),
        &top_risk_services(&rows),
        &top_recommendations(&rows),
    );

    let path = dir.path().join("summary.json");
    write_summary(&path, &value).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed["overall_compliance_score"], "66.67%");
    assert_eq!(parsed["total_controls"], 3);
    assert_eq!(parsed["top_high_risk_services"]["EC2"], 15.0);
    assert_eq!(
        parsed["top_recommendations"][0]["control_title"],
        "A"
    );
}

#[test]
fn report_paths_keep_runs_apart() {
    let dir = std::path::Path::new("compliance_reports");
    let input = std::path::Path::new("scan.csv");
    let a = ReportPaths::with_timestamp(dir, input, "20260806_100000".into());
    let b = ReportPaths::with_timestamp(dir, input, "20260806_100001".into());
    assert_ne!(a.workbook(), b.workbook());
    assert_ne!(a.summary(), b.summary());
}
