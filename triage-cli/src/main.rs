//! triage — interactive AWS compliance reporting.
//!
//! One linear pass: load the compliance export and the priority annotations,
//! enrich every control with priority and risk score, aggregate summaries,
//! and write the workbook, executive summary, and charts.

mod prompt;

use std::path::{Path, PathBuf};

use triage_core::config::ReportConfig;
use triage_core::errors::{ErrorCode, LoadError, PipelineError};
use triage_core::trace::init_tracing;
use triage_pipeline::aggregate::{
    category_summary, compliance_score, priority_counts, safe_subset, top_recommendations,
    top_risk_services, unsafe_subset,
};
use triage_pipeline::enrich::{enrich, PriorityIndex};
use triage_pipeline::loader;
use triage_report::charts::render_all;
use triage_report::summary::{executive_summary, write_summary};
use triage_report::workbook::{write_workbook, WorkbookData};
use triage_report::ReportPaths;

fn main() {
    init_tracing();
    println!("triage — AWS compliance reporting (v{})", triage_core::constants::VERSION);

    if let Err(e) = run() {
        tracing::error!(code = e.error_code(), "run failed: {e}");
        eprintln!("{}", e.code_string());
        std::process::exit(1);
    }
}

fn run() -> Result<(), PipelineError> {
    let config = ReportConfig::discover()?;

    let input = PathBuf::from(
        prompt::prompt("Enter the compliance report file (CSV/Excel): ")
            .map_err(stdin_error)?,
    );
    let annotations = PathBuf::from(
        prompt::prompt_with_default(
            "Enter the priority annotations file",
            &config.effective_annotations_file().display().to_string(),
        )
        .map_err(stdin_error)?,
    );

    // Load
    let control_table = loader::load_table(&input)?;
    let controls = loader::decode_controls(&input, &control_table)?;
    let annotation_table = loader::load_table(&annotations)?;
    let records = loader::decode_annotations(&annotations, &annotation_table)?;
    tracing::info!(
        controls = controls.len(),
        annotations = records.len(),
        "loaded input tables"
    );

    // Enrich
    let index = PriorityIndex::build(&records);
    let rows = enrich(controls, &index);

    // Aggregate
    let categories = config.effective_categories();
    let score = compliance_score(&rows);
    let counts = priority_counts(&rows);
    let top_services = top_risk_services(&rows);
    let top_recs = top_recommendations(&rows);
    let safe = safe_subset(&rows);
    let unsafe_rows = unsafe_subset(&rows);
    let table = category_summary(&rows, &categories);
    let table_safe = category_summary(&safe, &categories);
    tracing::info!(score, total = rows.len(), "aggregated summaries");

    // Report
    let paths = ReportPaths::new(config.effective_report_dir(), &input);
    paths.ensure_dir()?;

    let workbook_path = paths.workbook();
    write_workbook(
        &workbook_path,
        &WorkbookData {
            rows: &rows,
            priority_counts: &counts,
            table: &table,
            table_safe: &table_safe,
            safe: &safe,
            unsafe_rows: &unsafe_rows,
        },
    )?;

    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let summary = executive_summary(&timestamp, score, rows.len(), &top_services, &top_recs);
    let summary_path = paths.summary();
    write_summary(&summary_path, &summary)?;

    let chart_paths = render_all(&paths, &rows)?;

    println!("Comprehensive report generated:");
    println!("- Excel Report: {}", workbook_path.display());
    println!("- Executive Summary: {}", summary_path.display());
    for chart in &chart_paths {
        println!("- Chart: {}", chart.display());
    }
    println!("Overall compliance score: {score:.2}%");

    Ok(())
}

fn stdin_error(source: std::io::Error) -> PipelineError {
    PipelineError::Load(LoadError::Io {
        path: Path::new("<stdin>").to_path_buf(),
        source,
    })
}
