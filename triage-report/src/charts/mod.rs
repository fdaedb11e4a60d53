//! Chart rendering via plotters. Each chart writes one PNG; failures carry
//! the chart name so a broken chart is attributable from the log alone.

pub mod bars;
pub mod heatmap;
pub mod pies;

use std::path::{Path, PathBuf};

use plotters::style::RGBColor;

use triage_core::config::scoring::priority_color;
use triage_core::errors::ReportError;
use triage_core::types::{EnrichedControl, Priority};
use triage_pipeline::aggregate::{
    open_issues_by_priority, open_issues_by_service, priority_pivot, risk_by_service,
    safe_controls_by_service,
};

use crate::paths::ReportPaths;

pub(crate) fn chart_error(chart: &str, err: impl std::fmt::Display) -> ReportError {
    ReportError::Chart {
        chart: chart.to_string(),
        message: err.to_string(),
    }
}

pub(crate) fn color_of(priority: &Priority) -> RGBColor {
    let (r, g, b) = priority_color(priority);
    RGBColor(r, g, b)
}

/// Render the full chart set for one run. Returns the written paths.
pub fn render_all(
    paths: &ReportPaths,
    rows: &[EnrichedControl],
) -> Result<Vec<PathBuf>, ReportError> {
    let mut written = Vec::new();

    let pivot = priority_pivot(rows);
    let path = paths.chart("priority_heatmap");
    heatmap::priority_heatmap(&path, &pivot)?;
    written.push(path);

    let path = paths.chart("risk_score_chart");
    bars::cumulative_risk_chart(&path, &risk_by_service(rows))?;
    written.push(path);

    let path = paths.chart("open_issues_by_service");
    bars::count_chart(
        &path,
        "Open Issues by Service",
        "Open Issues",
        &open_issues_by_service(rows),
    )?;
    written.push(path);

    let path = paths.chart("safe_controls_by_service");
    bars::count_chart(
        &path,
        "Safe Controls by Service",
        "Safe Controls",
        &safe_controls_by_service(rows),
    )?;
    written.push(path);

    let path = paths.chart("priority_breakdown");
    pies::priority_breakdown(&path, &open_issues_by_priority(rows))?;
    written.push(path);

    let safe = rows.iter().filter(|r| !r.is_open_issue()).count();
    let path = paths.chart("safe_vs_unsafe");
    pies::safe_vs_unsafe(&path, safe, rows.len() - safe)?;
    written.push(path);

    for p in &written {
        tracing::info!(path = %p.display(), "wrote chart");
    }
    Ok(written)
}

pub(crate) fn check_parent(path: &Path) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(ReportError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "report directory does not exist",
                ),
            });
        }
    }
    Ok(())
}
