//! Bar charts: cumulative risk and per-service counts.

use std::path::Path;

use plotters::prelude::*;

use triage_core::errors::ReportError;
use triage_pipeline::aggregate::ServiceRisk;

use super::{chart_error, check_parent};

const SKY_BLUE: RGBColor = RGBColor(0x87, 0xCE, 0xEB);
const STEEL_BLUE: RGBColor = RGBColor(0x46, 0x82, 0xB4);

/// Cumulative risk score per service, sorted descending.
pub fn cumulative_risk_chart(path: &Path, services: &[ServiceRisk]) -> Result<(), ReportError> {
    let mut data: Vec<(String, f64)> = services
        .iter()
        .map(|s| (s.service.clone(), s.total_risk))
        .collect();
    data.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    draw_bars(
        path,
        "Cumulative Risk Score by AWS Service",
        "Cumulative Risk Score",
        &data,
        STEEL_BLUE,
    )
    .map_err(|e| chart_error("risk_score_chart", e))
}

/// Generic per-service count chart (open issues, safe controls).
pub fn count_chart(
    path: &Path,
    title: &str,
    y_label: &str,
    counts: &[(String, u32)],
) -> Result<(), ReportError> {
    let data: Vec<(String, f64)> = counts
        .iter()
        .map(|(name, n)| (name.clone(), *n as f64))
        .collect();

    draw_bars(path, title, y_label, &data, SKY_BLUE).map_err(|e| chart_error(title, e))
}

fn draw_bars(
    path: &Path,
    title: &str,
    y_label: &str,
    data: &[(String, f64)],
    color: RGBColor,
) -> Result<(), Box<dyn std::error::Error>> {
    check_parent(path)?;
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    if data.is_empty() {
        root.titled(title, ("sans-serif", 24))?;
        root.present()?;
        return Ok(());
    }

    let max = data.iter().map(|(_, v)| *v).fold(0.0f64, f64::max).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(110)
        .y_label_area_size(60)
        .build_cartesian_2d((0..data.len()).into_segmented(), 0.0..max * 1.1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(data.len())
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => data
                .get(*i)
                .map(|(name, _)| name.clone())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .y_desc(y_label)
        .x_desc("Service")
        .draw()?;

    chart.draw_series(data.iter().enumerate().map(|(i, (_, value))| {
        Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), *value),
            ],
            color.filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}
