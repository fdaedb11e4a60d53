//! Priority-distribution heatmap: services on the y axis, priorities on the
//! x axis, cell intensity by control count.

use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use triage_core::errors::ReportError;
use triage_pipeline::aggregate::PriorityPivot;

use super::{chart_error, check_parent};

/// Render the heatmap PNG from a pivot matrix.
pub fn priority_heatmap(path: &Path, pivot: &PriorityPivot) -> Result<(), ReportError> {
    draw_heatmap(path, pivot).map_err(|e| chart_error("priority_heatmap", e))
}

fn draw_heatmap(path: &Path, pivot: &PriorityPivot) -> Result<(), Box<dyn std::error::Error>> {
    check_parent(path)?;
    let root = BitMapBackend::new(path, (1100, 760)).into_drawing_area();
    root.fill(&WHITE)?;

    if pivot.is_empty() {
        root.titled("AWS Compliance Priority Distribution", ("sans-serif", 26))?;
        root.present()?;
        return Ok(());
    }

    let cols = pivot.priorities.len();
    let rows = pivot.services.len();
    let max = pivot.max_count().max(1) as f64;

    let mut chart = ChartBuilder::on(&root)
        .caption("AWS Compliance Priority Distribution", ("sans-serif", 26))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(170)
        .build_cartesian_2d(0f64..cols as f64, 0f64..rows as f64)?;

    let priorities = &pivot.priorities;
    let services = &pivot.services;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(cols + 1)
        .y_labels(rows + 1)
        .x_label_formatter(&|x| {
            // ticks land on cell edges; label the cell to the right
            priorities
                .get(x.round() as usize)
                .map(|p| p.as_str().to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| {
            // services are drawn top-down
            let i = rows as f64 - y.round() - 1.0;
            if i >= 0.0 {
                services.get(i as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .x_desc("Priority")
        .y_desc("Services")
        .draw()?;

    // cells
    chart.draw_series((0..rows).flat_map(|s| {
        let counts = &pivot.counts[s];
        let y = (rows - 1 - s) as f64;
        (0..cols).map(move |p| {
            let t = counts[p] as f64 / max;
            Rectangle::new(
                [(p as f64, y), (p as f64 + 1.0, y + 1.0)],
                heat_color(t).filled(),
            )
        })
    }))?;

    // per-cell count annotations
    let annotation = TextStyle::from(("sans-serif", 16).into_font())
        .pos(Pos::new(HPos::Center, VPos::Center))
        .color(&BLACK);
    chart.draw_series((0..rows).flat_map(|s| {
        let counts = &pivot.counts[s];
        let y = (rows - 1 - s) as f64;
        let annotation = annotation.clone();
        (0..cols).map(move |p| {
            Text::new(
                counts[p].to_string(),
                (p as f64 + 0.5, y + 0.5),
                annotation.clone(),
            )
        })
    }))?;

    root.present()?;
    Ok(())
}

/// Yellow-orange-red ramp: low counts pale yellow, high counts deep red.
fn heat_color(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: f64, b: f64| (a + (b - a) * t) as u8;
    RGBColor(lerp(255.0, 190.0), lerp(250.0, 30.0), lerp(205.0, 30.0))
}
