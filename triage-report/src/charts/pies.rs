//! Pie charts: open issues by priority and the safe/unsafe split.

use std::path::Path;

use plotters::prelude::*;

use triage_core::types::Priority;

use super::{chart_error, check_parent, color_of};
use triage_core::errors::ReportError;

const SAFE_GREEN: RGBColor = RGBColor(0x90, 0xEE, 0x90);
const UNSAFE_RED: RGBColor = RGBColor(0xF0, 0x80, 0x80);

/// Open issues per priority, colored from the priority color map.
pub fn priority_breakdown(
    path: &Path,
    counts: &[(Priority, u32)],
) -> Result<(), ReportError> {
    let mut sizes = Vec::new();
    let mut colors = Vec::new();
    let mut labels = Vec::new();
    for (priority, count) in counts {
        if *count > 0 {
            sizes.push(*count as f64);
            colors.push(color_of(priority));
            labels.push(priority.as_str().to_string());
        }
    }

    draw_pie(path, "Open Issues by Priority", &sizes, &colors, &labels)
        .map_err(|e| chart_error("priority_breakdown", e))
}

/// Safe controls versus open issues.
pub fn safe_vs_unsafe(path: &Path, safe: usize, unsafe_count: usize) -> Result<(), ReportError> {
    let mut sizes = Vec::new();
    let mut colors = Vec::new();
    let mut labels = Vec::new();
    if safe > 0 {
        sizes.push(safe as f64);
        colors.push(SAFE_GREEN);
        labels.push("Safe Controls".to_string());
    }
    if unsafe_count > 0 {
        sizes.push(unsafe_count as f64);
        colors.push(UNSAFE_RED);
        labels.push("Unsafe Controls".to_string());
    }

    draw_pie(path, "Safe vs Unsafe Controls", &sizes, &colors, &labels)
        .map_err(|e| chart_error("safe_vs_unsafe", e))
}

fn draw_pie(
    path: &Path,
    title: &str,
    sizes: &[f64],
    colors: &[RGBColor],
    labels: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    check_parent(path)?;
    let root = BitMapBackend::new(path, (800, 640)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(title, ("sans-serif", 26))?;

    // All-zero input draws an empty titled canvas rather than dividing by zero.
    if !sizes.is_empty() {
        let center = (400, 310);
        let radius = 220.0;
        let mut pie = Pie::new(&center, &radius, sizes, colors, labels);
        pie.start_angle(90.0);
        pie.label_style(("sans-serif", 18).into_font());
        pie.percentages(("sans-serif", 15).into_font());
        root.draw(&pie)?;
    }

    root.present()?;
    Ok(())
}
