//! Whole-table summaries: compliance score and per-priority / per-service
//! counts. Grouping preserves first-encounter order throughout.

use triage_core::types::{EnrichedControl, Priority};

/// Overall compliance health: passed rows (ok/info/skip) over total rows, as
/// a percentage. Empty input is defined as 0.0 rather than dividing by zero.
pub fn compliance_score(rows: &[EnrichedControl]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    let passed = rows.iter().filter(|r| r.passed()).count();
    (passed as f64 / rows.len() as f64) * 100.0
}

/// Rows per priority, in first-encounter order.
pub fn priority_counts(rows: &[EnrichedControl]) -> Vec<(Priority, usize)> {
    let mut counts: Vec<(Priority, usize)> = Vec::new();
    for row in rows {
        match counts.iter_mut().find(|(p, _)| *p == row.priority) {
            Some((_, n)) => *n += 1,
            None => counts.push((row.priority.clone(), 1)),
        }
    }
    counts
}

/// Open-issue count per service title, in first-encounter order.
pub fn open_issues_by_service(rows: &[EnrichedControl]) -> Vec<(String, u32)> {
    count_by_service(rows, |r| u32::from(r.is_open_issue()))
}

/// Non-alarm control count per service title, in first-encounter order.
pub fn safe_controls_by_service(rows: &[EnrichedControl]) -> Vec<(String, u32)> {
    count_by_service(rows, |r| u32::from(!r.is_open_issue()))
}

/// Open issues summed per priority, in first-encounter order. Feeds the
/// priority breakdown pie chart.
pub fn open_issues_by_priority(rows: &[EnrichedControl]) -> Vec<(Priority, u32)> {
    let mut counts: Vec<(Priority, u32)> = Vec::new();
    for row in rows {
        let weight = u32::from(row.is_open_issue());
        match counts.iter_mut().find(|(p, _)| *p == row.priority) {
            Some((_, n)) => *n += weight,
            None => counts.push((row.priority.clone(), weight)),
        }
    }
    counts
}

fn count_by_service(
    rows: &[EnrichedControl],
    weight: impl Fn(&EnrichedControl) -> u32,
) -> Vec<(String, u32)> {
    let mut counts: Vec<(String, u32)> = Vec::new();
    for row in rows {
        let w = weight(row);
        match counts.iter_mut().find(|(t, _)| *t == row.control.title) {
            Some((_, n)) => *n += w,
            None => counts.push((row.control.title.clone(), w)),
        }
    }
    counts
}
