//! Category-sectioned summary tables.
//!
//! For each fixed category, member rows are grouped by (title, control_title,
//! control_description, priority) and the open-issue indicator is summed per
//! group. Each category that produced rows is followed by one blank
//! separator line. Sr No numbering skips separators and continues across
//! categories.

use triage_core::config::ServiceCategories;
use triage_core::types::collections::FxHashMap;
use triage_core::types::{EnrichedControl, Priority};

/// One numbered data row of a summary table.
#[derive(Debug, Clone)]
pub struct SummaryRow {
    pub sr_no: u32,
    pub service: String,
    pub control_title: String,
    pub description: String,
    pub open_issues: u32,
    pub priority: Priority,
}

/// A summary table line: either a data row or the blank separator emitted
/// after a category's rows.
#[derive(Debug, Clone)]
pub enum SummaryLine {
    Row(SummaryRow),
    Separator,
}

impl SummaryLine {
    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Separator)
    }
}

/// Build the ordered summary sequence for one row set. Categories appear in
/// declaration order; groups within a category keep first-encounter order.
pub fn category_summary(
    rows: &[EnrichedControl],
    categories: &ServiceCategories,
) -> Vec<SummaryLine> {
    let mut lines: Vec<SummaryLine> = Vec::new();
    let mut sr_no = 1u32;

    for category in categories.iter() {
        let members: Vec<&EnrichedControl> = rows
            .iter()
            .filter(|r| category.contains(&r.control.title))
            .collect();

        let groups = group_rows(&members);
        let had_rows = !groups.is_empty();

        for group in groups {
            lines.push(SummaryLine::Row(SummaryRow {
                sr_no,
                service: group.title,
                control_title: group.control_title,
                description: group.description,
                open_issues: group.open_issues,
                priority: group.priority,
            }));
            sr_no += 1;
        }

        if had_rows {
            lines.push(SummaryLine::Separator);
        }
    }

    lines
}

struct Group {
    title: String,
    control_title: String,
    description: String,
    priority: Priority,
    open_issues: u32,
}

fn group_rows(members: &[&EnrichedControl]) -> Vec<Group> {
    let mut order: Vec<Group> = Vec::new();
    let mut index: FxHashMap<(String, String, String, String), usize> = FxHashMap::default();

    for row in members {
        let key = (
            row.control.title.clone(),
            row.control.control_title.clone(),
            row.control.control_description.clone(),
            row.priority.as_str().to_string(),
        );
        let weight = u32::from(row.is_open_issue());
        match index.get(&key) {
            Some(&i) => order[i].open_issues += weight,
            None => {
                index.insert(key, order.len());
                order.push(Group {
                    title: row.control.title.clone(),
                    control_title: row.control.control_title.clone(),
                    description: row.control.control_description.clone(),
                    priority: row.priority.clone(),
                    open_issues: weight,
                });
            }
        }
    }
    order
}
