//! Decoding loaded tables into domain rows.
//!
//! Columns the join and scoring depend on are required and fail fast when
//! absent; descriptive columns degrade to empty strings.

use std::path::Path;

use triage_core::errors::LoadError;
use triage_core::types::{ControlRow, Priority, PriorityRecord, Status, Table};

/// Header the annotations workbook uses for its recommendation column.
const RECOMMENDATION_HEADER: &str = "Recommendation Steps/Approach";

/// Decode the primary compliance export. Requires `title`, `control_title`,
/// and `status` columns.
pub fn decode_controls(path: &Path, table: &Table) -> Result<Vec<ControlRow>, LoadError> {
    let title = require_column(path, table, "title")?;
    let control_title = require_column(path, table, "control_title")?;
    let status = require_column(path, table, "status")?;

    let control_description = table.column_index("control_description");
    let region = table.column_index("region");
    let account_id = table.column_index("account_id");
    let resource = table.column_index("resource");
    let reason = table.column_index("reason");

    let rows = (0..table.row_count())
        .map(|r| ControlRow {
            title: cell(table, r, Some(title)),
            control_title: cell(table, r, Some(control_title)),
            control_description: cell(table, r, control_description),
            status: Status::parse(&cell(table, r, Some(status))),
            region: cell(table, r, region),
            account_id: cell(table, r, account_id),
            resource: cell(table, r, resource),
            reason: cell(table, r, reason),
        })
        .collect();

    Ok(rows)
}

/// Decode the priority annotations table. Requires `control_title` and
/// `priority`; the recommendation column is matched by its exact header,
/// then by any header containing "recommendation".
pub fn decode_annotations(path: &Path, table: &Table) -> Result<Vec<PriorityRecord>, LoadError> {
    let control_title = require_column(path, table, "control_title")?;
    let priority = require_column(path, table, "priority")?;
    let recommendation = table
        .column_index(RECOMMENDATION_HEADER)
        .or_else(|| table.column_index_containing("recommendation"));

    let records = (0..table.row_count())
        .map(|r| PriorityRecord {
            control_title: cell(table, r, Some(control_title)),
            priority: Priority::parse(&cell(table, r, Some(priority))),
            recommendation: cell(table, r, recommendation),
        })
        .collect();

    Ok(records)
}

fn require_column(path: &Path, table: &Table, name: &str) -> Result<usize, LoadError> {
    table
        .column_index(name)
        .ok_or_else(|| LoadError::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
}

fn cell(table: &Table, row: usize, col: Option<usize>) -> String {
    col.and_then(|c| table.cell(row, c))
        .unwrap_or_default()
        .to_string()
}
