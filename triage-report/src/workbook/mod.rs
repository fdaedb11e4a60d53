//! Multi-sheet workbook output.
//!
//! Sheets: `Compliance Data` (all enriched rows), `Priority Summary`
//! (priority → count), `table` / `table_safe` (category-sectioned summary
//! tables with blank separator rows), and the `safe` / `unsafe` row splits.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use triage_core::errors::ReportError;
use triage_core::types::{EnrichedControl, Priority};
use triage_pipeline::aggregate::SummaryLine;

const ROW_HEADERS: [&str; 11] = [
    "title",
    "control_title",
    "control_description",
    "region",
    "account_id",
    "resource",
    "reason",
    "status",
    "priority",
    "Recommendation Steps/Approach",
    "risk_score",
];

const SUMMARY_HEADERS: [&str; 6] = [
    "Sr No",
    "Service",
    "Control Title",
    "Description",
    "Open Issues",
    "Priority",
];

/// Inputs for one workbook. All sequences are written in the order given.
pub struct WorkbookData<'a> {
    pub rows: &'a [EnrichedControl],
    pub priority_counts: &'a [(Priority, usize)],
    pub table: &'a [SummaryLine],
    pub table_safe: &'a [SummaryLine],
    pub safe: &'a [EnrichedControl],
    pub unsafe_rows: &'a [EnrichedControl],
}

/// Write the workbook to `path`.
pub fn write_workbook(path: &Path, data: &WorkbookData<'_>) -> Result<(), ReportError> {
    build_workbook(data)
        .and_then(|mut wb| wb.save(path).map(|_| ()))
        .map_err(|e| ReportError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::info!(path = %path.display(), rows = data.rows.len(), "wrote workbook");
    Ok(())
}

fn build_workbook(data: &WorkbookData<'_>) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    write_rows_sheet(workbook.add_worksheet().set_name("Compliance Data")?, data.rows, &header_format)?;
    write_priority_summary(workbook.add_worksheet().set_name("Priority Summary")?, data.priority_counts, &header_format)?;
    write_summary_table(workbook.add_worksheet().set_name("table")?, data.table, &header_format)?;
    write_summary_table(workbook.add_worksheet().set_name("table_safe")?, data.table_safe, &header_format)?;
    write_rows_sheet(workbook.add_worksheet().set_name("safe")?, data.safe, &header_format)?;
    write_rows_sheet(workbook.add_worksheet().set_name("unsafe")?, data.unsafe_rows, &header_format)?;

    Ok(workbook)
}

fn write_rows_sheet(
    sheet: &mut Worksheet,
    rows: &[EnrichedControl],
    header_format: &Format,
) -> Result<(), XlsxError> {
    for (col, header) in ROW_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, header_format)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_string(r, 0, &row.control.title)?;
        sheet.write_string(r, 1, &row.control.control_title)?;
        sheet.write_string(r, 2, &row.control.control_description)?;
        sheet.write_string(r, 3, &row.control.region)?;
        sheet.write_string(r, 4, &row.control.account_id)?;
        sheet.write_string(r, 5, &row.control.resource)?;
        sheet.write_string(r, 6, &row.control.reason)?;
        sheet.write_string(r, 7, row.control.status.as_str())?;
        sheet.write_string(r, 8, row.priority.as_str())?;
        sheet.write_string(r, 9, &row.recommendation)?;
        sheet.write_number(r, 10, row.risk_score)?;
    }
    Ok(())
}

fn write_priority_summary(
    sheet: &mut Worksheet,
    counts: &[(Priority, usize)],
    header_format: &Format,
) -> Result<(), XlsxError> {
    sheet.write_string_with_format(0, 0, "priority", header_format)?;
    sheet.write_string_with_format(0, 1, "count", header_format)?;

    for (i, (priority, count)) in counts.iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_string(r, 0, priority.as_str())?;
        sheet.write_number(r, 1, *count as f64)?;
    }
    Ok(())
}

fn write_summary_table(
    sheet: &mut Worksheet,
    lines: &[SummaryLine],
    header_format: &Format,
) -> Result<(), XlsxError> {
    for (col, header) in SUMMARY_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, header_format)?;
    }

    for (i, line) in lines.iter().enumerate() {
        let r = i as u32 + 1;
        match line {
            SummaryLine::Row(row) => {
                sheet.write_number(r, 0, row.sr_no as f64)?;
                sheet.write_string(r, 1, &row.service)?;
                sheet.write_string(r, 2, &row.control_title)?;
                sheet.write_string(r, 3, &row.description)?;
                sheet.write_number(r, 4, row.open_issues as f64)?;
                sheet.write_string(r, 5, row.priority.as_str())?;
            }
            // separator rows stay blank; the row itself still advances
            SummaryLine::Separator => {}
        }
    }
    Ok(())
}
