//! Spreadsheet input via calamine. Reads the first worksheet.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use triage_core::errors::LoadError;
use triage_core::types::Table;

/// Read the first worksheet of an `.xlsx`/`.xls` workbook into a [`Table`].
/// The first row is the header row; an empty worksheet yields an empty table.
pub fn load_excel(path: &Path) -> Result<Table, LoadError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| map_calamine_error(path, e))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| LoadError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| map_calamine_error(path, e))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(cell_to_string).collect(),
        None => return Ok(Table::default()),
    };

    let mut table = Table::new(headers);
    for row in rows {
        table.push_row(row.iter().map(cell_to_string).collect());
    }

    tracing::debug!(
        path = %path.display(),
        sheet = %sheet_name,
        rows = table.row_count(),
        "loaded spreadsheet"
    );
    Ok(table)
}

/// Render a cell to its string form. Integral floats drop the trailing `.0`
/// so numeric priority codes survive as `1`/`2`/`3`.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
    }
}

fn map_calamine_error(path: &Path, err: calamine::Error) -> LoadError {
    match err {
        calamine::Error::Io(source) => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => LoadError::Spreadsheet {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_floats_render_without_fraction() {
        assert_eq!(cell_to_string(&Data::Float(1.0)), "1");
        assert_eq!(cell_to_string(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_to_string(&Data::Int(3)), "3");
    }

    #[test]
    fn empty_cells_render_as_empty_strings() {
        assert_eq!(cell_to_string(&Data::Empty), "");
    }
}
