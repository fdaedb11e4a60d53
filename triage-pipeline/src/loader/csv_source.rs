//! CSV input.

use std::path::Path;

use triage_core::errors::LoadError;
use triage_core::types::Table;

/// Read a CSV file into a [`Table`]. The first record is the header row;
/// short rows are padded to the header width.
pub fn load_csv(path: &Path) -> Result<Table, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| map_csv_error(path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| map_csv_error(path, e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut table = Table::new(headers);
    for record in reader.records() {
        let record = record.map_err(|e| map_csv_error(path, e))?;
        table.push_row(record.iter().map(str::to_string).collect());
    }

    tracing::debug!(path = %path.display(), rows = table.row_count(), "loaded csv");
    Ok(table)
}

fn map_csv_error(path: &Path, err: csv::Error) -> LoadError {
    match err.into_kind() {
        csv::ErrorKind::Io(source) => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => LoadError::Csv {
            path: path.to_path_buf(),
            message: format!("{other:?}"),
        },
    }
}
