//! Tabular file loading. The format is inferred from the file extension:
//! `.csv` is read as delimited text, `.xlsx`/`.xls` through the spreadsheet
//! reader. Anything else is rejected up front.

pub mod csv_source;
pub mod decode;
pub mod excel;

use std::path::Path;

use triage_core::errors::LoadError;
use triage_core::types::Table;

pub use decode::{decode_annotations, decode_controls};

/// Read a tabular file into memory, preserving column names and row order.
pub fn load_table(path: &Path) -> Result<Table, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match ext.as_deref() {
        Some("csv") => csv_source::load_csv(path),
        Some("xlsx") | Some("xls") => excel::load_excel(path),
        _ => Err(LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
