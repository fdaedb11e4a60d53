//! Loader errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while reading tabular input files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Unsupported file format: {path} (expected .csv, .xls, or .xlsx)")]
    UnsupportedFormat { path: PathBuf },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV parse error in {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("Spreadsheet error in {path}: {message}")]
    Spreadsheet { path: PathBuf, message: String },

    #[error("Spreadsheet {path} has no worksheets")]
    EmptyWorkbook { path: PathBuf },

    #[error("Required column '{column}' not found in {path}")]
    MissingColumn { path: PathBuf, column: String },
}

impl ErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat { .. } => error_code::UNSUPPORTED_FORMAT,
            Self::MissingColumn { .. } => error_code::MISSING_COLUMN,
            _ => error_code::LOAD_ERROR,
        }
    }
}
