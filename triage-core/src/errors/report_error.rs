//! Reporter errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while writing report artifacts. Partial outputs are
/// not cleaned up; a failed run may leave files behind.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Workbook error for {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    #[error("Chart '{chart}' failed: {message}")]
    Chart { chart: String, message: String },

    #[error("JSON serialization failed: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl ErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Chart { .. } => error_code::CHART_ERROR,
            _ => error_code::REPORT_ERROR,
        }
    }
}
