//! Top-level pipeline error.

use super::error_code::ErrorCode;
use super::{ConfigError, LoadError, ReportError};

/// Umbrella error surfaced to the CLI. All stage errors propagate here and
/// terminate the run; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Load(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
