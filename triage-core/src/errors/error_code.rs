//! ErrorCode trait for structured CLI error reporting.

/// Trait for mapping triage errors to stable code strings. Every error enum
/// implements this so the CLI can print `[CODE] message` lines that scripts
/// can grep for.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "LOAD_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted CLI error string: `[ERROR_CODE] message`.
    fn code_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the CLI boundary.
pub const LOAD_ERROR: &str = "LOAD_ERROR";
pub const UNSUPPORTED_FORMAT: &str = "UNSUPPORTED_FORMAT";
pub const MISSING_COLUMN: &str = "MISSING_COLUMN";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
pub const CHART_ERROR: &str = "CHART_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
