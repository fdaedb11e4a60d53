//! Shared constants for the triage reporting engine.

/// Triage version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default directory for generated reports, plots, and summaries.
pub const DEFAULT_REPORT_DIR: &str = "compliance_reports";

/// Default priority annotations workbook.
pub const DEFAULT_ANNOTATIONS_FILE: &str = "PowerPipeControls_Annotations.xlsx";

/// Optional config file looked up next to the working directory.
pub const CONFIG_FILE_NAME: &str = "triage.toml";

/// Priority assigned to controls with no matching annotation.
pub const NO_PRIORITY_LABEL: &str = "No Priority";

/// Recommendation text for controls with no matching annotation.
pub const NO_RECOMMENDATION: &str = "No recommendation available";

/// Minimum cumulative risk for a service to appear in the high-risk ranking.
pub const HIGH_RISK_THRESHOLD: f64 = 5.0;

/// Number of entries kept in the high-risk service ranking.
pub const TOP_SERVICES: usize = 5;

/// Number of entries kept in the top recommendations list.
pub const TOP_RECOMMENDATIONS: usize = 5;

/// Timestamp suffix format for output artifacts (one run never collides
/// with another).
pub const ARTIFACT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
