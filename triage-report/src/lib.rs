//! Reporter boundary: serializes enriched rows, summary tables, and derived
//! charts into the run's output artifacts — a multi-sheet workbook, a JSON
//! executive summary, and a set of PNG charts. Pure I/O and formatting; all
//! analysis happens upstream in triage-pipeline.

pub mod charts;
pub mod paths;
pub mod summary;
pub mod workbook;

pub use paths::ReportPaths;
