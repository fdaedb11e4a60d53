//! Timestamped artifact naming. Every output carries the run timestamp so
//! consecutive runs never collide.

use std::path::{Path, PathBuf};

use triage_core::constants::ARTIFACT_TIMESTAMP_FORMAT;
use triage_core::errors::ReportError;

/// Resolved output locations for one reporting run.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    dir: PathBuf,
    base: String,
    timestamp: String,
}

impl ReportPaths {
    /// Paths rooted at `dir`, named after the input file's stem, stamped
    /// with the current local time.
    pub fn new(dir: &Path, input: &Path) -> Self {
        let timestamp = chrono::Local::now()
            .format(ARTIFACT_TIMESTAMP_FORMAT)
            .to_string();
        Self::with_timestamp(dir, input, timestamp)
    }

    /// Same as [`ReportPaths::new`] with an explicit timestamp.
    pub fn with_timestamp(dir: &Path, input: &Path, timestamp: String) -> Self {
        let base = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("report")
            .to_string();
        Self {
            dir: dir.to_path_buf(),
            base,
            timestamp,
        }
    }

    /// Create the report directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<(), ReportError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| ReportError::Io {
            path: self.dir.clone(),
            source,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn workbook(&self) -> PathBuf {
        self.dir
            .join(format!("{}_compliance_report_{}.xlsx", self.base, self.timestamp))
    }

    pub fn summary(&self) -> PathBuf {
        self.dir
            .join(format!("{}_executive_summary_{}.json", self.base, self.timestamp))
    }

    pub fn chart(&self, name: &str) -> PathBuf {
        self.dir
            .join(format!("{}_{}_{}.png", self.base, name, self.timestamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_carry_stem_and_timestamp() {
        let paths = ReportPaths::with_timestamp(
            Path::new("compliance_reports"),
            Path::new("scans/aws_benchmark.csv"),
            "20260806_120000".to_string(),
        );
        assert_eq!(
            paths.workbook(),
            Path::new("compliance_reports/aws_benchmark_compliance_report_20260806_120000.xlsx")
        );
        assert_eq!(
            paths.chart("priority_heatmap"),
            Path::new("compliance_reports/aws_benchmark_priority_heatmap_20260806_120000.png")
        );
    }
}
