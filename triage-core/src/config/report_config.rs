//! Report configuration, layered over compiled defaults from an optional
//! `triage.toml` file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_ANNOTATIONS_FILE, DEFAULT_REPORT_DIR};
use crate::errors::ConfigError;

use super::categories::{Category, ServiceCategories};

/// Configuration for a reporting run. Every field is optional; absent fields
/// fall back to the compiled defaults via the `effective_*` accessors.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory for generated artifacts. Default: "compliance_reports".
    pub report_dir: Option<PathBuf>,
    /// Default priority annotations workbook offered at the prompt.
    pub annotations_file: Option<PathBuf>,
    /// Category sections overriding the built-in AWS grouping.
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl ReportConfig {
    /// Load from `triage.toml` in the working directory, if present.
    pub fn discover() -> Result<Self, ConfigError> {
        Self::load(Path::new(CONFIG_FILE_NAME))
    }

    /// Load from a specific path. A missing file is not an error; it simply
    /// yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return Ok(Self::default()),
        };
        let config = toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded report config");
        Ok(config)
    }

    pub fn effective_report_dir(&self) -> &Path {
        self.report_dir
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_REPORT_DIR))
    }

    pub fn effective_annotations_file(&self) -> &Path {
        self.annotations_file
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_ANNOTATIONS_FILE))
    }

    pub fn effective_categories(&self) -> ServiceCategories {
        if self.categories.is_empty() {
            ServiceCategories::builtin()
        } else {
            ServiceCategories::from_entries(self.categories.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_absent() {
        let cfg = ReportConfig::load(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(cfg.effective_report_dir(), Path::new("compliance_reports"));
        assert_eq!(cfg.effective_categories().len(), 6);
    }

    #[test]
    fn toml_overrides_apply() {
        let cfg: ReportConfig = toml::from_str(
            r#"
            report_dir = "out"

            [[categories]]
            name = "Compute"
            services = ["EC2", "Lambda"]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.effective_report_dir(), Path::new("out"));
        let cats = cfg.effective_categories();
        assert_eq!(cats.len(), 1);
        assert!(cats.iter().next().unwrap().contains("Lambda"));
    }
}
