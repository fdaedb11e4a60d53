//! Control rows, priorities, statuses, and enriched rows.

use serde::{Serialize, Serializer};

use crate::constants::{NO_PRIORITY_LABEL, NO_RECOMMENDATION};

/// Check status of a single control, as exported by the scan tool.
///
/// Statuses outside the four known values are preserved verbatim so they
/// survive round-trips into the report sheets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    Alarm,
    Info,
    Skip,
    Other(String),
}

impl Status {
    /// Parse an exported status cell. Known values are matched exactly.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "ok" => Self::Ok,
            "alarm" => Self::Alarm,
            "info" => Self::Info,
            "skip" => Self::Skip,
            other => Self::Other(other.to_string()),
        }
    }

    /// An open issue is a control currently in alarm.
    pub fn is_open_issue(&self) -> bool {
        matches!(self, Self::Alarm)
    }

    /// Passed statuses count toward the compliance score.
    pub fn passed(&self) -> bool {
        matches!(self, Self::Ok | Self::Info | Self::Skip)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "ok",
            Self::Alarm => "alarm",
            Self::Info => "info",
            Self::Skip => "skip",
            Self::Other(s) => s,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Severity classification from the annotations table.
///
/// The alternate export format encodes priorities as the numeric codes
/// 1/2/3; those decode to the same variants as their word forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
    Safe,
    NoPriority,
    Other(String),
}

impl Priority {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "High" | "1" => Self::High,
            "Medium" | "2" => Self::Medium,
            "Low" | "3" => Self::Low,
            "Safe" => Self::Safe,
            s if s == NO_PRIORITY_LABEL => Self::NoPriority,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Safe => "Safe",
            Self::NoPriority => NO_PRIORITY_LABEL,
            Self::Other(s) => s,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One compliance check result for one AWS resource, as decoded from the
/// primary export. Immutable once decoded; enrichment produces a separate
/// [`EnrichedControl`].
#[derive(Debug, Clone, Serialize)]
pub struct ControlRow {
    /// Service name (e.g. "EC2", "S3").
    pub title: String,
    /// Join key against the annotations table.
    pub control_title: String,
    pub control_description: String,
    pub status: Status,
    pub region: String,
    pub account_id: String,
    pub resource: String,
    pub reason: String,
}

/// One row of the priority annotations table. The control_title key is not
/// guaranteed unique; the first row encountered wins.
#[derive(Debug, Clone, Serialize)]
pub struct PriorityRecord {
    pub control_title: String,
    pub priority: Priority,
    pub recommendation: String,
}

/// A control row plus the priority, recommendation, and risk score attached
/// by the enricher. Every decoded row yields exactly one enriched row.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedControl {
    #[serde(flatten)]
    pub control: ControlRow,
    pub priority: Priority,
    pub recommendation: String,
    pub risk_score: f64,
}

impl EnrichedControl {
    /// Defaults applied when no annotation matches the control title.
    pub fn unmatched(control: ControlRow) -> Self {
        Self {
            control,
            priority: Priority::NoPriority,
            recommendation: NO_RECOMMENDATION.to_string(),
            risk_score: 0.0,
        }
    }

    pub fn is_open_issue(&self) -> bool {
        self.control.status.is_open_issue()
    }

    pub fn passed(&self) -> bool {
        self.control.status.passed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_known_values() {
        assert_eq!(Status::parse("ok"), Status::Ok);
        assert_eq!(Status::parse(" alarm "), Status::Alarm);
        assert_eq!(Status::parse("info"), Status::Info);
        assert_eq!(Status::parse("skip"), Status::Skip);
    }

    #[test]
    fn status_parse_preserves_unknown() {
        let s = Status::parse("error");
        assert_eq!(s, Status::Other("error".to_string()));
        assert_eq!(s.as_str(), "error");
        assert!(!s.passed());
        assert!(!s.is_open_issue());
    }

    #[test]
    fn priority_numeric_codes_match_word_forms() {
        assert_eq!(Priority::parse("1"), Priority::parse("High"));
        assert_eq!(Priority::parse("2"), Priority::parse("Medium"));
        assert_eq!(Priority::parse("3"), Priority::parse("Low"));
    }

    #[test]
    fn priority_no_priority_round_trips() {
        let p = Priority::parse("No Priority");
        assert_eq!(p, Priority::NoPriority);
        assert_eq!(p.as_str(), "No Priority");
    }
}
