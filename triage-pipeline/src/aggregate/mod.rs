//! Aggregation of enriched rows into the summaries the reporter consumes:
//! compliance score, priority counts, top-N rankings, category-sectioned
//! summary tables, and the service × priority pivot.

pub mod categories;
pub mod pivot;
pub mod rankings;
pub mod summary;

pub use categories::{category_summary, SummaryLine, SummaryRow};
pub use pivot::{priority_pivot, PriorityPivot};
pub use rankings::{risk_by_service, top_recommendations, top_risk_services, RecommendationEntry, ServiceRisk};
pub use summary::{
    compliance_score, open_issues_by_priority, open_issues_by_service, priority_counts,
    safe_controls_by_service,
};

use triage_core::types::EnrichedControl;

/// Owned safe (non-alarm) subset, reused for the safe summary table and the
/// safe sheet.
pub fn safe_subset(rows: &[EnrichedControl]) -> Vec<EnrichedControl> {
    rows.iter().filter(|r| !r.is_open_issue()).cloned().collect()
}

/// Owned open-issue subset for the unsafe sheet.
pub fn unsafe_subset(rows: &[EnrichedControl]) -> Vec<EnrichedControl> {
    rows.iter().filter(|r| r.is_open_issue()).cloned().collect()
}
