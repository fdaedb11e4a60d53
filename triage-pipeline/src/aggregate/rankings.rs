//! Top-N rankings: high-risk services and recommendations.

use serde::Serialize;

use triage_core::constants::{HIGH_RISK_THRESHOLD, TOP_RECOMMENDATIONS, TOP_SERVICES};
use triage_core::types::collections::FxHashMap;
use triage_core::types::EnrichedControl;

/// Cumulative risk for one service.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceRisk {
    pub service: String,
    pub total_risk: f64,
}

/// One entry of the top-recommendations list.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationEntry {
    pub title: String,
    pub control_title: String,
    pub recommendation: String,
    pub risk_score: f64,
}

/// Cumulative risk score per service title, in first-encounter order.
pub fn risk_by_service(rows: &[EnrichedControl]) -> Vec<ServiceRisk> {
    let mut order: Vec<ServiceRisk> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();

    for row in rows {
        match index.get(&row.control.title) {
            Some(&i) => order[i].total_risk += row.risk_score,
            None => {
                index.insert(row.control.title.clone(), order.len());
                order.push(ServiceRisk {
                    service: row.control.title.clone(),
                    total_risk: row.risk_score,
                });
            }
        }
    }
    order
}

/// Top services by cumulative risk: sums above the high-risk threshold,
/// sorted descending. Ties keep the order services were first encountered
/// in (the sort is stable).
pub fn top_risk_services(rows: &[EnrichedControl]) -> Vec<ServiceRisk> {
    let mut services: Vec<ServiceRisk> = risk_by_service(rows)
        .into_iter()
        .filter(|s| s.total_risk > HIGH_RISK_THRESHOLD)
        .collect();
    services.sort_by(|a, b| {
        b.total_risk
            .partial_cmp(&a.total_risk)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    services.truncate(TOP_SERVICES);
    services
}

/// Top recommendations: rows with positive risk, sorted descending by risk
/// score, truncated to the top five. Ties keep input order.
pub fn top_recommendations(rows: &[EnrichedControl]) -> Vec<RecommendationEntry> {
    let mut entries: Vec<RecommendationEntry> = rows
        .iter()
        .filter(|r| r.risk_score > 0.0)
        .map(|r| RecommendationEntry {
            title: r.control.title.clone(),
            control_title: r.control.control_title.clone(),
            recommendation: r.recommendation.clone(),
            risk_score: r.risk_score,
        })
        .collect();
    entries.sort_by(|a, b| {
        b.risk_score
            .partial_cmp(&a.risk_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    entries.truncate(TOP_RECOMMENDATIONS);
    entries
}
