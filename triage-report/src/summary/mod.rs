//! Executive summary JSON output.

use std::path::Path;

use serde_json::{json, Map, Value};

use triage_core::errors::ReportError;
use triage_pipeline::aggregate::{RecommendationEntry, ServiceRisk};

/// Build the executive summary document. The high-risk services map and the
/// recommendations list keep their ranked order.
pub fn executive_summary(
    report_timestamp: &str,
    compliance_score: f64,
    total_controls: usize,
    top_services: &[ServiceRisk],
    top_recommendations: &[RecommendationEntry],
) -> Value {
    let mut services = Map::new();
    for s in top_services {
        services.insert(s.service.clone(), json!(s.total_risk));
    }

    let recommendations: Vec<Value> = top_recommendations
        .iter()
        .map(|r| {
            json!({
                "title": r.title,
                "control_title": r.control_title,
                "recommendation": r.recommendation,
                "risk_score": r.risk_score,
            })
        })
        .collect();

    json!({
        "report_timestamp": report_timestamp,
        "overall_compliance_score": format!("{compliance_score:.2}%"),
        "total_controls": total_controls,
        "top_high_risk_services": Value::Object(services),
        "top_recommendations": recommendations,
    })
}

/// Write the summary as pretty-printed JSON.
pub fn write_summary(path: &Path, summary: &Value) -> Result<(), ReportError> {
    let body = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, body).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "wrote executive summary");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_has_expected_fields() {
        let services = vec![ServiceRisk {
            service: "EC2".into(),
            total_risk: 30.0,
        }];
        let recs = vec![RecommendationEntry {
            title: "EC2".into(),
            control_title: "A".into(),
            recommendation: "fix".into(),
            risk_score: 15.0,
        }];

        let value = executive_summary("2026-08-06 12:00:00", 50.0, 4, &services, &recs);

        assert_eq!(value["overall_compliance_score"], "50.00%");
        assert_eq!(value["total_controls"], 4);
        assert_eq!(value["top_high_risk_services"]["EC2"], 30.0);
        assert_eq!(value["top_recommendations"][0]["risk_score"], 15.0);
    }
}
