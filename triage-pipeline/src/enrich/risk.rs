//! Risk scoring.
//!
//! risk_score = priority_impact(priority) × status_multiplier(status),
//! rounded to 2 decimal places. Deterministic and pure.

use triage_core::config::scoring::{priority_impact, status_multiplier};
use triage_core::types::{Priority, Status};

/// Combined risk score for one control.
pub fn risk_score(priority: &Priority, status: &Status) -> f64 {
    round2(priority_impact(priority) * status_multiplier(status))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
