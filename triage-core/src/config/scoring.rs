//! Immutable risk-scoring and color tables.
//!
//! risk_score = priority_impact(priority) × status_multiplier(status),
//! rounded to 2 decimal places.

use crate::types::{Priority, Status};

/// Base impact of a priority classification.
pub fn priority_impact(priority: &Priority) -> f64 {
    match priority {
        Priority::High => 10.0,
        Priority::Medium => 5.0,
        Priority::Low => 2.0,
        Priority::Safe => 0.0,
        Priority::NoPriority | Priority::Other(_) => 0.0,
    }
}

/// Multiplier applied for the control's current status. Unknown statuses
/// keep the base impact unchanged.
pub fn status_multiplier(status: &Status) -> f64 {
    match status {
        Status::Alarm => 1.5,
        Status::Ok => 0.1,
        Status::Info => 0.2,
        Status::Skip => 0.1,
        Status::Other(_) => 1.0,
    }
}

/// RGB color assigned to each priority in charts and report formatting.
pub fn priority_color(priority: &Priority) -> (u8, u8, u8) {
    match priority {
        Priority::High => (0xFF, 0x00, 0x00),
        Priority::Medium => (0xFF, 0xA5, 0x00),
        Priority::Low => (0xFF, 0xFF, 0x00),
        Priority::Safe => (0x00, 0xFF, 0x00),
        Priority::NoPriority | Priority::Other(_) => (0xC0, 0xC0, 0xC0),
    }
}
