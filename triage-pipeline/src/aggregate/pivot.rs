//! Service × priority pivot for the priority-distribution heatmap.

use triage_core::types::{EnrichedControl, Priority};

/// Count matrix: one row per service, one column per priority present in
/// the data. `counts[service][priority]` is the number of controls.
#[derive(Debug, Clone)]
pub struct PriorityPivot {
    pub services: Vec<String>,
    pub priorities: Vec<Priority>,
    pub counts: Vec<Vec<u32>>,
}

impl PriorityPivot {
    pub fn max_count(&self) -> u32 {
        self.counts
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty() || self.priorities.is_empty()
    }
}

/// Canonical column order; priorities outside this list are appended in
/// first-encounter order.
const PRIORITY_ORDER: [Priority; 5] = [
    Priority::High,
    Priority::Medium,
    Priority::Low,
    Priority::Safe,
    Priority::NoPriority,
];

/// Build the pivot. Services keep first-encounter order.
pub fn priority_pivot(rows: &[EnrichedControl]) -> PriorityPivot {
    let mut priorities: Vec<Priority> = PRIORITY_ORDER
        .iter()
        .filter(|p| rows.iter().any(|r| r.priority == **p))
        .cloned()
        .collect();
    for row in rows {
        if !priorities.contains(&row.priority) {
            priorities.push(row.priority.clone());
        }
    }

    let mut services: Vec<String> = Vec::new();
    for row in rows {
        if !services.contains(&row.control.title) {
            services.push(row.control.title.clone());
        }
    }

    let mut counts = vec![vec![0u32; priorities.len()]; services.len()];
    for row in rows {
        let s = services.iter().position(|t| *t == row.control.title);
        let p = priorities.iter().position(|q| *q == row.priority);
        if let (Some(s), Some(p)) = (s, p) {
            counts[s][p] += 1;
        }
    }

    PriorityPivot {
        services,
        priorities,
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::types::{ControlRow, Status};

    fn row(title: &str, priority: Priority) -> EnrichedControl {
        EnrichedControl {
            control: ControlRow {
                title: title.to_string(),
                control_title: "c".to_string(),
                control_description: String::new(),
                status: Status::Ok,
                region: String::new(),
                account_id: String::new(),
                resource: String::new(),
                reason: String::new(),
            },
            priority,
            recommendation: String::new(),
            risk_score: 0.0,
        }
    }

    #[test]
    fn pivot_counts_and_orders() {
        let rows = vec![
            row("EC2", Priority::Low),
            row("EC2", Priority::High),
            row("S3", Priority::High),
            row("EC2", Priority::High),
        ];
        let pivot = priority_pivot(&rows);
        assert_eq!(pivot.services, ["EC2", "S3"]);
        // canonical order puts High before Low even though Low came first
        assert_eq!(pivot.priorities, [Priority::High, Priority::Low]);
        assert_eq!(pivot.counts[0], [2, 1]);
        assert_eq!(pivot.counts[1], [1, 0]);
        assert_eq!(pivot.max_count(), 2);
    }

    #[test]
    fn empty_rows_give_empty_pivot() {
        let pivot = priority_pivot(&[]);
        assert!(pivot.is_empty());
        assert_eq!(pivot.max_count(), 0);
    }
}
