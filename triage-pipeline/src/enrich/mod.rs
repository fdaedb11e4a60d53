//! Data enrichment: join each control row against the priority annotations
//! by exact control title and attach priority, recommendation, and risk
//! score. Rows with no matching annotation degrade to defaults instead of
//! failing.

pub mod risk;

use triage_core::types::collections::FxHashMap;
use triage_core::types::{ControlRow, EnrichedControl, PriorityRecord};

/// Indexed lookup from control title to its first matching annotation.
/// The annotations table does not guarantee unique keys; the first row
/// encountered wins.
pub struct PriorityIndex {
    map: FxHashMap<String, PriorityRecord>,
}

impl PriorityIndex {
    pub fn build(records: &[PriorityRecord]) -> Self {
        let mut map: FxHashMap<String, PriorityRecord> = FxHashMap::default();
        for record in records {
            map.entry(record.control_title.clone())
                .or_insert_with(|| record.clone());
        }
        Self { map }
    }

    pub fn lookup(&self, control_title: &str) -> Option<&PriorityRecord> {
        self.map.get(control_title)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Produce exactly one enriched row per input row. Pure: the same inputs
/// always yield the same output sequence.
pub fn enrich(rows: Vec<ControlRow>, index: &PriorityIndex) -> Vec<EnrichedControl> {
    let total = rows.len();
    let mut matched = 0usize;

    let enriched: Vec<EnrichedControl> = rows
        .into_iter()
        .map(|row| match index.lookup(&row.control_title) {
            Some(record) => {
                matched += 1;
                EnrichedControl {
                    risk_score: risk::risk_score(&record.priority, &row.status),
                    priority: record.priority.clone(),
                    recommendation: record.recommendation.clone(),
                    control: row,
                }
            }
            None => EnrichedControl::unmatched(row),
        })
        .collect();

    tracing::info!(total, matched, "enriched control rows");
    enriched
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::types::Priority;

    fn record(title: &str, priority: Priority, rec: &str) -> PriorityRecord {
        PriorityRecord {
            control_title: title.to_string(),
            priority,
            recommendation: rec.to_string(),
        }
    }

    #[test]
    fn first_matching_record_wins_on_duplicate_keys() {
        let index = PriorityIndex::build(&[
            record("A", Priority::High, "first"),
            record("A", Priority::Low, "second"),
        ]);
        let hit = index.lookup("A").unwrap();
        assert_eq!(hit.priority, Priority::High);
        assert_eq!(hit.recommendation, "first");
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn lookup_is_exact_match() {
        let index = PriorityIndex::build(&[record("A", Priority::High, "r")]);
        assert!(index.lookup("a").is_none());
        assert!(index.lookup("A ").is_none());
    }
}
