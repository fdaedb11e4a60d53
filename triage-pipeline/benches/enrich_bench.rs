//! Enrichment hot-path benchmark.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use triage_core::types::{ControlRow, Priority, PriorityRecord, Status};
use triage_pipeline::enrich::{enrich, PriorityIndex};

fn fixture(rows: usize, annotations: usize) -> (Vec<ControlRow>, Vec<PriorityRecord>) {
    let controls = (0..rows)
        .map(|i| ControlRow {
            title: format!("Service{}", i % 40),
            control_title: format!("control-{}", i % annotations.max(1)),
            control_description: format!("description {i}"),
            status: match i % 4 {
                0 => Status::Alarm,
                1 => Status::Ok,
                2 => Status::Info,
                _ => Status::Skip,
            },
            region: "us-east-1".to_string(),
            account_id: "376921607482".to_string(),
            resource: format!("arn:aws:{i}"),
            reason: String::new(),
        })
        .collect();

    let records = (0..annotations)
        .map(|i| PriorityRecord {
            control_title: format!("control-{i}"),
            priority: match i % 4 {
                0 => Priority::High,
                1 => Priority::Medium,
                2 => Priority::Low,
                _ => Priority::Safe,
            },
            recommendation: format!("remediation {i}"),
        })
        .collect();

    (controls, records)
}

fn bench_enrich(c: &mut Criterion) {
    let (controls, records) = fixture(10_000, 500);
    let index = PriorityIndex::build(&records);

    c.bench_function("enrich_10k_rows", |b| {
        b.iter(|| enrich(black_box(controls.clone()), black_box(&index)))
    });

    c.bench_function("priority_index_build_500", |b| {
        b.iter(|| PriorityIndex::build(black_box(&records)))
    });
}

criterion_group!(benches, bench_enrich);
criterion_main!(benches);
