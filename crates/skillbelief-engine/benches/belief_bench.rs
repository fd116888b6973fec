use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use skillbelief_core::types::{EvidenceSignal, SourceType};
use skillbelief_engine::BeliefEngine;

fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

/// `count` signals for one skill, spread over roughly two years.
fn make_signals(skill: &str, count: usize) -> Vec<EvidenceSignal> {
    (0..count)
        .map(|i| {
            let source = SourceType::ALL[i % SourceType::ALL.len()];
            let score = 40.0 + (i * 37 % 60) as f64;
            EvidenceSignal::new(skill, source, score, as_of() - Duration::days((i * 7) as i64))
        })
        .collect()
}

fn bench_infer_100_signals(c: &mut Criterion) {
    let engine = BeliefEngine::new();
    let signals = make_signals("rust", 100);

    c.bench_function("infer_belief_100_signals", |b| {
        b.iter(|| {
            engine.infer_belief_at("rust", black_box(&signals), as_of());
        });
    });
}

fn bench_batch_50_skills(c: &mut Criterion) {
    let engine = BeliefEngine::new();
    let signals: Vec<EvidenceSignal> = (0..50)
        .flat_map(|s| make_signals(&format!("skill-{s}"), 20))
        .collect();

    c.bench_function("infer_beliefs_50_skills_x20", |b| {
        b.iter(|| {
            engine.infer_beliefs_at(black_box(&signals), as_of());
        });
    });
}

fn bench_sample_1000(c: &mut Criterion) {
    let engine = BeliefEngine::new();
    let posterior = engine.posterior_for(&make_signals("rust", 10));

    c.bench_function("sample_posterior_1000", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| {
            engine.sample_posterior_with(&posterior, 1000, &mut rng);
        });
    });
}

criterion_group!(
    benches,
    bench_infer_100_signals,
    bench_batch_50_skills,
    bench_sample_1000
);
criterion_main!(benches);
