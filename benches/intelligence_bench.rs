// ABOUTME: Criterion benchmarks for the RepCoach rules engine
// ABOUTME: Measures normalization, recommendation, weekly planning, and intent classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

//! Criterion benchmarks for the rules engine.
//!
//! Histories are synthetic and dated relative to a fixed instant so runs are
//! comparable; randomness comes from a seeded `ChaCha8Rng`.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use repcoach_core::constants::MUSCLE_MAP;
use repcoach_core::models::{Goal, HistoryEntry, Preferences};
use repcoach_intelligence::{
    classify_intent, generate_weekly_plan_at, normalize_history, recommend_workout_at,
};

const HISTORY_SIZES: [usize; 3] = [3, 30, 300];

fn bench_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Cycle through the muscle map, one session per day going backwards
#[allow(clippy::cast_possible_wrap)]
fn generate_history(count: usize) -> Vec<HistoryEntry> {
    let now = bench_now();
    (0..count)
        .map(|index| {
            let (name, _) = MUSCLE_MAP[(index * 7) % MUSCLE_MAP.len()];
            let date = now - Duration::days((count - index) as i64);
            HistoryEntry::named(name).with_date(date.to_rfc3339())
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_history");
    for size in HISTORY_SIZES {
        let history = generate_history(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &history, |b, history| {
            b.iter(|| normalize_history(black_box(history)));
        });
    }
    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend_workout");
    let now = bench_now();
    for size in HISTORY_SIZES {
        let history = generate_history(size);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &history, |b, history| {
            b.iter(|| recommend_workout_at(black_box(history), now, &mut rng));
        });
    }
    group.finish();
}

fn bench_weekly_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("weekly_plan");
    let now = bench_now();
    let history = generate_history(30);
    for days in [3_u32, 4, 5, 6] {
        let preferences = Preferences {
            goal: Goal::Strength,
            days_per_week: days,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        group.bench_with_input(BenchmarkId::new("days", days), &preferences, |b, prefs| {
            b.iter(|| generate_weekly_plan_at(black_box(&history), Some(prefs), now, &mut rng));
        });
    }
    group.finish();
}

fn bench_classify_intent(c: &mut Criterion) {
    let messages = [
        "why did you recommend this",
        "what should I do tomorrow?",
        "I feel really tired and sore after leg day",
        "can you give me a weekly schedule for the next 7 days",
        "how many calories should I eat for fat loss",
        "asdf",
    ];
    c.bench_function("classify_intent", |b| {
        b.iter(|| {
            for message in &messages {
                black_box(classify_intent(black_box(message)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_normalize,
    bench_recommend,
    bench_weekly_plan,
    bench_classify_intent
);
criterion_main!(benches);
