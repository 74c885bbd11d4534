// ABOUTME: Criterion benchmarks for the nutrition target pipeline and daily aggregation
// ABOUTME: Measures BMR to macros computation and per-day totals over growing food logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the nutrition pipeline.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fittrack::daily_log::LogAggregator;
use fittrack::intelligence::{calculate_bmr, TargetCalculator};
use fittrack::models::{ActivityLevel, Goal, MealType, TargetParams, UserProfile};
use fittrack::tracker::FitTracker;

const LOG_SIZES: [usize; 3] = [10, 100, 1000];

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let calculator = TargetCalculator::default();
    let profile = UserProfile::default();

    group.bench_function("bmr", |b| {
        let config = &calculator.config().bmr;
        b.iter(|| {
            calculate_bmr(
                black_box(80.0),
                black_box(180.0),
                black_box(30),
                profile.body.gender,
                config,
            )
        });
    });

    group.bench_function("full_targets", |b| {
        let params = TargetParams::from(&profile);
        b.iter(|| calculator.compute(black_box(&params)));
    });

    group.bench_function("all_levels_and_goals", |b| {
        b.iter(|| {
            for level in ActivityLevel::ALL {
                for goal in Goal::ALL {
                    let params = TargetParams {
                        activity_level: level,
                        goal,
                        ..TargetParams::from(&profile)
                    };
                    let _ = black_box(calculator.compute(&params));
                }
            }
        });
    });

    group.finish();
}

fn bench_daily_totals(c: &mut Criterion) {
    let mut group = c.benchmark_group("daily_totals");
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    for size in LOG_SIZES {
        let tracker = FitTracker::in_memory();
        for index in 0..size {
            let date = start + Duration::days((index % 7) as i64);
            let meal = MealType::ALL[index % MealType::ALL.len()];
            let food_id = (index % 50 + 1).to_string();
            tracker
                .food_log
                .add(date, &food_id, meal, 100.0, &tracker.foods)
                .unwrap();
        }
        let entries = tracker.food_log.entries().unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| LogAggregator::daily_totals(black_box(entries), start));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_daily_totals);
criterion_main!(benches);
