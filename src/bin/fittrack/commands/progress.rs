// ABOUTME: Weight and baseline commands for the fittrack CLI
// ABOUTME: Record daily weight, show history, and set/show/reset the baseline snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use fittrack::errors::{AppError, AppResult};
use fittrack::models::Baseline;
use fittrack::tracker::FitTracker;
use serde_json::json;

use crate::helpers::display::{print_baseline, print_weights, Output};

/// Record the weight for a day; the profile weight follows the latest entry
pub fn record_weight(
    tracker: &FitTracker,
    date: NaiveDate,
    weight_kg: f64,
    output: &Output,
) -> AppResult<()> {
    let entry = tracker.record_weight(date, weight_kg)?;
    output.emit(&entry, || {
        println!("Recorded {:.1} kg on {}.", entry.weight_kg, entry.date);
    });
    Ok(())
}

/// Show every recorded weight
pub fn weight_history(tracker: &FitTracker, output: &Output) -> AppResult<()> {
    let entries = tracker.weights.entries()?;
    output.emit(&entries, || print_weights(&entries));
    Ok(())
}

/// Snapshot the current weight and calorie target, replacing any existing baseline
pub fn set_baseline(tracker: &FitTracker, today: NaiveDate, output: &Output) -> AppResult<()> {
    let profile = tracker.profile.load()?;
    let targets = tracker.profile.targets_for(&profile)?;
    let weight_kg = tracker
        .weights
        .latest()?
        .map_or(profile.body.weight_kg, |entry| entry.weight_kg);
    let baseline = Baseline {
        date: today,
        weight_kg,
        calorie_target: targets.calorie_target,
        macros: Some(targets.macros),
    };
    tracker.baseline.set_baseline(&baseline)?;
    output.emit(&baseline, || {
        println!("Baseline set.");
        print_baseline(&baseline, None);
    });
    Ok(())
}

/// Show the baseline and the weight change since
pub fn show_baseline(tracker: &FitTracker, output: &Output) -> AppResult<()> {
    let baseline = tracker
        .baseline
        .baseline()?
        .ok_or_else(|| AppError::not_found("Baseline"))?;
    let profile = tracker.profile.load()?;
    let change_kg = tracker
        .baseline
        .change_since_baseline(&tracker.weights, profile.body.weight_kg)?;
    output.emit(
        &json!({ "baseline": baseline, "change_kg": change_kg }),
        || print_baseline(&baseline, change_kg),
    );
    Ok(())
}

/// Forget the baseline
pub fn reset_baseline(tracker: &FitTracker, output: &Output) -> AppResult<()> {
    tracker.baseline.reset_baseline()?;
    output.done("Baseline reset.", None);
    Ok(())
}
