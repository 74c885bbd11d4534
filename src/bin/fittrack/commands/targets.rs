// ABOUTME: Target calculation command for the fittrack CLI
// ABOUTME: Runs the pipeline on the stored profile, optionally with ad-hoc overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fittrack::errors::AppResult;
use fittrack::intelligence::{calculate_macro_percentages, MacroPercentages};
use fittrack::models::TargetResult;
use fittrack::tracker::FitTracker;
use serde::Serialize;
use tracing::debug;

use super::profile::ProfileArgs;
use crate::helpers::display::{print_targets, Output};

#[derive(Serialize)]
struct TargetsView {
    #[serde(flatten)]
    targets: TargetResult,
    split: MacroPercentages,
}

/// Compute and print targets; overrides are never persisted
pub fn run(tracker: &FitTracker, overrides: &ProfileArgs, output: &Output) -> AppResult<()> {
    let stored = tracker.profile.load()?;
    let profile = if overrides.is_empty() {
        stored
    } else {
        debug!("Computing targets with command-line overrides");
        overrides.merged_with(&stored)?
    };

    let targets = tracker.profile.targets_for(&profile)?;
    let split = calculate_macro_percentages(
        &targets.macros,
        &tracker.profile.calculator().config().macronutrients,
    );
    output.emit(&TargetsView { targets, split }, || print_targets(&targets, &split));
    Ok(())
}
