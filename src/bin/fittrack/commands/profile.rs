// ABOUTME: Profile commands for the fittrack CLI
// ABOUTME: Shows the stored profile and applies field edits through the form parser
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use clap::Args;
use fittrack::errors::AppResult;
use fittrack::intelligence::calculate_macro_percentages;
use fittrack::models::{TargetResult, UserProfile};
use fittrack::profile_store::ProfileForm;
use fittrack::tracker::FitTracker;
use serde::Serialize;
use tracing::info;

use crate::helpers::display::{print_profile, print_targets, Output};

/// Profile fields; anything omitted keeps the stored value
#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    /// Body weight in kg
    #[arg(long)]
    pub weight: Option<String>,

    /// Height in cm
    #[arg(long)]
    pub height: Option<String>,

    /// Age in years
    #[arg(long)]
    pub age: Option<String>,

    /// male or female
    #[arg(long)]
    pub gender: Option<String>,

    /// sedentary, light, moderate, very or extra
    #[arg(long)]
    pub activity_level: Option<String>,

    /// cut, maintain or bulk
    #[arg(long)]
    pub goal: Option<String>,

    /// Protein grams per kg of body weight
    #[arg(long)]
    pub protein_factor: Option<String>,

    /// Fraction of calories from fat (0-1)
    #[arg(long)]
    pub fat_percentage: Option<String>,

    /// Display name
    #[arg(long)]
    pub name: Option<String>,

    /// Contact e-mail
    #[arg(long)]
    pub email: Option<String>,
}

impl ProfileArgs {
    /// Whether no field was given
    pub const fn is_empty(&self) -> bool {
        self.weight.is_none()
            && self.height.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.activity_level.is_none()
            && self.goal.is_none()
            && self.protein_factor.is_none()
            && self.fat_percentage.is_none()
            && self.name.is_none()
            && self.email.is_none()
    }

    /// Stored profile with the given fields replaced, parsed and validated
    pub fn merged_with(&self, profile: &UserProfile) -> AppResult<UserProfile> {
        let mut form = ProfileForm::from(profile);
        let overrides = [
            (&mut form.weight, &self.weight),
            (&mut form.height, &self.height),
            (&mut form.age, &self.age),
            (&mut form.gender, &self.gender),
            (&mut form.activity_level, &self.activity_level),
            (&mut form.goal, &self.goal),
            (&mut form.protein_factor, &self.protein_factor),
            (&mut form.fat_percentage, &self.fat_percentage),
            (&mut form.display_name, &self.name),
            (&mut form.email, &self.email),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                field.clone_from(value);
            }
        }
        form.parse(&profile.id)
    }
}

#[derive(Serialize)]
struct ProfileView<'a> {
    profile: &'a UserProfile,
    targets: &'a TargetResult,
}

/// Show the stored profile and its targets
pub fn show(tracker: &FitTracker, output: &Output) -> AppResult<()> {
    let profile = tracker.profile.load()?;
    let targets = tracker.profile.targets_for(&profile)?;
    let macronutrients = &tracker.profile.calculator().config().macronutrients;
    output.emit(&ProfileView { profile: &profile, targets: &targets }, || {
        print_profile(&profile);
        println!();
        print_targets(
            &targets,
            &calculate_macro_percentages(&targets.macros, macronutrients),
        );
    });
    Ok(())
}

/// Apply field edits, recompute targets, and snapshot a baseline the first time
pub fn set(
    tracker: &FitTracker,
    args: &ProfileArgs,
    today: NaiveDate,
    output: &Output,
) -> AppResult<()> {
    let current = tracker.profile.load()?;
    let profile = args.merged_with(&current)?;
    let (targets, baseline) = tracker.apply_profile(&profile, today)?;
    info!(calorie_target = targets.calorie_target, baseline = %baseline.date, "Profile applied");

    let macronutrients = &tracker.profile.calculator().config().macronutrients;
    output.emit(&ProfileView { profile: &profile, targets: &targets }, || {
        println!("Profile updated.");
        println!();
        print_profile(&profile);
        println!();
        print_targets(
            &targets,
            &calculate_macro_percentages(&targets.macros, macronutrients),
        );
    });
    Ok(())
}
