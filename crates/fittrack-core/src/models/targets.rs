// ABOUTME: Output of the target calculation pipeline
// ABOUTME: BMR, TDEE, calorie target and integer macro gram targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::profile::{ActivityLevel, BodyProfile, Goal, MacroPreferences, UserProfile};

/// Daily macronutrient targets in whole grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MacroTargets {
    /// Protein target (g)
    pub protein_g: u32,
    /// Fat target (g)
    pub fat_g: u32,
    /// Carbohydrate target (g); the caloric residual, never negative
    pub carb_g: u32,
}

/// Complete energy and macro target result
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TargetResult {
    /// Basal Metabolic Rate (kcal/day), full precision
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: u32,
    /// Goal-adjusted daily calorie target (kcal/day)
    #[serde(rename = "calorieTarget")]
    pub calorie_target: u32,
    /// Macro gram targets
    pub macros: MacroTargets,
}

/// Everything the pipeline needs, as explicit arguments
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TargetParams {
    /// Body measurements
    pub body: BodyProfile,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Dietary goal
    pub goal: Goal,
    /// Macro preferences
    pub preferences: MacroPreferences,
}

impl From<&UserProfile> for TargetParams {
    fn from(profile: &UserProfile) -> Self {
        Self {
            body: profile.body,
            activity_level: profile.activity_level,
            goal: profile.goal,
            preferences: profile.settings,
        }
    }
}
