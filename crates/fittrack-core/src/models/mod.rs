// ABOUTME: Core data models for FitTrack
// ABOUTME: Re-exports profile, target, food and log types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Foods and nutrient totals
pub mod food;
/// Dated meal, workout and weight records
pub mod logs;
/// Body metrics, enumerations and the persisted profile
pub mod profile;
/// Calculator inputs and outputs
pub mod targets;

pub use food::{Food, FoodDraft, Nutrients};
pub use logs::{
    Baseline, FoodLogEntry, MealType, WeightEntry, WorkoutDetails, WorkoutDraft, WorkoutEntry,
};
pub use profile::{ActivityLevel, BodyProfile, Gender, Goal, MacroPreferences, UserProfile};
pub use targets::{MacroTargets, TargetParams, TargetResult};
