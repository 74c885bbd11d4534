// ABOUTME: Intelligence module for deterministic nutrition target calculation
// ABOUTME: Re-exports the nutrition calculator pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure calculation code. Nothing in here reads or writes persistent state.

/// BMR, TDEE, calorie target and macro split
pub mod nutrition_calculator;

pub use nutrition_calculator::{
    calculate_bmr, calculate_calorie_target, calculate_macro_percentages, calculate_macros,
    calculate_targets, calculate_tdee, MacroPercentages, TargetCalculator,
};
