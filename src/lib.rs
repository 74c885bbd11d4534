// ABOUTME: Main library entry point for the FitTrack single-user fitness tracker
// ABOUTME: Exposes the target calculator, persistence layer and the profile/food/log stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitTrack
//!
//! A single-user fitness tracker. The core is a deterministic pipeline that
//! turns body metrics, activity level, goal and macro preferences into daily
//! energy and macronutrient targets:
//!
//! ```text
//! BMR (Mifflin-St Jeor) -> TDEE -> goal-adjusted calorie target -> macros
//! ```
//!
//! Around it sit a food database, dated food/workout/weight logs and a
//! baseline snapshot, all persisted as JSON documents in a [`storage::KeyValueStore`].
//!
//! ## Example Usage
//!
//! ```rust
//! use fittrack::config::NutritionConfig;
//! use fittrack::intelligence::calculate_targets;
//! use fittrack::models::{TargetParams, UserProfile};
//!
//! let params = TargetParams::from(&UserProfile::default());
//! let result = calculate_targets(&params, &NutritionConfig::default()).unwrap();
//! assert_eq!(result.calorie_target, 2759);
//! ```

/// Configuration management
pub mod config;

/// Dated food log and daily totals
pub mod daily_log;

/// Editable food database
pub mod food_database;

/// Nutrition target calculation
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Persisted user profile
pub mod profile_store;

/// Weight history and baseline
pub mod progress;

/// Key-value persistence
pub mod storage;

/// Dated workout log
pub mod workout_log;

/// Workspace wiring that opens every store over one backend
pub mod tracker;

pub use fittrack_core::{constants, errors, models};
