// ABOUTME: Resource container that opens every FitTrack store over one shared backend
// ABOUTME: Also hosts the few workflows that span several stores (apply profile, day summary)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tracker
//!
//! [`FitTracker`] is built once per process and handed to whatever drives the
//! stores (the CLI, tests). All stores share one `Arc<dyn KeyValueStore>`.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use fittrack_core::errors::AppResult;
use fittrack_core::models::{
    Baseline, FoodLogEntry, MealType, Nutrients, TargetResult, UserProfile, WeightEntry,
    WorkoutEntry,
};
use serde::Serialize;
use tracing::info;

use crate::config::{FitTrackConfig, NutritionConfig};
use crate::daily_log::{DailyProgress, FoodLog, LogAggregator};
use crate::food_database::FoodDatabase;
use crate::intelligence::TargetCalculator;
use crate::profile_store::ProfileStore;
use crate::progress::{BaselineStore, WeightHistory};
use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};
use crate::workout_log::WorkoutLog;

/// Everything logged for one day, with progress against the current targets
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    /// The day summarised
    pub date: NaiveDate,
    /// Food entries grouped by meal
    pub meals: BTreeMap<MealType, Vec<FoodLogEntry>>,
    /// Summed intake
    pub totals: Nutrients,
    /// Targets computed from the stored profile
    pub targets: TargetResult,
    /// Intake against targets
    pub progress: DailyProgress,
    /// Workouts logged that day
    pub workouts: Vec<WorkoutEntry>,
    /// Strength training volume (kg)
    pub volume_kg: f64,
}

/// Shared handles to every store
#[derive(Clone)]
pub struct FitTracker {
    /// Profile and targets
    pub profile: ProfileStore,
    /// Food database
    pub foods: FoodDatabase,
    /// Food log
    pub food_log: FoodLog,
    /// Workout log
    pub workouts: WorkoutLog,
    /// Weight history
    pub weights: WeightHistory,
    /// Baseline snapshot
    pub baseline: BaselineStore,
}

impl FitTracker {
    /// Wire every store to `store`, computing targets with `nutrition`
    #[must_use]
    pub fn with_store(store: Arc<dyn KeyValueStore>, nutrition: NutritionConfig) -> Self {
        Self {
            profile: ProfileStore::new(Arc::clone(&store), TargetCalculator::new(nutrition)),
            foods: FoodDatabase::new(Arc::clone(&store)),
            food_log: FoodLog::new(Arc::clone(&store)),
            workouts: WorkoutLog::new(Arc::clone(&store)),
            weights: WeightHistory::new(Arc::clone(&store)),
            baseline: BaselineStore::new(store),
        }
    }

    /// Open the JSON file store named by the configuration
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error if the store file cannot be opened
    pub fn open(config: &FitTrackConfig) -> AppResult<Self> {
        let store = JsonFileStore::open(config.storage.store_path())?;
        Ok(Self::with_store(Arc::new(store), config.nutrition.clone()))
    }

    /// Volatile tracker with default constants
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()), NutritionConfig::default())
    }

    /// Apply a profile and, the first time targets are applied, snapshot a baseline
    ///
    /// When the profile weight differs from the latest recorded weight (or none
    /// is recorded), it is also recorded as today's weight.
    ///
    /// # Errors
    ///
    /// Returns a calculator error for an invalid profile (nothing is written), or
    /// a storage error
    pub fn apply_profile(
        &self,
        profile: &UserProfile,
        today: NaiveDate,
    ) -> AppResult<(TargetResult, Baseline)> {
        let targets = self.profile.apply(profile)?;
        let weight_kg = profile.body.weight_kg;
        let weight_changed = self
            .weights
            .latest()?
            .is_none_or(|latest| (latest.weight_kg - weight_kg).abs() > f64::EPSILON);
        if weight_changed {
            self.weights.record(today, weight_kg)?;
        }
        let baseline = self.baseline.ensure_baseline(&Baseline {
            date: today,
            weight_kg,
            calorie_target: targets.calorie_target,
            macros: Some(targets.macros),
        })?;
        Ok((targets, baseline))
    }

    /// Record a day's weight; when it is the latest measurement the stored
    /// profile weight follows it
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-positive weight, or a storage error
    pub fn record_weight(&self, date: NaiveDate, weight_kg: f64) -> AppResult<WeightEntry> {
        let entry = self.weights.record(date, weight_kg)?;
        let is_latest = self
            .weights
            .latest()?
            .is_some_and(|latest| latest.date == entry.date);
        if is_latest {
            let mut profile = self.profile.load()?;
            if (profile.body.weight_kg - weight_kg).abs() > f64::EPSILON {
                profile.body.weight_kg = weight_kg;
                self.profile.save(&profile)?;
                info!(user_id = %profile.id, weight_kg, "Profile weight updated");
            }
        }
        Ok(entry)
    }

    /// Food, workouts and progress for one day
    ///
    /// # Errors
    ///
    /// Returns a storage error, or a calculator error if the stored profile is invalid
    pub fn day_summary(&self, date: NaiveDate) -> AppResult<DaySummary> {
        let entries = self.food_log.entries_for(date)?;
        let totals = LogAggregator::daily_totals(&entries, date);
        let targets = self.profile.current_targets()?;
        let progress = LogAggregator::progress(&totals, &targets);
        let workouts = self.workouts.entries_for(date)?;
        let volume_kg = workouts.iter().map(|w| w.details.volume_kg()).sum();

        let mut meals: BTreeMap<MealType, Vec<FoodLogEntry>> =
            MealType::ALL.into_iter().map(|meal| (meal, Vec::new())).collect();
        for entry in entries {
            meals.entry(entry.meal).or_default().push(entry);
        }

        Ok(DaySummary {
            date,
            meals,
            totals,
            targets,
            progress,
            workouts,
            volume_kg,
        })
    }
}
