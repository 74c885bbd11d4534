// ABOUTME: Dated workout log for strength and cardio sessions
// ABOUTME: Validates drafts, persists entries and sums daily training volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use chrono::NaiveDate;
use fittrack_core::constants::storage_keys;
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{WorkoutDetails, WorkoutDraft, WorkoutEntry};
use tracing::info;
use uuid::Uuid;

use crate::storage::{load_json, load_json_or_else, save_json, KeyValueStore};

/// Persisted list of workouts
#[derive(Clone)]
pub struct WorkoutLog {
    store: Arc<dyn KeyValueStore>,
}

impl WorkoutLog {
    /// Create a log over the given backend
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// All workouts in insertion order
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails
    pub fn entries(&self) -> AppResult<Vec<WorkoutEntry>> {
        load_json_or_else(self.store.as_ref(), storage_keys::WORKOUT_LOGS, Vec::new)
    }

    fn entries_for_update(&self) -> AppResult<Vec<WorkoutEntry>> {
        Ok(load_json(self.store.as_ref(), storage_keys::WORKOUT_LOGS)?.unwrap_or_default())
    }

    /// Record a workout on `date`
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when the name or muscle group is blank,
    /// `InvalidInput` for negative or non-finite amounts, `SerializationError`
    /// if the stored log is corrupt, or a storage error
    pub fn add(&self, date: NaiveDate, draft: &WorkoutDraft) -> AppResult<WorkoutEntry> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(AppError::missing_field("name"));
        }
        let muscle_group = draft.muscle_group.trim();
        if muscle_group.is_empty() {
            return Err(AppError::missing_field("muscle group"));
        }
        validate_details(&draft.details)?;

        let entry = WorkoutEntry {
            id: Uuid::new_v4().to_string(),
            date,
            name: name.to_owned(),
            muscle_group: muscle_group.to_owned(),
            details: draft.details,
        };
        let mut entries = self.entries_for_update()?;
        entries.push(entry.clone());
        save_json(self.store.as_ref(), storage_keys::WORKOUT_LOGS, &entries)?;
        info!(entry_id = %entry.id, %date, name = %entry.name, "Workout logged");
        Ok(entry)
    }

    /// Remove a workout
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, `SerializationError` if the
    /// stored log is corrupt, or a storage error
    pub fn delete(&self, id: &str) -> AppResult<()> {
        let mut entries = self.entries_for_update()?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            return Err(AppError::not_found("Workout").with_resource_id(id));
        }
        save_json(self.store.as_ref(), storage_keys::WORKOUT_LOGS, &entries)?;
        info!(entry_id = %id, "Workout deleted");
        Ok(())
    }

    /// Workouts for one day
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails
    pub fn entries_for(&self, date: NaiveDate) -> AppResult<Vec<WorkoutEntry>> {
        Ok(self
            .entries()?
            .into_iter()
            .filter(|entry| entry.date == date)
            .collect())
    }

    /// Sum of sets x reps x weight over the day's strength workouts (kg)
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails
    pub fn total_volume_kg(&self, date: NaiveDate) -> AppResult<f64> {
        Ok(self
            .entries_for(date)?
            .iter()
            .map(|entry| entry.details.volume_kg())
            .sum())
    }
}

fn validate_details(details: &WorkoutDetails) -> AppResult<()> {
    let amounts = match *details {
        WorkoutDetails::Strength { weight_kg, .. } => vec![("weight", weight_kg)],
        WorkoutDetails::Cardio {
            duration_min,
            distance_km,
        } => vec![("duration", duration_min), ("distance", distance_km)],
    };
    for (field, value) in amounts {
        if !(value.is_finite() && value >= 0.0) {
            return Err(AppError::invalid_input(format!(
                "{field} must be zero or more, got {value}"
            )));
        }
    }
    Ok(())
}
