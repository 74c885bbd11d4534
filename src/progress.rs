// ABOUTME: Body weight history and the baseline snapshot used to measure change
// ABOUTME: One weight entry per day, kept sorted; baseline is set once and can be reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use chrono::NaiveDate;
use fittrack_core::constants::storage_keys;
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{Baseline, WeightEntry};
use tracing::{debug, info};

use crate::storage::{load_json, load_json_or_else, save_json, KeyValueStore};

/// Date-sorted body weight measurements
#[derive(Clone)]
pub struct WeightHistory {
    store: Arc<dyn KeyValueStore>,
}

impl WeightHistory {
    /// Create a history over the given backend
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// All measurements, oldest first
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails
    pub fn entries(&self) -> AppResult<Vec<WeightEntry>> {
        let mut entries: Vec<WeightEntry> =
            load_json_or_else(self.store.as_ref(), storage_keys::WEIGHT_HISTORY, Vec::new)?;
        entries.sort_by_key(|entry| entry.date);
        Ok(entries)
    }

    /// Record the weight for a day, replacing any earlier value for that day
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-positive weight, `SerializationError` if
    /// the stored history is corrupt, or a storage error
    pub fn record(&self, date: NaiveDate, weight_kg: f64) -> AppResult<WeightEntry> {
        if !(weight_kg.is_finite() && weight_kg > 0.0) {
            return Err(AppError::invalid_input(format!(
                "weight must be greater than zero, got {weight_kg}"
            )));
        }
        let entry = WeightEntry { date, weight_kg };
        let mut entries: Vec<WeightEntry> =
            load_json(self.store.as_ref(), storage_keys::WEIGHT_HISTORY)?.unwrap_or_default();
        entries.sort_by_key(|existing| existing.date);
        match entries.binary_search_by_key(&date, |existing| existing.date) {
            Ok(index) => entries[index] = entry,
            Err(index) => entries.insert(index, entry),
        }
        save_json(self.store.as_ref(), storage_keys::WEIGHT_HISTORY, &entries)?;
        info!(%date, weight_kg, "Weight recorded");
        Ok(entry)
    }

    /// Most recent measurement
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails
    pub fn latest(&self) -> AppResult<Option<WeightEntry>> {
        Ok(self.entries()?.last().copied())
    }
}

/// Persisted baseline snapshot
#[derive(Clone)]
pub struct BaselineStore {
    store: Arc<dyn KeyValueStore>,
}

impl BaselineStore {
    /// Create a baseline store over the given backend
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Current baseline, if one has been set
    ///
    /// # Errors
    ///
    /// Returns a storage error or a serialization error for a corrupt snapshot
    pub fn baseline(&self) -> AppResult<Option<Baseline>> {
        load_json(self.store.as_ref(), storage_keys::BASELINE)
    }

    /// Store a baseline, replacing any existing one
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-positive weight, or a storage error
    pub fn set_baseline(&self, baseline: &Baseline) -> AppResult<()> {
        if !(baseline.weight_kg.is_finite() && baseline.weight_kg > 0.0) {
            return Err(AppError::invalid_input(format!(
                "baseline weight must be greater than zero, got {}",
                baseline.weight_kg
            )));
        }
        save_json(self.store.as_ref(), storage_keys::BASELINE, baseline)?;
        info!(
            date = %baseline.date,
            weight_kg = baseline.weight_kg,
            calorie_target = baseline.calorie_target,
            "Baseline set"
        );
        Ok(())
    }

    /// Store a baseline only if none exists yet; returns the baseline in force
    ///
    /// # Errors
    ///
    /// Returns a storage error, or `InvalidInput` for a non-positive weight
    pub fn ensure_baseline(&self, baseline: &Baseline) -> AppResult<Baseline> {
        if let Some(existing) = self.baseline()? {
            debug!(date = %existing.date, "Baseline already set");
            return Ok(existing);
        }
        self.set_baseline(baseline)?;
        Ok(*baseline)
    }

    /// Forget the baseline
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails
    pub fn reset_baseline(&self) -> AppResult<()> {
        self.store.remove(storage_keys::BASELINE)?;
        info!("Baseline reset");
        Ok(())
    }

    /// Latest recorded weight minus the baseline weight
    ///
    /// Falls back to `fallback_weight_kg` (the profile weight) when no
    /// measurement has been recorded. `None` when no baseline is set.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails
    pub fn change_since_baseline(
        &self,
        history: &WeightHistory,
        fallback_weight_kg: f64,
    ) -> AppResult<Option<f64>> {
        let Some(baseline) = self.baseline()? else {
            return Ok(None);
        };
        let current = history
            .latest()?
            .map_or(fallback_weight_kg, |entry| entry.weight_kg);
        Ok(Some(current - baseline.weight_kg))
    }
}
