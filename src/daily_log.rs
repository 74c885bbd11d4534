// ABOUTME: Dated food log and the daily totals/progress aggregator
// ABOUTME: Entries carry nutrients scaled from the food's serving at the time of logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Daily Log
//!
//! [`FoodLog`] stores what was eaten; [`LogAggregator`] turns a day's entries
//! into totals and compares them with the computed targets. Progress is display
//! only and never feeds back into the calculator.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use fittrack_core::constants::storage_keys;
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{FoodLogEntry, MealType, Nutrients, TargetResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::food_database::FoodDatabase;
use crate::storage::{load_json, load_json_or_else, save_json, KeyValueStore};

/// Persisted list of food log entries
#[derive(Clone)]
pub struct FoodLog {
    store: Arc<dyn KeyValueStore>,
}

impl FoodLog {
    /// Create a log over the given backend
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// All entries in insertion order
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails
    pub fn entries(&self) -> AppResult<Vec<FoodLogEntry>> {
        load_json_or_else(self.store.as_ref(), storage_keys::FOOD_LOGS, Vec::new)
    }

    fn entries_for_update(&self) -> AppResult<Vec<FoodLogEntry>> {
        Ok(load_json(self.store.as_ref(), storage_keys::FOOD_LOGS)?.unwrap_or_default())
    }

    /// Log `quantity` (in the food's serving unit) of a food
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-positive quantity, `ResourceNotFound` for
    /// an unknown food, `SerializationError` if the stored log is corrupt, or a
    /// storage error
    pub fn add(
        &self,
        date: NaiveDate,
        food_id: &str,
        meal: MealType,
        quantity: f64,
        foods: &FoodDatabase,
    ) -> AppResult<FoodLogEntry> {
        if !(quantity.is_finite() && quantity > 0.0) {
            return Err(AppError::invalid_input(format!(
                "quantity must be greater than zero, got {quantity}"
            )));
        }
        let food = foods.get(food_id)?;
        let entry = FoodLogEntry {
            id: Uuid::new_v4().to_string(),
            date,
            meal,
            food_id: food.id.clone(),
            quantity,
            calculated: food.nutrients().scaled(quantity / food.serving_size),
        };

        let mut entries = self.entries_for_update()?;
        entries.push(entry.clone());
        save_json(self.store.as_ref(), storage_keys::FOOD_LOGS, &entries)?;
        info!(
            entry_id = %entry.id,
            %date,
            %meal,
            food = %food.name,
            calories = entry.calculated.calories,
            "Food logged"
        );
        Ok(entry)
    }

    /// Remove an entry
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
            return Err(AppError::not_found("Food log entry").with_resource_id(id));
        }
        save_json(self.store.as_ref(), storage_keys::FOOD_LOGS, &entries)?;
        info!(entry_id = %id, "Food log entry deleted");
        Ok(())
    }

    /// Entries for one day
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails
    pub fn entries_for(&self, date: NaiveDate) -> AppResult<Vec<FoodLogEntry>> {
        Ok(self
            .entries()?
            .into_iter()
            .filter(|entry| entry.date == date)
            .collect())
    }

    /// Entries for one day grouped by meal; every meal is present, possibly empty
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails
    pub fn entries_by_meal(
        &self,
        date: NaiveDate,
    ) -> AppResult<BTreeMap<MealType, Vec<FoodLogEntry>>> {
        let mut grouped: BTreeMap<MealType, Vec<FoodLogEntry>> =
            MealType::ALL.into_iter().map(|meal| (meal, Vec::new())).collect();
        for entry in self.entries_for(date)? {
            grouped.entry(entry.meal).or_default().push(entry);
        }
        Ok(grouped)
    }
}

/// One nutrient's standing against its target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroProgress {
    /// Amount eaten so far
    pub current: f64,
    /// Target amount
    pub target: f64,
    /// `current / target * 100`, or 0 when the target is 0
    pub percentage: f64,
    /// Whether `current` is above `target`
    pub exceeded: bool,
}

impl MacroProgress {
    /// Compare an amount with its target
    #[must_use]
    pub fn new(current: f64, target: f64) -> Self {
        let percentage = if target > 0.0 {
            current / target * 100.0
        } else {
            0.0
        };
        Self {
            current,
            target,
            percentage,
            exceeded: current > target,
        }
    }
}

/// A day's intake against the computed targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyProgress {
    /// Energy (kcal)
    pub calories: MacroProgress,
    /// Protein (g)
    pub protein: MacroProgress,
    /// Carbohydrates (g)
    pub carbs: MacroProgress,
    /// Fat (g)
    pub fat: MacroProgress,
}

/// Stateless reductions over food log entries
pub struct LogAggregator;

impl LogAggregator {
    /// Sum the nutrients of every entry dated `date`
    #[must_use]
    pub fn daily_totals(entries: &[FoodLogEntry], date: NaiveDate) -> Nutrients {
        let totals = entries
            .iter()
            .filter(|entry| entry.date == date)
            .fold(Nutrients::default(), |acc, entry| acc + entry.calculated);
        debug!(%date, calories = totals.calories, "Computed daily totals");
        totals
    }

    /// Calories per meal for `date`
    #[must_use]
    pub fn meal_calories(entries: &[FoodLogEntry], date: NaiveDate) -> BTreeMap<MealType, f64> {
        let mut per_meal: BTreeMap<MealType, f64> = BTreeMap::new();
        for entry in entries.iter().filter(|entry| entry.date == date) {
            *per_meal.entry(entry.meal).or_default() += entry.calculated.calories;
        }
        per_meal
    }

    /// Compare totals with targets
    #[must_use]
    pub fn progress(totals: &Nutrients, targets: &TargetResult) -> DailyProgress {
        DailyProgress {
            calories: MacroProgress::new(totals.calories, f64::from(targets.calorie_target)),
            protein: MacroProgress::new(totals.protein_g, f64::from(targets.macros.protein_g)),
            carbs: MacroProgress::new(totals.carbs_g, f64::from(targets.macros.carb_g)),
            fat: MacroProgress::new(totals.fat_g, f64::from(targets.macros.fat_g)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_target_gives_zero_percentage() {
        let progress = MacroProgress::new(50.0, 0.0);
        assert!(progress.percentage.abs() < f64::EPSILON);
        assert!(progress.exceeded);
    }

    #[test]
    fn test_exceeded_only_when_strictly_above() {
        assert!(!MacroProgress::new(100.0, 100.0).exceeded);
        assert!(MacroProgress::new(100.1, 100.0).exceeded);
        assert!((MacroProgress::new(50.0, 200.0).percentage - 25.0).abs() < f64::EPSILON);
    }
}
