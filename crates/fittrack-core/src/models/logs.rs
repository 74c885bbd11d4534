// ABOUTME: Dated log records for meals, workouts and body weight
// ABOUTME: FoodLogEntry, WorkoutEntry, WeightEntry and the progress Baseline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::food::Nutrients;
use super::targets::MacroTargets;
use crate::errors::AppError;

/// Meal slot a food log entry belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// All meal slots in display order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl FromStr for MealType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|meal| meal.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("unrecognized meal '{s}'")))
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged portion of a food on a given date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodLogEntry {
    /// Unique identifier
    pub id: String,
    /// Day the food was eaten
    pub date: NaiveDate,
    /// Meal slot
    pub meal: MealType,
    /// Food database id
    #[serde(rename = "foodId")]
    pub food_id: String,
    /// Amount eaten, in the food's serving unit
    pub quantity: f64,
    /// Nutrients for this quantity, computed when logged
    pub calculated: Nutrients,
}

/// Type-specific workout data
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details", rename_all = "lowercase")]
pub enum WorkoutDetails {
    /// Resistance training
    Strength {
        /// Number of sets
        sets: u32,
        /// Repetitions per set
        reps: u32,
        /// Load per repetition (kg)
        #[serde(rename = "weight")]
        weight_kg: f64,
    },
    /// Cardiovascular training
    Cardio {
        /// Duration in minutes
        #[serde(rename = "duration")]
        duration_min: f64,
        /// Distance covered (km)
        #[serde(rename = "distance")]
        distance_km: f64,
    },
}

impl WorkoutDetails {
    /// Training volume (sets x reps x load); zero for cardio
    #[must_use]
    pub fn volume_kg(&self) -> f64 {
        match *self {
            Self::Strength {
                sets,
                reps,
                weight_kg,
            } => f64::from(sets) * f64::from(reps) * weight_kg,
            Self::Cardio { .. } => 0.0,
        }
    }
}

/// One logged workout on a given date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutEntry {
    /// Unique identifier
    pub id: String,
    /// Day of the workout
    pub date: NaiveDate,
    /// Exercise name
    pub name: String,
    /// Primary muscle group
    #[serde(rename = "muscleGroup")]
    pub muscle_group: String,
    /// Strength or cardio data
    #[serde(flatten)]
    pub details: WorkoutDetails,
}

/// Unvalidated workout fields as entered by the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutDraft {
    /// Exercise name (required)
    pub name: String,
    /// Primary muscle group (required)
    pub muscle_group: String,
    /// Strength or cardio data
    pub details: WorkoutDetails,
}

/// Body weight on a given date
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightEntry {
    /// Measurement day
    pub date: NaiveDate,
    /// Body weight (kg)
    #[serde(rename = "weight")]
    pub weight_kg: f64,
}

/// Snapshot taken when the user starts a plan, for later comparison
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Baseline {
    /// Day the baseline was recorded
    pub date: NaiveDate,
    /// Body weight at the time (kg)
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Calorie target in force at the time (kcal)
    #[serde(rename = "calorieTarget")]
    pub calorie_target: u32,
    /// Macro targets in force at the time, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macros: Option<MacroTargets>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_workout_entry_uses_type_and_details_fields() {
        let entry = WorkoutEntry {
            id: "w1".to_owned(),
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            name: "Bench Press".to_owned(),
            muscle_group: "chest".to_owned(),
            details: WorkoutDetails::Strength {
                sets: 3,
                reps: 10,
                weight_kg: 50.0,
            },
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "strength");
        assert_eq!(json["details"]["weight"], 50.0);
        assert_eq!(json["muscleGroup"], "chest");
        assert_eq!(json["date"], "2025-03-01");
    }

    #[test]
    fn test_volume_ignores_cardio() {
        let run = WorkoutDetails::Cardio {
            duration_min: 30.0,
            distance_km: 5.0,
        };
        assert!(run.volume_kg().abs() < f64::EPSILON);
        let squat = WorkoutDetails::Strength {
            sets: 5,
            reps: 5,
            weight_kg: 100.0,
        };
        assert!((squat.volume_kg() - 2500.0).abs() < f64::EPSILON);
    }
}
