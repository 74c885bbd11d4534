// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy densities, storage keys, and default profile values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single list.

/// Energy density of macronutrients (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Carbohydrate: 4 kcal/g
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Keys used by the key-value persistence service
pub mod storage_keys {
    /// Current user profile
    pub const USER: &str = "fitness_user";
    /// Food log entries across all dates
    pub const FOOD_LOGS: &str = "fitness_foodLogs";
    /// Workout log entries across all dates
    pub const WORKOUT_LOGS: &str = "fitness_workoutLogs";
    /// Editable food database
    pub const FOOD_DATABASE: &str = "fitness_foodDatabase";
    /// Body weight history
    pub const WEIGHT_HISTORY: &str = "fitness_weightHistory";
    /// Baseline snapshot for progress comparison
    pub const BASELINE: &str = "fitness_baseline";

    /// Every key owned by FitTrack
    pub const ALL: [&str; 6] = [
        USER,
        FOOD_LOGS,
        WORKOUT_LOGS,
        FOOD_DATABASE,
        WEIGHT_HISTORY,
        BASELINE,
    ];
}

/// Default values for a freshly created profile
pub mod profile_defaults {
    /// Default profile identifier
    pub const USER_ID: &str = "user1";
    /// Default e-mail
    pub const EMAIL: &str = "user@example.com";
    /// Default display name
    pub const DISPLAY_NAME: &str = "John Doe";
    /// Default body weight (kg)
    pub const WEIGHT_KG: f64 = 80.0;
    /// Default height (cm)
    pub const HEIGHT_CM: f64 = 180.0;
    /// Default age (years)
    pub const AGE: u32 = 30;
    /// Default protein factor (g per kg body weight)
    pub const PROTEIN_FACTOR: f64 = 1.8;
    /// Default share of calories from fat
    pub const FAT_PERCENTAGE: f64 = 0.25;
}

/// Food database defaults
pub mod food {
    /// Serving unit used when none is given
    pub const DEFAULT_SERVING_UNIT: &str = "g";
    /// Category assigned to foods without one
    pub const FALLBACK_CATEGORY: &str = "other";
    /// Category filter value that disables filtering
    pub const ALL_CATEGORIES: &str = "all";
}
