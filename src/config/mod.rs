// ABOUTME: Configuration management module for calculator constants and storage settings
// ABOUTME: Loads defaults, applies FITTRACK_* environment overrides, then validates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for FitTrack
//!
//! - **Nutrition**: BMR coefficients, activity and goal multipliers, macro densities
//! - **Storage**: where the key-value document lives on disk
//!
//! Configuration is environment-only: defaults are compiled in and selected
//! values can be overridden with `FITTRACK_*` variables.

/// Configuration error types
pub mod error;
/// Nutrition calculation constants
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacronutrientConfig, NutritionConfig,
};

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default file name of the JSON key-value document
const DEFAULT_STORE_FILE: &str = "fittrack.json";

/// Where persisted state lives
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding the store document
    pub data_dir: PathBuf,
    /// File name of the store document inside `data_dir`
    pub file_name: String,
}

impl StorageConfig {
    /// Full path of the store document
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir().map_or_else(
            || PathBuf::from(".fittrack"),
            |dir| dir.join("fittrack"),
        );
        Self {
            data_dir,
            file_name: DEFAULT_STORE_FILE.to_owned(),
        }
    }
}

/// Top-level FitTrack configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FitTrackConfig {
    /// Calculator constants
    pub nutrition: NutritionConfig,
    /// Persistence location
    pub storage: StorageConfig,
}

impl FitTrackConfig {
    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            data_dir = %config.storage.data_dir.display(),
            "FitTrack configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if nutrition constants break an invariant or the store file name is blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()?;
        if self.storage.file_name.trim().is_empty() {
            return Err(ConfigError::Missing("FITTRACK_STORE_FILE"));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Storage
        Self::apply_env_var("FITTRACK_DATA_DIR", &mut self.storage.data_dir)?;
        Self::apply_env_var("FITTRACK_STORE_FILE", &mut self.storage.file_name)?;

        // Activity multipliers
        let factors = &mut self.nutrition.activity_factors;
        Self::apply_env_var("FITTRACK_ACTIVITY_SEDENTARY", &mut factors.sedentary)?;
        Self::apply_env_var("FITTRACK_ACTIVITY_LIGHT", &mut factors.light)?;
        Self::apply_env_var("FITTRACK_ACTIVITY_MODERATE", &mut factors.moderate)?;
        Self::apply_env_var("FITTRACK_ACTIVITY_VERY", &mut factors.very)?;
        Self::apply_env_var("FITTRACK_ACTIVITY_EXTRA", &mut factors.extra)?;

        // Goal multipliers
        let goals = &mut self.nutrition.goal_adjustments;
        Self::apply_env_var("FITTRACK_GOAL_CUT", &mut goals.cut)?;
        Self::apply_env_var("FITTRACK_GOAL_MAINTAIN", &mut goals.maintain)?;
        Self::apply_env_var("FITTRACK_GOAL_BULK", &mut goals.bulk)?;

        // Macro preference guidance
        let macros = &mut self.nutrition.macronutrients;
        Self::apply_env_var(
            "FITTRACK_DEFAULT_PROTEIN_FACTOR",
            &mut macros.default_preferences.protein_factor,
        )?;
        Self::apply_env_var(
            "FITTRACK_DEFAULT_FAT_PERCENTAGE",
            &mut macros.default_preferences.fat_percentage,
        )?;

        Ok(self)
    }
}
