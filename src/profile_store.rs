// ABOUTME: Persisted user profile and the form-to-profile parse boundary
// ABOUTME: Loads the stored profile or the default, validates edits, recomputes targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Profile Store
//!
//! The profile is a single JSON document under
//! [`storage_keys::USER`]. Edits arrive as a [`ProfileForm`] of raw strings and
//! are parsed and validated before anything is written.

use std::str::FromStr;
use std::sync::Arc;

use fittrack_core::constants::storage_keys;
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{
    ActivityLevel, BodyProfile, Gender, Goal, MacroPreferences, TargetParams, TargetResult,
    UserProfile,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::intelligence::TargetCalculator;
use crate::storage::{load_json_or_else, save_json, KeyValueStore};

/// Profile fields exactly as typed by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileForm {
    /// Contact e-mail
    pub email: String,
    /// Display name
    pub display_name: String,
    /// Weight in kg
    pub weight: String,
    /// Height in cm
    pub height: String,
    /// Age in years
    pub age: String,
    /// `male` or `female`
    pub gender: String,
    /// Activity level name
    pub activity_level: String,
    /// `cut`, `maintain` or `bulk`
    pub goal: String,
    /// Protein grams per kg body weight
    pub protein_factor: String,
    /// Fraction of calories from fat
    pub fat_percentage: String,
}

impl From<&UserProfile> for ProfileForm {
    fn from(profile: &UserProfile) -> Self {
        Self {
            email: profile.email.clone(),
            display_name: profile.display_name.clone(),
            weight: profile.body.weight_kg.to_string(),
            height: profile.body.height_cm.to_string(),
            age: profile.body.age.to_string(),
            gender: profile.body.gender.to_string(),
            activity_level: profile.activity_level.to_string(),
            goal: profile.goal.to_string(),
            protein_factor: profile.settings.protein_factor.to_string(),
            fat_percentage: profile.settings.fat_percentage.to_string(),
        }
    }
}

impl ProfileForm {
    /// Parse and validate into a profile carrying the given id
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for text that is not a number, `InvalidInput` for
    /// numbers outside their accepted range or unknown enumeration values
    pub fn parse(&self, id: &str) -> AppResult<UserProfile> {
        let weight_kg = parse_number::<f64>("weight", &self.weight)?;
        let height_cm = parse_number::<f64>("height", &self.height)?;
        let age = parse_number::<u32>("age", &self.age)?;
        let protein_factor = parse_number::<f64>("protein factor", &self.protein_factor)?;
        let fat_percentage = parse_number::<f64>("fat percentage", &self.fat_percentage)?;

        ensure_positive("weight", weight_kg)?;
        ensure_positive("height", height_cm)?;
        if age == 0 {
            return Err(AppError::invalid_input("age must be greater than zero"));
        }
        if !(protein_factor.is_finite() && protein_factor >= 0.0) {
            return Err(AppError::invalid_input(format!(
                "protein factor must be zero or more, got {protein_factor}"
            )));
        }
        if !(0.0..=1.0).contains(&fat_percentage) {
            return Err(AppError::invalid_input(format!(
                "fat percentage must be between 0 and 1, got {fat_percentage}"
            )));
        }

        Ok(UserProfile {
            id: id.to_owned(),
            email: self.email.trim().to_owned(),
            display_name: self.display_name.trim().to_owned(),
            body: BodyProfile {
                weight_kg,
                height_cm,
                age,
                gender: Gender::from_str(self.gender.trim())?,
            },
            activity_level: ActivityLevel::from_str(self.activity_level.trim())?,
            goal: Goal::from_str(self.goal.trim())?,
            settings: MacroPreferences {
                protein_factor,
                fat_percentage,
            },
        })
    }
}

fn parse_number<T: FromStr>(field: &str, raw: &str) -> AppResult<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::missing_field(field));
    }
    trimmed
        .parse()
        .map_err(|_| AppError::invalid_format(format!("{field} must be a number, got '{trimmed}'")))
}

fn ensure_positive(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{field} must be greater than zero, got {value}"
        )))
    }
}

/// Loads, validates and persists the single user profile
#[derive(Clone)]
pub struct ProfileStore {
    store: Arc<dyn KeyValueStore>,
    calculator: TargetCalculator,
}

impl ProfileStore {
    /// Create a store over the given backend
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, calculator: TargetCalculator) -> Self {
        Self { store, calculator }
    }

    /// Stored profile, or the default profile when none (or a corrupt one) is stored
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails
    pub fn load(&self) -> AppResult<UserProfile> {
        load_json_or_else(self.store.as_ref(), storage_keys::USER, UserProfile::default)
    }

    /// Persist the profile as-is
    ///
    /// # Errors
    ///
    /// Returns a serialization or storage error
    pub fn save(&self, profile: &UserProfile) -> AppResult<()> {
        save_json(self.store.as_ref(), storage_keys::USER, profile)?;
        debug!(user_id = %profile.id, "Profile saved");
        Ok(())
    }

    /// Compute targets for a profile without touching storage
    ///
    /// # Errors
    ///
    /// Returns an error if the calculator rejects the profile
    pub fn targets_for(&self, profile: &UserProfile) -> AppResult<TargetResult> {
        self.calculator.compute(&TargetParams::from(profile))
    }

    /// Targets for the stored profile
    ///
    /// # Errors
    ///
    /// Returns an error if the stored profile cannot be loaded or is rejected by the calculator
    pub fn current_targets(&self) -> AppResult<TargetResult> {
        let profile = self.load()?;
        self.targets_for(&profile)
    }

    /// Validate a profile through the calculator, then persist it
    ///
    /// Nothing is written when the calculator rejects the profile.
    ///
    /// # Errors
    ///
    /// Returns the calculator error for an invalid profile, or a storage error
    pub fn apply(&self, profile: &UserProfile) -> AppResult<TargetResult> {
        let targets = self.targets_for(profile)?;
        self.save(profile)?;
        info!(
            user_id = %profile.id,
            calorie_target = targets.calorie_target,
            "Profile updated"
        );
        Ok(targets)
    }

    /// Parse a form on top of the stored profile's id and apply it
    ///
    /// # Errors
    ///
    /// Returns a parse error, a calculator error, or a storage error
    pub fn apply_form(&self, form: &ProfileForm) -> AppResult<(UserProfile, TargetResult)> {
        let current = self.load()?;
        let profile = form.parse(&current.id)?;
        let targets = self.apply(&profile)?;
        Ok((profile, targets))
    }

    /// Calculator in use
    #[must_use]
    pub const fn calculator(&self) -> &TargetCalculator {
        &self.calculator
    }
}
