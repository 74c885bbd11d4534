// ABOUTME: Nutrition configuration for energy and macro target calculation
// ABOUTME: BMR coefficients, activity multipliers, goal adjustments, and macro energy densities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculation Configuration
//!
//! Every constant used by the target pipeline lives here so that the pipeline
//! itself stays a pure function of its explicit arguments.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010). Exercise Physiology
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204

use fittrack_core::constants::{energy, profile_defaults};
use fittrack_core::models::{ActivityLevel, Gender, Goal, MacroPreferences};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Nutrition Calculation Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) equation coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Goal multipliers applied to TDEE
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Macronutrient energy densities and recommended preference ranges
    pub macronutrients: MacronutrientConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl BmrConfig {
    /// Gender offset added to the weight/height/age base
    #[must_use]
    pub const fn gender_constant(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.msj_male_constant,
            Gender::Female => self.msj_female_constant,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Very active (6-7 days/week): 1.725
    pub very: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn multiplier(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Very => self.very,
            ActivityLevel::Extra => self.extra,
        }
    }
}

/// Calorie multipliers applied to TDEE per dietary goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalAdjustmentConfig {
    /// Deficit multiplier: 0.8
    pub cut: f64,
    /// Maintenance multiplier: 1.0
    pub maintain: f64,
    /// Surplus multiplier: 1.15
    pub bulk: f64,
}

impl GoalAdjustmentConfig {
    /// Multiplier for a goal
    #[must_use]
    pub const fn multiplier(&self, goal: Goal) -> f64 {
        match goal {
            Goal::Cut => self.cut,
            Goal::Maintain => self.maintain,
            Goal::Bulk => self.bulk,
        }
    }
}

/// Macronutrient energy densities and preference guidance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacronutrientConfig {
    /// Protein energy density (kcal/g): 4
    pub protein_kcal_per_g: f64,
    /// Carbohydrate energy density (kcal/g): 4
    pub carbs_kcal_per_g: f64,
    /// Fat energy density (kcal/g): 9
    pub fat_kcal_per_g: f64,
    /// Lower end of the recommended protein factor (g/kg): 1.4
    pub protein_factor_recommended_min: f64,
    /// Upper end of the recommended protein factor (g/kg): 2.2
    pub protein_factor_recommended_max: f64,
    /// Lower end of the recommended fat share of calories: 0.15
    pub fat_percentage_recommended_min: f64,
    /// Upper end of the recommended fat share of calories: 0.35
    pub fat_percentage_recommended_max: f64,
    /// Preferences used for a brand new profile
    pub default_preferences: MacroPreferences,
}

impl MacronutrientConfig {
    /// Whether the protein factor lies in the recommended band
    #[must_use]
    pub fn protein_factor_recommended(&self, protein_factor: f64) -> bool {
        (self.protein_factor_recommended_min..=self.protein_factor_recommended_max)
            .contains(&protein_factor)
    }

    /// Whether the fat share lies in the recommended band
    #[must_use]
    pub fn fat_percentage_recommended(&self, fat_percentage: f64) -> bool {
        (self.fat_percentage_recommended_min..=self.fat_percentage_recommended_max)
            .contains(&fat_percentage)
    }
}

impl NutritionConfig {
    /// Validate nutrition configuration invariants
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a multiplier or energy density is not a positive
    /// finite number, if goal multipliers are not strictly increasing from cut
    /// to bulk, or if a recommended range is inverted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("activity_factors.sedentary", self.activity_factors.sedentary),
            ("activity_factors.light", self.activity_factors.light),
            ("activity_factors.moderate", self.activity_factors.moderate),
            ("activity_factors.very", self.activity_factors.very),
            ("activity_factors.extra", self.activity_factors.extra),
            ("goal_adjustments.cut", self.goal_adjustments.cut),
            ("goal_adjustments.maintain", self.goal_adjustments.maintain),
            ("goal_adjustments.bulk", self.goal_adjustments.bulk),
            (
                "macronutrients.protein_kcal_per_g",
                self.macronutrients.protein_kcal_per_g,
            ),
            (
                "macronutrients.carbs_kcal_per_g",
                self.macronutrients.carbs_kcal_per_g,
            ),
            (
                "macronutrients.fat_kcal_per_g",
                self.macronutrients.fat_kcal_per_g,
            ),
        ];
        for (name, value) in positives {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        let goals = &self.goal_adjustments;
        if !(goals.cut < goals.maintain && goals.maintain < goals.bulk) {
            return Err(ConfigError::InvalidRange(format!(
                "goal multipliers must satisfy cut < maintain < bulk, got {} / {} / {}",
                goals.cut, goals.maintain, goals.bulk
            )));
        }

        let bmr = [
            ("bmr.msj_weight_coef", self.bmr.msj_weight_coef),
            ("bmr.msj_height_coef", self.bmr.msj_height_coef),
            ("bmr.msj_age_coef", self.bmr.msj_age_coef),
            ("bmr.msj_male_constant", self.bmr.msj_male_constant),
            ("bmr.msj_female_constant", self.bmr.msj_female_constant),
        ];
        if let Some((name, _)) = bmr.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "{name} must be finite"
            )));
        }

        let macros = &self.macronutrients;
        if macros.protein_factor_recommended_min > macros.protein_factor_recommended_max {
            return Err(ConfigError::InvalidRange(
                "protein factor recommended min exceeds max".to_owned(),
            ));
        }
        if macros.fat_percentage_recommended_min > macros.fat_percentage_recommended_max
            || !(0.0..=1.0).contains(&macros.fat_percentage_recommended_max)
        {
            return Err(ConfigError::InvalidRange(
                "fat percentage recommended range must lie within 0.0-1.0 and min <= max"
                    .to_owned(),
            ));
        }

        Ok(())
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            very: 1.725,
            extra: 1.9,
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            cut: 0.8,
            maintain: 1.0,
            bulk: 1.15,
        }
    }
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_kcal_per_g: energy::KCAL_PER_G_PROTEIN,
            carbs_kcal_per_g: energy::KCAL_PER_G_CARBS,
            fat_kcal_per_g: energy::KCAL_PER_G_FAT,
            protein_factor_recommended_min: 1.4,
            protein_factor_recommended_max: 2.2,
            fat_percentage_recommended_min: 0.15,
            fat_percentage_recommended_max: 0.35,
            default_preferences: MacroPreferences {
                protein_factor: profile_defaults::PROTEIN_FACTOR,
                fat_percentage: profile_defaults::FAT_PERCENTAGE,
            },
        }
    }
}
