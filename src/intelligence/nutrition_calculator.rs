// ABOUTME: Energy and macro target pipeline using the Mifflin-St Jeor equation
// ABOUTME: BMR, TDEE, goal-adjusted calorie target, and protein/fat/carb gram targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Converts a body profile and stated preferences into energy and macro targets.
//! Every function here is pure: outputs depend only on the explicit arguments and
//! the configuration passed in, so identical inputs always produce identical results.
//!
//! The full pipeline is the left-to-right composition
//! `BMR -> TDEE -> calorie target -> macros`, available as [`calculate_targets`].
//!
//! Rounding uses [`f64::round`] (half away from zero) at the TDEE, calorie target
//! and macro stages. BMR keeps full precision.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{
    ActivityLevel, Gender, Goal, MacroPreferences, MacroTargets, TargetParams, TargetResult,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacronutrientConfig, NutritionConfig,
};

/// Macronutrient percentage breakdown of a set of gram targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroPercentages {
    /// Protein as percentage of macro calories
    pub protein_percent: f64,
    /// Carbohydrates as percentage of macro calories
    pub carbs_percent: f64,
    /// Fat as percentage of macro calories
    pub fat_percent: f64,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// No rounding is applied.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns `InvalidInput` if weight or height is not a positive finite number, or age is zero
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<f64> {
    require_positive("weight_kg", weight_kg)?;
    require_positive("height_cm", height_cm)?;
    if age == 0 {
        return Err(AppError::invalid_input("age must be a positive number of years"));
    }

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let bmr =
        weight_component + height_component + age_component + config.gender_constant(gender);

    debug!(weight_kg, height_cm, age, %gender, bmr, "Calculated BMR");
    Ok(bmr)
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = round(BMR x Activity Factor)
///
/// Activity factors based on `McArdle` et al. (2010):
/// - Sedentary: 1.2 (little/no exercise)
/// - Light: 1.375 (1-3 days/week)
/// - Moderate: 1.55 (3-5 days/week)
/// - Very: 1.725 (6-7 days/week)
/// - Extra: 1.9 (hard training 2x/day)
///
/// # Errors
///
/// Returns `InvalidInput` if BMR is negative or not finite. Extreme but
/// individually valid body metrics can produce a negative BMR, which would
/// otherwise yield a negative expenditure. A BMR of exactly zero gives zero.
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<u32> {
    if !bmr.is_finite() || bmr < 0.0 {
        return Err(AppError::invalid_input(format!(
            "BMR must not be negative, got {bmr}"
        )));
    }

    let activity_factor = config.multiplier(activity_level);
    let tdee = whole_kcal("TDEE", bmr * activity_factor)?;

    debug!(bmr, %activity_level, activity_factor, tdee, "Calculated TDEE");
    Ok(tdee)
}

/// Calculate the goal-adjusted daily calorie target
///
/// - maintain: TDEE
/// - cut: round(TDEE x 0.8)
/// - bulk: round(TDEE x 1.15)
///
/// # Errors
///
/// Returns `ValueOutOfRange` if the adjusted target does not fit in a `u32`
pub fn calculate_calorie_target(
    tdee: u32,
    goal: Goal,
    config: &GoalAdjustmentConfig,
) -> AppResult<u32> {
    let multiplier = config.multiplier(goal);
    let target = whole_kcal("calorie target", f64::from(tdee) * multiplier)?;

    debug!(tdee, %goal, multiplier, calorie_target = target, "Calculated calorie target");
    Ok(target)
}

/// Calculate daily protein, fat and carbohydrate gram targets
///
/// - protein (g) = round(`weight_kg` x `protein_factor`)
/// - fat (g) = round(`calorie_target` x `fat_percentage` / 9)
/// - carbs (g) = max(0, round((`calorie_target` - protein x 4 - fat x 9) / 4))
///
/// Carbohydrates are the caloric residual. When protein and fat together exceed
/// the calorie target, carbs are clamped to zero rather than failing.
///
/// Preferences outside the recommended bands (protein 1.4-2.2 g/kg, fat 15-35%)
/// are accepted and logged at `warn`.
///
/// # Reference
/// Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
///
/// # Errors
///
/// Returns `InvalidInput` if weight is not positive, the protein factor is
/// negative, or the fat percentage lies outside 0.0-1.0
pub fn calculate_macros(
    weight_kg: f64,
    calorie_target: u32,
    preferences: &MacroPreferences,
    config: &MacronutrientConfig,
) -> AppResult<MacroTargets> {
    require_positive("weight_kg", weight_kg)?;
    let MacroPreferences {
        protein_factor,
        fat_percentage,
    } = *preferences;
    if !protein_factor.is_finite() || protein_factor < 0.0 {
        return Err(AppError::invalid_input(format!(
            "protein factor must be zero or greater, got {protein_factor}"
        )));
    }
    if !(0.0..=1.0).contains(&fat_percentage) {
        return Err(AppError::invalid_input(format!(
            "fat percentage must be between 0.0 and 1.0, got {fat_percentage}"
        )));
    }

    if !config.protein_factor_recommended(protein_factor) {
        warn!(
            protein_factor,
            min = config.protein_factor_recommended_min,
            max = config.protein_factor_recommended_max,
            "Protein factor outside recommended range"
        );
    }
    if !config.fat_percentage_recommended(fat_percentage) {
        warn!(
            fat_percentage,
            min = config.fat_percentage_recommended_min,
            max = config.fat_percentage_recommended_max,
            "Fat percentage outside recommended range"
        );
    }

    let calories = f64::from(calorie_target);
    let protein_g = whole_grams("protein", weight_kg * protein_factor)?;
    let fat_g = whole_grams(
        "fat",
        calories * fat_percentage / config.fat_kcal_per_g,
    )?;

    let carb_calories = f64::from(protein_g).mul_add(
        -config.protein_kcal_per_g,
        f64::from(fat_g).mul_add(-config.fat_kcal_per_g, calories),
    );
    let carb_g = whole_grams("carbohydrate", (carb_calories / config.carbs_kcal_per_g).max(0.0))?;

    debug!(
        calorie_target,
        protein_g, fat_g, carb_g, carb_calories, "Calculated macro targets"
    );
    Ok(MacroTargets {
        protein_g,
        fat_g,
        carb_g,
    })
}

/// Calculate the complete target set
///
/// This is the main entry point composing BMR, TDEE, calorie target and macros.
/// Either every output is produced or an error is returned; nothing is partially applied.
///
/// # Errors
///
/// Returns an error if any stage rejects its input
pub fn calculate_targets(params: &TargetParams, config: &NutritionConfig) -> AppResult<TargetResult> {
    let body = &params.body;

    // Step 1: BMR
    let bmr = calculate_bmr(
        body.weight_kg,
        body.height_cm,
        body.age,
        body.gender,
        &config.bmr,
    )?;

    // Step 2: TDEE
    let tdee = calculate_tdee(bmr, params.activity_level, &config.activity_factors)?;

    // Step 3: goal adjustment
    let calorie_target = calculate_calorie_target(tdee, params.goal, &config.goal_adjustments)?;

    // Step 4: macro split
    let macros = calculate_macros(
        body.weight_kg,
        calorie_target,
        &params.preferences,
        &config.macronutrients,
    )?;

    Ok(TargetResult {
        bmr,
        tdee,
        calorie_target,
        macros,
    })
}

/// Percentage of macro calories contributed by each macronutrient
///
/// All three are zero when the targets carry no calories.
#[must_use]
pub fn calculate_macro_percentages(
    macros: &MacroTargets,
    config: &MacronutrientConfig,
) -> MacroPercentages {
    let protein_kcal = f64::from(macros.protein_g) * config.protein_kcal_per_g;
    let carbs_kcal = f64::from(macros.carb_g) * config.carbs_kcal_per_g;
    let fat_kcal = f64::from(macros.fat_g) * config.fat_kcal_per_g;
    let total_kcal = protein_kcal + carbs_kcal + fat_kcal;

    if total_kcal <= 0.0 {
        return MacroPercentages {
            protein_percent: 0.0,
            carbs_percent: 0.0,
            fat_percent: 0.0,
        };
    }

    MacroPercentages {
        protein_percent: protein_kcal / total_kcal * 100.0,
        carbs_percent: carbs_kcal / total_kcal * 100.0,
        fat_percent: fat_kcal / total_kcal * 100.0,
    }
}

/// Owns a [`NutritionConfig`] and exposes the pipeline stages as methods
#[derive(Debug, Clone, Default)]
pub struct TargetCalculator {
    config: NutritionConfig,
}

impl TargetCalculator {
    /// Create a calculator over the given constants
    #[must_use]
    pub const fn new(config: NutritionConfig) -> Self {
        Self { config }
    }

    /// Constants in use
    #[must_use]
    pub const fn config(&self) -> &NutritionConfig {
        &self.config
    }

    /// See [`calculate_bmr`]
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` on non-positive body metrics
    pub fn bmr(&self, weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> AppResult<f64> {
        calculate_bmr(weight_kg, height_cm, age, gender, &self.config.bmr)
    }

    /// See [`calculate_tdee`]
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` on a negative BMR
    pub fn tdee(&self, bmr: f64, activity_level: ActivityLevel) -> AppResult<u32> {
        calculate_tdee(bmr, activity_level, &self.config.activity_factors)
    }

    /// See [`calculate_calorie_target`]
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` on overflow
    pub fn calorie_target(&self, tdee: u32, goal: Goal) -> AppResult<u32> {
        calculate_calorie_target(tdee, goal, &self.config.goal_adjustments)
    }

    /// See [`calculate_macros`]
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` on invalid weight or preferences
    pub fn macros(
        &self,
        weight_kg: f64,
        calorie_target: u32,
        preferences: &MacroPreferences,
    ) -> AppResult<MacroTargets> {
        calculate_macros(
            weight_kg,
            calorie_target,
            preferences,
            &self.config.macronutrients,
        )
    }

    /// See [`calculate_targets`]
    ///
    /// # Errors
    ///
    /// Returns an error if any stage rejects its input
    pub fn compute(&self, params: &TargetParams) -> AppResult<TargetResult> {
        calculate_targets(params, &self.config)
    }
}

fn require_positive(name: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{name} must be a positive number, got {value}"
        )))
    }
}

fn whole_kcal(what: &str, value: f64) -> AppResult<u32> {
    round_to_u32(what, value, "kcal")
}

fn whole_grams(what: &str, value: f64) -> AppResult<u32> {
    round_to_u32(what, value, "g")
}

fn round_to_u32(what: &str, value: f64, unit: &str) -> AppResult<u32> {
    let rounded = value.round();
    if !rounded.is_finite() || rounded < 0.0 || rounded > f64::from(u32::MAX) {
        return Err(AppError::value_out_of_range(format!(
            "{what} of {value} {unit} is outside the representable range"
        )));
    }
    Ok(rounded as u32)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use fittrack_core::errors::ErrorCode;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to_u32("x", 372.5, "g").unwrap(), 373);
        assert_eq!(round_to_u32("x", 372.49, "g").unwrap(), 372);
    }

    #[test]
    fn test_round_rejects_negative_and_nan() {
        assert_eq!(
            round_to_u32("x", -3.0, "g").unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
        assert!(round_to_u32("x", f64::NAN, "g").is_err());
    }

    #[test]
    fn test_macro_percentages_sum_to_hundred() {
        let macros = MacroTargets {
            protein_g: 144,
            fat_g: 77,
            carb_g: 373,
        };
        let pct = calculate_macro_percentages(&macros, &MacronutrientConfig::default());
        let sum = pct.protein_percent + pct.carbs_percent + pct.fat_percent;
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_macro_percentages_zero_when_empty() {
        let macros = MacroTargets {
            protein_g: 0,
            fat_g: 0,
            carb_g: 0,
        };
        let pct = calculate_macro_percentages(&macros, &MacronutrientConfig::default());
        assert!(pct.protein_percent.abs() < f64::EPSILON);
    }
}
