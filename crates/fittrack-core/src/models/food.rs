// ABOUTME: Food database records and nutrient totals
// ABOUTME: Food, FoodDraft form input, and the Nutrients accumulator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// A food in the editable database, with nutrients per serving
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Food {
    /// Unique identifier
    pub id: String,
    /// Display name
    #[serde(alias = "name_en")]
    pub name: String,
    /// Reference serving size
    pub serving_size: f64,
    /// Unit of the serving size (g, ml, piece...)
    pub serving_unit: String,
    /// Energy per serving (kcal)
    pub calories: f64,
    /// Protein per serving (g)
    pub protein_g: f64,
    /// Carbohydrates per serving (g)
    pub carbs_g: f64,
    /// Fat per serving (g)
    pub fat_g: f64,
    /// Fiber per serving (g)
    #[serde(default)]
    pub fiber_g: f64,
    /// Free-form category (meat, dairy, grains...)
    #[serde(default)]
    pub category: String,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Food {
    /// Nutrients per serving
    #[must_use]
    pub const fn nutrients(&self) -> Nutrients {
        Nutrients {
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
        }
    }
}

/// Unvalidated food fields as entered by the user
///
/// `tags` is the raw comma separated string from the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FoodDraft {
    /// Display name (trimmed, required)
    pub name: String,
    /// Reference serving size
    pub serving_size: f64,
    /// Serving unit; blank means grams
    pub serving_unit: String,
    /// Energy per serving (kcal)
    pub calories: f64,
    /// Protein per serving (g)
    pub protein_g: f64,
    /// Carbohydrates per serving (g)
    pub carbs_g: f64,
    /// Fat per serving (g)
    pub fat_g: f64,
    /// Fiber per serving (g)
    pub fiber_g: f64,
    /// Category
    pub category: String,
    /// Comma separated tags
    pub tags: String,
}

/// Pre-fill a draft for editing; tags are joined with ", "
impl From<&Food> for FoodDraft {
    fn from(food: &Food) -> Self {
        Self {
            name: food.name.clone(),
            serving_size: food.serving_size,
            serving_unit: food.serving_unit.clone(),
            calories: food.calories,
            protein_g: food.protein_g,
            carbs_g: food.carbs_g,
            fat_g: food.fat_g,
            fiber_g: food.fiber_g,
            category: food.category.clone(),
            tags: food.tags.join(", "),
        }
    }
}

/// Energy and macronutrient amounts
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Nutrients {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

impl Nutrients {
    /// Scale every amount and round to one decimal place
    #[must_use]
    pub fn scaled(self, multiplier: f64) -> Self {
        Self {
            calories: round_one_decimal(self.calories * multiplier),
            protein_g: round_one_decimal(self.protein_g * multiplier),
            carbs_g: round_one_decimal(self.carbs_g * multiplier),
            fat_g: round_one_decimal(self.fat_g * multiplier),
        }
    }
}

impl Add for Nutrients {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein_g: self.protein_g + rhs.protein_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            fat_g: self.fat_g + rhs.fat_g,
        }
    }
}

impl AddAssign for Nutrients {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_scaled_rounds_to_one_decimal() {
        let per_serving = Nutrients {
            calories: 165.0,
            protein_g: 31.0,
            carbs_g: 0.0,
            fat_g: 3.6,
        };
        let half = per_serving.scaled(150.0 / 100.0);
        assert!((half.calories - 247.5).abs() < f64::EPSILON);
        assert!((half.protein_g - 46.5).abs() < f64::EPSILON);
        assert!((half.fat_g - 5.4).abs() < 1e-9);
    }

    #[test]
    fn test_legacy_name_en_field_is_accepted() {
        let json = r#"{"id":"1","name_en":"Rice","serving_size":100,"serving_unit":"g",
            "calories":130,"protein_g":2.7,"carbs_g":28,"fat_g":0.3}"#;
        let food: Food = serde_json::from_str(json).unwrap();
        assert_eq!(food.name, "Rice");
        assert!(food.tags.is_empty());
        assert!(food.category.is_empty());
    }
}
