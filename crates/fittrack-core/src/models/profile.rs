// ABOUTME: Body metrics, activity level, goal and macro preference models
// ABOUTME: Closed enumerations with strict parsing plus the persisted user profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::profile_defaults;
use crate::errors::AppError;

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (+5 kcal offset)
    Male,
    /// Female (-161 kcal offset)
    Female,
}

impl Gender {
    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "unrecognized gender '{other}' (expected male or female)"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Very,
    /// Physical job or training twice a day
    Extra,
}

impl ActivityLevel {
    /// Every recognized level, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Very,
        Self::Extra,
    ];

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Very => "very",
            Self::Extra => "extra",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "unrecognized activity level '{s}' (expected sedentary, light, moderate, very or extra)"
                ))
            })
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dietary objective applied as a multiplier on TDEE
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Caloric deficit
    Cut,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    Bulk,
}

impl Goal {
    /// Every recognized goal, smallest multiplier first
    pub const ALL: [Self; 3] = [Self::Cut, Self::Maintain, Self::Bulk];

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cut => "cut",
            Self::Maintain => "maintain",
            Self::Bulk => "bulk",
        }
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|goal| goal.as_str() == s)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "unrecognized goal '{s}' (expected cut, maintain or bulk)"
                ))
            })
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body measurements used by the BMR equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BodyProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in whole years
    pub age: u32,
    /// Gender used for the BMR offset
    pub gender: Gender,
}

/// User macro preferences
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroPreferences {
    /// Grams of protein per kg of body weight
    #[serde(rename = "proteinFactor")]
    pub protein_factor: f64,
    /// Fraction of total calories from fat (0.0-1.0)
    #[serde(rename = "fatPercentage")]
    pub fat_percentage: f64,
}

impl Default for MacroPreferences {
    fn default() -> Self {
        Self {
            protein_factor: profile_defaults::PROTEIN_FACTOR,
            fat_percentage: profile_defaults::FAT_PERCENTAGE,
        }
    }
}

/// The persisted "current profile" of the single FitTrack user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Stable user identifier
    pub id: String,
    /// Contact e-mail
    pub email: String,
    /// Name shown in summaries
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// Body measurements
    #[serde(flatten)]
    pub body: BodyProfile,
    /// Activity level
    #[serde(rename = "activityLevel")]
    pub activity_level: ActivityLevel,
    /// Dietary goal
    pub goal: Goal,
    /// Macro preferences
    pub settings: MacroPreferences,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            id: profile_defaults::USER_ID.to_owned(),
            email: profile_defaults::EMAIL.to_owned(),
            display_name: profile_defaults::DISPLAY_NAME.to_owned(),
            body: BodyProfile {
                weight_kg: profile_defaults::WEIGHT_KG,
                height_cm: profile_defaults::HEIGHT_CM,
                age: profile_defaults::AGE,
                gender: Gender::Male,
            },
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
            settings: MacroPreferences::default(),
        }
    }
}
