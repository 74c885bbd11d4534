// ABOUTME: Editable food database persisted under a single storage key
// ABOUTME: CRUD over foods, draft cleaning, name search and category listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food Database
//!
//! Foods are stored newest first as one JSON array. When nothing is stored the
//! built-in [`samples`] are used. Reads also fall back to the samples when the
//! stored array cannot be parsed; edits refuse to touch it instead.

/// Built-in seed foods
pub mod samples;

use std::collections::BTreeSet;
use std::sync::Arc;

use fittrack_core::constants::{food as food_constants, storage_keys};
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{Food, FoodDraft};
use tracing::{debug, info};
use uuid::Uuid;

use crate::storage::{load_json, load_json_or_else, save_json, KeyValueStore};

pub use samples::sample_foods;

/// Food CRUD on top of a key-value store
#[derive(Clone)]
pub struct FoodDatabase {
    store: Arc<dyn KeyValueStore>,
}

impl FoodDatabase {
    /// Create a database over the given backend
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Every food, newest first
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails
    pub fn list(&self) -> AppResult<Vec<Food>> {
        load_json_or_else(self.store.as_ref(), storage_keys::FOOD_DATABASE, sample_foods)
    }

    /// Look up a food by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no food has this id
    pub fn get(&self, id: &str) -> AppResult<Food> {
        self.list()?
            .into_iter()
            .find(|food| food.id == id)
            .ok_or_else(|| AppError::not_found("Food").with_resource_id(id))
    }

    /// Add a new food at the front of the list
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid draft, `SerializationError` if
    /// the stored database is corrupt, or a storage error
    pub fn add(&self, draft: &FoodDraft) -> AppResult<Food> {
        let food = clean_draft(Uuid::new_v4().to_string(), draft)?;
        let mut foods = self.list_for_update()?;
        foods.insert(0, food.clone());
        self.persist(&foods)?;
        info!(food_id = %food.id, name = %food.name, "Food added");
        Ok(food)
    }

    /// Replace an existing food, keeping its id and position
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, a validation error for an
    /// invalid draft, `SerializationError` if the stored database is corrupt, or
    /// a storage error
    pub fn update(&self, id: &str, draft: &FoodDraft) -> AppResult<Food> {
        let food = clean_draft(id.to_owned(), draft)?;
        let mut foods = self.list_for_update()?;
        let slot = foods
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or_else(|| AppError::not_found("Food").with_resource_id(id))?;
        *slot = food.clone();
        self.persist(&foods)?;
        info!(food_id = %id, "Food updated");
        Ok(food)
    }

    /// Remove a food
    ///
    /// Log entries that reference the food are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, `SerializationError` if the
    /// stored database is corrupt, or a storage error
    pub fn delete(&self, id: &str) -> AppResult<()> {
        let mut foods = self.list_for_update()?;
        let before = foods.len();
        foods.retain(|food| food.id != id);
        if foods.len() == before {
            return Err(AppError::not_found("Food").with_resource_id(id));
        }
        self.persist(&foods)?;
        info!(food_id = %id, "Food deleted");
        Ok(())
    }

    /// Foods whose name contains `query` (case-insensitive), optionally in one category
    ///
    /// A category of `all` (or `None`) applies no category filter.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails
    pub fn search(&self, query: &str, category: Option<&str>) -> AppResult<Vec<Food>> {
        let needle = query.trim().to_lowercase();
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != food_constants::ALL_CATEGORIES);
        let matches: Vec<Food> = self
            .list()?
            .into_iter()
            .filter(|food| food.name.to_lowercase().contains(&needle))
            .filter(|food| category.is_none_or(|c| effective_category(food) == c))
            .collect();
        debug!(query = %needle, ?category, matches = matches.len(), "Food search");
        Ok(matches)
    }

    /// Sorted distinct categories; foods without one count as `other`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails
    pub fn categories(&self) -> AppResult<Vec<String>> {
        let categories: BTreeSet<String> = self
            .list()?
            .iter()
            .map(|food| effective_category(food).to_owned())
            .collect();
        Ok(categories.into_iter().collect())
    }

    fn list_for_update(&self) -> AppResult<Vec<Food>> {
        Ok(load_json(self.store.as_ref(), storage_keys::FOOD_DATABASE)?
            .unwrap_or_else(sample_foods))
    }

    fn persist(&self, foods: &[Food]) -> AppResult<()> {
        save_json(self.store.as_ref(), storage_keys::FOOD_DATABASE, foods)
    }
}

fn effective_category(food: &Food) -> &str {
    let category = food.category.trim();
    if category.is_empty() {
        food_constants::FALLBACK_CATEGORY
    } else {
        category
    }
}

/// Normalise a draft into a storable food
///
/// # Errors
///
/// Returns `MissingRequiredField` for a blank name and `InvalidInput` for a
/// non-positive serving size or negative nutrient amounts
pub fn clean_draft(id: String, draft: &FoodDraft) -> AppResult<Food> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(AppError::missing_field("name"));
    }
    if !(draft.serving_size.is_finite() && draft.serving_size > 0.0) {
        return Err(AppError::invalid_input(format!(
            "serving size must be greater than zero, got {}",
            draft.serving_size
        )));
    }
    for (field, value) in [
        ("calories", draft.calories),
        ("protein", draft.protein_g),
        ("carbs", draft.carbs_g),
        ("fat", draft.fat_g),
        ("fiber", draft.fiber_g),
    ] {
        if !(value.is_finite() && value >= 0.0) {
            return Err(AppError::invalid_input(format!(
                "{field} must be zero or more, got {value}"
            )));
        }
    }

    let unit = draft.serving_unit.trim();
    Ok(Food {
        id,
        name: name.to_owned(),
        serving_size: draft.serving_size,
        serving_unit: if unit.is_empty() {
            food_constants::DEFAULT_SERVING_UNIT.to_owned()
        } else {
            unit.to_owned()
        },
        calories: draft.calories,
        protein_g: draft.protein_g,
        carbs_g: draft.carbs_g,
        fat_g: draft.fat_g,
        fiber_g: draft.fiber_g,
        category: draft.category.trim().to_owned(),
        tags: draft
            .tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_owned)
            .collect(),
    })
}
