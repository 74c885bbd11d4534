// ABOUTME: Food database commands for the fittrack CLI
// ABOUTME: List/search, add, update and delete foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use clap::Args;
use fittrack::errors::AppResult;
use fittrack::models::FoodDraft;
use fittrack::tracker::FitTracker;

use crate::helpers::display::{print_foods, Output};

/// Food fields; on update, anything omitted keeps the stored value
#[derive(Args, Debug, Default)]
pub struct FoodArgs {
    /// Food name
    #[arg(long)]
    pub name: Option<String>,

    /// Reference serving size (default 100)
    #[arg(long)]
    pub serving_size: Option<f64>,

    /// Serving unit (default g)
    #[arg(long)]
    pub unit: Option<String>,

    /// kcal per serving
    #[arg(long)]
    pub calories: Option<f64>,

    /// Protein grams per serving
    #[arg(long)]
    pub protein: Option<f64>,

    /// Carbohydrate grams per serving
    #[arg(long)]
    pub carbs: Option<f64>,

    /// Fat grams per serving
    #[arg(long)]
    pub fat: Option<f64>,

    /// Fiber grams per serving
    #[arg(long)]
    pub fiber: Option<f64>,

    /// Category (meat, dairy, grains...)
    #[arg(long)]
    pub category: Option<String>,

    /// Comma separated tags
    #[arg(long)]
    pub tags: Option<String>,
}

impl FoodArgs {
    /// Overlay the given fields on `base`
    pub fn apply_to(&self, mut base: FoodDraft) -> FoodDraft {
        if let Some(name) = &self.name {
            base.name.clone_from(name);
        }
        if let Some(unit) = &self.unit {
            base.serving_unit.clone_from(unit);
        }
        if let Some(category) = &self.category {
            base.category.clone_from(category);
        }
        if let Some(tags) = &self.tags {
            base.tags.clone_from(tags);
        }
        base.serving_size = self.serving_size.unwrap_or(base.serving_size);
        base.calories = self.calories.unwrap_or(base.calories);
        base.protein_g = self.protein.unwrap_or(base.protein_g);
        base.carbs_g = self.carbs.unwrap_or(base.carbs_g);
        base.fat_g = self.fat.unwrap_or(base.fat_g);
        base.fiber_g = self.fiber.unwrap_or(base.fiber_g);
        base
    }
}

fn blank_draft() -> FoodDraft {
    FoodDraft {
        serving_size: 100.0,
        ..FoodDraft::default()
    }
}

/// List foods matching the query and category
pub fn list(
    tracker: &FitTracker,
    query: &str,
    category: Option<&str>,
    output: &Output,
) -> AppResult<()> {
    let foods = tracker.foods.search(query, category)?;
    output.emit(&foods, || print_foods(&foods));
    Ok(())
}

/// List the distinct categories
pub fn categories(tracker: &FitTracker, output: &Output) -> AppResult<()> {
    let categories = tracker.foods.categories()?;
    output.emit(&categories, || {
        for category in &categories {
            println!("{category}");
        }
    });
    Ok(())
}

/// Add a food
pub fn add(tracker: &FitTracker, args: &FoodArgs, output: &Output) -> AppResult<()> {
    let food = tracker.foods.add(&args.apply_to(blank_draft()))?;
    output.emit(&food, || {
        println!("Food added.");
        print_foods(std::slice::from_ref(&food));
    });
    Ok(())
}

/// Update a food
pub fn update(tracker: &FitTracker, id: &str, args: &FoodArgs, output: &Output) -> AppResult<()> {
    let existing = tracker.foods.get(id)?;
    let food = tracker
        .foods
        .update(id, &args.apply_to(FoodDraft::from(&existing)))?;
    output.emit(&food, || {
        println!("Food updated.");
        print_foods(std::slice::from_ref(&food));
    });
    Ok(())
}

/// Delete a food
pub fn delete(tracker: &FitTracker, id: &str, output: &Output) -> AppResult<()> {
    tracker.foods.delete(id)?;
    output.done("Food deleted.", Some(id));
    Ok(())
}
