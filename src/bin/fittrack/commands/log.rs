// ABOUTME: Food log commands for the fittrack CLI
// ABOUTME: Log a portion, delete an entry, and show a day against targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use chrono::NaiveDate;
use fittrack::errors::AppResult;
use fittrack::models::MealType;
use fittrack::tracker::FitTracker;

use crate::helpers::display::{print_day, print_log_entry, Output};

/// Log `quantity` of a food
pub fn add(
    tracker: &FitTracker,
    date: NaiveDate,
    food_id: &str,
    meal: MealType,
    quantity: f64,
    output: &Output,
) -> AppResult<()> {
    let entry = tracker
        .food_log
        .add(date, food_id, meal, quantity, &tracker.foods)?;
    let name = tracker.foods.get(food_id).map(|food| food.name)?;
    output.emit(&entry, || {
        println!("Logged {name} for {meal} on {date}.");
        print_log_entry(&entry, &name);
    });
    Ok(())
}

/// Delete a food log entry
pub fn delete(tracker: &FitTracker, id: &str, output: &Output) -> AppResult<()> {
    tracker.food_log.delete(id)?;
    output.done("Food log deleted.", Some(id));
    Ok(())
}

/// Show a day's meals, workouts and progress
pub fn day(tracker: &FitTracker, date: NaiveDate, output: &Output) -> AppResult<()> {
    let summary = tracker.day_summary(date)?;
    let names: HashMap<String, String> = tracker
        .foods
        .list()?
        .into_iter()
        .map(|food| (food.id, food.name))
        .collect();
    output.emit(&summary, || {
        print_day(&summary, |food_id| {
            names
                .get(food_id)
                .cloned()
                .unwrap_or_else(|| "Unknown Food".to_owned())
        });
    });
    Ok(())
}
