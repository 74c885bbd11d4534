// ABOUTME: Integration tests for the dated food log and the daily aggregator
// ABOUTME: Nutrient scaling, per-day filtering, meal grouping and progress against targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fittrack::daily_log::LogAggregator;
use fittrack::errors::ErrorCode;
use fittrack::models::{MealType, Nutrients};

use common::{date, file_tracker, memory_tracker, open_file_tracker};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_entry_scales_nutrients_to_quantity() {
    let (_store, tracker) = memory_tracker();
    // Grilled Chicken Breast: 165 kcal, 31 P, 0 C, 3.6 F per 100 g
    let entry = tracker
        .food_log
        .add(date(2025, 3, 1), "1", MealType::Lunch, 150.0, &tracker.foods)
        .unwrap();

    assert!(close(entry.calculated.calories, 247.5));
    assert!(close(entry.calculated.protein_g, 46.5));
    assert!(close(entry.calculated.carbs_g, 0.0));
    assert!(close(entry.calculated.fat_g, 5.4));
}

#[test]
fn test_entry_uses_serving_size_not_grams() {
    let (_store, tracker) = memory_tracker();
    // Egg: 78 kcal per 50 g serving
    let entry = tracker
        .food_log
        .add(date(2025, 3, 1), "36", MealType::Breakfast, 75.0, &tracker.foods)
        .unwrap();
    assert!(close(entry.calculated.calories, 117.0));
}

#[test]
fn test_add_rejects_unknown_food_and_bad_quantity() {
    let (_store, tracker) = memory_tracker();
    let day = date(2025, 3, 1);

    let err = tracker
        .food_log
        .add(day, "nope", MealType::Snack, 100.0, &tracker.foods)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    for quantity in [0.0, -10.0, f64::NAN] {
        let err = tracker
            .food_log
            .add(day, "1", MealType::Snack, quantity, &tracker.foods)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
    assert!(tracker.food_log.entries().unwrap().is_empty());
}

#[test]
fn test_entries_filtered_by_date_and_grouped_by_meal() {
    let (_store, tracker) = memory_tracker();
    let monday = date(2025, 3, 3);
    let tuesday = date(2025, 3, 4);
    tracker
        .food_log
        .add(monday, "13", MealType::Breakfast, 50.0, &tracker.foods)
        .unwrap();
    tracker
        .food_log
        .add(monday, "1", MealType::Dinner, 200.0, &tracker.foods)
        .unwrap();
    tracker
        .food_log
        .add(tuesday, "22", MealType::Snack, 100.0, &tracker.foods)
        .unwrap();

    assert_eq!(tracker.food_log.entries_for(monday).unwrap().len(), 2);
    let grouped = tracker.food_log.entries_by_meal(monday).unwrap();
    assert_eq!(grouped.len(), 4);
    assert_eq!(grouped[&MealType::Breakfast].len(), 1);
    assert!(grouped[&MealType::Lunch].is_empty());
    assert_eq!(grouped[&MealType::Dinner][0].food_id, "1");
}

#[test]
fn test_delete_entry() {
    let (_store, tracker) = memory_tracker();
    let entry = tracker
        .food_log
        .add(date(2025, 3, 1), "1", MealType::Lunch, 100.0, &tracker.foods)
        .unwrap();
    tracker.food_log.delete(&entry.id).unwrap();
    assert!(tracker.food_log.entries().unwrap().is_empty());
    assert_eq!(
        tracker.food_log.delete(&entry.id).unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
}

#[test]
fn test_daily_totals_and_progress() {
    let (_store, tracker) = memory_tracker();
    let day = date(2025, 3, 1);
    tracker
        .food_log
        .add(day, "1", MealType::Lunch, 200.0, &tracker.foods)
        .unwrap();
    tracker
        .food_log
        .add(day, "12", MealType::Dinner, 300.0, &tracker.foods)
        .unwrap();
    tracker
        .food_log
        .add(date(2025, 3, 2), "35", MealType::Snack, 100.0, &tracker.foods)
        .unwrap();

    let entries = tracker.food_log.entries().unwrap();
    let totals = LogAggregator::daily_totals(&entries, day);
    // 330 + 390 kcal, 62 + 7.2 P, 0 + 84 C, 7.2 + 0.9 F
    assert!(close(totals.calories, 720.0));
    assert!((totals.protein_g - 69.2).abs() < 1e-9);
    assert!(close(totals.carbs_g, 84.0));
    assert!((totals.fat_g - 8.1).abs() < 1e-9);

    let targets = tracker.profile.current_targets().unwrap();
    let progress = LogAggregator::progress(&totals, &targets);
    assert!(close(progress.calories.target, 2759.0));
    assert!(close(progress.calories.percentage, 720.0 / 2759.0 * 100.0));
    assert!(!progress.calories.exceeded);
    assert!(close(progress.protein.target, 144.0));
}

#[test]
fn test_progress_flags_exceeded_targets() {
    let (_store, tracker) = memory_tracker();
    let targets = tracker.profile.current_targets().unwrap();
    let totals = Nutrients {
        calories: 3000.0,
        protein_g: 100.0,
        carbs_g: 373.0,
        fat_g: 80.0,
    };
    let progress = LogAggregator::progress(&totals, &targets);
    assert!(progress.calories.exceeded);
    assert!(!progress.protein.exceeded);
    assert!(!progress.carbs.exceeded);
    assert!(progress.fat.exceeded);
}

#[test]
fn test_day_summary_and_persistence() {
    let (dir, tracker) = file_tracker();
    let day = date(2025, 3, 1);
    tracker
        .food_log
        .add(day, "22", MealType::Snack, 200.0, &tracker.foods)
        .unwrap();
    drop(tracker);

    let reopened = open_file_tracker(&dir);
    let summary = reopened.day_summary(day).unwrap();
    assert_eq!(summary.meals[&MealType::Snack].len(), 1);
    assert!(close(summary.totals.calories, 104.0));
    assert_eq!(summary.targets.calorie_target, 2759);
    assert!(summary.workouts.is_empty());

    let per_meal = LogAggregator::meal_calories(&reopened.food_log.entries().unwrap(), day);
    assert!(close(per_meal[&MealType::Snack], 104.0));
}

#[test]
fn test_stored_entries_use_food_id_field() {
    let (store, tracker) = memory_tracker();
    tracker
        .food_log
        .add(date(2025, 3, 1), "1", MealType::Lunch, 100.0, &tracker.foods)
        .unwrap();
    let raw: serde_json::Value = serde_json::from_str(
        &store
            .get(fittrack::constants::storage_keys::FOOD_LOGS)
            .unwrap()
            .unwrap(),
    )
    .unwrap();
    assert_eq!(raw[0]["foodId"], "1");
    assert_eq!(raw[0]["meal"], "lunch");
    assert_eq!(raw[0]["date"], "2025-03-01");
}

#[test]
fn test_corrupt_log_is_not_overwritten_by_add_or_delete() {
    use fittrack::constants::storage_keys::FOOD_LOGS;

    let (store, tracker) = memory_tracker();
    let day = date(2025, 3, 1);
    let first = tracker
        .food_log
        .add(day, "1", MealType::Lunch, 100.0, &tracker.foods)
        .unwrap();
    tracker
        .food_log
        .add(day, "22", MealType::Snack, 100.0, &tracker.foods)
        .unwrap();

    let mut raw: serde_json::Value =
        serde_json::from_str(&store.get(FOOD_LOGS).unwrap().unwrap()).unwrap();
    raw[1]["meal"] = "brunch".into();
    let damaged = raw.to_string();
    store.set(FOOD_LOGS, damaged.clone()).unwrap();

    // Reads degrade to an empty log
    assert!(tracker.food_log.entries().unwrap().is_empty());

    let err = tracker
        .food_log
        .add(day, "12", MealType::Dinner, 100.0, &tracker.foods)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
    let err = tracker.food_log.delete(&first.id).unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);

    let stored = store.get(FOOD_LOGS).unwrap().unwrap();
    assert_eq!(stored, damaged);
    let stored: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(stored.as_array().unwrap().len(), 2);
}
