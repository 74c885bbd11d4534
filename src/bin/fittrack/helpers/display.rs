// ABOUTME: Output formatting helpers for the fittrack CLI
// ABOUTME: Text tables for humans, serde JSON for scripts, and error rendering for both
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fittrack::daily_log::{DailyProgress, MacroProgress};
use fittrack::errors::{AppError, ErrorResponse};
use fittrack::intelligence::MacroPercentages;
use fittrack::models::{
    Baseline, Food, FoodLogEntry, TargetResult, UserProfile, WeightEntry, WorkoutDetails,
    WorkoutEntry,
};
use fittrack::tracker::DaySummary;
use serde::Serialize;

/// Where and how command results are printed
pub struct Output {
    json: bool,
}

impl Output {
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print `value` as JSON, or run `text` to print it for humans
    pub fn emit<T: Serialize + ?Sized>(&self, value: &T, text: impl FnOnce()) {
        if self.json {
            match serde_json::to_string_pretty(value) {
                Ok(raw) => println!("{raw}"),
                Err(e) => eprintln!("error: failed to encode output: {e}"),
            }
        } else {
            text();
        }
    }

    /// Print a one-line confirmation (JSON: `{"status": ..., "id": ...}`)
    pub fn done(&self, message: &str, id: Option<&str>) {
        self.emit(
            &serde_json::json!({ "status": "ok", "message": message, "id": id }),
            || println!("{message}"),
        );
    }

    /// Render an error on stderr (text) or stdout (JSON envelope)
    pub fn error(&self, error: AppError) {
        if self.json {
            let response = ErrorResponse::from(error);
            match serde_json::to_string_pretty(&response) {
                Ok(raw) => println!("{raw}"),
                Err(e) => eprintln!("error: {e}"),
            }
        } else {
            match &error.context.resource_id {
                Some(id) => eprintln!("error: {error} ({id})"),
                None => eprintln!("error: {error}"),
            }
        }
    }
}

pub fn print_targets(targets: &TargetResult, split: &MacroPercentages) {
    println!("BMR:            {:.0} kcal", targets.bmr);
    println!("TDEE:           {} kcal", targets.tdee);
    println!("Calorie target: {} kcal", targets.calorie_target);
    println!(
        "Protein:        {} g ({:.0}%)",
        targets.macros.protein_g, split.protein_percent
    );
    println!(
        "Fat:            {} g ({:.0}%)",
        targets.macros.fat_g, split.fat_percent
    );
    println!(
        "Carbs:          {} g ({:.0}%)",
        targets.macros.carb_g, split.carbs_percent
    );
}

pub fn print_profile(profile: &UserProfile) {
    println!("{} <{}>", profile.display_name, profile.email);
    println!("{}", "=".repeat(40));
    println!("   Weight:         {} kg", profile.body.weight_kg);
    println!("   Height:         {} cm", profile.body.height_cm);
    println!("   Age:            {}", profile.body.age);
    println!("   Gender:         {}", profile.body.gender);
    println!("   Activity level: {}", profile.activity_level);
    println!("   Goal:           {}", profile.goal);
    println!("   Protein factor: {} g/kg", profile.settings.protein_factor);
    println!(
        "   Fat share:      {:.0}%",
        profile.settings.fat_percentage * 100.0
    );
}

pub fn print_foods(foods: &[Food]) {
    if foods.is_empty() {
        println!("No foods found");
        return;
    }
    println!(
        "{:<38} {:<28} {:>10} {:>8} {:>7} {:>7} {:>7}  {}",
        "ID", "NAME", "SERVING", "KCAL", "P", "C", "F", "CATEGORY"
    );
    for food in foods {
        println!(
            "{:<38} {:<28} {:>10} {:>8.1} {:>7.1} {:>7.1} {:>7.1}  {}",
            food.id,
            truncate(&food.name, 28),
            format!("{}{}", food.serving_size, food.serving_unit),
            food.calories,
            food.protein_g,
            food.carbs_g,
            food.fat_g,
            food.category
        );
    }
}

pub fn print_log_entry(entry: &FoodLogEntry, food_name: &str) {
    println!(
        "   {:<38} {:<24} {:>7}  {:>5.0} kcal  P {:.0}g | C {:.0}g | F {:.0}g",
        entry.id,
        truncate(food_name, 24),
        entry.quantity,
        entry.calculated.calories,
        entry.calculated.protein_g,
        entry.calculated.carbs_g,
        entry.calculated.fat_g
    );
}

pub fn print_day(summary: &DaySummary, food_name: impl Fn(&str) -> String) {
    println!("{}", summary.date.format("%A %Y-%m-%d"));
    println!("{}", "=".repeat(60));
    for (meal, entries) in &summary.meals {
        let meal_total: f64 = entries.iter().map(|e| e.calculated.calories).sum();
        println!("{meal} ({meal_total:.0} kcal)");
        for entry in entries {
            print_log_entry(entry, &food_name(&entry.food_id));
        }
    }
    println!();
    print_progress(&summary.progress);
    if !summary.workouts.is_empty() {
        println!();
        print_workouts(&summary.workouts);
        println!("Volume: {:.0} kg", summary.volume_kg);
    }
}

pub fn print_progress(progress: &DailyProgress) {
    print_macro_line("Calories", &progress.calories, "kcal");
    print_macro_line("Protein", &progress.protein, "g");
    print_macro_line("Carbs", &progress.carbs, "g");
    print_macro_line("Fat", &progress.fat, "g");
}

fn print_macro_line(label: &str, progress: &MacroProgress, unit: &str) {
    let status = if progress.exceeded {
        "TARGET EXCEEDED".to_owned()
    } else {
        format!("{:.0}% of target", progress.percentage)
    };
    println!(
        "{label:<9} {:>6.0} / {:<6.0} {unit:<4} {status}",
        progress.current, progress.target
    );
}

pub fn print_workouts(workouts: &[WorkoutEntry]) {
    if workouts.is_empty() {
        println!("No workouts logged");
        return;
    }
    for workout in workouts {
        let detail = match workout.details {
            WorkoutDetails::Strength {
                sets,
                reps,
                weight_kg,
            } => format!("{sets} x {reps} @ {weight_kg} kg"),
            WorkoutDetails::Cardio {
                duration_min,
                distance_km,
            } => format!("{duration_min} min, {distance_km} km"),
        };
        println!(
            "   {:<38} {:<24} {:<12} {detail}",
            workout.id,
            truncate(&workout.name, 24),
            workout.muscle_group
        );
    }
}

pub fn print_weights(entries: &[WeightEntry]) {
    if entries.is_empty() {
        println!("No weight recorded");
        return;
    }
    for entry in entries {
        println!("   {}  {:>6.1} kg", entry.date, entry.weight_kg);
    }
}

pub fn print_baseline(baseline: &Baseline, change_kg: Option<f64>) {
    println!("Baseline since {}", baseline.date);
    println!("   Weight:         {} kg", baseline.weight_kg);
    println!("   Calorie target: {} kcal", baseline.calorie_target);
    if let Some(change) = change_kg {
        println!("   Change:         {change:+.1} kg");
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_owned()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('~');
        cut
    }
}
