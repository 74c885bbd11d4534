// ABOUTME: Workout commands for the fittrack CLI
// ABOUTME: Log strength or cardio sessions, list a day, delete an entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use fittrack::errors::AppResult;
use fittrack::models::{WorkoutDetails, WorkoutDraft};
use fittrack::tracker::FitTracker;
use serde_json::json;

use crate::helpers::display::{print_workouts, Output};

/// Log a workout
pub fn add(
    tracker: &FitTracker,
    date: NaiveDate,
    name: String,
    muscle_group: String,
    details: WorkoutDetails,
    output: &Output,
) -> AppResult<()> {
    let entry = tracker.workouts.add(
        date,
        &WorkoutDraft {
            name,
            muscle_group,
            details,
        },
    )?;
    output.emit(&entry, || {
        println!("Logged workout: {}", entry.name);
        print_workouts(std::slice::from_ref(&entry));
    });
    Ok(())
}

/// List a day's workouts with their total volume
pub fn list(tracker: &FitTracker, date: NaiveDate, output: &Output) -> AppResult<()> {
    let workouts = tracker.workouts.entries_for(date)?;
    let volume_kg = tracker.workouts.total_volume_kg(date)?;
    output.emit(
        &json!({ "date": date, "workouts": workouts, "volume_kg": volume_kg }),
        || {
            println!("Workouts on {date}");
            print_workouts(&workouts);
            println!("Volume: {volume_kg:.0} kg");
        },
    );
    Ok(())
}

/// Delete a workout
pub fn delete(tracker: &FitTracker, id: &str, output: &Output) -> AppResult<()> {
    tracker.workouts.delete(id)?;
    output.done("Workout deleted.", Some(id));
    Ok(())
}
