// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory and on-disk trackers, and fixed dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(missing_docs)]

use std::sync::{Arc, Once};

use chrono::NaiveDate;
use fittrack::config::NutritionConfig;
use fittrack::models::{FoodDraft, TargetParams, UserProfile};
use fittrack::storage::{JsonFileStore, KeyValueStore, MemoryStore};
use fittrack::tracker::FitTracker;
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG selects the level; default stays quiet
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Shared in-memory backend plus a tracker wired to it
pub fn memory_tracker() -> (Arc<dyn KeyValueStore>, FitTracker) {
    init_test_logging();
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let tracker = FitTracker::with_store(Arc::clone(&store), NutritionConfig::default());
    (store, tracker)
}

/// Tracker over a JSON file inside a fresh temporary directory
///
/// Keep the returned `TempDir` alive for as long as the tracker is used.
pub fn file_tracker() -> (TempDir, FitTracker) {
    init_test_logging();
    let dir = tempfile::tempdir().expect("temp dir");
    let tracker = open_file_tracker(&dir);
    (dir, tracker)
}

/// Reopen the JSON file store inside `dir`
pub fn open_file_tracker(dir: &TempDir) -> FitTracker {
    let store = JsonFileStore::open(dir.path().join("fittrack.json")).expect("open store");
    FitTracker::with_store(Arc::new(store), NutritionConfig::default())
}

/// 80 kg, 180 cm, 30 y male, moderate, maintain, 1.8 g/kg, 25% fat
pub fn reference_params() -> TargetParams {
    TargetParams::from(&UserProfile::default())
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// 100 g serving: 200 kcal, 10 g protein, 20 g carbs, 5 g fat
pub fn simple_food_draft(name: &str) -> FoodDraft {
    FoodDraft {
        name: name.to_owned(),
        serving_size: 100.0,
        serving_unit: "g".to_owned(),
        calories: 200.0,
        protein_g: 10.0,
        carbs_g: 20.0,
        fat_g: 5.0,
        fiber_g: 1.0,
        category: "test".to_owned(),
        tags: "one, two".to_owned(),
    }
}
