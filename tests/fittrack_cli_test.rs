// ABOUTME: Integration tests for the fittrack binary
// ABOUTME: Drives real commands against a temporary data directory and checks output and exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Integration tests for the `fittrack` binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

/// Run the binary with `--data-dir` pointing at `dir`
fn run_cli(dir: &TempDir, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_fittrack"))
        .arg("--data-dir")
        .arg(dir.path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    (exit_code, stdout, stderr)
}

fn run_json(dir: &TempDir, args: &[&str]) -> Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let (code, stdout, stderr) = run_cli(dir, &full);
    assert_eq!(code, 0, "command {args:?} failed: {stderr}");
    serde_json::from_str(&stdout).unwrap()
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&dir, &["--help"]);
    assert_eq!(code, 0);
    for command in ["targets", "profile", "food", "log", "workout", "weight", "baseline"] {
        assert!(stdout.contains(command), "help should mention '{command}'");
    }
}

#[test]
fn test_targets_for_default_profile() {
    let dir = TempDir::new().unwrap();
    let json = run_json(&dir, &["targets"]);
    assert_eq!(json["bmr"], 1780.0);
    assert_eq!(json["tdee"], 2759);
    assert_eq!(json["calorieTarget"], 2759);
    assert_eq!(json["macros"]["protein_g"], 144);
    assert_eq!(json["macros"]["carb_g"], 373);
}

#[test]
fn test_target_overrides_are_not_persisted() {
    let dir = TempDir::new().unwrap();
    let json = run_json(&dir, &["targets", "--gender", "female", "--goal", "cut"]);
    assert_eq!(json["bmr"], 1614.0);

    let shown = run_json(&dir, &["profile", "show"]);
    assert_eq!(shown["profile"]["gender"], "male");
    assert_eq!(shown["profile"]["goal"], "maintain");
}

#[test]
fn test_invalid_goal_exits_with_validation_status() {
    let dir = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(&dir, &["targets", "--goal", "gain"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("gain"));

    let (code, stdout, _) = run_cli(&dir, &["--json", "profile", "set", "--weight", "heavy"]);
    assert_eq!(code, 2);
    let envelope: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(envelope["error"]["code"], "INVALID_FORMAT");
}

#[test]
fn test_profile_set_persists_and_snapshots_baseline() {
    let dir = TempDir::new().unwrap();
    let json = run_json(&dir, &["profile", "set", "--weight", "70", "--goal", "bulk"]);
    assert_eq!(json["profile"]["weight_kg"], 70.0);

    let baseline = run_json(&dir, &["baseline", "show"]);
    assert_eq!(baseline["baseline"]["weight"], 70.0);
    assert_eq!(baseline["baseline"]["calorieTarget"], json["targets"]["calorieTarget"]);

    run_json(&dir, &["baseline", "reset"]);
    let (code, _, _) = run_cli(&dir, &["baseline", "show"]);
    assert_eq!(code, 3);
}

#[test]
fn test_log_day_reports_totals() {
    let dir = TempDir::new().unwrap();
    let entry = run_json(
        &dir,
        &["log", "add", "1", "--meal", "lunch", "--quantity", "200", "--date", "2025-03-01"],
    );
    assert_eq!(entry["calculated"]["calories"], 330.0);

    run_json(
        &dir,
        &[
            "workout", "strength", "Squat", "--muscle-group", "legs", "--sets", "5", "--reps",
            "5", "--weight", "100", "--date", "2025-03-01",
        ],
    );

    let day = run_json(&dir, &["log", "day", "--date", "2025-03-01"]);
    assert_eq!(day["totals"]["calories"], 330.0);
    assert_eq!(day["meals"]["lunch"].as_array().unwrap().len(), 1);
    assert_eq!(day["volume_kg"], 2500.0);
    assert_eq!(day["progress"]["calories"]["exceeded"], false);
}

#[test]
fn test_unknown_food_exits_not_found() {
    let dir = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(&dir, &["log", "add", "does-not-exist"]);
    assert_eq!(code, 3);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_pretty_log_format_writes_to_stderr() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_fittrack"))
        .arg("--data-dir")
        .arg(dir.path())
        .args(["-vv", "--json", "targets"])
        .env_remove("RUST_LOG")
        .env("LOG_FORMAT", "pretty")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("FitTrack logging initialized"), "stderr: {stderr}");
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["tdee"], 2759);
}
