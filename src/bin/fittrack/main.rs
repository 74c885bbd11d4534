// ABOUTME: FitTrack CLI - computes daily targets and manages the profile, foods and logs
// ABOUTME: Parses arguments, wires the stores over the configured data directory, dispatches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Targets for the stored profile
//! fittrack targets
//!
//! # Targets for ad-hoc metrics, nothing is stored
//! fittrack targets --weight 70 --height 165 --age 28 --gender female --goal cut
//!
//! # Update the profile (fields not given keep their stored value)
//! fittrack profile set --weight 78.5 --activity-level very
//!
//! # Log 150 g of food id 1 for lunch today
//! fittrack log add 1 --meal lunch --quantity 150
//!
//! # Show today's intake against targets
//! fittrack log day --json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fittrack::config::FitTrackConfig;
use fittrack::errors::{AppError, AppResult};
use fittrack::logging;
use fittrack::models::{MealType, WorkoutDetails};
use fittrack::tracker::FitTracker;
use tracing::{debug, warn};

use helpers::display::Output;

#[derive(Parser)]
#[command(
    name = "fittrack",
    version,
    about = "Single-user fitness tracker",
    long_about = "Computes BMR, TDEE, calorie and macro targets and keeps a local food, workout and weight log."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding the data file (overrides FITTRACK_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute targets from the stored profile or from the given metrics
    Targets(commands::profile::ProfileArgs),

    /// Show or edit the profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Manage the food database
    Food {
        #[command(subcommand)]
        action: FoodCommand,
    },

    /// Log food and review a day
    Log {
        #[command(subcommand)]
        action: LogCommand,
    },

    /// Log workouts
    Workout {
        #[command(subcommand)]
        action: WorkoutCommand,
    },

    /// Record body weight
    Weight {
        #[command(subcommand)]
        action: WeightCommand,
    },

    /// Manage the progress baseline
    Baseline {
        #[command(subcommand)]
        action: BaselineCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the stored profile and its targets
    Show,
    /// Update profile fields and recompute targets
    Set(commands::profile::ProfileArgs),
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FoodCommand {
    /// List or search foods
    List {
        /// Case-insensitive name filter
        #[arg(long, short = 'q', default_value = "")]
        query: String,

        /// Category filter ("all" for every category)
        #[arg(long)]
        category: Option<String>,

        /// List the categories instead of foods
        #[arg(long)]
        categories: bool,
    },
    /// Add a food
    Add(commands::food::FoodArgs),
    /// Replace a food's fields
    Update {
        /// Food id
        id: String,

        #[command(flatten)]
        food: commands::food::FoodArgs,
    },
    /// Delete a food
    Delete {
        /// Food id
        id: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum LogCommand {
    /// Log an amount of a food
    Add {
        /// Food id
        food_id: String,

        /// Meal slot (breakfast, lunch, dinner, snack)
        #[arg(long, short = 'm', default_value = "breakfast")]
        meal: MealType,

        /// Amount in the food's serving unit
        #[arg(long, default_value = "100")]
        quantity: f64,

        /// Day (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Delete a log entry
    Delete {
        /// Entry id
        id: String,
    },
    /// Show a day's meals, workouts and progress
    Day {
        /// Day (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WorkoutCommand {
    /// Log a strength workout
    Strength {
        /// Exercise name
        name: String,

        /// Primary muscle group
        #[arg(long)]
        muscle_group: String,

        /// Number of sets
        #[arg(long, default_value = "3")]
        sets: u32,

        /// Repetitions per set
        #[arg(long, default_value = "10")]
        reps: u32,

        /// Load in kg
        #[arg(long, default_value = "0")]
        weight: f64,

        /// Day (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Log a cardio workout
    Cardio {
        /// Activity name
        name: String,

        /// Primary muscle group
        #[arg(long, default_value = "cardio")]
        muscle_group: String,

        /// Duration in minutes
        #[arg(long)]
        duration: f64,

        /// Distance in km
        #[arg(long, default_value = "0")]
        distance: f64,

        /// Day (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List a day's workouts
    List {
        /// Day (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Delete a workout
    Delete {
        /// Workout id
        id: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WeightCommand {
    /// Record the weight for a day
    Record {
        /// Body weight in kg
        weight: f64,

        /// Day (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show the weight history
    History,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum BaselineCommand {
    /// Snapshot the current weight and calorie target
    Set,
    /// Show the baseline and the change since
    Show,
    /// Forget the baseline
    Reset,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_from_env(cli.verbose) {
        eprintln!("warning: {e}");
    }

    let output = Output::new(cli.json);
    match run(cli, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let code = error.code.exit_code();
            output.error(error);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn open_tracker(data_dir: Option<PathBuf>) -> AppResult<FitTracker> {
    let mut config = FitTrackConfig::load().map_err(AppError::from)?;
    if let Some(dir) = data_dir {
        config.storage.data_dir = dir;
    }
    debug!(path = %config.storage.store_path().display(), "Opening data file");
    FitTracker::open(&config)
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn run(cli: Cli, output: &Output) -> AppResult<()> {
    let tracker = open_tracker(cli.data_dir)?;

    match cli.command {
        Command::Targets(args) => commands::targets::run(&tracker, &args, output),
        Command::Profile { action } => match action {
            ProfileCommand::Show => commands::profile::show(&tracker, output),
            ProfileCommand::Set(args) => commands::profile::set(&tracker, &args, today(), output),
        },
        Command::Food { action } => match action {
            FoodCommand::List {
                query,
                category,
                categories,
            } => {
                if categories {
                    commands::food::categories(&tracker, output)
                } else {
                    commands::food::list(&tracker, &query, category.as_deref(), output)
                }
            }
            FoodCommand::Add(args) => commands::food::add(&tracker, &args, output),
            FoodCommand::Update { id, food } => commands::food::update(&tracker, &id, &food, output),
            FoodCommand::Delete { id } => commands::food::delete(&tracker, &id, output),
        },
        Command::Log { action } => match action {
            LogCommand::Add {
                food_id,
                meal,
                quantity,
                date,
            } => commands::log::add(
                &tracker,
                date.unwrap_or_else(today),
                &food_id,
                meal,
                quantity,
                output,
            ),
            LogCommand::Delete { id } => commands::log::delete(&tracker, &id, output),
            LogCommand::Day { date } => {
                commands::log::day(&tracker, date.unwrap_or_else(today), output)
            }
        },
        Command::Workout { action } => match action {
            WorkoutCommand::Strength {
                name,
                muscle_group,
                sets,
                reps,
                weight,
                date,
            } => commands::workout::add(
                &tracker,
                date.unwrap_or_else(today),
                name,
                muscle_group,
                WorkoutDetails::Strength {
                    sets,
                    reps,
                    weight_kg: weight,
                },
                output,
            ),
            WorkoutCommand::Cardio {
                name,
                muscle_group,
                duration,
                distance,
                date,
            } => commands::workout::add(
                &tracker,
                date.unwrap_or_else(today),
                name,
                muscle_group,
                WorkoutDetails::Cardio {
                    duration_min: duration,
                    distance_km: distance,
                },
                output,
            ),
            WorkoutCommand::List { date } => {
                commands::workout::list(&tracker, date.unwrap_or_else(today), output)
            }
            WorkoutCommand::Delete { id } => commands::workout::delete(&tracker, &id, output),
        },
        Command::Weight { action } => match action {
            WeightCommand::Record { weight, date } => {
                commands::progress::record_weight(&tracker, date.unwrap_or_else(today), weight, output)
            }
            WeightCommand::History => commands::progress::weight_history(&tracker, output),
        },
        Command::Baseline { action } => match action {
            BaselineCommand::Set => commands::progress::set_baseline(&tracker, today(), output),
            BaselineCommand::Show => commands::progress::show_baseline(&tracker, output),
            BaselineCommand::Reset => {
                warn!("Resetting baseline");
                commands::progress::reset_baseline(&tracker, output)
            }
        },
    }
}
