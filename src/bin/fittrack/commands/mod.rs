// ABOUTME: Command modules for the fittrack CLI
// ABOUTME: One module per top-level subcommand group
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod food;
pub mod log;
pub mod profile;
pub mod progress;
pub mod targets;
pub mod workout;
