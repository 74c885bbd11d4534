// ABOUTME: Core types and constants for the FitTrack nutrition and training log
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitTrack Core
//!
//! Foundation crate providing shared types and constants for FitTrack.
//! It is designed to change infrequently so the main crate and its binary
//! can depend on a stable vocabulary.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy densities, storage keys, and default profile values
//! - **models**: Body metrics, preferences, targets, foods, and log entries

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (profile, targets, foods, logs)
pub mod models;
