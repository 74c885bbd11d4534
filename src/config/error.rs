// ABOUTME: Configuration error types for loading and validating FitTrack settings
// ABOUTME: Converts into AppError so configuration failures flow through `?`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fittrack_core::errors::AppError;
use thiserror::Error;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A lower bound exceeds its upper bound, or an ordering is broken
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// An environment override could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value lies outside what the calculator can use
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),

    /// A required setting is blank
    #[error("Missing required setting: {0}")]
    Missing(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
