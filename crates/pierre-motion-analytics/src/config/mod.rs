// ABOUTME: Configuration module for pierre-motion-analytics crate
// ABOUTME: Re-exports athlete profile, analysis thresholds, and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Athlete body parameters used for scaling and power
pub mod athlete;

/// Configuration error types
pub mod error;

/// Detection and window thresholds
pub mod thresholds;

pub use athlete::AthleteProfile;
pub use error::ConfigError;
pub use thresholds::AnalysisThresholds;
