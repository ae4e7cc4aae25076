// ABOUTME: Motion engine configuration combining athlete profile, scale preset, and analysis thresholds
// ABOUTME: Validated once at engine construction; environment loading lives in the environment module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable loading for `EngineConfig`
pub mod environment;

pub use pierre_motion_analytics::config::{AnalysisThresholds, AthleteProfile, ConfigError};

use pierre_motion_core::constants::engine::{
    DEFAULT_HISTORY_CAPACITY, DEFAULT_RECOMPUTE_INTERVAL_MS,
};
use serde::{Deserialize, Serialize};

/// Smallest history that can hold a frame pair
pub const MIN_HISTORY_CAPACITY: usize = 2;

/// Everything a `MotionEngine` needs at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Athlete height and mass
    pub athlete: AthleteProfile,
    /// Known scale; `None` starts uncalibrated at the default guess
    pub pixels_per_meter: Option<f64>,
    /// Frames retained in the history window
    pub history_capacity: usize,
    /// Minimum wall-clock spacing between full recomputations (ms)
    pub recompute_interval_ms: u64,
    /// Analyzer thresholds
    pub thresholds: AnalysisThresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            athlete: AthleteProfile::default(),
            pixels_per_meter: None,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            recompute_interval_ms: DEFAULT_RECOMPUTE_INTERVAL_MS,
            thresholds: AnalysisThresholds::default(),
        }
    }
}

impl EngineConfig {
    /// Configuration for an athlete with the given height and mass
    #[must_use]
    pub fn for_athlete(height_m: f64, mass_kg: f64) -> Self {
        Self {
            athlete: AthleteProfile::new(height_m, mass_kg),
            ..Self::default()
        }
    }

    /// Use a known pixels-per-meter scale instead of calibrating
    #[must_use]
    pub const fn with_pixels_per_meter(mut self, pixels_per_meter: f64) -> Self {
        self.pixels_per_meter = Some(pixels_per_meter);
        self
    }

    /// Set the recompute throttle interval
    #[must_use]
    pub const fn with_recompute_interval_ms(mut self, interval_ms: u64) -> Self {
        self.recompute_interval_ms = interval_ms;
        self
    }

    /// Set the history window capacity
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Validate the whole configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the athlete profile or thresholds are invalid,
    /// a preset scale is not a positive finite number, or the history window
    /// cannot hold a frame pair
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.athlete.validate()?;
        self.thresholds.validate()?;

        if let Some(pixels_per_meter) = self.pixels_per_meter {
            if !pixels_per_meter.is_finite() || pixels_per_meter <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "pixels per meter must be a positive number",
                ));
            }
        }

        if self.history_capacity < MIN_HISTORY_CAPACITY {
            return Err(ConfigError::ValueOutOfRange(
                "history capacity must hold at least two frames",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.history_capacity, 120);
        assert_eq!(config.recompute_interval_ms, 33);
        assert!(config.pixels_per_meter.is_none());
    }

    #[test]
    fn test_rejects_bad_scale_and_capacity() {
        assert!(EngineConfig::default()
            .with_pixels_per_meter(0.0)
            .validate()
            .is_err());
        assert!(EngineConfig::default()
            .with_pixels_per_meter(f64::NAN)
            .validate()
            .is_err());
        assert!(EngineConfig::default()
            .with_history_capacity(1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_rejects_bad_athlete() {
        assert!(EngineConfig::for_athlete(0.0, 70.0).validate().is_err());
        assert!(EngineConfig::for_athlete(1.8, -1.0).validate().is_err());
    }
}
