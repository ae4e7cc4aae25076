// ABOUTME: Athlete profile configuration (standing height and body mass)
// ABOUTME: Height anchors calibration; mass feeds the mechanical power estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use pierre_motion_core::constants::engine::{DEFAULT_ATHLETE_HEIGHT_M, DEFAULT_ATHLETE_MASS_KG};
use serde::{Deserialize, Serialize};

/// Physical parameters of the tracked athlete
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Standing height in meters
    pub height_m: f64,
    /// Body mass in kilograms
    pub mass_kg: f64,
}

impl Default for AthleteProfile {
    fn default() -> Self {
        Self {
            height_m: DEFAULT_ATHLETE_HEIGHT_M,
            mass_kg: DEFAULT_ATHLETE_MASS_KG,
        }
    }
}

impl AthleteProfile {
    /// Create a profile from height and mass
    #[must_use]
    pub const fn new(height_m: f64, mass_kg: f64) -> Self {
        Self { height_m, mass_kg }
    }

    /// Validate that both values are finite and positive
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for non-positive or non-finite values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.height_m.is_finite() || self.height_m <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "athlete height must be a positive number of meters",
            ));
        }
        if !self.mass_kg.is_finite() || self.mass_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "athlete mass must be a positive number of kilograms",
            ));
        }
        Ok(())
    }
}
