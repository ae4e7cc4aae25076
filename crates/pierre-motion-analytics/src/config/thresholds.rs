// ABOUTME: Analysis threshold configuration for confidence gating, windows, and event triggers
// ABOUTME: Defaults come from core policy constants so tests can probe boundaries precisely
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analysis Threshold Configuration
//!
//! Every magic number used by the analyzers lives here with its default
//! taken from `pierre_motion_core::constants`.

use super::ConfigError;
use pierre_motion_core::constants::{confidence, gait, jump, windows};
use serde::{Deserialize, Serialize};

/// Thresholds shared by all analyzers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisThresholds {
    /// Nose and ankles must exceed this to calibrate
    pub calibration_min_confidence: f64,
    /// Keypoints must exceed this to contribute to the centroid
    pub centroid_min_confidence: f64,
    /// Ankle samples must exceed this to contribute to gait
    pub gait_min_confidence: f64,
    /// Vertical velocity that starts a flight phase (negative is upward)
    pub takeoff_velocity_mps: f64,
    /// Vertical velocity that ends a flight phase while descending
    pub landing_velocity_mps: f64,
    /// Share of a gait cycle in ground contact
    pub ground_contact_fraction: f64,
    /// Share of a gait cycle airborne
    pub flight_fraction: f64,
    /// Frames required before kinematics produces output
    pub kinematics_min_frames: usize,
    /// Frames required before gait produces output
    pub gait_min_frames: usize,
    /// Frames required before vertical analysis produces output
    pub vertical_min_frames: usize,
}

impl Default for AnalysisThresholds {
    fn default() -> Self {
        Self {
            calibration_min_confidence: confidence::CALIBRATION_MIN_CONFIDENCE,
            centroid_min_confidence: confidence::CENTROID_MIN_CONFIDENCE,
            gait_min_confidence: confidence::GAIT_MIN_CONFIDENCE,
            takeoff_velocity_mps: jump::TAKEOFF_VELOCITY_MPS,
            landing_velocity_mps: jump::LANDING_VELOCITY_MPS,
            ground_contact_fraction: gait::GROUND_CONTACT_FRACTION,
            flight_fraction: gait::FLIGHT_FRACTION,
            kinematics_min_frames: windows::KINEMATICS_MIN_FRAMES,
            gait_min_frames: windows::GAIT_MIN_FRAMES,
            vertical_min_frames: windows::VERTICAL_MIN_FRAMES,
        }
    }
}

impl AnalysisThresholds {
    /// Validate threshold consistency
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a confidence or fraction leaves [0, 1], the
    /// duty fractions exceed a full cycle, the jump triggers point the wrong
    /// way, or the kinematics window cannot hold a frame pair
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit_interval = |value: f64| (0.0..=1.0).contains(&value);

        if !unit_interval(self.calibration_min_confidence)
            || !unit_interval(self.centroid_min_confidence)
            || !unit_interval(self.gait_min_confidence)
        {
            return Err(ConfigError::ValueOutOfRange(
                "confidence thresholds must be within [0, 1]",
            ));
        }

        if !unit_interval(self.ground_contact_fraction) || !unit_interval(self.flight_fraction) {
            return Err(ConfigError::ValueOutOfRange(
                "gait duty fractions must be within [0, 1]",
            ));
        }

        if self.ground_contact_fraction + self.flight_fraction > 1.0 {
            return Err(ConfigError::InvalidRange(
                "ground contact and flight fractions exceed a full gait cycle",
            ));
        }

        if self.takeoff_velocity_mps.is_nan() || self.takeoff_velocity_mps >= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "takeoff velocity must be negative (upward in image space)",
            ));
        }

        if self.landing_velocity_mps.is_nan() || self.landing_velocity_mps <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "landing velocity must be positive (downward in image space)",
            ));
        }

        if self.kinematics_min_frames < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "kinematics needs a window of at least 2 frames",
            ));
        }

        Ok(())
    }
}
