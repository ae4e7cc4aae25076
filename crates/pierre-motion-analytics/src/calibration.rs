// ABOUTME: Pixel-to-meter calibration from a standing reference pose
// ABOUTME: Holds the shared scale factor and the calibrator that overwrites it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calibration
//!
//! The scale factor is `heightPixels / athleteHeightMeters`, where the
//! pixel height is measured from the nose to the mean ankle row of a
//! standing pose. Failures leave the current scale untouched.

use pierre_motion_core::constants::engine::DEFAULT_PIXELS_PER_METER;
use pierre_motion_core::errors::CalibrationError;
use pierre_motion_core::models::{KeypointIndex, KeypointSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Current pixels-per-meter scale shared by all analyzers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationState {
    pixels_per_meter: f64,
    calibrated: bool,
}

impl CalibrationState {
    /// Start from a preset scale, or from the default guess when none is configured
    #[must_use]
    pub fn new(preset: Option<f64>) -> Self {
        preset.map_or(
            Self {
                pixels_per_meter: DEFAULT_PIXELS_PER_METER,
                calibrated: false,
            },
            |pixels_per_meter| Self {
                pixels_per_meter,
                calibrated: true,
            },
        )
    }

    /// Current scale
    #[must_use]
    pub const fn pixels_per_meter(&self) -> f64 {
        self.pixels_per_meter
    }

    /// Whether the scale came from a preset or a successful calibration
    #[must_use]
    pub const fn is_calibrated(&self) -> bool {
        self.calibrated
    }

    /// Convert a pixel length to meters
    #[must_use]
    pub fn to_meters(&self, pixels: f64) -> f64 {
        pixels / self.pixels_per_meter
    }

    fn set(&mut self, pixels_per_meter: f64) {
        self.pixels_per_meter = pixels_per_meter;
        self.calibrated = true;
    }
}

impl Default for CalibrationState {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Derives the scale factor from a known standing height
#[derive(Debug, Clone, Copy)]
pub struct Calibrator {
    athlete_height_m: f64,
    min_confidence: f64,
}

impl Calibrator {
    /// Create a calibrator for an athlete of the given height
    #[must_use]
    pub const fn new(athlete_height_m: f64, min_confidence: f64) -> Self {
        Self {
            athlete_height_m,
            min_confidence,
        }
    }

    /// Measure the scale a pose implies without touching any state
    ///
    /// # Errors
    ///
    /// Returns `CalibrationError::LowConfidence` if the nose or either ankle is
    /// not above the confidence threshold, or `DegenerateHeight` if the pose
    /// has no vertical extent
    pub fn measure(&self, keypoints: &KeypointSet) -> Result<f64, CalibrationError> {
        for index in [
            KeypointIndex::Nose,
            KeypointIndex::LeftAnkle,
            KeypointIndex::RightAnkle,
        ] {
            let keypoint = keypoints.get(index);
            if !keypoint.is_confident(self.min_confidence) {
                return Err(CalibrationError::LowConfidence {
                    keypoint: index,
                    confidence: keypoint.confidence,
                    threshold: self.min_confidence,
                });
            }
        }

        let nose = keypoints.get(KeypointIndex::Nose);
        let ankle_y = (keypoints.get(KeypointIndex::LeftAnkle).y
            + keypoints.get(KeypointIndex::RightAnkle).y)
            / 2.0;
        let height_pixels = (ankle_y - nose.y).abs();

        if height_pixels <= f64::EPSILON {
            return Err(CalibrationError::DegenerateHeight {
                pixels: height_pixels,
            });
        }

        Ok(height_pixels / self.athlete_height_m)
    }

    /// Overwrite `state` with the scale measured from `keypoints`
    ///
    /// # Errors
    ///
    /// Propagates `measure` failures; `state` is unchanged on error
    pub fn calibrate_from_pose(
        &self,
        keypoints: &KeypointSet,
        state: &mut CalibrationState,
    ) -> Result<f64, CalibrationError> {
        match self.measure(keypoints) {
            Ok(pixels_per_meter) => {
                debug!(
                    calibration.pixels_per_meter = pixels_per_meter,
                    calibration.previous = state.pixels_per_meter,
                    "Calibrated from reference pose"
                );
                state.set(pixels_per_meter);
                Ok(pixels_per_meter)
            }
            Err(error) => {
                warn!(calibration.error = %error, "Calibration rejected, keeping current scale");
                Err(error)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use pierre_motion_core::models::Keypoint;

    fn standing_pose(confidence: f64) -> KeypointSet {
        let mut points: [Keypoint; 17] = std::array::from_fn(|_| Keypoint::missing());
        points[KeypointIndex::Nose.index()] = Keypoint::new(320.0, 100.0, confidence);
        points[KeypointIndex::LeftAnkle.index()] = Keypoint::new(300.0, 590.0, confidence);
        points[KeypointIndex::RightAnkle.index()] = Keypoint::new(340.0, 610.0, confidence);
        KeypointSet::new(points)
    }

    #[test]
    fn test_reference_pose_scale() {
        let mut state = CalibrationState::default();
        let calibrator = Calibrator::new(1.75, 0.5);

        let scale = calibrator
            .calibrate_from_pose(&standing_pose(0.9), &mut state)
            .unwrap();

        assert!((scale - 500.0 / 1.75).abs() < 1e-9);
        assert!((state.pixels_per_meter() - 285.714).abs() < 0.001);
        assert!(state.is_calibrated());
    }

    #[test]
    fn test_low_confidence_leaves_state_untouched() {
        let mut state = CalibrationState::new(Some(200.0));
        let calibrator = Calibrator::new(1.75, 0.5);

        let error = calibrator
            .calibrate_from_pose(&standing_pose(0.5), &mut state)
            .unwrap_err();

        assert!(matches!(
            error,
            CalibrationError::LowConfidence {
                keypoint: KeypointIndex::Nose,
                ..
            }
        ));
        assert_eq!(state.pixels_per_meter(), 200.0);
    }

    #[test]
    fn test_doubling_height_halves_scale() {
        let pose = standing_pose(0.9);
        let short = Calibrator::new(1.75, 0.5).measure(&pose).unwrap();
        let tall = Calibrator::new(3.5, 0.5).measure(&pose).unwrap();
        assert!((short / tall - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_flat_pose_is_degenerate() {
        let mut points: [Keypoint; 17] = std::array::from_fn(|_| Keypoint::missing());
        for index in [
            KeypointIndex::Nose,
            KeypointIndex::LeftAnkle,
            KeypointIndex::RightAnkle,
        ] {
            points[index.index()] = Keypoint::new(10.0, 400.0, 0.9);
        }
        let result = Calibrator::new(1.75, 0.5).measure(&KeypointSet::new(points));
        assert!(matches!(
            result,
            Err(CalibrationError::DegenerateHeight { .. })
        ));
    }

    #[test]
    fn test_uncalibrated_default_scale() {
        let state = CalibrationState::default();
        assert!(!state.is_calibrated());
        assert_eq!(state.pixels_per_meter(), DEFAULT_PIXELS_PER_METER);
        assert_eq!(state.to_meters(250.0), 2.5);
    }
}
