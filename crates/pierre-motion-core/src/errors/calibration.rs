// ABOUTME: Calibration error types raised when a reference pose cannot establish scale
// ABOUTME: Recoverable failures; callers retry calibration on a later frame
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::KeypointIndex;
use thiserror::Error;

/// Reasons a pose could not be used to derive the pixels-per-meter scale.
///
/// Calibration failures never change engine state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalibrationError {
    /// A required keypoint (nose or either ankle) was not confidently detected
    #[error("keypoint '{keypoint}' confidence {confidence:.2} is not above {threshold:.2}")]
    LowConfidence {
        /// Keypoint that failed the confidence check
        keypoint: KeypointIndex,
        /// Observed confidence
        confidence: f64,
        /// Required confidence (exclusive)
        threshold: f64,
    },

    /// Nose and ankles produce no usable vertical extent
    #[error("reference pose spans {pixels:.2} pixels vertically, cannot derive a scale")]
    DegenerateHeight {
        /// Measured head-to-ankle extent in pixels
        pixels: f64,
    },
}
