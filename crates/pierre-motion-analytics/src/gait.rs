// ABOUTME: Gait analysis from ankle vertical-velocity sign changes
// ABOUTME: Detects step events and derives cadence, stride length, and duty-cycle timings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Gait analysis
//!
//! A step is counted where an ankle's vertical velocity goes from positive
//! to non-positive. Ground contact and flight time are fixed fractions of
//! the cycle period (`60000 / cadence`); this is a simplifying model and not
//! a measurement of ankle-ground contact, which the skeleton alone cannot
//! provide.
//!
//! Stride length divides the horizontal path length of the centroid (the
//! sum of per-frame `|Δx|`) by the step count. An athlete who turns around
//! inside the window covers ground in both directions, and every metre
//! counts toward stride even though the net displacement may be near zero.
#![allow(clippy::cast_precision_loss)] // Safe: step counts and window sizes are small

use crate::config::AnalysisThresholds;
use crate::history::FrameHistoryBuffer;
use pierre_motion_core::constants::units::MS_PER_MINUTE;
use pierre_motion_core::models::{GaitMetrics, KeypointIndex};

/// Ankles tracked for step detection
pub const TRACKED_ANKLES: [KeypointIndex; 2] = [KeypointIndex::LeftAnkle, KeypointIndex::RightAnkle];

/// Cadence, stride length, and duty-cycle timings
#[derive(Debug, Clone, Copy)]
pub struct GaitAnalyzer {
    min_frames: usize,
    min_confidence: f64,
    ground_contact_fraction: f64,
    flight_fraction: f64,
}

impl GaitAnalyzer {
    /// Build from analysis thresholds
    #[must_use]
    pub const fn new(thresholds: &AnalysisThresholds) -> Self {
        Self {
            min_frames: thresholds.gait_min_frames,
            min_confidence: thresholds.gait_min_confidence,
            ground_contact_fraction: thresholds.ground_contact_fraction,
            flight_fraction: thresholds.flight_fraction,
        }
    }

    /// Compute gait metrics; all-zero below the minimum window
    #[must_use]
    pub fn compute_gait(&self, history: &FrameHistoryBuffer, pixels_per_meter: f64) -> GaitMetrics {
        if history.len() < self.min_frames {
            return GaitMetrics::default();
        }

        let steps = self.count_steps(history);
        let window_minutes = history.window_duration_ms() as f64 / MS_PER_MINUTE;
        let cadence = if window_minutes > 0.0 {
            steps as f64 / window_minutes
        } else {
            0.0
        };

        // path length, not net displacement
        let horizontal_meters = history
            .centroid_displacements()
            .map(|delta| delta.x.abs())
            .sum::<f64>()
            / pixels_per_meter;
        let stride_length = if steps > 0 {
            horizontal_meters / steps as f64
        } else {
            0.0
        };

        let cycle_ms = if cadence > 0.0 {
            MS_PER_MINUTE / cadence
        } else {
            0.0
        };

        GaitMetrics {
            cadence,
            stride_length,
            ground_contact_time: cycle_ms * self.ground_contact_fraction,
            flight_time: cycle_ms * self.flight_fraction,
        }
    }

    /// Step events summed over both ankles
    #[must_use]
    pub fn count_steps(&self, history: &FrameHistoryBuffer) -> usize {
        TRACKED_ANKLES
            .iter()
            .map(|&ankle| count_step_events(&self.ankle_vertical_velocities(history, ankle)))
            .sum()
    }

    /// `Δy/Δt` (px/s) for each pair where both ankle samples are confident and `Δt > 0`
    #[must_use]
    pub fn ankle_vertical_velocities(
        &self,
        history: &FrameHistoryBuffer,
        ankle: KeypointIndex,
    ) -> Vec<f64> {
        history
            .pairs()
            .filter_map(|(previous, current)| {
                let before = previous.keypoints.get(ankle);
                let after = current.keypoints.get(ankle);
                let dt_seconds = current.seconds_since(previous);
                (before.is_confident(self.min_confidence)
                    && after.is_confident(self.min_confidence)
                    && dt_seconds > 0.0)
                    .then(|| (after.y - before.y) / dt_seconds)
            })
            .collect()
    }
}

/// Count samples where velocity goes from positive to non-positive
#[must_use]
pub fn count_step_events(velocities: &[f64]) -> usize {
    velocities
        .windows(2)
        .filter(|pair| pair[0] > 0.0 && pair[1] <= 0.0)
        .count()
}
