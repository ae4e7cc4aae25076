// ABOUTME: Vertical motion analysis with an explicit takeoff/flight/landing state machine
// ABOUTME: Estimates vertical oscillation and the highest jump in the history window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Vertical motion
//!
//! Image coordinates grow downward: negative vertical velocity is upward
//! motion and a smaller `y` is a higher position.
#![allow(clippy::cast_precision_loss)] // Safe: window sizes are small

use crate::config::AnalysisThresholds;
use crate::history::FrameHistoryBuffer;
use pierre_motion_core::constants::units::CM_PER_METER;
use pierre_motion_core::models::VerticalMetrics;

/// Velocity triggers for the jump state machine (m/s)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpTriggers {
    /// Vertical velocity below this starts a flight phase
    pub takeoff_velocity_mps: f64,
    /// Vertical velocity above this, while descending, ends a flight phase
    pub landing_velocity_mps: f64,
}

/// A completed takeoff-to-landing cycle, in pixel rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpEvent {
    /// Centroid row at takeoff
    pub takeoff_y: f64,
    /// Highest centroid position reached (smallest row)
    pub peak_y: f64,
}

impl JumpEvent {
    /// Jump height in centimeters
    #[must_use]
    pub fn height_cm(&self, pixels_per_meter: f64) -> f64 {
        (self.takeoff_y - self.peak_y) / pixels_per_meter * CM_PER_METER
    }
}

/// Jump detection state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum JumpState {
    /// On the ground, waiting for a takeoff trigger
    #[default]
    Grounded,
    /// Airborne since `takeoff_y`, highest so far at `peak_y`
    InFlight {
        /// Centroid row of the last grounded frame
        takeoff_y: f64,
        /// Smallest centroid row seen during flight
        peak_y: f64,
    },
}

impl JumpState {
    /// Advance by one frame pair
    ///
    /// Returns the next state and, on landing, the completed jump.
    #[must_use]
    pub fn advance(
        self,
        previous_y: f64,
        current_y: f64,
        vertical_velocity: f64,
        triggers: &JumpTriggers,
    ) -> (Self, Option<JumpEvent>) {
        match self {
            Self::Grounded if vertical_velocity < triggers.takeoff_velocity_mps => (
                Self::InFlight {
                    takeoff_y: previous_y,
                    peak_y: current_y,
                },
                None,
            ),
            Self::Grounded => (Self::Grounded, None),
            Self::InFlight { takeoff_y, peak_y } => {
                let peak_y = peak_y.min(current_y);
                if current_y > previous_y && vertical_velocity > triggers.landing_velocity_mps {
                    (Self::Grounded, Some(JumpEvent { takeoff_y, peak_y }))
                } else {
                    (Self::InFlight { takeoff_y, peak_y }, None)
                }
            }
        }
    }
}

/// Vertical oscillation and jump height
#[derive(Debug, Clone, Copy)]
pub struct VerticalMotionAnalyzer {
    min_frames: usize,
    triggers: JumpTriggers,
}

impl VerticalMotionAnalyzer {
    /// Build from analysis thresholds
    #[must_use]
    pub const fn new(thresholds: &AnalysisThresholds) -> Self {
        Self {
            min_frames: thresholds.vertical_min_frames,
            triggers: JumpTriggers {
                takeoff_velocity_mps: thresholds.takeoff_velocity_mps,
                landing_velocity_mps: thresholds.landing_velocity_mps,
            },
        }
    }

    /// Compute vertical metrics; all-zero below the minimum window
    #[must_use]
    pub fn compute_vertical(
        &self,
        history: &FrameHistoryBuffer,
        pixels_per_meter: f64,
    ) -> VerticalMetrics {
        if history.len() < self.min_frames {
            return VerticalMetrics::default();
        }

        let jump_height = self
            .detect_jumps(history)
            .iter()
            .map(|jump| jump.height_cm(pixels_per_meter))
            .fold(0.0, f64::max);

        VerticalMetrics {
            vertical_oscillation: oscillation_pixels(history) / pixels_per_meter * CM_PER_METER,
            jump_height,
        }
    }

    /// Run the state machine over the window and collect every completed jump
    ///
    /// Pairs without two valid centroids are skipped.
    #[must_use]
    pub fn detect_jumps(&self, history: &FrameHistoryBuffer) -> Vec<JumpEvent> {
        let mut state = JumpState::Grounded;
        let mut jumps = Vec::new();

        for (previous, current) in history.pairs() {
            let (Some(before), Some(after)) = (previous.center_of_mass, current.center_of_mass)
            else {
                continue;
            };
            let (next, landed) = state.advance(before.y, after.y, current.velocity.y, &self.triggers);
            state = next;
            jumps.extend(landed);
        }

        jumps
    }
}

/// Population standard deviation of valid centroid rows, in pixels
fn oscillation_pixels(history: &FrameHistoryBuffer) -> f64 {
    let rows: Vec<f64> = history
        .iter()
        .filter_map(|frame| frame.center_of_mass.map(|point| point.y))
        .collect();
    if rows.len() < 2 {
        return 0.0;
    }

    let count = rows.len() as f64;
    let mean = rows.iter().sum::<f64>() / count;
    let variance = rows.iter().map(|y| (y - mean).powi(2)).sum::<f64>() / count;
    variance.sqrt()
}
