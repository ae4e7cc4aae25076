// ABOUTME: Finite-difference kinematics over the frame history window
// ABOUTME: Derives speed, distance decomposition, and acceleration from centroid motion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Kinematics
//!
//! Frame velocity is computed once at ingestion (`velocity_between`) and
//! stored on the frame. The window pass derives speed statistics, distance
//! and acceleration from those stored values.
//!
//! No outlier rejection is applied: a confident keypoint reacquired after
//! occlusion moves the centroid abruptly and shows up as a speed spike.
#![allow(clippy::cast_precision_loss)] // Safe: window sizes are small

use crate::history::FrameHistoryBuffer;
use pierre_motion_core::models::{
    AccelerationMetrics, DistanceMetrics, KinematicsMetrics, MovementFrame, Point2, SpeedMetrics,
};

/// One acceleration sample with the speed it was reached at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicSample {
    /// Signed speed change rate (m/s²)
    pub acceleration: f64,
    /// Speed of the later frame in the pair (m/s)
    pub speed: f64,
}

/// Velocity of a new centroid relative to the previous frame, in m/s
///
/// Zero when there is no previous frame, either centroid is invalid, or
/// `Δt <= 0`.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Safe: ms timestamps stay far below 2^52
pub fn velocity_between(
    previous: Option<&MovementFrame>,
    center_of_mass: Option<Point2>,
    timestamp_ms: u64,
    pixels_per_meter: f64,
) -> Point2 {
    let (Some(previous), Some(current)) = (previous, center_of_mass) else {
        return Point2::ZERO;
    };
    let Some(previous_position) = previous.center_of_mass else {
        return Point2::ZERO;
    };

    let dt_seconds = (timestamp_ms as f64 - previous.timestamp_ms as f64) / 1000.0;
    if dt_seconds <= 0.0 {
        return Point2::ZERO;
    }

    (current - previous_position).scale(1.0 / pixels_per_meter / dt_seconds)
}

/// Speed, distance, and acceleration over the window
#[derive(Debug, Clone, Copy)]
pub struct KinematicsEngine {
    min_frames: usize,
}

impl KinematicsEngine {
    /// Create an engine that needs `min_frames` before producing output
    #[must_use]
    pub const fn new(min_frames: usize) -> Self {
        Self { min_frames }
    }

    /// Compute kinematics; all-zero below the minimum window
    #[must_use]
    pub fn compute_kinematics(
        &self,
        history: &FrameHistoryBuffer,
        pixels_per_meter: f64,
    ) -> KinematicsMetrics {
        if history.len() < self.min_frames {
            return KinematicsMetrics::default();
        }

        KinematicsMetrics {
            speed: Self::speed(history),
            distance: Self::distance(history, pixels_per_meter),
            acceleration: Self::acceleration(&self.samples(history)),
        }
    }

    /// Acceleration samples for every pair with `Δt > 0`; empty below the minimum window
    #[must_use]
    pub fn samples(&self, history: &FrameHistoryBuffer) -> Vec<KinematicSample> {
        if history.len() < self.min_frames {
            return Vec::new();
        }

        history
            .pairs()
            .filter_map(|(previous, current)| {
                let dt_seconds = current.seconds_since(previous);
                (dt_seconds > 0.0).then(|| KinematicSample {
                    acceleration: (current.speed() - previous.speed()) / dt_seconds,
                    speed: current.speed(),
                })
            })
            .collect()
    }

    fn speed(history: &FrameHistoryBuffer) -> SpeedMetrics {
        let speeds: Vec<f64> = history.iter().map(MovementFrame::speed).collect();
        if speeds.is_empty() {
            return SpeedMetrics::default();
        }

        SpeedMetrics {
            instantaneous: speeds.last().copied().unwrap_or_default(),
            average: speeds.iter().sum::<f64>() / speeds.len() as f64,
            max: speeds.iter().copied().fold(0.0, f64::max),
        }
    }

    fn distance(history: &FrameHistoryBuffer, pixels_per_meter: f64) -> DistanceMetrics {
        history
            .centroid_displacements()
            .map(|delta| delta.scale(1.0 / pixels_per_meter))
            .fold(DistanceMetrics::default(), |acc, delta| DistanceMetrics {
                total: acc.total + delta.norm(),
                horizontal: acc.horizontal + delta.x.abs(),
                vertical: acc.vertical + delta.y.abs(),
            })
    }

    fn acceleration(samples: &[KinematicSample]) -> AccelerationMetrics {
        AccelerationMetrics {
            current: samples.last().map_or(0.0, |sample| sample.acceleration),
            max: samples
                .iter()
                .map(|sample| sample.acceleration.abs())
                .fold(0.0, f64::max),
        }
    }
}
