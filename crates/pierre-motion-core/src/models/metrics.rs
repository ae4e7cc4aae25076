// ABOUTME: Performance metrics snapshot produced on every recomputation
// ABOUTME: Aggregates independently computed kinematics, gait, vertical, and power results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Speed figures in meters per second
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeedMetrics {
    /// Speed of the most recent frame
    pub instantaneous: f64,
    /// Mean frame speed over the window
    pub average: f64,
    /// Highest frame speed in the window
    pub max: f64,
}

/// Distance travelled by the centroid, in meters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DistanceMetrics {
    /// Sum of Euclidean displacements
    pub total: f64,
    /// Sum of absolute horizontal displacements
    pub horizontal: f64,
    /// Sum of absolute vertical displacements
    pub vertical: f64,
}

/// Acceleration in meters per second squared
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccelerationMetrics {
    /// Latest signed speed change rate
    pub current: f64,
    /// Largest absolute speed change rate in the window
    pub max: f64,
}

/// Mechanical power estimate in watts
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerMetrics {
    /// Power at the latest sample
    pub current: f64,
    /// Mean over the window
    pub average: f64,
    /// Window maximum
    pub peak: f64,
}

/// Output of the kinematics pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KinematicsMetrics {
    /// Speed figures
    pub speed: SpeedMetrics,
    /// Distance decomposition
    pub distance: DistanceMetrics,
    /// Acceleration figures
    pub acceleration: AccelerationMetrics,
}

/// Output of the gait pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GaitMetrics {
    /// Steps per minute, both feet combined
    pub cadence: f64,
    /// Meters of horizontal travel per step
    pub stride_length: f64,
    /// Milliseconds of ground contact per cycle (fixed-fraction model)
    pub ground_contact_time: f64,
    /// Milliseconds airborne per cycle (fixed-fraction model)
    pub flight_time: f64,
}

/// Output of the vertical motion pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VerticalMetrics {
    /// Standard deviation of centroid height, in centimeters
    pub vertical_oscillation: f64,
    /// Highest jump detected in the window, in centimeters
    pub jump_height: f64,
}

/// Immutable metrics bundle returned to callers
///
/// `frame_count` lets callers tell "not enough data yet" apart from a
/// measured zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Speed figures (m/s)
    pub speed: SpeedMetrics,
    /// Distance decomposition (m)
    pub distance: DistanceMetrics,
    /// Acceleration figures (m/s²)
    pub acceleration: AccelerationMetrics,
    /// Power figures (W)
    pub power: PowerMetrics,
    /// Steps per minute
    pub cadence: f64,
    /// Meters per step
    pub stride_length: f64,
    /// Centimeters
    pub vertical_oscillation: f64,
    /// Milliseconds
    pub ground_contact_time: f64,
    /// Milliseconds
    pub flight_time: f64,
    /// Centimeters
    pub jump_height: f64,
    /// Frames in the history window when this snapshot was computed
    pub frame_count: usize,
    /// Time spanned by that window in milliseconds
    pub window_duration_ms: u64,
}

impl PerformanceMetrics {
    /// Combine the analyzer outputs into one snapshot
    #[must_use]
    pub const fn assemble(
        kinematics: KinematicsMetrics,
        gait: GaitMetrics,
        vertical: VerticalMetrics,
        power: PowerMetrics,
        frame_count: usize,
        window_duration_ms: u64,
    ) -> Self {
        Self {
            speed: kinematics.speed,
            distance: kinematics.distance,
            acceleration: kinematics.acceleration,
            power,
            cadence: gait.cadence,
            stride_length: gait.stride_length,
            vertical_oscillation: vertical.vertical_oscillation,
            ground_contact_time: gait.ground_contact_time,
            flight_time: gait.flight_time,
            jump_height: vertical.jump_height,
            frame_count,
            window_duration_ms,
        }
    }
}
