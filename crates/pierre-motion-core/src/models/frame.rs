// ABOUTME: Movement frame model pairing a keypoint set with its derived centroid and velocity
// ABOUTME: Frames are created once per detection; only a pixel-scale change rewrites their velocity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::KeypointSet;
use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// 2D vector used for pixel positions and metric velocities
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    /// Horizontal component
    pub x: f64,
    /// Vertical component (grows downward in image space)
    pub y: f64,
}

impl Point2 {
    /// Origin / zero vector
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length
    #[must_use]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Multiply both components by `factor`
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl Sub for Point2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// One ingested detection with its derived kinematic state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementFrame {
    /// Monotonic capture timestamp in milliseconds
    pub timestamp_ms: u64,
    /// Keypoints as delivered by the estimator
    pub keypoints: KeypointSet,
    /// Weighted centroid in pixel space; `None` when no keypoint was confident enough
    pub center_of_mass: Option<Point2>,
    /// Centroid velocity relative to the previous frame, in meters per second
    pub velocity: Point2,
}

impl MovementFrame {
    /// Scalar speed in meters per second
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Seconds elapsed since `previous`; zero or negative for degenerate timing
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Safe: ms timestamps stay far below 2^52
    pub fn seconds_since(&self, previous: &Self) -> f64 {
        (self.timestamp_ms as f64 - previous.timestamp_ms as f64) / 1000.0
    }

    /// Centroid displacement from `previous` in pixels, when both centroids are valid
    #[must_use]
    pub fn displacement_from(&self, previous: &Self) -> Option<Point2> {
        Some(self.center_of_mass? - previous.center_of_mass?)
    }
}
