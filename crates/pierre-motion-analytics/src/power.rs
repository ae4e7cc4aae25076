// ABOUTME: Mechanical power estimation from athlete mass, acceleration, and speed
// ABOUTME: Newtonian approximation P = m * |a| * v over the kinematic samples of a window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Power estimation
//!
//! This is whole-body translational power of the centroid, not joint power.
#![allow(clippy::cast_precision_loss)] // Safe: sample counts are small

use crate::kinematics::KinematicSample;
use pierre_motion_core::models::PowerMetrics;

/// Watts from mass, acceleration magnitude, and speed
#[derive(Debug, Clone, Copy)]
pub struct PowerEstimator {
    mass_kg: f64,
}

impl PowerEstimator {
    /// Create an estimator for an athlete of `mass_kg`
    #[must_use]
    pub const fn new(mass_kg: f64) -> Self {
        Self { mass_kg }
    }

    /// Power for a single sample
    #[must_use]
    pub fn sample_power(&self, sample: &KinematicSample) -> f64 {
        self.mass_kg * sample.acceleration.abs() * sample.speed
    }

    /// Current, mean, and peak power; zero for an empty window
    #[must_use]
    pub fn estimate(&self, samples: &[KinematicSample]) -> PowerMetrics {
        if samples.is_empty() {
            return PowerMetrics::default();
        }

        let powers: Vec<f64> = samples.iter().map(|s| self.sample_power(s)).collect();
        PowerMetrics {
            current: powers.last().copied().unwrap_or_default(),
            average: powers.iter().sum::<f64>() / powers.len() as f64,
            peak: powers.iter().copied().fold(0.0, f64::max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_window_is_zero() {
        assert_eq!(PowerEstimator::new(70.0).estimate(&[]), PowerMetrics::default());
    }

    #[test]
    fn test_deceleration_counts_by_magnitude() {
        let estimator = PowerEstimator::new(70.0);
        let samples = [
            KinematicSample {
                acceleration: 2.0,
                speed: 1.0,
            },
            KinematicSample {
                acceleration: -4.0,
                speed: 0.5,
            },
        ];
        let power = estimator.estimate(&samples);

        assert!((power.current - 140.0).abs() < 1e-9);
        assert!((power.peak - 140.0).abs() < 1e-9);
        assert!((power.average - 140.0).abs() < 1e-9);
    }

    #[test]
    fn test_standing_still_produces_no_power() {
        let samples = [KinematicSample {
            acceleration: 9.0,
            speed: 0.0,
        }];
        assert!(PowerEstimator::new(80.0).estimate(&samples).peak.abs() < f64::EPSILON);
    }
}
