// ABOUTME: Confidence-gated center of mass estimation from a fixed body-segment mass model
// ABOUTME: Renormalizes weights over contributing keypoints; no contributors means no signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_motion_core::constants::body_model::SEGMENT_WEIGHTS;
use pierre_motion_core::models::{KeypointSet, Point2};

/// Weighted centroid of the head, shoulders, hips, knees, and ankles
#[derive(Debug, Clone, Copy)]
pub struct CenterOfMassEstimator {
    min_confidence: f64,
}

impl CenterOfMassEstimator {
    /// Create an estimator that ignores keypoints at or below `min_confidence`
    #[must_use]
    pub const fn new(min_confidence: f64) -> Self {
        Self { min_confidence }
    }

    /// Compute `weightedSum / totalContributingWeight` over confident keypoints
    ///
    /// Returns `None` when no weighted keypoint qualifies, so an empty frame
    /// is never confused with a real position at the origin.
    #[must_use]
    pub fn compute_centroid(&self, keypoints: &KeypointSet) -> Option<Point2> {
        let (sum_x, sum_y, total_weight) = SEGMENT_WEIGHTS
            .iter()
            .map(|&(index, weight)| (keypoints.get(index), weight))
            .filter(|(keypoint, _)| keypoint.is_confident(self.min_confidence))
            .fold((0.0, 0.0, 0.0), |(sx, sy, sw), (keypoint, weight)| {
                (
                    keypoint.x.mul_add(weight, sx),
                    keypoint.y.mul_add(weight, sy),
                    sw + weight,
                )
            });

        (total_weight > 0.0).then(|| Point2::new(sum_x / total_weight, sum_y / total_weight))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pierre_motion_core::models::{Keypoint, KeypointIndex};

    fn pose_with(points: &[(KeypointIndex, f64, f64, f64)]) -> KeypointSet {
        let mut all: [Keypoint; 17] = std::array::from_fn(|_| Keypoint::missing());
        for &(index, x, y, confidence) in points {
            all[index.index()] = Keypoint::new(x, y, confidence);
        }
        KeypointSet::new(all)
    }

    #[test]
    fn test_no_confident_points_is_no_signal() {
        let pose = pose_with(&[
            (KeypointIndex::Nose, 100.0, 100.0, 0.3),
            (KeypointIndex::LeftHip, 120.0, 300.0, 0.1),
        ]);
        assert_eq!(CenterOfMassEstimator::new(0.3).compute_centroid(&pose), None);
    }

    #[test]
    fn test_single_point_renormalizes_to_itself() {
        let pose = pose_with(&[(KeypointIndex::LeftKnee, 42.0, 64.0, 0.9)]);
        let centroid = CenterOfMassEstimator::new(0.3).compute_centroid(&pose).unwrap();
        assert!((centroid.x - 42.0).abs() < 1e-9);
        assert!((centroid.y - 64.0).abs() < 1e-9);
    }

    #[test]
    fn test_centroid_lies_between_heaviest_points() {
        let pose = pose_with(&[
            (KeypointIndex::LeftHip, 100.0, 300.0, 0.9),
            (KeypointIndex::RightHip, 140.0, 340.0, 0.9),
            (KeypointIndex::Nose, 120.0, 100.0, 0.2),
        ]);
        let centroid = CenterOfMassEstimator::new(0.3).compute_centroid(&pose).unwrap();
        assert!(centroid.x > 100.0 && centroid.x < 140.0);
        assert!(centroid.y > 300.0 && centroid.y < 340.0);
    }

    #[test]
    fn test_unweighted_points_are_ignored() {
        let pose = pose_with(&[
            (KeypointIndex::LeftWrist, 900.0, 900.0, 1.0),
            (KeypointIndex::RightHip, 10.0, 20.0, 0.8),
        ]);
        let centroid = CenterOfMassEstimator::new(0.3).compute_centroid(&pose).unwrap();
        assert!((centroid.x - 10.0).abs() < 1e-9);
    }
}
