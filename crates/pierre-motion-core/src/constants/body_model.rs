// ABOUTME: Body-segment mass weights keyed by COCO keypoint index
// ABOUTME: Approximates the mass distribution used for centroid estimation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::KeypointIndex;

/// Head mass share, carried by the nose keypoint
pub const HEAD_WEIGHT: f64 = 0.08;

/// Mass share per shoulder
pub const SHOULDER_WEIGHT: f64 = 0.12;

/// Mass share per hip
pub const HIP_WEIGHT: f64 = 0.15;

/// Mass share per knee
pub const KNEE_WEIGHT: f64 = 0.10;

/// Mass share per ankle
pub const ANKLE_WEIGHT: f64 = 0.09;

/// Weighted keypoints used for the center of mass. Sums to 1.00.
pub const SEGMENT_WEIGHTS: [(KeypointIndex, f64); 9] = [
    (KeypointIndex::Nose, HEAD_WEIGHT),
    (KeypointIndex::LeftShoulder, SHOULDER_WEIGHT),
    (KeypointIndex::RightShoulder, SHOULDER_WEIGHT),
    (KeypointIndex::LeftHip, HIP_WEIGHT),
    (KeypointIndex::RightHip, HIP_WEIGHT),
    (KeypointIndex::LeftKnee, KNEE_WEIGHT),
    (KeypointIndex::RightKnee, KNEE_WEIGHT),
    (KeypointIndex::LeftAnkle, ANKLE_WEIGHT),
    (KeypointIndex::RightAnkle, ANKLE_WEIGHT),
];
