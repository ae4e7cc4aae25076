// ABOUTME: Keypoint model in the fixed COCO-17 layout produced by the upstream pose estimator
// ABOUTME: Validates arity at the boundary and sanitizes confidence scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::Index;

/// Number of keypoints per frame in the COCO layout
pub const KEYPOINT_COUNT: usize = 17;

/// COCO-17 keypoint indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(usize)]
pub enum KeypointIndex {
    /// Nose
    Nose = 0,
    /// Left eye
    LeftEye = 1,
    /// Right eye
    RightEye = 2,
    /// Left ear
    LeftEar = 3,
    /// Right ear
    RightEar = 4,
    /// Left shoulder
    LeftShoulder = 5,
    /// Right shoulder
    RightShoulder = 6,
    /// Left elbow
    LeftElbow = 7,
    /// Right elbow
    RightElbow = 8,
    /// Left wrist
    LeftWrist = 9,
    /// Right wrist
    RightWrist = 10,
    /// Left hip
    LeftHip = 11,
    /// Right hip
    RightHip = 12,
    /// Left knee
    LeftKnee = 13,
    /// Right knee
    RightKnee = 14,
    /// Left ankle
    LeftAnkle = 15,
    /// Right ankle
    RightAnkle = 16,
}

impl KeypointIndex {
    /// All indices in COCO order
    pub const ALL: [Self; KEYPOINT_COUNT] = [
        Self::Nose,
        Self::LeftEye,
        Self::RightEye,
        Self::LeftEar,
        Self::RightEar,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
    ];

    /// Position of this keypoint within a frame
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up the keypoint at a raw COCO index
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Canonical `snake_case` name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEye => "left_eye",
            Self::RightEye => "right_eye",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }
}

impl fmt::Display for KeypointIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single 2D anatomical landmark in pixel space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    /// Horizontal pixel position
    pub x: f64,
    /// Vertical pixel position (grows downward)
    pub y: f64,
    /// Detection confidence in [0, 1]; absent or null deserializes as 0
    #[serde(default, deserialize_with = "deserialize_confidence")]
    pub confidence: f64,
    /// Optional landmark name supplied by the estimator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

fn deserialize_confidence<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl Keypoint {
    /// Create a keypoint, clamping confidence into [0, 1]
    #[must_use]
    pub fn new(x: f64, y: f64, confidence: f64) -> Self {
        Self {
            x,
            y,
            confidence,
            name: None,
        }
        .sanitized()
    }

    /// Create a named keypoint
    #[must_use]
    pub fn named(name: impl Into<String>, x: f64, y: f64, confidence: f64) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(x, y, confidence)
        }
    }

    /// Placeholder for an undetected landmark
    #[must_use]
    pub const fn missing() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            confidence: 0.0,
            name: None,
        }
    }

    /// Whether confidence is strictly above `threshold`
    #[must_use]
    pub fn is_confident(&self, threshold: f64) -> bool {
        self.confidence > threshold
    }

    /// Non-finite confidence or coordinates mark the point as undetected
    fn sanitized(mut self) -> Self {
        self.confidence = if self.confidence.is_finite()
            && self.x.is_finite()
            && self.y.is_finite()
        {
            self.confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }
}

impl Default for Keypoint {
    fn default() -> Self {
        Self::missing()
    }
}

/// Exactly 17 keypoints in fixed COCO order
///
/// Deserialization goes through the same arity check as `try_from_slice`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Keypoint>", into = "Vec<Keypoint>")]
pub struct KeypointSet([Keypoint; KEYPOINT_COUNT]);

impl KeypointSet {
    /// Wrap a fixed-size array, sanitizing every keypoint
    #[must_use]
    pub fn new(keypoints: [Keypoint; KEYPOINT_COUNT]) -> Self {
        Self(keypoints.map(Keypoint::sanitized))
    }

    /// Validate a slice from the estimator; any length other than 17 is rejected
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `InvalidFormat` when the slice length is not 17
    pub fn try_from_slice(keypoints: &[Keypoint]) -> AppResult<Self> {
        if keypoints.len() != KEYPOINT_COUNT {
            return Err(AppError::invalid_format(format!(
                "expected {KEYPOINT_COUNT} keypoints, got {}",
                keypoints.len()
            )));
        }
        Ok(Self::from_slice_padded(keypoints))
    }

    /// Build from a slice of any length: extra points are dropped, missing ones padded
    #[must_use]
    pub fn from_slice_padded(keypoints: &[Keypoint]) -> Self {
        Self::new(std::array::from_fn(|i| {
            keypoints.get(i).cloned().unwrap_or_default()
        }))
    }

    /// Keypoint at a COCO index
    #[must_use]
    pub fn get(&self, index: KeypointIndex) -> &Keypoint {
        &self.0[index.index()]
    }

    /// Iterate in COCO order
    pub fn iter(&self) -> impl Iterator<Item = &Keypoint> {
        self.0.iter()
    }

    /// Borrow as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Keypoint] {
        &self.0
    }
}

impl Default for KeypointSet {
    fn default() -> Self {
        Self(std::array::from_fn(|_| Keypoint::missing()))
    }
}

impl Index<KeypointIndex> for KeypointSet {
    type Output = Keypoint;

    fn index(&self, index: KeypointIndex) -> &Self::Output {
        self.get(index)
    }
}

impl From<[Keypoint; KEYPOINT_COUNT]> for KeypointSet {
    fn from(keypoints: [Keypoint; KEYPOINT_COUNT]) -> Self {
        Self::new(keypoints)
    }
}

impl TryFrom<Vec<Keypoint>> for KeypointSet {
    type Error = AppError;

    fn try_from(keypoints: Vec<Keypoint>) -> AppResult<Self> {
        Self::try_from_slice(&keypoints)
    }
}

impl From<KeypointSet> for Vec<Keypoint> {
    fn from(set: KeypointSet) -> Self {
        set.0.into()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_confidence_is_clamped_and_nan_is_missing() {
        assert_eq!(Keypoint::new(1.0, 2.0, 1.7).confidence, 1.0);
        assert_eq!(Keypoint::new(1.0, 2.0, -0.2).confidence, 0.0);
        assert_eq!(Keypoint::new(1.0, 2.0, f64::NAN).confidence, 0.0);
        assert_eq!(Keypoint::new(f64::INFINITY, 2.0, 0.9).confidence, 0.0);
    }

    #[test]
    fn test_absent_or_null_confidence_deserializes_as_zero() {
        let absent: Keypoint = serde_json::from_str(r#"{"x": 3.0, "y": 4.0}"#).unwrap();
        let null: Keypoint =
            serde_json::from_str(r#"{"x": 3.0, "y": 4.0, "confidence": null}"#).unwrap();
        assert_eq!(absent.confidence, 0.0);
        assert_eq!(null.confidence, 0.0);
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        let short = vec![Keypoint::new(0.0, 0.0, 1.0); 12];
        let error = KeypointSet::try_from_slice(&short).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat);
        assert!(KeypointSet::try_from(vec![Keypoint::missing(); 17]).is_ok());
    }

    #[test]
    fn test_deserialization_validates_arity() {
        let json = serde_json::to_string(&vec![Keypoint::new(1.0, 1.0, 0.8); 16]).unwrap();
        assert!(serde_json::from_str::<KeypointSet>(&json).is_err());

        let json = serde_json::to_string(&KeypointSet::default()).unwrap();
        assert!(serde_json::from_str::<KeypointSet>(&json).is_ok());
    }

    #[test]
    fn test_padding_fills_missing_points() {
        let partial = vec![Keypoint::new(5.0, 6.0, 0.9); 3];
        let set = KeypointSet::from_slice_padded(&partial);
        assert_eq!(set[KeypointIndex::LeftEye].x, 5.0);
        assert_eq!(set[KeypointIndex::RightAnkle].confidence, 0.0);
    }

    #[test]
    fn test_index_round_trip() {
        for (position, index) in KeypointIndex::ALL.iter().enumerate() {
            assert_eq!(index.index(), position);
            assert_eq!(KeypointIndex::from_index(position), Some(*index));
        }
        assert_eq!(KeypointIndex::from_index(17), None);
        assert_eq!(KeypointIndex::LeftAnkle.index(), 15);
    }
}
