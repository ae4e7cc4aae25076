// ABOUTME: Shared synthetic pose builders for motion engine integration tests
// ABOUTME: Standing poses, translating athletes, sine-wave ankles, and jump trajectories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]

use pierre_motion::cache::ManualClock;
use pierre_motion::config::EngineConfig;
use pierre_motion::engine::MotionEngine;
use pierre_motion::models::{Keypoint, KeypointIndex, KeypointSet, KEYPOINT_COUNT};
use std::f64::consts::PI;
use std::sync::Arc;

/// Milliseconds between frames at 30 fps
pub const FRAME_INTERVAL_MS: u64 = 33;

/// Nose row of the reference standing pose
pub const NOSE_Y: f64 = 100.0;

/// Ankle row of the reference standing pose
pub const ANKLE_Y: f64 = 600.0;

/// Weighted centroid row of the reference standing pose
pub const STANDING_CENTROID_Y: f64 = 332.0;

/// Scale implied by the reference pose for a 1.75 m athlete
pub const REFERENCE_PIXELS_PER_METER: f64 = 500.0 / 1.75;

/// Reference standing pose centered on `x`, shifted vertically by `dy`
pub fn standing_pose_at(x: f64, dy: f64, confidence: f64) -> KeypointSet {
    let layout: [(KeypointIndex, f64, f64); KEYPOINT_COUNT] = [
        (KeypointIndex::Nose, 0.0, NOSE_Y),
        (KeypointIndex::LeftEye, -5.0, 95.0),
        (KeypointIndex::RightEye, 5.0, 95.0),
        (KeypointIndex::LeftEar, -10.0, 98.0),
        (KeypointIndex::RightEar, 10.0, 98.0),
        (KeypointIndex::LeftShoulder, -20.0, 150.0),
        (KeypointIndex::RightShoulder, 20.0, 150.0),
        (KeypointIndex::LeftElbow, -30.0, 225.0),
        (KeypointIndex::RightElbow, 30.0, 225.0),
        (KeypointIndex::LeftWrist, -35.0, 290.0),
        (KeypointIndex::RightWrist, 35.0, 290.0),
        (KeypointIndex::LeftHip, -15.0, 300.0),
        (KeypointIndex::RightHip, 15.0, 300.0),
        (KeypointIndex::LeftKnee, -15.0, 450.0),
        (KeypointIndex::RightKnee, 15.0, 450.0),
        (KeypointIndex::LeftAnkle, -15.0, ANKLE_Y),
        (KeypointIndex::RightAnkle, 15.0, ANKLE_Y),
    ];

    let mut points: [Keypoint; KEYPOINT_COUNT] = std::array::from_fn(|_| Keypoint::missing());
    for (index, offset_x, y) in layout {
        points[index.index()] = Keypoint::named(index.name(), x + offset_x, y + dy, confidence);
    }
    KeypointSet::new(points)
}

/// Fully confident reference pose at `x = 320`
pub fn standing_pose() -> KeypointSet {
    standing_pose_at(320.0, 0.0, 0.95)
}

/// Pose with every keypoint missing
pub fn empty_pose() -> KeypointSet {
    KeypointSet::default()
}

/// Timestamp of frame `index` at 30 fps
pub const fn frame_time(index: usize) -> u64 {
    index as u64 * FRAME_INTERVAL_MS
}

/// Athlete moving right by `pixels_per_frame` every frame
pub fn translating_frames(count: usize, pixels_per_frame: f64) -> Vec<(KeypointSet, u64)> {
    (0..count)
        .map(|i| {
            let x = (i as f64).mul_add(pixels_per_frame, 100.0);
            (standing_pose_at(x, 0.0, 0.95), frame_time(i))
        })
        .collect()
}

/// Standing athlete whose ankles oscillate vertically in antiphase
///
/// `cycles` full periods over `count` frames with `amplitude` pixels.
pub fn sine_ankle_frames(count: usize, cycles: f64, amplitude: f64) -> Vec<(KeypointSet, u64)> {
    striding_frames(count, cycles, amplitude, 0.0)
}

/// Antiphase sine-wave ankles on an athlete moving right by `pixels_per_frame`
pub fn striding_frames(
    count: usize,
    cycles: f64,
    amplitude: f64,
    pixels_per_frame: f64,
) -> Vec<(KeypointSet, u64)> {
    let path: Vec<f64> = (0..count)
        .map(|i| (i as f64).mul_add(pixels_per_frame, 320.0))
        .collect();
    striding_path(&path, cycles, amplitude)
}

/// Antiphase sine-wave ankles on an athlete centered on `path[i]` at frame `i`
///
/// The ankle offsets cancel in the centroid, so the centroid follows `path`
/// horizontally and stays on one row.
pub fn striding_path(path: &[f64], cycles: f64, amplitude: f64) -> Vec<(KeypointSet, u64)> {
    let count = path.len();
    path.iter()
        .enumerate()
        .map(|(i, &x)| {
            let phase = 2.0 * PI * cycles * i as f64 / count as f64;
            let mut points: Vec<Keypoint> = standing_pose_at(x, 0.0, 0.95).as_slice().to_vec();
            let left = &mut points[KeypointIndex::LeftAnkle.index()];
            left.y = amplitude.mul_add(phase.sin(), ANKLE_Y);
            let right = &mut points[KeypointIndex::RightAnkle.index()];
            right.y = amplitude.mul_add((phase + PI).sin(), ANKLE_Y);
            let keypoints = KeypointSet::try_from_slice(&points).expect("17 keypoints");
            (keypoints, frame_time(i))
        })
        .collect()
}

/// Vertical body offsets (pixels, negative is up) for one jump peaking `peak_px` above ground
///
/// Twelve grounded frames, a three-frame rise, a three-frame fall, then
/// twelve grounded frames again.
pub fn jump_offsets(peak_px: f64) -> Vec<f64> {
    let mut offsets = vec![0.0; 12];
    offsets.extend([-0.27 * peak_px, -0.67 * peak_px, -peak_px]);
    offsets.extend([-0.93 * peak_px, -0.67 * peak_px, -0.27 * peak_px]);
    offsets.extend(vec![0.0; 12]);
    offsets
}

/// Frames following `offsets`, one per 33 ms
pub fn vertical_frames(offsets: &[f64]) -> Vec<(KeypointSet, u64)> {
    offsets
        .iter()
        .enumerate()
        .map(|(i, &dy)| (standing_pose_at(320.0, dy, 0.95), frame_time(i)))
        .collect()
}

/// Engine driven by a manual clock, with the clock handle
pub fn engine_with_manual_clock(config: EngineConfig) -> (MotionEngine, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(0));
    let engine = MotionEngine::with_clock(config, clock.clone()).expect("valid config");
    (engine, clock)
}

/// Engine that recomputes on every frame at the reference scale
pub fn unthrottled_engine() -> MotionEngine {
    let config = EngineConfig::default()
        .with_pixels_per_meter(REFERENCE_PIXELS_PER_METER)
        .with_recompute_interval_ms(0);
    MotionEngine::new(config).expect("valid config")
}

/// Feed every frame in order
pub fn feed(engine: &mut MotionEngine, frames: Vec<(KeypointSet, u64)>) {
    for (keypoints, timestamp_ms) in frames {
        engine.add_frame(keypoints, timestamp_ms);
    }
}
