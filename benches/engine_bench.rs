// ABOUTME: Criterion benchmarks for motion engine ingestion and full analysis passes
// ABOUTME: Measures add_frame with cache hits, with forced recomputation, and the 120-frame analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the motion engine.
//!
//! The throttle reads a manual clock that never advances, so the cache-hit
//! case measures ingestion cost alone.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pierre_motion::analytics::{AnalysisPipeline, FrameHistoryBuffer};
use pierre_motion::cache::ManualClock;
use pierre_motion::config::EngineConfig;
use pierre_motion::engine::MotionEngine;
use pierre_motion::models::{Keypoint, KeypointIndex, KeypointSet, KEYPOINT_COUNT};
use std::f64::consts::PI;
use std::sync::Arc;

const FRAME_INTERVAL_MS: u64 = 33;
const PIXELS_PER_METER: f64 = 500.0 / 1.75;

/// Running-like pose: body drifts right, ankles swing in antiphase
fn running_pose(frame: usize) -> KeypointSet {
    let t = frame as f64 / 30.0;
    let x = 100.0 + 120.0 * t;
    let swing = (2.0 * PI * 1.5 * t).sin() * 18.0;

    let points: [Keypoint; KEYPOINT_COUNT] = std::array::from_fn(|i| {
        let index = KeypointIndex::from_index(i).unwrap();
        let (offset_x, y) = match index {
            KeypointIndex::Nose => (0.0, 100.0),
            KeypointIndex::LeftEye | KeypointIndex::RightEye => (0.0, 95.0),
            KeypointIndex::LeftEar | KeypointIndex::RightEar => (0.0, 98.0),
            KeypointIndex::LeftShoulder | KeypointIndex::RightShoulder => (0.0, 150.0),
            KeypointIndex::LeftElbow | KeypointIndex::RightElbow => (0.0, 225.0),
            KeypointIndex::LeftWrist | KeypointIndex::RightWrist => (0.0, 290.0),
            KeypointIndex::LeftHip | KeypointIndex::RightHip => (0.0, 300.0),
            KeypointIndex::LeftKnee | KeypointIndex::RightKnee => (0.0, 450.0),
            KeypointIndex::LeftAnkle => (-10.0, 600.0 + swing),
            KeypointIndex::RightAnkle => (10.0, 600.0 - swing),
        };
        Keypoint::new(x + offset_x, y, 0.9)
    });
    KeypointSet::new(points)
}

fn frames(count: usize) -> Vec<(KeypointSet, u64)> {
    (0..count)
        .map(|i| (running_pose(i), i as u64 * FRAME_INTERVAL_MS))
        .collect()
}

fn engine(recompute_interval_ms: u64) -> MotionEngine {
    let config = EngineConfig::default()
        .with_pixels_per_meter(PIXELS_PER_METER)
        .with_recompute_interval_ms(recompute_interval_ms);
    MotionEngine::with_clock(config, Arc::new(ManualClock::new(0))).unwrap()
}

fn bench_add_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_frame");
    let input = frames(240);
    group.throughput(Throughput::Elements(input.len() as u64));

    for (label, interval_ms) in [("cache_hit", 1_000_000), ("forced_recompute", 0)] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &input, |b, input| {
            b.iter(|| {
                let mut engine = engine(interval_ms);
                for (keypoints, timestamp_ms) in input {
                    black_box(engine.add_frame(keypoints.clone(), *timestamp_ms));
                }
            });
        });
    }

    group.finish();
}

fn bench_analysis_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis_pass");
    let mut warm = engine(0);
    for (keypoints, timestamp_ms) in frames(120) {
        warm.add_frame(keypoints, timestamp_ms);
    }
    let history: FrameHistoryBuffer = warm.history().clone();
    let pipeline = AnalysisPipeline::default();

    group.bench_function("window_120", |b| {
        b.iter(|| black_box(pipeline.analyze(black_box(&history), PIXELS_PER_METER)));
    });

    group.finish();
}

criterion_group!(benches, bench_add_frame, bench_analysis_pass);
criterion_main!(benches);
