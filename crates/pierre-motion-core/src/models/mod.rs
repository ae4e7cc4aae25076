// ABOUTME: Core data models and types for the Pierre motion analytics engine
// ABOUTME: Re-exports keypoints, movement frames, metrics snapshots, and sport tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Data structures shared by the analyzers and the engine façade.
//!
//! ## Design Principles
//!
//! - **Estimator Agnostic**: keypoints arrive from an external pose estimator in COCO-17 order
//! - **Fixed Arity**: a frame always holds exactly 17 index-addressed keypoints
//! - **Immutable Snapshots**: metrics are value objects, recomputed rather than mutated
//! - **Serializable**: all models support JSON serialization for the presentation layer
//!
//! ## Core Models
//!
//! - `Keypoint` / `KeypointSet`: one pose observation
//! - `MovementFrame`: a timestamped keypoint set with derived centroid and velocity
//! - `PerformanceMetrics`: the metrics bundle produced per recomputation
//! - `SportType`: sport tags for profile projection

// Domain modules
mod frame;
mod keypoint;
mod metrics;
mod sport;

// Keypoint domain
pub use keypoint::{Keypoint, KeypointIndex, KeypointSet, KEYPOINT_COUNT};

// Frame domain
pub use frame::{MovementFrame, Point2};

// Metrics domain
pub use metrics::{
    AccelerationMetrics, DistanceMetrics, GaitMetrics, KinematicsMetrics, PerformanceMetrics,
    PowerMetrics, SpeedMetrics, VerticalMetrics,
};

// Sport types
pub use sport::SportType;
