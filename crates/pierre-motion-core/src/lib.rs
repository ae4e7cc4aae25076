// ABOUTME: Core types and constants for the Pierre motion analytics engine
// ABOUTME: Foundation crate with error handling, keypoint models, metrics snapshots, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Motion Core
//!
//! Foundation crate providing shared types and constants for the Pierre motion
//! analytics engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `CalibrationError`
//! - **constants**: Policy thresholds, body-segment weights, and unit conversions
//! - **models**: Keypoints, movement frames, performance metric snapshots, and sport tags

/// Unified error handling system with standard error codes
pub mod errors;

/// Policy constants organized by analysis domain
pub mod constants;

/// Core data models (Keypoint, `MovementFrame`, `PerformanceMetrics`, `SportType`)
pub mod models;
