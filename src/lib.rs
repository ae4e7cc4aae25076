// ABOUTME: Main library entry point for the Pierre motion analytics engine
// ABOUTME: Turns a live stream of COCO-17 pose keypoints into biomechanical performance metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Motion
//!
//! A real-time motion analytics engine. Each incoming frame of 17 body
//! keypoints is reduced to a weighted center of mass, appended to a bounded
//! history window, and periodically analyzed into speed, distance,
//! acceleration, power, gait and vertical-motion figures.
//!
//! ## Features
//!
//! - **Self-calibration**: pixel-to-meter scale from the athlete's standing height
//! - **Bounded memory**: fixed-capacity frame history
//! - **Throttled recomputation**: ingestion rate is decoupled from analysis rate
//! - **Sport views**: running, jumping, cycling and weightlifting projections
//!
//! ## Architecture
//!
//! - **engine**: `MotionEngine` façade and the lock-guarded `SharedMotionEngine`
//! - **cache**: metrics snapshot throttle and the clock it reads
//! - **config**: engine configuration and environment loading
//! - **logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_motion::config::EngineConfig;
//! use pierre_motion::engine::MotionEngine;
//! use pierre_motion::errors::AppResult;
//! use pierre_motion::models::KeypointSet;
//!
//! fn main() -> AppResult<()> {
//!     let mut engine = MotionEngine::new(EngineConfig::default())?;
//!     let metrics = engine.add_frame(KeypointSet::default(), 0);
//!     println!("frames analyzed: {}", metrics.frame_count);
//!     Ok(())
//! }
//! ```

/// Unified error handling re-exported from the core crate
pub mod errors;

/// Engine configuration and environment loading
pub mod config;

/// Structured logging setup
pub mod logging;

/// Metrics snapshot cache and clocks
pub mod cache;

/// Motion engine façade
pub mod engine;

/// Keypoint, frame, metrics, and sport models
pub use pierre_motion_core::models;

/// Policy constants
pub use pierre_motion_core::constants;

/// Analyzers and sport views
pub use pierre_motion_analytics as analytics;
