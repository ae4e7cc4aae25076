// ABOUTME: Motion analytics algorithms for the Pierre motion engine
// ABOUTME: Pure analyzers over a bounded frame history; no I/O, no shared global state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Motion Analytics
//!
//! Turns a window of skeletal keypoint frames into physical performance
//! signals. Every analyzer is a pure function of the history buffer and the
//! current pixels-per-meter scale.
//!
//! ## Modules
//!
//! - **calibration**: pixel-to-meter scale from a standing pose
//! - **`center_of_mass`**: confidence-gated weighted centroid
//! - **history**: fixed-capacity FIFO of movement frames
//! - **kinematics**: speed, distance, acceleration
//! - **gait**: step detection, cadence, stride
//! - **vertical**: oscillation and jump detection state machine
//! - **power**: mechanical power estimate
//! - **`sport_profile`**: sport-specific metric views
//! - **pipeline**: one full analysis pass

/// Athlete profile, analysis thresholds, and configuration errors
pub mod config;

/// Pixel-to-meter calibration
pub mod calibration;

/// Weighted body centroid
pub mod center_of_mass;

/// Frame history ring buffer
pub mod history;

/// Finite-difference kinematics
pub mod kinematics;

/// Step detection and cadence
pub mod gait;

/// Vertical oscillation and jump height
pub mod vertical;

/// Mechanical power estimate
pub mod power;

/// Sport-specific projections
pub mod sport_profile;

/// Full analysis pass
pub mod pipeline;

pub use calibration::{CalibrationState, Calibrator};
pub use center_of_mass::CenterOfMassEstimator;
pub use config::{AnalysisThresholds, AthleteProfile, ConfigError};
pub use gait::GaitAnalyzer;
pub use history::FrameHistoryBuffer;
pub use kinematics::{velocity_between, KinematicSample, KinematicsEngine};
pub use pipeline::AnalysisPipeline;
pub use power::PowerEstimator;
pub use sport_profile::{SportProfile, SportProfileMapper};
pub use vertical::{JumpEvent, JumpState, VerticalMotionAnalyzer};
