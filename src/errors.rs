// ABOUTME: Error types for the motion engine re-exported from the core crate
// ABOUTME: AppError and ErrorCode for boundary failures, CalibrationError for recoverable calibration misses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Engine operations that can fail return [`AppResult`]. Calibration keeps
//! its own [`CalibrationError`] so callers can retry on a later frame.
//! Analyzer shortfalls (short windows, low confidence, degenerate timing)
//! are never errors; they degrade to zero-valued metrics.

pub use pierre_motion_analytics::config::ConfigError;
pub use pierre_motion_core::errors::{AppError, AppResult, CalibrationError, ErrorCode};
