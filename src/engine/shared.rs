// ABOUTME: Cloneable handle putting one motion engine behind a single mutual-exclusion boundary
// ABOUTME: Every operation runs under one lock scope; poisoned locks are recovered, never propagated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::MotionEngine;
use crate::cache::Clock;
use crate::config::EngineConfig;
use pierre_motion_analytics::sport_profile::SportProfile;
use pierre_motion_core::errors::{AppResult, CalibrationError};
use pierre_motion_core::models::{Keypoint, KeypointSet, PerformanceMetrics, SportType};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::warn;

/// Thread-safe engine handle for a capture thread and a UI thread
#[derive(Debug, Clone)]
pub struct SharedMotionEngine {
    inner: Arc<Mutex<MotionEngine>>,
}

impl SharedMotionEngine {
    /// Create a shared engine
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the configuration fails validation
    pub fn new(config: EngineConfig) -> AppResult<Self> {
        MotionEngine::new(config).map(Self::from_engine)
    }

    /// Create a shared engine with an explicit clock
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the configuration fails validation
    pub fn with_clock(config: EngineConfig, clock: Arc<dyn Clock>) -> AppResult<Self> {
        MotionEngine::with_clock(config, clock).map(Self::from_engine)
    }

    /// Wrap an existing engine
    #[must_use]
    pub fn from_engine(engine: MotionEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MotionEngine> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("Motion engine lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// See [`MotionEngine::add_frame`]
    pub fn add_frame(&self, keypoints: KeypointSet, timestamp_ms: u64) -> Arc<PerformanceMetrics> {
        self.lock().add_frame(keypoints, timestamp_ms)
    }

    /// See [`MotionEngine::add_raw_frame`]
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` unless exactly 17 keypoints are supplied
    pub fn add_raw_frame(
        &self,
        keypoints: &[Keypoint],
        timestamp_ms: u64,
    ) -> AppResult<Arc<PerformanceMetrics>> {
        self.lock().add_raw_frame(keypoints, timestamp_ms)
    }

    /// See [`MotionEngine::calibrate_from_pose`]
    ///
    /// # Errors
    ///
    /// Returns `CalibrationError` when the reference pose is unusable
    pub fn calibrate_from_pose(&self, keypoints: &KeypointSet) -> Result<f64, CalibrationError> {
        self.lock().calibrate_from_pose(keypoints)
    }

    /// See [`MotionEngine::reset`]
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// See [`MotionEngine::reset_calibration`]
    pub fn reset_calibration(&self) {
        self.lock().reset_calibration();
    }

    /// See [`MotionEngine::compute_metrics`]
    pub fn compute_metrics(&self) -> Arc<PerformanceMetrics> {
        self.lock().compute_metrics()
    }

    /// See [`MotionEngine::latest_metrics`]
    #[must_use]
    pub fn latest_metrics(&self) -> Option<Arc<PerformanceMetrics>> {
        self.lock().latest_metrics()
    }

    /// See [`MotionEngine::sport_profile`]
    #[must_use]
    pub fn sport_profile(&self, sport: SportType) -> SportProfile {
        self.lock().sport_profile(sport)
    }

    /// See [`MotionEngine::sport_profile_for_tag`]
    #[must_use]
    pub fn sport_profile_for_tag(&self, tag: &str) -> SportProfile {
        self.lock().sport_profile_for_tag(tag)
    }

    /// See [`MotionEngine::frame_count`]
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.lock().frame_count()
    }

    /// See [`MotionEngine::pixels_per_meter`]
    #[must_use]
    pub fn pixels_per_meter(&self) -> f64 {
        self.lock().pixels_per_meter()
    }

    /// See [`MotionEngine::is_calibrated`]
    #[must_use]
    pub fn is_calibrated(&self) -> bool {
        self.lock().is_calibrated()
    }

    /// Run `f` with exclusive access to the engine
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut MotionEngine) -> R) -> R {
        f(&mut self.lock())
    }
}
