// ABOUTME: Motion engine façade owning calibration, frame history, analyzers, and the metrics cache
// ABOUTME: Each add_frame call is a complete synchronous unit of work returning an immutable snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Motion Engine
//!
//! [`MotionEngine`] is single-owner state: history, calibration and cache
//! are mutated through `&mut self`. Wrap it in [`SharedMotionEngine`] when a
//! capture thread and a UI thread need the same instance.
//!
//! Frames must arrive in non-decreasing timestamp order. A frame whose
//! timestamp does not advance is still stored, with zero velocity.

/// Lock-guarded engine handle for multi-threaded embedding
pub mod shared;

pub use shared::SharedMotionEngine;

use crate::cache::{Clock, MetricsCache, SystemClock};
use crate::config::EngineConfig;
use pierre_motion_analytics::sport_profile::{SportProfile, SportProfileMapper};
use pierre_motion_analytics::{
    velocity_between, AnalysisPipeline, CalibrationState, Calibrator, CenterOfMassEstimator,
    FrameHistoryBuffer,
};
use pierre_motion_core::errors::{AppResult, CalibrationError};
use pierre_motion_core::models::{
    Keypoint, KeypointSet, MovementFrame, PerformanceMetrics, SportType,
};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Real-time motion analytics for one athlete
#[derive(Debug)]
pub struct MotionEngine {
    id: Uuid,
    config: EngineConfig,
    calibrator: Calibrator,
    calibration: CalibrationState,
    centroid: CenterOfMassEstimator,
    pipeline: AnalysisPipeline,
    history: FrameHistoryBuffer,
    cache: MetricsCache,
    clock: Arc<dyn Clock>,
}

impl MotionEngine {
    /// Create an engine reading wall-clock time from the system clock
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the configuration fails validation
    pub fn new(config: EngineConfig) -> AppResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create an engine with an explicit clock for the recompute throttle
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the configuration fails validation
    pub fn with_clock(config: EngineConfig, clock: Arc<dyn Clock>) -> AppResult<Self> {
        config.validate()?;

        let thresholds = &config.thresholds;
        let engine = Self {
            id: Uuid::new_v4(),
            calibrator: Calibrator::new(config.athlete.height_m, thresholds.calibration_min_confidence),
            calibration: CalibrationState::new(config.pixels_per_meter),
            centroid: CenterOfMassEstimator::new(thresholds.centroid_min_confidence),
            pipeline: AnalysisPipeline::from_config(thresholds, &config.athlete),
            history: FrameHistoryBuffer::new(config.history_capacity),
            cache: MetricsCache::new(config.recompute_interval_ms),
            clock,
            config,
        };

        info!(
            engine.id = %engine.id,
            athlete.height_m = engine.config.athlete.height_m,
            athlete.mass_kg = engine.config.athlete.mass_kg,
            calibration.pixels_per_meter = engine.calibration.pixels_per_meter(),
            calibration.calibrated = engine.calibration.is_calibrated(),
            history.capacity = engine.history.capacity(),
            "Motion engine created"
        );

        Ok(engine)
    }

    /// Ingest one frame and return the current metrics snapshot
    ///
    /// The frame is always stored; the snapshot is recomputed only when the
    /// cached one is older than the recompute interval.
    pub fn add_frame(&mut self, keypoints: KeypointSet, timestamp_ms: u64) -> Arc<PerformanceMetrics> {
        let pixels_per_meter = self.calibration.pixels_per_meter();
        let center_of_mass = self.centroid.compute_centroid(&keypoints);
        let previous = self.history.latest();

        if let Some(previous) = previous.filter(|frame| frame.timestamp_ms >= timestamp_ms) {
            debug!(
                engine.id = %self.id,
                frame.timestamp_ms = timestamp_ms,
                frame.previous_timestamp_ms = previous.timestamp_ms,
                "Non-increasing frame timestamp, velocity set to zero"
            );
        }
        if center_of_mass.is_none() {
            debug!(
                engine.id = %self.id,
                frame.timestamp_ms = timestamp_ms,
                "No confident keypoints for center of mass"
            );
        }

        let velocity = velocity_between(previous, center_of_mass, timestamp_ms, pixels_per_meter);
        self.history.push(MovementFrame {
            timestamp_ms,
            keypoints,
            center_of_mass,
            velocity,
        });

        let now_ms = self.clock.now_ms();
        let pipeline = &self.pipeline;
        let history = &self.history;
        self.cache
            .get_or_compute(now_ms, || pipeline.analyze(history, pixels_per_meter))
    }

    /// Validate a raw keypoint slice and ingest it
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` unless exactly 17 keypoints are supplied
    pub fn add_raw_frame(
        &mut self,
        keypoints: &[Keypoint],
        timestamp_ms: u64,
    ) -> AppResult<Arc<PerformanceMetrics>> {
        let keypoints = KeypointSet::try_from_slice(keypoints)?;
        Ok(self.add_frame(keypoints, timestamp_ms))
    }

    /// Derive the pixel scale from a standing pose of the configured athlete
    ///
    /// On success the stored frame velocities are converted to the new
    /// scale and the cached snapshot is dropped. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Returns `CalibrationError` when the nose or an ankle is not confident
    /// enough, or the pose has no vertical extent
    pub fn calibrate_from_pose(&mut self, keypoints: &KeypointSet) -> Result<f64, CalibrationError> {
        let previous = self.calibration.pixels_per_meter();
        let pixels_per_meter = self
            .calibrator
            .calibrate_from_pose(keypoints, &mut self.calibration)?;
        self.apply_scale_change(previous);
        info!(
            engine.id = %self.id,
            calibration.pixels_per_meter = pixels_per_meter,
            "Engine calibrated"
        );
        Ok(pixels_per_meter)
    }

    /// Clear history and cached metrics; calibration is kept
    pub fn reset(&mut self) {
        self.history.clear();
        self.cache.invalidate();
        info!(engine.id = %self.id, "Engine reset");
    }

    /// Restore the configured scale and mark the engine uncalibrated unless a preset exists
    pub fn reset_calibration(&mut self) {
        let previous = self.calibration.pixels_per_meter();
        self.calibration = CalibrationState::new(self.config.pixels_per_meter);
        self.apply_scale_change(previous);
        info!(
            engine.id = %self.id,
            calibration.pixels_per_meter = self.calibration.pixels_per_meter(),
            "Calibration reset"
        );
    }

    /// Bring stored velocities onto the current scale and drop the snapshot
    fn apply_scale_change(&mut self, previous_pixels_per_meter: f64) {
        let factor = previous_pixels_per_meter / self.calibration.pixels_per_meter();
        if factor.is_finite() && factor > 0.0 {
            self.history.rescale_velocities(factor);
        }
        self.cache.invalidate();
        debug!(
            engine.id = %self.id,
            history.len = self.history.len(),
            calibration.rescale_factor = factor,
            "History velocities rescaled"
        );
    }

    /// Run a full analysis pass now, bypassing the throttle
    pub fn compute_metrics(&mut self) -> Arc<PerformanceMetrics> {
        let metrics = self
            .pipeline
            .analyze(&self.history, self.calibration.pixels_per_meter());
        self.cache.store(metrics, self.clock.now_ms())
    }

    /// Last computed snapshot, if any
    #[must_use]
    pub fn latest_metrics(&self) -> Option<Arc<PerformanceMetrics>> {
        self.cache.snapshot()
    }

    /// Project the latest snapshot for a sport; zero metrics before the first frame
    #[must_use]
    pub fn sport_profile(&self, sport: SportType) -> SportProfile {
        SportProfileMapper::project(sport, &self.latest_or_default())
    }

    /// Project the latest snapshot for a sport tag; unknown tags return the generic bundle
    #[must_use]
    pub fn sport_profile_for_tag(&self, tag: &str) -> SportProfile {
        SportProfileMapper::project_tag(tag, &self.latest_or_default())
    }

    fn latest_or_default(&self) -> PerformanceMetrics {
        self.cache
            .snapshot()
            .map_or_else(PerformanceMetrics::default, |metrics| *metrics)
    }

    /// Frames currently in the history window
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.history.len()
    }

    /// Current pixels-per-meter scale
    #[must_use]
    pub const fn pixels_per_meter(&self) -> f64 {
        self.calibration.pixels_per_meter()
    }

    /// Whether the scale came from a preset or a successful calibration
    #[must_use]
    pub const fn is_calibrated(&self) -> bool {
        self.calibration.is_calibrated()
    }

    /// Instance identifier attached to every log record
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Configuration the engine was built with
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only view of the history window
    #[must_use]
    pub const fn history(&self) -> &FrameHistoryBuffer {
        &self.history
    }
}
