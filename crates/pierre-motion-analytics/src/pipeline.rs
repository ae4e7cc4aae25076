// ABOUTME: Full analysis pass running every analyzer over one history window
// ABOUTME: Combines kinematics, gait, vertical motion, and power into a metrics snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{AnalysisThresholds, AthleteProfile};
use crate::gait::GaitAnalyzer;
use crate::history::FrameHistoryBuffer;
use crate::kinematics::KinematicsEngine;
use crate::power::PowerEstimator;
use crate::vertical::VerticalMotionAnalyzer;
use pierre_motion_core::models::PerformanceMetrics;
use tracing::debug;

/// Analyzer set configured once and reused for every recomputation
#[derive(Debug, Clone, Copy)]
pub struct AnalysisPipeline {
    kinematics: KinematicsEngine,
    gait: GaitAnalyzer,
    vertical: VerticalMotionAnalyzer,
    power: PowerEstimator,
}

impl AnalysisPipeline {
    /// Configure every analyzer from thresholds and the athlete profile
    #[must_use]
    pub const fn from_config(thresholds: &AnalysisThresholds, athlete: &AthleteProfile) -> Self {
        Self {
            kinematics: KinematicsEngine::new(thresholds.kinematics_min_frames),
            gait: GaitAnalyzer::new(thresholds),
            vertical: VerticalMotionAnalyzer::new(thresholds),
            power: PowerEstimator::new(athlete.mass_kg),
        }
    }

    /// Compute a complete snapshot of `history` at the given scale
    #[must_use]
    pub fn analyze(&self, history: &FrameHistoryBuffer, pixels_per_meter: f64) -> PerformanceMetrics {
        let kinematics = self.kinematics.compute_kinematics(history, pixels_per_meter);
        let gait = self.gait.compute_gait(history, pixels_per_meter);
        let vertical = self.vertical.compute_vertical(history, pixels_per_meter);
        let power = self.power.estimate(&self.kinematics.samples(history));

        debug!(
            history.len = history.len(),
            window.duration_ms = history.window_duration_ms(),
            speed.average = kinematics.speed.average,
            gait.cadence = gait.cadence,
            vertical.jump_height = vertical.jump_height,
            "Analysis pass complete"
        );

        PerformanceMetrics::assemble(
            kinematics,
            gait,
            vertical,
            power,
            history.len(),
            history.window_duration_ms(),
        )
    }
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::from_config(&AnalysisThresholds::default(), &AthleteProfile::default())
    }
}
