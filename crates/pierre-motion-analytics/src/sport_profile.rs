// ABOUTME: Sport-specific projections of a performance metrics snapshot
// ABOUTME: Arithmetic recombination only; zero inputs give zero fields, never NaN or infinity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sport Profile Views
//!
//! Each view exposes the subset of a [`PerformanceMetrics`] snapshot that
//! matters for one sport, converted to that sport's customary units.
//! Unrecognized sport tags get the generic bundle unchanged.

use pierre_motion_core::constants::units::{
    CM_PER_METER, GRAVITY_MPS2, METERS_PER_KM, MPS_TO_KMH, MS_PER_SECOND, SECONDS_PER_MINUTE,
};
use pierre_motion_core::models::{PerformanceMetrics, SportType};
use serde::{Deserialize, Serialize};

/// Running view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningProfile {
    /// Minutes per kilometer; 0 when stationary
    pub pace_min_per_km: f64,
    /// Pace as `m:ss`
    pub pace_formatted: String,
    /// Average speed (km/h)
    pub speed_kmh: f64,
    /// Steps per minute
    pub cadence_spm: f64,
    /// Meters per step
    pub stride_length_m: f64,
    /// Milliseconds
    pub ground_contact_time_ms: f64,
    /// Milliseconds
    pub flight_time_ms: f64,
    /// Centimeters
    pub vertical_oscillation_cm: f64,
    /// Meters
    pub distance_m: f64,
}

/// Jumping view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpingProfile {
    /// Centimeters
    pub jump_height_cm: f64,
    /// Vertical velocity needed to reach the jump height (m/s)
    pub takeoff_velocity_mps: f64,
    /// Ballistic time in the air for that takeoff velocity (ms)
    pub air_time_ms: f64,
    /// Watts
    pub peak_power_w: f64,
    /// Centimeters
    pub vertical_oscillation_cm: f64,
}

/// Cycling view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CyclingProfile {
    /// Average speed (km/h)
    pub speed_kmh: f64,
    /// Pedal revolutions per minute
    pub cadence_rpm: f64,
    /// Watts
    pub average_power_w: f64,
    /// Watts
    pub peak_power_w: f64,
    /// Kilometers
    pub distance_km: f64,
}

/// Weightlifting view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightliftingProfile {
    /// Watts
    pub peak_power_w: f64,
    /// Watts
    pub average_power_w: f64,
    /// m/s²
    pub peak_acceleration_mps2: f64,
    /// m/s
    pub peak_velocity_mps: f64,
    /// Meters of accumulated vertical travel
    pub vertical_displacement_m: f64,
}

/// A metrics snapshot projected for one sport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sport", rename_all = "snake_case")]
pub enum SportProfile {
    /// Running view
    Running(RunningProfile),
    /// Jumping view
    Jumping(JumpingProfile),
    /// Cycling view
    Cycling(CyclingProfile),
    /// Weightlifting view
    Weightlifting(WeightliftingProfile),
    /// Unrecognized tag: the snapshot unchanged
    Generic(PerformanceMetrics),
}

impl SportProfile {
    /// Sport of this view; `None` for the generic bundle
    #[must_use]
    pub const fn sport(&self) -> Option<SportType> {
        match self {
            Self::Running(_) => Some(SportType::Running),
            Self::Jumping(_) => Some(SportType::Jumping),
            Self::Cycling(_) => Some(SportType::Cycling),
            Self::Weightlifting(_) => Some(SportType::Weightlifting),
            Self::Generic(_) => None,
        }
    }
}

/// Projects snapshots into sport views
pub struct SportProfileMapper;

impl SportProfileMapper {
    /// Project `metrics` for a known sport
    #[must_use]
    pub fn project(sport: SportType, metrics: &PerformanceMetrics) -> SportProfile {
        match sport {
            SportType::Running => SportProfile::Running(Self::running(metrics)),
            SportType::Jumping => SportProfile::Jumping(Self::jumping(metrics)),
            SportType::Cycling => SportProfile::Cycling(Self::cycling(metrics)),
            SportType::Weightlifting => SportProfile::Weightlifting(Self::weightlifting(metrics)),
        }
    }

    /// Project `metrics` for a sport tag; unknown tags return the generic bundle
    #[must_use]
    pub fn project_tag(tag: &str, metrics: &PerformanceMetrics) -> SportProfile {
        SportType::from_tag(tag).map_or(SportProfile::Generic(*metrics), |sport| {
            Self::project(sport, metrics)
        })
    }

    fn running(metrics: &PerformanceMetrics) -> RunningProfile {
        let pace = pace_min_per_km(metrics.speed.average);
        RunningProfile {
            pace_min_per_km: pace,
            pace_formatted: format_pace(pace),
            speed_kmh: metrics.speed.average * MPS_TO_KMH,
            cadence_spm: metrics.cadence,
            stride_length_m: metrics.stride_length,
            ground_contact_time_ms: metrics.ground_contact_time,
            flight_time_ms: metrics.flight_time,
            vertical_oscillation_cm: metrics.vertical_oscillation,
            distance_m: metrics.distance.total,
        }
    }

    fn jumping(metrics: &PerformanceMetrics) -> JumpingProfile {
        let height_m = metrics.jump_height.max(0.0) / CM_PER_METER;
        let takeoff_velocity = (2.0 * GRAVITY_MPS2 * height_m).sqrt();
        JumpingProfile {
            jump_height_cm: metrics.jump_height,
            takeoff_velocity_mps: takeoff_velocity,
            air_time_ms: 2.0 * takeoff_velocity / GRAVITY_MPS2 * MS_PER_SECOND,
            peak_power_w: metrics.power.peak,
            vertical_oscillation_cm: metrics.vertical_oscillation,
        }
    }

    fn cycling(metrics: &PerformanceMetrics) -> CyclingProfile {
        CyclingProfile {
            speed_kmh: metrics.speed.average * MPS_TO_KMH,
            // one ankle strike per foot per revolution
            cadence_rpm: metrics.cadence / 2.0,
            average_power_w: metrics.power.average,
            peak_power_w: metrics.power.peak,
            distance_km: metrics.distance.total / METERS_PER_KM,
        }
    }

    const fn weightlifting(metrics: &PerformanceMetrics) -> WeightliftingProfile {
        WeightliftingProfile {
            peak_power_w: metrics.power.peak,
            average_power_w: metrics.power.average,
            peak_acceleration_mps2: metrics.acceleration.max,
            peak_velocity_mps: metrics.speed.max,
            vertical_displacement_m: metrics.distance.vertical,
        }
    }
}

/// Minutes per kilometer for a speed in m/s; 0 when not moving forward
#[must_use]
pub fn pace_min_per_km(speed_mps: f64) -> f64 {
    if speed_mps > 0.0 && speed_mps.is_finite() {
        METERS_PER_KM / speed_mps / SECONDS_PER_MINUTE
    } else {
        0.0
    }
}

/// Format minutes per kilometer as `m:ss`
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Safe: clamped non-negative and finite
pub fn format_pace(pace_min_per_km: f64) -> String {
    let total_seconds = if pace_min_per_km.is_finite() {
        (pace_min_per_km.max(0.0) * SECONDS_PER_MINUTE).round() as u64
    } else {
        0
    };
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
