// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Policy thresholds and physical constants for motion analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Thresholds here are policy constants rather than derived quantities. The
//! analytics configuration uses them as defaults so tests can probe boundary
//! behavior precisely.

/// Body-segment mass model for center-of-mass estimation
pub mod body_model;

/// Unit conversion and physical constants
pub mod units;

/// Keypoint confidence thresholds
pub mod confidence {
    /// Nose and both ankles must exceed this to calibrate from a pose
    pub const CALIBRATION_MIN_CONFIDENCE: f64 = 0.5;

    /// Keypoints must exceed this to contribute to the centroid
    pub const CENTROID_MIN_CONFIDENCE: f64 = 0.3;

    /// Both consecutive ankle samples must exceed this for gait velocity
    pub const GAIT_MIN_CONFIDENCE: f64 = 0.3;
}

/// Minimum window sizes before an analyzer produces non-zero output
pub mod windows {
    /// Kinematics needs at least one frame pair
    pub const KINEMATICS_MIN_FRAMES: usize = 2;

    /// Gait needs roughly one second of frames at 30 fps
    pub const GAIT_MIN_FRAMES: usize = 30;

    /// Vertical motion analysis needs a third of a second at 30 fps
    pub const VERTICAL_MIN_FRAMES: usize = 10;
}

/// Jump detection velocity triggers (image coordinates, y grows downward)
pub mod jump {
    /// Vertical velocity below this starts a flight phase (m/s, upward)
    pub const TAKEOFF_VELOCITY_MPS: f64 = -1.0;

    /// Vertical velocity above this, while descending, ends a flight phase (m/s)
    pub const LANDING_VELOCITY_MPS: f64 = 0.5;
}

/// Gait cycle duty split
///
/// Ground contact and flight are fixed fractions of the cycle period, a
/// simplifying model rather than a measurement from ankle-ground contact.
pub mod gait {
    /// Share of the gait cycle spent in ground contact
    pub const GROUND_CONTACT_FRACTION: f64 = 0.35;

    /// Share of the gait cycle spent airborne
    pub const FLIGHT_FRACTION: f64 = 0.15;
}

/// Engine defaults
pub mod engine {
    /// Default frame history capacity (4 seconds at 30 fps)
    pub const DEFAULT_HISTORY_CAPACITY: usize = 120;

    /// Default minimum wall-clock interval between full recomputations
    pub const DEFAULT_RECOMPUTE_INTERVAL_MS: u64 = 33;

    /// Scale used before any calibration has happened
    pub const DEFAULT_PIXELS_PER_METER: f64 = 100.0;

    /// Default athlete standing height in meters
    pub const DEFAULT_ATHLETE_HEIGHT_M: f64 = 1.75;

    /// Default athlete body mass in kilograms
    pub const DEFAULT_ATHLETE_MASS_KG: f64 = 70.0;
}

/// Service identification for structured logs
pub mod service_names {
    /// Service name reported by the logging setup
    pub const PIERRE_MOTION: &str = "pierre-motion";
}
