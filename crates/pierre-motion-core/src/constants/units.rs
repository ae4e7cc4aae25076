// ABOUTME: Unit conversion constants for distance, time, and acceleration
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Milliseconds per second
pub const MS_PER_SECOND: f64 = 1000.0;

/// Milliseconds per minute
pub const MS_PER_MINUTE: f64 = 60_000.0;

/// Meters per second to kilometers per hour
pub const MPS_TO_KMH: f64 = 3.6;

/// Standard gravity (m/s²)
pub const GRAVITY_MPS2: f64 = 9.81;
