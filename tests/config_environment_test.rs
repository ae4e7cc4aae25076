// ABOUTME: Integration tests for environment-based engine configuration
// ABOUTME: Defaults, overrides, parse failures, and validation of PIERRE_MOTION_* variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_motion::config::environment::{
    ATHLETE_HEIGHT_VAR, ATHLETE_MASS_VAR, HISTORY_CAPACITY_VAR, PIXELS_PER_METER_VAR,
    RECOMPUTE_INTERVAL_VAR,
};
use pierre_motion::config::EngineConfig;
use pierre_motion::engine::MotionEngine;
use serial_test::serial;
use std::env;

const ALL_VARS: [&str; 5] = [
    ATHLETE_HEIGHT_VAR,
    ATHLETE_MASS_VAR,
    PIXELS_PER_METER_VAR,
    HISTORY_CAPACITY_VAR,
    RECOMPUTE_INTERVAL_VAR,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();
    let config = EngineConfig::from_env().unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_env();
    env::set_var(ATHLETE_HEIGHT_VAR, "1.82");
    env::set_var(ATHLETE_MASS_VAR, "76.5");
    env::set_var(PIXELS_PER_METER_VAR, "240");
    env::set_var(HISTORY_CAPACITY_VAR, "60");
    env::set_var(RECOMPUTE_INTERVAL_VAR, "16");

    let config = EngineConfig::from_env().unwrap();
    clear_env();

    assert!((config.athlete.height_m - 1.82).abs() < f64::EPSILON);
    assert!((config.athlete.mass_kg - 76.5).abs() < f64::EPSILON);
    assert_eq!(config.pixels_per_meter, Some(240.0));
    assert_eq!(config.history_capacity, 60);
    assert_eq!(config.recompute_interval_ms, 16);

    let engine = MotionEngine::new(config).unwrap();
    assert!(engine.is_calibrated());
    assert_eq!(engine.history().capacity(), 60);
}

#[test]
#[serial]
fn test_blank_scale_means_uncalibrated() {
    clear_env();
    env::set_var(PIXELS_PER_METER_VAR, "  ");
    let config = EngineConfig::from_env().unwrap();
    clear_env();

    assert!(config.pixels_per_meter.is_none());
}

#[test]
#[serial]
fn test_unparseable_value_is_an_error() {
    clear_env();
    env::set_var(ATHLETE_MASS_VAR, "heavy");
    let error = EngineConfig::from_env().unwrap_err();
    clear_env();

    assert!(error.to_string().contains(ATHLETE_MASS_VAR));
}

#[test]
#[serial]
fn test_invalid_values_fail_validation() {
    clear_env();
    env::set_var(HISTORY_CAPACITY_VAR, "1");
    let result = EngineConfig::from_env();
    clear_env();
    assert!(result.is_err());

    env::set_var(ATHLETE_HEIGHT_VAR, "-2");
    let result = EngineConfig::from_env();
    clear_env();
    assert!(result.is_err());
}
