// ABOUTME: Integration tests for sport-specific metric views
// ABOUTME: Running pace guards, jumping and cycling derivations, and the unknown-tag fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{feed, jump_offsets, translating_frames, unthrottled_engine, vertical_frames};
use pierre_motion::analytics::sport_profile::{SportProfile, SportProfileMapper};
use pierre_motion::models::{PerformanceMetrics, SpeedMetrics, SportType};

#[test]
fn test_running_pace_is_zero_when_stationary() {
    let SportProfile::Running(view) =
        SportProfileMapper::project(SportType::Running, &PerformanceMetrics::default())
    else {
        panic!("expected running view");
    };
    assert!(view.pace_min_per_km.abs() < f64::EPSILON);
    assert!(view.pace_min_per_km.is_finite());
    assert_eq!(view.pace_formatted, "0:00");
}

#[test]
fn test_running_pace_from_average_speed() {
    let metrics = PerformanceMetrics {
        speed: SpeedMetrics {
            instantaneous: 5.0,
            average: 5.0,
            max: 5.5,
        },
        cadence: 180.0,
        ..PerformanceMetrics::default()
    };
    let SportProfile::Running(view) = SportProfileMapper::project(SportType::Running, &metrics)
    else {
        panic!("expected running view");
    };

    // 5 m/s is 3:20 per km
    assert!((view.pace_min_per_km - 1000.0 / 5.0 / 60.0).abs() < 1e-9);
    assert_eq!(view.pace_formatted, "3:20");
    assert!((view.speed_kmh - 18.0).abs() < 1e-9);
    assert!((view.cadence_spm - 180.0).abs() < f64::EPSILON);
}

#[test]
fn test_jumping_view_from_engine() {
    let mut engine = unthrottled_engine();
    feed(&mut engine, vertical_frames(&jump_offsets(150.0)));

    let SportProfile::Jumping(view) = engine.sport_profile(SportType::Jumping) else {
        panic!("expected jumping view");
    };
    assert!((view.jump_height_cm - 52.5).abs() < 1e-6);
    let expected_velocity = (2.0 * 9.81 * 0.525_f64).sqrt();
    assert!((view.takeoff_velocity_mps - expected_velocity).abs() < 1e-6);
}

#[test]
fn test_cycling_rpm_is_half_step_cadence() {
    let metrics = PerformanceMetrics {
        cadence: 170.0,
        ..PerformanceMetrics::default()
    };
    let SportProfile::Cycling(view) = SportProfileMapper::project(SportType::Cycling, &metrics)
    else {
        panic!("expected cycling view");
    };
    assert!((view.cadence_rpm - 85.0).abs() < f64::EPSILON);
}

#[test]
fn test_weightlifting_view_uses_peaks() {
    let mut engine = unthrottled_engine();
    feed(&mut engine, translating_frames(10, 12.0));
    let metrics = engine.latest_metrics().unwrap();

    let SportProfile::Weightlifting(view) = engine.sport_profile(SportType::Weightlifting) else {
        panic!("expected weightlifting view");
    };
    assert!((view.peak_velocity_mps - metrics.speed.max).abs() < f64::EPSILON);
    assert!((view.peak_power_w - metrics.power.peak).abs() < f64::EPSILON);
    assert!((view.peak_acceleration_mps2 - metrics.acceleration.max).abs() < f64::EPSILON);
}

#[test]
fn test_tags_are_case_insensitive_and_unknown_tags_fall_back() {
    let mut engine = unthrottled_engine();
    feed(&mut engine, translating_frames(10, 12.0));
    let metrics = engine.latest_metrics().unwrap();

    assert_eq!(
        engine.sport_profile_for_tag("RUNNING").sport(),
        Some(SportType::Running)
    );
    assert_eq!(
        engine.sport_profile_for_tag("underwater-hockey"),
        SportProfile::Generic(*metrics)
    );
    assert!("underwater-hockey".parse::<SportType>().is_err());
}

#[test]
fn test_profile_serializes_with_sport_tag() {
    let view = SportProfileMapper::project(SportType::Cycling, &PerformanceMetrics::default());
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["sport"], "cycling");
    assert_eq!(json["cadence_rpm"], 0.0);
}
