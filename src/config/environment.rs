// ABOUTME: Environment-based engine configuration loading
// ABOUTME: Reads PIERRE_MOTION_* variables, falls back to defaults, and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AthleteProfile, EngineConfig};
use anyhow::{Context, Result};
use std::env::{self, VarError};
use tracing::info;

/// Athlete standing height in meters
pub const ATHLETE_HEIGHT_VAR: &str = "PIERRE_MOTION_ATHLETE_HEIGHT_M";
/// Athlete body mass in kilograms
pub const ATHLETE_MASS_VAR: &str = "PIERRE_MOTION_ATHLETE_MASS_KG";
/// Preset pixels-per-meter scale; unset means calibrate at runtime
pub const PIXELS_PER_METER_VAR: &str = "PIERRE_MOTION_PIXELS_PER_METER";
/// History window capacity in frames
pub const HISTORY_CAPACITY_VAR: &str = "PIERRE_MOTION_HISTORY_CAPACITY";
/// Recompute throttle interval in milliseconds
pub const RECOMPUTE_INTERVAL_VAR: &str = "PIERRE_MOTION_RECOMPUTE_INTERVAL_MS";

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is not valid unicode, fails to parse,
    /// or the resulting configuration does not validate
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            athlete: AthleteProfile {
                height_m: env_var_or(ATHLETE_HEIGHT_VAR, &defaults.athlete.height_m.to_string())?
                    .parse()
                    .context("Invalid PIERRE_MOTION_ATHLETE_HEIGHT_M value")?,
                mass_kg: env_var_or(ATHLETE_MASS_VAR, &defaults.athlete.mass_kg.to_string())?
                    .parse()
                    .context("Invalid PIERRE_MOTION_ATHLETE_MASS_KG value")?,
            },
            pixels_per_meter: optional_env_var(PIXELS_PER_METER_VAR)?
                .map(|value| value.parse::<f64>())
                .transpose()
                .context("Invalid PIERRE_MOTION_PIXELS_PER_METER value")?,
            history_capacity: env_var_or(
                HISTORY_CAPACITY_VAR,
                &defaults.history_capacity.to_string(),
            )?
            .parse()
            .context("Invalid PIERRE_MOTION_HISTORY_CAPACITY value")?,
            recompute_interval_ms: env_var_or(
                RECOMPUTE_INTERVAL_VAR,
                &defaults.recompute_interval_ms.to_string(),
            )?
            .parse()
            .context("Invalid PIERRE_MOTION_RECOMPUTE_INTERVAL_MS value")?,
            thresholds: defaults.thresholds,
        };

        config
            .validate()
            .context("Engine configuration from environment is invalid")?;

        info!(
            athlete.height_m = config.athlete.height_m,
            athlete.mass_kg = config.athlete.mass_kg,
            calibration.preset = config.pixels_per_meter.is_some(),
            history.capacity = config.history_capacity,
            cache.recompute_interval_ms = config.recompute_interval_ms,
            "Loaded motion engine configuration from environment"
        );

        Ok(config)
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> Result<String> {
    Ok(optional_env_var(key)?.unwrap_or_else(|| default.to_owned()))
}

/// Get environment variable, treating unset or blank as absent
fn optional_env_var(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value.trim().to_owned())),
        Err(VarError::NotPresent) => Ok(None),
        Err(error) => Err(error).with_context(|| format!("{key} is not valid unicode")),
    }
}
