// ABOUTME: Sport tag enumeration for sport-specific metric projections
// ABOUTME: Parses presentation-layer tags; unknown tags fall back to the generic bundle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sports with a dedicated metrics view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SportType {
    /// Running: pace, cadence, stride
    Running,
    /// Jumping: height and takeoff velocity
    Jumping,
    /// Cycling: speed, pedal cadence, power
    Cycling,
    /// Weightlifting: power and bar-path style acceleration
    Weightlifting,
}

impl SportType {
    /// All supported sports
    pub const ALL: [Self; 4] = [
        Self::Running,
        Self::Jumping,
        Self::Cycling,
        Self::Weightlifting,
    ];

    /// Parse a tag case-insensitively; `None` for unrecognized tags
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "running" | "run" => Some(Self::Running),
            "jumping" | "jump" => Some(Self::Jumping),
            "cycling" | "cycle" | "ride" => Some(Self::Cycling),
            "weightlifting" | "weight_lifting" | "lifting" => Some(Self::Weightlifting),
            _ => None,
        }
    }

    /// Canonical tag
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Jumping => "jumping",
            Self::Cycling => "cycling",
            Self::Weightlifting => "weightlifting",
        }
    }
}

impl fmt::Display for SportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SportType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Unknown sport: '{s}'. Valid options: running, jumping, cycling, weightlifting"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_parse_case_insensitively() {
        assert_eq!(SportType::from_tag("Running"), Some(SportType::Running));
        assert_eq!(SportType::from_tag(" JUMPING "), Some(SportType::Jumping));
        assert_eq!(SportType::from_tag("swimming"), None);
        assert!("curling".parse::<SportType>().is_err());
    }

    #[test]
    fn test_tag_round_trip() {
        for sport in SportType::ALL {
            assert_eq!(SportType::from_tag(sport.tag()), Some(sport));
        }
    }
}
