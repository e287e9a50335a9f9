//! # Standard Atmosphere
//!
//! The NASA Glenn three-layer standard-atmosphere model: troposphere,
//! lower stratosphere, upper stratosphere. Gives temperature, pressure
//! and speed of sound at a geometric altitude, which the flutter
//! analyzer evaluates at the altitude of maximum speed.
//!
//! ## Example
//!
//! ```rust
//! use rocket_core::analysis::atmosphere::conditions_at;
//!
//! let sea_level = conditions_at(0.0);
//! assert!((sea_level.pressure_kpa - 101.4).abs() < 0.1);
//! assert!((sea_level.speed_of_sound_ms - 340.0).abs() < 2.0);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{RocketError, RocketResult};

/// Ratio of specific heats for air
const GAMMA: f64 = 1.4;
/// Specific gas constant for air, J/(kg K)
const GAS_CONSTANT: f64 = 286.9;

/// Atmospheric state at one altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereConditions {
    pub altitude_m: f64,
    pub temperature_k: f64,
    pub pressure_kpa: f64,
    pub speed_of_sound_ms: f64,
}

/// Conditions at a geometric altitude in metres.
pub fn conditions_at(altitude_m: f64) -> AtmosphereConditions {
    // Temperatures in Celsius, pressures in kPa, per the NASA Glenn
    // curve fits
    let (temperature_c, pressure_kpa) = if altitude_m < 11_000.0 {
        let t = 15.04 - 0.00649 * altitude_m;
        let p = 101.29 * ((t + 273.1) / 288.08).powf(5.256);
        (t, p)
    } else if altitude_m < 25_000.0 {
        let t = -56.46;
        let p = 22.65 * (1.73 - 0.000157 * altitude_m).exp();
        (t, p)
    } else {
        let t = -131.21 + 0.00299 * altitude_m;
        let p = 2.488 * ((t + 273.1) / 216.6).powf(-11.388);
        (t, p)
    };
    let temperature_k = temperature_c + 273.15;
    AtmosphereConditions {
        altitude_m,
        temperature_k,
        pressure_kpa,
        speed_of_sound_ms: (GAMMA * GAS_CONSTANT * temperature_k).sqrt(),
    }
}

/// A named flight profile: how high the rocket goes and where along the
/// way it is fastest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmospherePreset {
    pub name: &'static str,
    pub max_altitude_m: f64,
    pub altitude_at_max_speed_m: f64,
}

static PRESETS: Lazy<Vec<AtmospherePreset>> = Lazy::new(|| {
    vec![
        AtmospherePreset {
            name: "sea level",
            max_altitude_m: 0.0,
            altitude_at_max_speed_m: 0.0,
        },
        AtmospherePreset {
            name: "low altitude",
            max_altitude_m: 1_500.0,
            altitude_at_max_speed_m: 300.0,
        },
        AtmospherePreset {
            name: "high altitude",
            max_altitude_m: 10_000.0,
            altitude_at_max_speed_m: 2_000.0,
        },
        AtmospherePreset {
            name: "extreme altitude",
            max_altitude_m: 30_000.0,
            altitude_at_max_speed_m: 6_000.0,
        },
    ]
});

/// Look up a named flight profile preset.
pub fn preset(name: &str) -> RocketResult<AtmospherePreset> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .copied()
        .ok_or_else(|| RocketError::preset_not_found(name))
}

/// All built-in flight profile presets.
pub fn presets() -> &'static [AtmospherePreset] {
    &PRESETS
}
