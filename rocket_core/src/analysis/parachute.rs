//! # Parachute Sizing
//!
//! Canopy diameter for a target descent velocity, from the drag
//! equation at terminal velocity: D = sqrt(8mg / (pi rho Cd v^2)).
//!
//! ## Example
//!
//! ```rust
//! use rocket_core::analysis::parachute::ParachuteInput;
//!
//! let input = ParachuteInput {
//!     rocket_mass_kg: 0.5,
//!     descent_velocity_ms: 5.0,
//!     drag_coefficient: 0.75,
//!     air_density_kg_m3: 1.225,
//! };
//! let result = input.calculate().unwrap();
//! assert!(result.canopy_diameter_m > 0.5);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{RocketError, RocketResult};

const GRAVITY: f64 = 9.80665;

/// Input parameters for parachute sizing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParachuteInput {
    /// Mass of the descending section
    pub rocket_mass_kg: f64,
    /// Target terminal descent velocity
    pub descent_velocity_ms: f64,
    /// Canopy drag coefficient (0.75 flat sheet, 1.5 hemispherical)
    pub drag_coefficient: f64,
    pub air_density_kg_m3: f64,
}

/// Computed canopy size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParachuteResult {
    pub canopy_diameter_m: f64,
    pub canopy_area_m2: f64,
}

impl ParachuteInput {
    pub fn validate(&self) -> RocketResult<()> {
        if self.rocket_mass_kg <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "rocket mass",
                self.rocket_mass_kg.to_string(),
                "must be greater than zero",
            ));
        }
        if self.descent_velocity_ms <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "descent velocity",
                self.descent_velocity_ms.to_string(),
                "must be greater than zero",
            ));
        }
        if self.drag_coefficient <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "drag coefficient",
                self.drag_coefficient.to_string(),
                "must be greater than zero",
            ));
        }
        if self.air_density_kg_m3 <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "air density",
                self.air_density_kg_m3.to_string(),
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    pub fn calculate(&self) -> RocketResult<ParachuteResult> {
        self.validate()?;
        let area = 2.0 * self.rocket_mass_kg * GRAVITY
            / (self.air_density_kg_m3
                * self.drag_coefficient
                * self.descent_velocity_ms
                * self.descent_velocity_ms);
        Ok(ParachuteResult {
            canopy_diameter_m: (4.0 * area / std::f64::consts::PI).sqrt(),
            canopy_area_m2: area,
        })
    }
}
