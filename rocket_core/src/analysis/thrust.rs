//! # Minimum Thrust
//!
//! Thrust floor for a safe rail departure. The usual rule is a 5:1
//! thrust-to-weight ratio at liftoff.

use serde::{Deserialize, Serialize};

use crate::errors::{RocketError, RocketResult};

const GRAVITY: f64 = 9.80665;

/// Input parameters for the minimum-thrust check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimumThrustInput {
    /// Fully loaded liftoff mass
    pub rocket_mass_kg: f64,
    /// Required thrust-to-weight ratio; 5.0 is the customary floor
    pub thrust_to_weight: f64,
}

/// Computed thrust floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimumThrustResult {
    pub minimum_thrust_n: f64,
    pub weight_n: f64,
}

impl MinimumThrustInput {
    pub fn validate(&self) -> RocketResult<()> {
        if self.rocket_mass_kg <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "rocket mass",
                self.rocket_mass_kg.to_string(),
                "must be greater than zero",
            ));
        }
        if self.thrust_to_weight < 1.0 {
            return Err(RocketError::invalid_parameter(
                "thrust to weight",
                self.thrust_to_weight.to_string(),
                "must be at least one",
            ));
        }
        Ok(())
    }

    pub fn calculate(&self) -> RocketResult<MinimumThrustResult> {
        self.validate()?;
        let weight_n = self.rocket_mass_kg * GRAVITY;
        Ok(MinimumThrustResult {
            minimum_thrust_n: weight_n * self.thrust_to_weight,
            weight_n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_to_one() {
        let input = MinimumThrustInput {
            rocket_mass_kg: 2.0,
            thrust_to_weight: 5.0,
        };
        let result = input.calculate().unwrap();
        assert!((result.weight_n - 19.613).abs() < 0.01);
        assert!((result.minimum_thrust_n - 98.07).abs() < 0.05);
    }

    #[test]
    fn test_ratio_below_one_rejected() {
        let input = MinimumThrustInput {
            rocket_mass_kg: 2.0,
            thrust_to_weight: 0.8,
        };
        let err = input.calculate().unwrap_err();
        assert_eq!(err.field(), Some("thrust to weight"));
    }
}
