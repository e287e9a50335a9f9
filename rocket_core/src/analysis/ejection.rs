//! # Ejection Charge
//!
//! Black-powder mass needed to pressurize a parachute bay, from the
//! ideal gas law with the standard combustion constants for FFFFg black
//! powder (R = 266 J/(kg K), T = 1739 K).

use serde::{Deserialize, Serialize};

use crate::errors::{RocketError, RocketResult};

/// Gas constant for black-powder combustion products, J/(kg K)
const BP_GAS_CONSTANT: f64 = 266.0;
/// Combustion temperature of black powder, K
const BP_COMBUSTION_TEMP_K: f64 = 1739.0;

/// Input parameters for an ejection charge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EjectionChargeInput {
    /// Target bay pressure above ambient; ~100 kPa shears typical pins
    pub pressure_kpa: f64,
    pub tube_diameter_mm: f64,
    pub tube_length_mm: f64,
}

/// Computed charge mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EjectionChargeResult {
    pub charge_mass_g: f64,
    pub bay_volume_mm3: f64,
}

impl EjectionChargeInput {
    pub fn validate(&self) -> RocketResult<()> {
        if self.pressure_kpa <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "pressure",
                self.pressure_kpa.to_string(),
                "must be greater than zero",
            ));
        }
        if self.tube_diameter_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "tube diameter",
                self.tube_diameter_mm.to_string(),
                "must be greater than zero",
            ));
        }
        if self.tube_length_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "tube length",
                self.tube_length_mm.to_string(),
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    pub fn calculate(&self) -> RocketResult<EjectionChargeResult> {
        self.validate()?;
        let radius_mm = self.tube_diameter_mm / 2.0;
        let volume_mm3 = std::f64::consts::PI * radius_mm * radius_mm * self.tube_length_mm;
        let volume_m3 = volume_mm3 * 1e-9;
        let pressure_pa = self.pressure_kpa * 1000.0;
        // m = PV / RT
        let mass_kg = pressure_pa * volume_m3 / (BP_GAS_CONSTANT * BP_COMBUSTION_TEMP_K);
        Ok(EjectionChargeResult {
            charge_mass_g: mass_kg * 1000.0,
            bay_volume_mm3: volume_mm3,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_four_inch_bay() {
        let input = EjectionChargeInput {
            pressure_kpa: 100.0,
            tube_diameter_mm: 98.0,
            tube_length_mm: 300.0,
        };
        let result = input.calculate().unwrap();
        // V = 2.263e6 mm^3; m = 1e5 * 2.263e-3 / (266 * 1739) = 0.49 g
        assert!((result.charge_mass_g - 0.49).abs() < 0.02);
    }

    #[test]
    fn test_charge_scales_with_pressure() {
        let input = EjectionChargeInput {
            pressure_kpa: 100.0,
            tube_diameter_mm: 50.0,
            tube_length_mm: 200.0,
        };
        let base = input.calculate().unwrap();
        let doubled = EjectionChargeInput {
            pressure_kpa: 200.0,
            ..input
        }
        .calculate()
        .unwrap();
        assert!((doubled.charge_mass_g - 2.0 * base.charge_mass_g).abs() < 1e-9);
    }

    #[test]
    fn test_zero_diameter_rejected() {
        let input = EjectionChargeInput {
            pressure_kpa: 100.0,
            tube_diameter_mm: 0.0,
            tube_length_mm: 200.0,
        };
        let err = input.calculate().unwrap_err();
        assert_eq!(err.field(), Some("tube diameter"));
    }
}
