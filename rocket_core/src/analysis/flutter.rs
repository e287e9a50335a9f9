//! # Fin Flutter
//!
//! Flutter and divergence speed for a uniform-thickness, straight-edged
//! trapezoidal fin, per the classic NACA TN 4197 boundary. The analyzer
//! takes a snapshot of the fin planform, the material's elastic
//! properties and a flight profile, and evaluates the atmosphere at the
//! altitude of maximum speed.
//!
//! Shapes the flutter equation cannot describe - tapered thickness,
//! elliptical and sketch planforms, tube fins - are rejected up front
//! with an unsupported-shape error rather than a wrong number.
//!
//! ## Example
//!
//! ```rust
//! use rocket_core::analysis::flutter::{
//!     analyze, AtmosphereInput, FinGeometry, MaterialProperties,
//! };
//!
//! let geometry = FinGeometry {
//!     root_chord_mm: 100.0,
//!     tip_chord_mm: 50.0,
//!     span_mm: 80.0,
//!     thickness_mm: 3.0,
//! };
//! let material = MaterialProperties {
//!     density_kg_m3: 1850.0,
//!     shear_modulus_pa: Some(4.0e9),
//!     youngs_modulus_pa: 1.1e10,
//!     poisson_ratio: 0.12,
//! };
//! let result = analyze(&geometry, &material, &AtmosphereInput::sea_level()).unwrap();
//! assert!(result.flutter_speed_ms > result.divergence_speed_ms);
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::atmosphere;
use crate::components::fin::{FinParams, FinPlanform};
use crate::errors::{RocketError, RocketResult};

/// Planform snapshot consumed by the flutter equations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinGeometry {
    pub root_chord_mm: f64,
    pub tip_chord_mm: f64,
    /// Semi-span, root to tip
    pub span_mm: f64,
    pub thickness_mm: f64,
}

impl FinGeometry {
    /// Snapshot a fin parameter set, rejecting shapes the flutter
    /// equations cannot describe.
    pub fn from_fin(fin: &FinParams) -> RocketResult<Self> {
        if fin.cross_section.is_tapered() {
            return Err(RocketError::unsupported_shape(
                "tapered thickness fins are not supported at this time",
            ));
        }
        match &fin.planform {
            FinPlanform::Trapezoid {
                root_chord_mm,
                tip_chord_mm,
                span_mm,
                ..
            } => Ok(FinGeometry {
                root_chord_mm: *root_chord_mm,
                tip_chord_mm: tip_chord_mm.resolve(*root_chord_mm),
                span_mm: *span_mm,
                thickness_mm: fin.thickness_mm,
            }),
            FinPlanform::Ellipse { .. } => Err(RocketError::unsupported_shape(
                "elliptical fins are not supported at this time",
            )),
            FinPlanform::Tube { .. } => Err(RocketError::unsupported_shape(
                "tube fins are not supported at this time",
            )),
            FinPlanform::Sketch(_) => Err(RocketError::unsupported_shape(
                "custom fins are not supported at this time",
            )),
        }
    }

    fn validate(&self) -> RocketResult<()> {
        if self.root_chord_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "root chord",
                self.root_chord_mm.to_string(),
                "must be greater than zero",
            ));
        }
        if self.tip_chord_mm < 0.0 {
            return Err(RocketError::invalid_parameter(
                "tip chord",
                self.tip_chord_mm.to_string(),
                "must be greater than or equal to zero",
            ));
        }
        if self.span_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "span",
                self.span_mm.to_string(),
                "must be greater than zero",
            ));
        }
        if self.thickness_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "thickness",
                self.thickness_mm.to_string(),
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Aspect ratio of the half-fin, s² / S.
    fn aspect_ratio(&self) -> f64 {
        let area = (self.root_chord_mm + self.tip_chord_mm) / 2.0 * self.span_mm;
        self.span_mm * self.span_mm / area
    }
}

/// Elastic properties of the fin material, supplied by an external
/// material lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    pub density_kg_m3: f64,
    /// Shear modulus; derived from E and nu when not given
    pub shear_modulus_pa: Option<f64>,
    pub youngs_modulus_pa: f64,
    pub poisson_ratio: f64,
}

impl MaterialProperties {
    fn validate(&self) -> RocketResult<()> {
        if let Some(shear) = self.shear_modulus_pa {
            if shear <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "shear modulus",
                    shear.to_string(),
                    "must be greater than zero",
                ));
            }
            return Ok(());
        }
        if self.youngs_modulus_pa <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "youngs modulus",
                self.youngs_modulus_pa.to_string(),
                "must be greater than zero",
            ));
        }
        if self.poisson_ratio <= -1.0 || self.poisson_ratio >= 0.5 {
            return Err(RocketError::invalid_parameter(
                "poisson ratio",
                self.poisson_ratio.to_string(),
                "must be greater than -1 and less than 0.5",
            ));
        }
        Ok(())
    }

    /// Shear modulus, isotropic G = E / 2(1 + nu) when not given.
    pub fn shear_modulus(&self) -> f64 {
        match self.shear_modulus_pa {
            Some(g) => g,
            None => self.youngs_modulus_pa / (2.0 * (1.0 + self.poisson_ratio)),
        }
    }
}

/// Flight profile, as a named preset or custom altitudes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum AtmosphereInput {
    Preset { name: String },
    Custom {
        max_altitude_m: f64,
        altitude_at_max_speed_m: f64,
    },
}

impl AtmosphereInput {
    pub fn sea_level() -> Self {
        AtmosphereInput::Preset {
            name: "sea level".to_string(),
        }
    }

    fn altitude_at_max_speed(&self) -> RocketResult<f64> {
        match self {
            AtmosphereInput::Preset { name } => {
                Ok(atmosphere::preset(name)?.altitude_at_max_speed_m)
            }
            AtmosphereInput::Custom {
                max_altitude_m,
                altitude_at_max_speed_m,
            } => {
                if *max_altitude_m < 0.0 {
                    return Err(RocketError::invalid_parameter(
                        "maximum altitude",
                        max_altitude_m.to_string(),
                        "must be greater than or equal to zero",
                    ));
                }
                if *altitude_at_max_speed_m < 0.0 {
                    return Err(RocketError::invalid_parameter(
                        "altitude at maximum speed",
                        altitude_at_max_speed_m.to_string(),
                        "must be greater than or equal to zero",
                    ));
                }
                if altitude_at_max_speed_m > max_altitude_m {
                    return Err(RocketError::invalid_parameter(
                        "altitude at maximum speed",
                        altitude_at_max_speed_m.to_string(),
                        "can not exceed the maximum altitude",
                    ));
                }
                Ok(*altitude_at_max_speed_m)
            }
        }
    }
}

/// Flutter analysis output, computed fresh per call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlutterResult {
    pub flutter_speed_ms: f64,
    pub divergence_speed_ms: f64,
    /// Flutter speed as a Mach number at the evaluation altitude
    pub mach_number: f64,
    pub altitude_at_max_speed_m: f64,
}

/// Flutter and divergence speed for a trapezoidal fin.
pub fn analyze(
    geometry: &FinGeometry,
    material: &MaterialProperties,
    atmosphere_input: &AtmosphereInput,
) -> RocketResult<FlutterResult> {
    geometry.validate()?;
    material.validate()?;
    let altitude_m = atmosphere_input.altitude_at_max_speed()?;
    let conditions = atmosphere::conditions_at(altitude_m);

    let aspect_ratio = geometry.aspect_ratio();
    let taper_ratio = geometry.tip_chord_mm / geometry.root_chord_mm;
    let thickness_ratio = geometry.thickness_mm / geometry.root_chord_mm;

    let shear_modulus = material.shear_modulus();
    let pressure_pa = conditions.pressure_kpa * 1000.0;
    let speed_of_sound = conditions.speed_of_sound_ms;

    let flutter_speed_ms = speed_of_sound
        * (shear_modulus * 2.0 * (aspect_ratio + 2.0) * thickness_ratio.powi(3)
            / (1.337 * aspect_ratio.powi(3) * pressure_pa * (taper_ratio + 1.0)))
            .sqrt();
    let divergence_speed_ms = speed_of_sound
        * (shear_modulus * (aspect_ratio + 2.0) * thickness_ratio.powi(3)
            / (3.3 * pressure_pa * aspect_ratio.powi(3)))
            .sqrt();

    Ok(FlutterResult {
        flutter_speed_ms,
        divergence_speed_ms,
        mach_number: flutter_speed_ms / speed_of_sound,
        altitude_at_max_speed_m: altitude_m,
    })
}

/// Convenience wrapper that snapshots a fin parameter set first.
pub fn analyze_fin(
    fin: &FinParams,
    material: &MaterialProperties,
    atmosphere_input: &AtmosphereInput,
) -> RocketResult<FlutterResult> {
    let geometry = FinGeometry::from_fin(fin)?;
    analyze(&geometry, material, atmosphere_input)
}
