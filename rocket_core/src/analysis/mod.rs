//! # Analysis Calculators
//!
//! Calculators sharing the typed-input, validate, compute shape:
//!
//! - [`flutter`] - fin flutter and divergence speed
//! - [`atmosphere`] - the standard-atmosphere model behind it
//! - [`parachute`] - canopy sizing for a target descent velocity
//! - [`ejection`] - black-powder ejection charge mass
//! - [`thrust`] - minimum thrust for a safe rail departure

pub mod atmosphere;
pub mod ejection;
pub mod flutter;
pub mod parachute;
pub mod thrust;

pub use atmosphere::{AtmosphereConditions, AtmospherePreset};
pub use ejection::{EjectionChargeInput, EjectionChargeResult};
pub use flutter::{AtmosphereInput, FinGeometry, FlutterResult, MaterialProperties};
pub use parachute::{ParachuteInput, ParachuteResult};
pub use thrust::{MinimumThrustInput, MinimumThrustResult};
