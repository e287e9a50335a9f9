//! # rocket_core - Rocket Component Geometry Engine
//!
//! `rocket_core` validates parametric rocket-component designs (body
//! tubes, nose cones, transitions, bulkheads, centering rings, fins,
//! fin cans, rail hardware, launch lugs) and turns them into ordered
//! construction recipes for a downstream solid-modeling kernel. It also
//! carries the flight calculators: fin flutter, parachute sizing,
//! ejection charge and minimum thrust.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: validate and build are pure functions of the
//!   parameter set; the only process-wide state is the read-only
//!   preset registry
//! - **JSON-First**: every parameter set, recipe and error serializes
//! - **Fail-fast**: the first violated rule wins, attributed to the
//!   field a user would edit to fix it
//! - **No kernel here**: recipes describe construction steps; revolves,
//!   booleans and fillets happen downstream
//!
//! ## Quick Start
//!
//! ```rust
//! use rocket_core::components::{BodyTubeParams, ComponentParameterSet, SiblingContext};
//!
//! let params = ComponentParameterSet::BodyTube(BodyTubeParams {
//!     inner_diameter_mm: 24.1,
//!     outer_diameter_mm: 24.8,
//!     length_mm: 300.0,
//! });
//! let recipe = rocket_core::validate_and_build(&params, &SiblingContext::empty()).unwrap();
//! assert_eq!(recipe.component, "Body tube");
//! ```
//!
//! ## Modules
//!
//! - [`components`] - per-component parameter sets, validation and assembly
//! - [`profiles`] - nose and transition profile curve mathematics
//! - [`recipe`] - the construction-step vocabulary handed to the kernel
//! - [`analysis`] - fin flutter and the other flight calculators
//! - [`registry`] - read-only rail-hardware and launch-lug presets
//! - [`errors`] - structured error types

pub mod analysis;
pub mod components;
pub mod errors;
pub mod profiles;
pub mod recipe;
pub mod registry;

// Re-export commonly used types at crate root for convenience
pub use analysis::flutter::{AtmosphereInput, FinGeometry, FlutterResult, MaterialProperties};
pub use components::{ComponentParameterSet, SiblingContext};
pub use errors::{RocketError, RocketResult};
pub use recipe::ShapeRecipe;

/// Validate a component parameter set and, if valid, assemble its
/// construction recipe. Auto dimensions resolve against the sibling
/// context. A validation failure never triggers assembly.
pub fn validate_and_build(
    params: &ComponentParameterSet,
    ctx: &SiblingContext,
) -> RocketResult<ShapeRecipe> {
    params.validate()?;
    params.build(ctx)
}

/// Flutter and divergence speed for a fin geometry snapshot.
pub fn analyze_flutter(
    geometry: &FinGeometry,
    material: &MaterialProperties,
    atmosphere: &AtmosphereInput,
) -> RocketResult<FlutterResult> {
    analysis::flutter::analyze(geometry, material, atmosphere)
}
