//! # Component Parameter Sets
//!
//! One module per component family. Each follows the same pattern:
//!
//! - `*Params` - the typed parameter record (JSON-serializable)
//! - `validate()` - fail-fast dimensional and structural checks
//! - `build(&SiblingContext)` - assemble a [`ShapeRecipe`] from validated
//!   parameters, resolving `Auto` dimensions against committed sibling
//!   geometry
//!
//! Validation is cheap and side-effect-free; the first failing rule wins.
//! Build never runs on parameters that failed validation.
//!
//! ## Available Components
//!
//! - [`body_tube`] - body tubes and inner/motor-mount tubes
//! - [`nose_cone`] - nose cones over every profile family
//! - [`transition`] - transitions with per-side shoulders
//! - [`bulkhead`] - bulkheads with steps and hole patterns
//! - [`centering_ring`] - centering rings with engine-hook notches
//! - [`fin`] - trapezoidal, elliptical, tube and sketch fins
//! - [`fin_can`] - fin cans with lugs and couplers
//! - [`rail_button`] / [`rail_guide`] / [`launch_lug`] - launch hardware

pub mod body_tube;
pub mod bulkhead;
pub mod centering_ring;
pub mod fin;
pub mod fin_can;
pub mod launch_lug;
pub mod nose_cone;
pub mod rail_button;
pub mod rail_guide;
pub mod transition;

use serde::{Deserialize, Serialize};

use crate::errors::{RocketError, RocketResult};
use crate::recipe::ShapeRecipe;

pub use body_tube::{BodyTubeParams, InnerTubeParams};
pub use bulkhead::{BulkheadHoles, BulkheadParams, BulkheadStep};
pub use centering_ring::{CenteringRingParams, RingNotch};
pub use fin::{ChordLength, CrossSection, FinParams, FinPlanform, FinSketch, SketchEdge, SweepMode, TtwTab};
pub use fin_can::{CouplerParams, CouplerStyle, EdgeParams, FinCanLug, FinCanParams};
pub use launch_lug::LaunchLugParams;
pub use nose_cone::{NoseConeParams, NoseStyle};
pub use rail_button::{CountersinkParams, RailButtonParams, RailButtonStyle};
pub use rail_guide::{GuideNotch, RailGuideBase, RailGuideParams};
pub use transition::{TransitionParams, TransitionStyle};

/// A diameter that is either given explicitly or derived from the
/// adjoining sibling component at build time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value")]
pub enum DiameterSpec {
    /// Explicit value in millimetres
    Explicit(f64),
    /// Derive from the sibling's committed geometry
    Auto,
}

impl DiameterSpec {
    /// The explicit value, if any
    pub fn explicit(&self) -> Option<f64> {
        match self {
            DiameterSpec::Explicit(v) => Some(*v),
            DiameterSpec::Auto => None,
        }
    }

    /// Resolve against a sibling diameter. `sibling_name` names the
    /// component the Auto mode derives from, for the not-found error.
    pub fn resolve(&self, sibling_mm: Option<f64>, sibling_name: &str) -> RocketResult<f64> {
        match self {
            DiameterSpec::Explicit(v) => Ok(*v),
            DiameterSpec::Auto => {
                sibling_mm.ok_or_else(|| RocketError::sibling_not_found(sibling_name))
            }
        }
    }
}

impl Default for DiameterSpec {
    fn default() -> Self {
        DiameterSpec::Auto
    }
}

/// Committed geometry of the components adjoining the one being built.
/// Supplied by the caller at build time; `Auto` dimensions resolve
/// against it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SiblingContext {
    /// Outer diameter of the component ahead (toward the nose)
    pub fore_diameter_mm: Option<f64>,
    /// Outer diameter of the component behind (toward the tail)
    pub aft_diameter_mm: Option<f64>,
    /// Inner diameter of the enclosing parent tube
    pub parent_inner_diameter_mm: Option<f64>,
    /// Outer diameter of the enclosing parent tube
    pub parent_outer_diameter_mm: Option<f64>,
    /// Outer diameter of the inner tube a component wraps (a centering
    /// ring's motor mount)
    pub inner_tube_outer_diameter_mm: Option<f64>,
}

impl SiblingContext {
    /// Context with no committed siblings (every Auto resolution fails)
    pub fn empty() -> Self {
        Self::default()
    }
}

/// A cylindrical shoulder extending from one end of a nose cone or
/// transition, sized to mate with the adjoining tube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShoulderParams {
    pub diameter_mm: DiameterSpec,
    pub length_mm: f64,
    /// Wall thickness, used by hollow and capped styles
    pub thickness_mm: f64,
}

impl ShoulderParams {
    /// Validate a shoulder. `side` is the field-name prefix ("shoulder",
    /// "forward shoulder", "aft shoulder"); `diameter_bound` is the
    /// adjoining component diameter the shoulder may not exceed, with
    /// `bound_text` naming it; `hollow` enables the thickness rules.
    pub(crate) fn validate(
        &self,
        side: &str,
        diameter_bound: Option<f64>,
        bound_text: &str,
        hollow: bool,
    ) -> RocketResult<()> {
        if self.length_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                format!("{} length", side),
                self.length_mm.to_string(),
                "must be greater than zero",
            ));
        }
        if let Some(diameter) = self.diameter_mm.explicit() {
            if diameter <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    format!("{} diameter", side),
                    diameter.to_string(),
                    "must be greater than zero",
                ));
            }
            if let Some(bound) = diameter_bound {
                if diameter > bound {
                    return Err(RocketError::invalid_parameter(
                        format!("{} diameter", side),
                        diameter.to_string(),
                        bound_text,
                    ));
                }
            }
            if hollow {
                if self.thickness_mm <= 0.0 {
                    return Err(RocketError::invalid_parameter(
                        format!("{} thickness", side),
                        self.thickness_mm.to_string(),
                        "must be greater than zero",
                    ));
                }
                if self.thickness_mm >= diameter / 2.0 {
                    return Err(RocketError::invalid_parameter(
                        format!("{} thickness", side),
                        self.thickness_mm.to_string(),
                        "must be less than the shoulder radius",
                    ));
                }
            }
        } else if hollow && self.thickness_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                format!("{} thickness", side),
                self.thickness_mm.to_string(),
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// One variant per component type. Owned exclusively by the editing
/// component and replaced wholesale on each edit; validation never
/// mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ComponentParameterSet {
    BodyTube(BodyTubeParams),
    InnerTube(InnerTubeParams),
    NoseCone(NoseConeParams),
    Transition(TransitionParams),
    Bulkhead(BulkheadParams),
    CenteringRing(CenteringRingParams),
    Fin(FinParams),
    FinCan(FinCanParams),
    RailButton(RailButtonParams),
    RailGuide(RailGuideParams),
    LaunchLug(LaunchLugParams),
}

impl ComponentParameterSet {
    /// Human-readable component family name, as used in build errors
    pub fn component_name(&self) -> &'static str {
        match self {
            ComponentParameterSet::BodyTube(_) => "Body tube",
            ComponentParameterSet::InnerTube(_) => "Inner tube",
            ComponentParameterSet::NoseCone(_) => "Nose cone",
            ComponentParameterSet::Transition(_) => "Transition",
            ComponentParameterSet::Bulkhead(_) => "Bulkhead",
            ComponentParameterSet::CenteringRing(_) => "Centering ring",
            ComponentParameterSet::Fin(_) => "Fin",
            ComponentParameterSet::FinCan(_) => "Fin can",
            ComponentParameterSet::RailButton(_) => "Rail button",
            ComponentParameterSet::RailGuide(_) => "Rail guide",
            ComponentParameterSet::LaunchLug(_) => "Launch lug",
        }
    }

    /// Run the component's validation rules. First failing rule wins.
    pub fn validate(&self) -> RocketResult<()> {
        match self {
            ComponentParameterSet::BodyTube(p) => p.validate(),
            ComponentParameterSet::InnerTube(p) => p.validate(),
            ComponentParameterSet::NoseCone(p) => p.validate(),
            ComponentParameterSet::Transition(p) => p.validate(),
            ComponentParameterSet::Bulkhead(p) => p.validate(),
            ComponentParameterSet::CenteringRing(p) => p.validate(),
            ComponentParameterSet::Fin(p) => p.validate(),
            ComponentParameterSet::FinCan(p) => p.validate(),
            ComponentParameterSet::RailButton(p) => p.validate(),
            ComponentParameterSet::RailGuide(p) => p.validate(),
            ComponentParameterSet::LaunchLug(p) => p.validate(),
        }
    }

    /// Assemble a recipe from validated parameters. Callers must have
    /// validated first; [`crate::validate_and_build`] does both.
    pub fn build(&self, ctx: &SiblingContext) -> RocketResult<ShapeRecipe> {
        match self {
            ComponentParameterSet::BodyTube(p) => p.build(ctx),
            ComponentParameterSet::InnerTube(p) => p.build(ctx),
            ComponentParameterSet::NoseCone(p) => p.build(ctx),
            ComponentParameterSet::Transition(p) => p.build(ctx),
            ComponentParameterSet::Bulkhead(p) => p.build(ctx),
            ComponentParameterSet::CenteringRing(p) => p.build(ctx),
            ComponentParameterSet::Fin(p) => p.build(ctx),
            ComponentParameterSet::FinCan(p) => p.build(ctx),
            ComponentParameterSet::RailButton(p) => p.build(ctx),
            ComponentParameterSet::RailGuide(p) => p.build(ctx),
            ComponentParameterSet::LaunchLug(p) => p.build(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diameter_spec_resolution() {
        let explicit = DiameterSpec::Explicit(24.8);
        assert_eq!(explicit.resolve(None, "Body tube").unwrap(), 24.8);

        let auto = DiameterSpec::Auto;
        assert_eq!(auto.resolve(Some(24.8), "Body tube").unwrap(), 24.8);

        let err = auto.resolve(None, "Body tube").unwrap_err();
        assert_eq!(err.to_string(), "Body tube not found");
    }

    #[test]
    fn test_parameter_set_serialization() {
        let params = ComponentParameterSet::BodyTube(BodyTubeParams {
            inner_diameter_mm: 24.1,
            outer_diameter_mm: 24.8,
            length_mm: 300.0,
        });
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("\"type\":\"BodyTube\""));
        let roundtrip: ComponentParameterSet = serde_json::from_str(&json).unwrap();
        assert_eq!(params, roundtrip);
    }

    #[test]
    fn test_shoulder_rules() {
        let shoulder = ShoulderParams {
            diameter_mm: DiameterSpec::Explicit(24.0),
            length_mm: 0.0,
            thickness_mm: 1.0,
        };
        let err = shoulder
            .validate("shoulder", Some(25.0), "can not exceed the nose cone diameter", false)
            .unwrap_err();
        assert_eq!(err.field(), Some("shoulder length"));

        let shoulder = ShoulderParams {
            diameter_mm: DiameterSpec::Explicit(30.0),
            length_mm: 10.0,
            thickness_mm: 1.0,
        };
        let err = shoulder
            .validate("shoulder", Some(25.0), "can not exceed the nose cone diameter", false)
            .unwrap_err();
        assert!(err.to_string().contains("can not exceed the nose cone diameter"));

        let shoulder = ShoulderParams {
            diameter_mm: DiameterSpec::Explicit(24.0),
            length_mm: 10.0,
            thickness_mm: 12.5,
        };
        let err = shoulder
            .validate("shoulder", None, "", true)
            .unwrap_err();
        assert!(err.to_string().contains("less than the shoulder radius"));
    }
}
