//! # Bulkheads
//!
//! A solid disk closing a tube section. Bulkheads may carry a step that
//! fits a smaller diameter (e.g. seating inside a coupler) and a radial
//! pattern of holes for attaching eyebolts or retainers.

use serde::{Deserialize, Serialize};

use crate::components::{DiameterSpec, SiblingContext};
use crate::errors::{RocketError, RocketResult};
use crate::recipe::{RecipeStep, ShapeRecipe};

/// A reduced-diameter step on one face of the bulkhead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulkheadStep {
    pub diameter_mm: f64,
    pub thickness_mm: f64,
}

/// A circle of equally spaced attachment holes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulkheadHoles {
    pub diameter_mm: f64,
    /// Distance from the bulkhead center to each hole center
    pub center_radius_mm: f64,
    pub count: u32,
}

/// Parameters for a bulkhead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulkheadParams {
    pub diameter_mm: DiameterSpec,
    pub thickness_mm: f64,
    pub step: Option<BulkheadStep>,
    pub holes: Option<BulkheadHoles>,
}

impl BulkheadParams {
    pub fn validate(&self) -> RocketResult<()> {
        if let Some(diameter) = self.diameter_mm.explicit() {
            if diameter <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "outer diameter",
                    diameter.to_string(),
                    "must be greater than zero",
                ));
            }
        }
        if self.thickness_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "thickness",
                self.thickness_mm.to_string(),
                "must be greater than zero",
            ));
        }
        if let Some(step) = &self.step {
            if step.diameter_mm <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "step diameter",
                    step.diameter_mm.to_string(),
                    "must be greater than zero",
                ));
            }
            if step.thickness_mm <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "step thickness",
                    step.thickness_mm.to_string(),
                    "must be greater than zero",
                ));
            }
        }
        if let Some(holes) = &self.holes {
            if holes.diameter_mm <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "hole diameter",
                    holes.diameter_mm.to_string(),
                    "must be greater than zero",
                ));
            }
            if holes.count < 1 {
                return Err(RocketError::invalid_parameter(
                    "hole count",
                    holes.count.to_string(),
                    "must be at least one",
                ));
            }
        }
        // Rules relative to the outer diameter, when it is known now
        if let Some(diameter) = self.diameter_mm.explicit() {
            self.validate_against_diameter(diameter)?;
        }
        Ok(())
    }

    /// Checks that depend on the realized outer diameter. Run during
    /// validation for explicit diameters and again at build time once an
    /// Auto diameter has been resolved.
    pub(crate) fn validate_against_diameter(&self, diameter_mm: f64) -> RocketResult<()> {
        if let Some(step) = &self.step {
            if step.diameter_mm >= diameter_mm {
                return Err(RocketError::invalid_parameter(
                    "step diameter",
                    step.diameter_mm.to_string(),
                    "must be less than the outer diameter",
                ));
            }
        }
        if let Some(holes) = &self.holes {
            if holes.center_radius_mm + holes.diameter_mm / 2.0 > diameter_mm / 2.0 {
                return Err(RocketError::invalid_parameter(
                    "hole diameter",
                    holes.diameter_mm.to_string(),
                    "hole extends outside the outer diameter",
                ));
            }
            if let Some(step) = &self.step {
                if holes.center_radius_mm + holes.diameter_mm / 2.0 > step.diameter_mm / 2.0 {
                    return Err(RocketError::invalid_parameter(
                        "hole diameter",
                        holes.diameter_mm.to_string(),
                        "hole extends outside the step diameter",
                    ));
                }
            }
        }
        Ok(())
    }

    pub fn build(&self, ctx: &SiblingContext) -> RocketResult<ShapeRecipe> {
        let diameter = self
            .diameter_mm
            .resolve(ctx.parent_inner_diameter_mm, "Body tube")?;
        self.validate_against_diameter(diameter)?;

        let mut recipe = ShapeRecipe::new("Bulkhead");
        self.push_steps(&mut recipe, diameter);
        Ok(recipe)
    }

    /// Shared with the centering ring, which reuses the disk/step/hole
    /// assembly before boring its center.
    pub(crate) fn push_steps(&self, recipe: &mut ShapeRecipe, diameter_mm: f64) {
        recipe.push(RecipeStep::Cylinder {
            outer_diameter_mm: diameter_mm,
            inner_diameter_mm: None,
            length_mm: self.thickness_mm,
        });
        if let Some(step) = &self.step {
            recipe.push(RecipeStep::Step {
                diameter_mm: step.diameter_mm,
                thickness_mm: step.thickness_mm,
            });
        }
        if let Some(holes) = &self.holes {
            recipe.push(RecipeStep::HolePattern {
                hole_diameter_mm: holes.diameter_mm,
                center_radius_mm: holes.center_radius_mm,
                count: holes.count,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_bulkhead() -> BulkheadParams {
        BulkheadParams {
            diameter_mm: DiameterSpec::Explicit(30.0),
            thickness_mm: 3.0,
            step: Some(BulkheadStep {
                diameter_mm: 28.0,
                thickness_mm: 2.0,
            }),
            holes: Some(BulkheadHoles {
                diameter_mm: 3.0,
                center_radius_mm: 10.0,
                count: 4,
            }),
        }
    }

    #[test]
    fn test_valid_bulkhead() {
        assert!(test_bulkhead().validate().is_ok());
    }

    #[test]
    fn test_step_exceeds_outer() {
        let mut bulkhead = test_bulkhead();
        bulkhead.step = Some(BulkheadStep {
            diameter_mm: 30.0,
            thickness_mm: 2.0,
        });
        let err = bulkhead.validate().unwrap_err();
        assert_eq!(err.field(), Some("step diameter"));
        assert!(err.to_string().contains("less than the outer diameter"));
    }

    #[test]
    fn test_hole_outside_outer_diameter() {
        let mut bulkhead = test_bulkhead();
        bulkhead.step = None;
        bulkhead.holes = Some(BulkheadHoles {
            diameter_mm: 4.0,
            center_radius_mm: 14.0,
            count: 2,
        });
        let err = bulkhead.validate().unwrap_err();
        assert!(err.to_string().contains("outside the outer diameter"));
    }

    #[test]
    fn test_hole_outside_step_diameter() {
        let mut bulkhead = test_bulkhead();
        bulkhead.holes = Some(BulkheadHoles {
            diameter_mm: 3.0,
            center_radius_mm: 13.0,
            count: 2,
        });
        let err = bulkhead.validate().unwrap_err();
        assert!(err.to_string().contains("outside the step diameter"));
    }

    #[test]
    fn test_hole_count_zero() {
        let mut bulkhead = test_bulkhead();
        bulkhead.holes = Some(BulkheadHoles {
            diameter_mm: 3.0,
            center_radius_mm: 10.0,
            count: 0,
        });
        let err = bulkhead.validate().unwrap_err();
        assert_eq!(err.field(), Some("hole count"));
    }

    #[test]
    fn test_auto_diameter_resolution() {
        let mut bulkhead = test_bulkhead();
        bulkhead.diameter_mm = DiameterSpec::Auto;
        // Auto defers diameter-relative checks to build
        assert!(bulkhead.validate().is_ok());

        let err = bulkhead.build(&SiblingContext::empty()).unwrap_err();
        assert_eq!(err.to_string(), "Body tube not found");

        let ctx = SiblingContext {
            parent_inner_diameter_mm: Some(30.0),
            ..SiblingContext::empty()
        };
        let recipe = bulkhead.build(&ctx).unwrap();
        assert_eq!(recipe.steps.len(), 3);
    }

    #[test]
    fn test_auto_diameter_too_small_at_build() {
        let mut bulkhead = test_bulkhead();
        bulkhead.diameter_mm = DiameterSpec::Auto;
        let ctx = SiblingContext {
            parent_inner_diameter_mm: Some(20.0),
            ..SiblingContext::empty()
        };
        // The resolved diameter is smaller than the step
        let err = bulkhead.build(&ctx).unwrap_err();
        assert_eq!(err.field(), Some("step diameter"));
    }
}
