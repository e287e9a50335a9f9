//! # Centering Rings
//!
//! A bulkhead with a central bore that centers an inner tube (usually a
//! motor mount) inside the airframe, optionally notched for an engine
//! hook.

use serde::{Deserialize, Serialize};

use crate::components::{BulkheadParams, DiameterSpec, SiblingContext};
use crate::errors::{RocketError, RocketResult};
use crate::recipe::{RecipeStep, ShapeRecipe};

/// A rectangular engine-hook notch cut through the ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingNotch {
    pub width_mm: f64,
    pub height_mm: f64,
}

/// Parameters for a centering ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenteringRingParams {
    /// The outer disk, step and hole pattern
    pub bulkhead: BulkheadParams,

    /// Central bore matching the inner tube's outer diameter
    pub center_diameter_mm: DiameterSpec,

    /// Engine-hook notch
    pub notch: Option<RingNotch>,
}

impl CenteringRingParams {
    pub fn validate(&self) -> RocketResult<()> {
        self.bulkhead.validate()?;

        if let Some(center) = self.center_diameter_mm.explicit() {
            if center <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "center diameter",
                    center.to_string(),
                    "must be greater than zero",
                ));
            }
            if let Some(outer) = self.bulkhead.diameter_mm.explicit() {
                if center >= outer {
                    return Err(RocketError::invalid_parameter(
                        "center diameter",
                        center.to_string(),
                        "must be less than the outer diameter",
                    ));
                }
            }
            if let Some(step) = &self.bulkhead.step {
                if center >= step.diameter_mm {
                    return Err(RocketError::invalid_parameter(
                        "center diameter",
                        center.to_string(),
                        "must be less than the step diameter",
                    ));
                }
            }
            self.validate_against_center(center)?;
        } else if let Some(notch) = &self.notch {
            // Center-relative notch width check is deferred to build;
            // the absolute bounds still apply now
            if notch.width_mm <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "notch width",
                    notch.width_mm.to_string(),
                    "must be greater than zero",
                ));
            }
            if notch.height_mm <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "notch height",
                    notch.height_mm.to_string(),
                    "must be greater than zero",
                ));
            }
        }
        Ok(())
    }

    /// Checks that depend on the realized center diameter.
    fn validate_against_center(&self, center_mm: f64) -> RocketResult<()> {
        if let Some(notch) = &self.notch {
            if notch.width_mm <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "notch width",
                    notch.width_mm.to_string(),
                    "must be greater than zero",
                ));
            }
            if notch.width_mm > center_mm {
                return Err(RocketError::invalid_parameter(
                    "notch width",
                    notch.width_mm.to_string(),
                    "must be less than or equal to the center diameter",
                ));
            }
            if notch.height_mm <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "notch height",
                    notch.height_mm.to_string(),
                    "must be greater than zero",
                ));
            }
        }
        if let Some(holes) = &self.bulkhead.holes {
            if holes.center_radius_mm - holes.diameter_mm / 2.0 < center_mm / 2.0 {
                return Err(RocketError::invalid_parameter(
                    "hole diameter",
                    holes.diameter_mm.to_string(),
                    "hole extends inside the center diameter",
                ));
            }
        }
        Ok(())
    }

    pub fn build(&self, ctx: &SiblingContext) -> RocketResult<ShapeRecipe> {
        let outer = self
            .bulkhead
            .diameter_mm
            .resolve(ctx.parent_inner_diameter_mm, "Body tube")?;
        self.bulkhead.validate_against_diameter(outer)?;

        let center = self
            .center_diameter_mm
            .resolve(ctx.inner_tube_outer_diameter_mm, "Inner tube")?;
        if center <= 0.0 || center >= outer {
            return Err(RocketError::invalid_shape("Centering ring"));
        }
        self.validate_against_center(center)?;

        let mut recipe = ShapeRecipe::new("Centering ring");
        self.bulkhead.push_steps(&mut recipe, outer);
        recipe.push(RecipeStep::Bore {
            diameter_mm: center,
            length_mm: self.bulkhead.thickness_mm,
        });
        if let Some(notch) = &self.notch {
            recipe.push(RecipeStep::Notch {
                width_mm: notch.width_mm,
                height_mm: notch.height_mm,
                depth_mm: self.bulkhead.thickness_mm,
            });
        }
        Ok(recipe)
    }
}
