//! # Launch Lugs
//!
//! A plain tube glued alongside the airframe that rides a launch rod.
//! Standard rod sizes come from the preset registry; the ends may be
//! swept and the root filleted.

use serde::{Deserialize, Serialize};

use crate::components::SiblingContext;
use crate::errors::{RocketError, RocketResult};
use crate::recipe::{EndPosition, RecipeStep, ShapeRecipe};
use crate::registry::PresetRegistry;

/// Parameters for a launch lug.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchLugParams {
    pub inner_diameter_mm: f64,
    pub outer_diameter_mm: f64,
    pub length_mm: f64,
    pub fore_sweep_deg: Option<f64>,
    pub aft_sweep_deg: Option<f64>,
    pub fillet_radius_mm: Option<f64>,
}

impl LaunchLugParams {
    /// Dimensions for a named launch rod size, e.g. `1/8"`.
    pub fn from_preset(registry: &PresetRegistry, name: &str) -> RocketResult<Self> {
        let preset = registry
            .launch_lug(name)
            .ok_or_else(|| RocketError::preset_not_found(name))?;
        Ok(LaunchLugParams {
            inner_diameter_mm: preset.inner_diameter_mm,
            outer_diameter_mm: preset.outer_diameter_mm,
            length_mm: preset.length_mm,
            fore_sweep_deg: None,
            aft_sweep_deg: None,
            fillet_radius_mm: None,
        })
    }

    pub fn validate(&self) -> RocketResult<()> {
        if self.inner_diameter_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "inner diameter",
                self.inner_diameter_mm.to_string(),
                "must be greater than zero",
            ));
        }
        if self.outer_diameter_mm <= self.inner_diameter_mm {
            return Err(RocketError::invalid_parameter(
                "outer diameter",
                self.outer_diameter_mm.to_string(),
                "must be greater than the inner diameter",
            ));
        }
        if self.length_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "length",
                self.length_mm.to_string(),
                "must be greater than zero",
            ));
        }
        for (field, sweep) in [
            ("forward sweep", self.fore_sweep_deg),
            ("aft sweep", self.aft_sweep_deg),
        ] {
            if let Some(angle) = sweep {
                if angle <= 0.0 || angle >= 90.0 {
                    return Err(RocketError::invalid_parameter(
                        field,
                        angle.to_string(),
                        "must be greater than 0 and less than 90 degrees",
                    ));
                }
            }
        }
        if let Some(radius) = self.fillet_radius_mm {
            if radius <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "fillet radius",
                    radius.to_string(),
                    "must be greater than zero",
                ));
            }
        }
        Ok(())
    }

    pub fn build(&self, _ctx: &SiblingContext) -> RocketResult<ShapeRecipe> {
        let mut recipe = ShapeRecipe::new("Launch lug");
        recipe.push(RecipeStep::Cylinder {
            outer_diameter_mm: self.outer_diameter_mm,
            inner_diameter_mm: Some(self.inner_diameter_mm),
            length_mm: self.length_mm,
        });
        if let Some(angle) = self.fore_sweep_deg {
            recipe.push(RecipeStep::SweepEnd {
                position: EndPosition::Forward,
                angle_deg: angle,
            });
        }
        if let Some(angle) = self.aft_sweep_deg {
            recipe.push(RecipeStep::SweepEnd {
                position: EndPosition::Aft,
                angle_deg: angle,
            });
        }
        if let Some(radius) = self.fillet_radius_mm {
            recipe.push(RecipeStep::Fillet { radius_mm: radius });
        }
        Ok(recipe)
    }
}
