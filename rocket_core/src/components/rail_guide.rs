//! # Rail Guides
//!
//! A rail guide is an I-section standoff sliding in a launch-rail
//! channel: a base flange against the airframe, a narrower middle web,
//! and a top flange. The base is either angled to sit across the tube
//! (V-angle) or conformal to a given tube diameter.

use serde::{Deserialize, Serialize};

use crate::components::{DiameterSpec, SiblingContext};
use crate::errors::{RocketError, RocketResult};
use crate::recipe::{EndPosition, RecipeStep, ShapeRecipe};

/// How the guide's base meets the airframe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "base")]
pub enum RailGuideBase {
    /// Two flats meeting at the given included angle
    VAngle { angle_deg: f64 },
    /// Curved to match the mounting tube
    Conformal { diameter_mm: DiameterSpec },
}

/// A centered rail channel cut into the top flange.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideNotch {
    pub width_mm: f64,
    pub depth_mm: f64,
}

/// Parameters for a rail guide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RailGuideParams {
    pub base: RailGuideBase,
    pub top_width_mm: f64,
    pub middle_width_mm: f64,
    pub base_width_mm: f64,
    pub total_thickness_mm: f64,
    pub top_thickness_mm: f64,
    pub base_thickness_mm: f64,
    pub length_mm: f64,
    pub fore_sweep_deg: Option<f64>,
    pub aft_sweep_deg: Option<f64>,
    pub notch: Option<GuideNotch>,
}

impl RailGuideParams {
    pub fn validate(&self) -> RocketResult<()> {
        if self.middle_width_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "middle width",
                self.middle_width_mm.to_string(),
                "must be greater than zero",
            ));
        }
        for (field, width) in [
            ("top width", self.top_width_mm),
            ("base width", self.base_width_mm),
        ] {
            if width <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    field,
                    width.to_string(),
                    "must be greater than zero",
                ));
            }
            if width <= self.middle_width_mm {
                return Err(RocketError::invalid_parameter(
                    field,
                    width.to_string(),
                    "must be greater than the middle width",
                ));
            }
        }
        if self.total_thickness_mm <= self.top_thickness_mm + self.base_thickness_mm {
            return Err(RocketError::invalid_parameter(
                "thickness",
                self.total_thickness_mm.to_string(),
                "must be greater than the sum of the top and base thickness",
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
        match &self.base {
            RailGuideBase::VAngle { angle_deg } => {
                if *angle_deg <= 0.0 || *angle_deg >= 180.0 {
                    return Err(RocketError::invalid_parameter(
                        "v angle",
                        angle_deg.to_string(),
                        "must be greater than 0 and less than 180 degrees",
                    ));
                }
            }
            RailGuideBase::Conformal { diameter_mm } => {
                if let Some(diameter) = diameter_mm.explicit() {
                    if diameter <= 0.0 {
                        return Err(RocketError::invalid_parameter(
                            "base diameter",
                            diameter.to_string(),
                            "must be greater than zero",
                        ));
                    }
                }
            }
        }
        if let Some(notch) = &self.notch {
            if notch.width_mm <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "notch width",
                    notch.width_mm.to_string(),
                    "must be greater than zero",
                ));
            }
            if notch.width_mm > self.middle_width_mm {
                return Err(RocketError::invalid_parameter(
                    "notch width",
                    notch.width_mm.to_string(),
                    "must be less than or equal to the middle width",
                ));
            }
            if notch.depth_mm <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "notch depth",
                    notch.depth_mm.to_string(),
                    "must be greater than zero",
                ));
            }
            if notch.depth_mm > self.total_thickness_mm {
                return Err(RocketError::invalid_parameter(
                    "notch depth",
                    notch.depth_mm.to_string(),
                    "must be less than or equal to the total thickness",
                ));
            }
        }
        Ok(())
    }

    pub fn build(&self, ctx: &SiblingContext) -> RocketResult<ShapeRecipe> {
        let mut recipe = ShapeRecipe::new("Rail guide");

        match &self.base {
            RailGuideBase::VAngle { angle_deg } => {
                recipe.push(RecipeStep::GuideBase {
                    v_angle_deg: Some(*angle_deg),
                    conformal_diameter_mm: None,
                });
            }
            RailGuideBase::Conformal { diameter_mm } => {
                let diameter = diameter_mm.resolve(ctx.parent_outer_diameter_mm, "Body tube")?;
                if diameter <= 0.0 {
                    return Err(RocketError::invalid_shape("Rail guide"));
                }
                recipe.push(RecipeStep::GuideBase {
                    v_angle_deg: None,
                    conformal_diameter_mm: Some(diameter),
                });
            }
        }

        recipe.push(RecipeStep::ExtrudeOutline {
            points: self.cross_section(),
            thickness_mm: self.length_mm,
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
        if let Some(notch) = &self.notch {
            recipe.push(RecipeStep::Notch {
                width_mm: notch.width_mm,
                height_mm: notch.depth_mm,
                depth_mm: self.length_mm,
            });
        }
        Ok(recipe)
    }

    /// The I-section outline, widths on x, thicknesses on y.
    fn cross_section(&self) -> Vec<[f64; 2]> {
        let bw = self.base_width_mm / 2.0;
        let mw = self.middle_width_mm / 2.0;
        let tw = self.top_width_mm / 2.0;
        let bt = self.base_thickness_mm;
        let mt = self.total_thickness_mm - self.top_thickness_mm;
        let tt = self.total_thickness_mm;
        vec![
            [-bw, 0.0],
            [bw, 0.0],
            [bw, bt],
            [mw, bt],
            [mw, mt],
            [tw, mt],
            [tw, tt],
            [-tw, tt],
            [-tw, mt],
            [-mw, mt],
            [-mw, bt],
            [-bw, bt],
        ]
    }
}
