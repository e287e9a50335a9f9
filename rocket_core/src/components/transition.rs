//! # Transitions
//!
//! Axisymmetric reducers/expanders between two body diameters, over the
//! same profile families as nose cones. Either end may carry its own
//! shoulder; hollow and capped styles share the nose cone's wall rules,
//! applied against the smaller end.

use serde::{Deserialize, Serialize};

use crate::components::{DiameterSpec, ShoulderParams, SiblingContext};
use crate::errors::{RocketError, RocketResult};
use crate::profiles::{NoseShape, ProfileCurve, ProfileKind};
use crate::recipe::{CapStyle, EndPosition, RecipeStep, ShapeRecipe};

/// How the transition volume is realized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TransitionStyle {
    #[default]
    Solid,
    /// Solid with a cylindrical core bored through
    SolidCore,
    Hollow,
    /// Hollow with capped ends
    Capped,
}

impl TransitionStyle {
    fn is_hollow(&self) -> bool {
        matches!(self, TransitionStyle::Hollow | TransitionStyle::Capped)
    }
}

/// Parameters for a transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionParams {
    pub shape: NoseShape,
    pub style: TransitionStyle,
    pub length_mm: f64,
    pub fore_diameter_mm: DiameterSpec,
    pub aft_diameter_mm: DiameterSpec,
    /// Core bore diameter for the solid-core style
    pub core_diameter_mm: f64,
    /// Wall thickness for hollow and capped styles
    pub thickness_mm: f64,
    /// Clipped transitions are a segment of the larger virtual curve;
    /// non-clipped ones extend the profile at the center by the
    /// corresponding radius
    pub clipped: bool,
    pub resolution: u32,
    pub fore_cap_style: CapStyle,
    pub aft_cap_style: CapStyle,
    pub cap_bar_width_mm: Option<f64>,
    pub fore_shoulder: Option<ShoulderParams>,
    pub aft_shoulder: Option<ShoulderParams>,
}

impl TransitionParams {
    fn curve(&self) -> ProfileCurve {
        ProfileCurve::new(self.shape, self.resolution)
    }

    pub fn validate(&self) -> RocketResult<()> {
        if self.length_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "length",
                self.length_mm.to_string(),
                "must be greater than zero",
            ));
        }
        if let Some(fore) = self.fore_diameter_mm.explicit() {
            if fore <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "forward diameter",
                    fore.to_string(),
                    "must be greater than zero",
                ));
            }
        }
        if let Some(aft) = self.aft_diameter_mm.explicit() {
            if aft <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "aft diameter",
                    aft.to_string(),
                    "must be greater than zero",
                ));
            }
        }

        match (
            self.fore_diameter_mm.explicit(),
            self.aft_diameter_mm.explicit(),
        ) {
            (Some(fore), Some(aft)) => self.validate_against_diameters(fore, aft)?,
            _ => {
                self.curve().validate_coefficients(ProfileKind::Transition)?;
                if self.style == TransitionStyle::SolidCore && self.core_diameter_mm <= 0.0 {
                    return Err(RocketError::invalid_parameter(
                        "core diameter",
                        self.core_diameter_mm.to_string(),
                        "must be greater than zero",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Diameter-relative rules, re-run at build time for Auto diameters.
    fn validate_against_diameters(&self, fore_mm: f64, aft_mm: f64) -> RocketResult<()> {
        let larger = fore_mm.max(aft_mm);
        let smaller = fore_mm.min(aft_mm);
        self.curve().validate(ProfileKind::Transition, larger / 2.0)?;

        if self.style == TransitionStyle::SolidCore {
            if self.core_diameter_mm <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "core diameter",
                    self.core_diameter_mm.to_string(),
                    "must be greater than zero",
                ));
            }
            if self.core_diameter_mm >= smaller {
                return Err(RocketError::invalid_parameter(
                    "core diameter",
                    self.core_diameter_mm.to_string(),
                    "must be less than the front or back diameter",
                ));
            }
            for shoulder in [&self.fore_shoulder, &self.aft_shoulder].into_iter().flatten() {
                if let Some(diameter) = shoulder.diameter_mm.explicit() {
                    if self.core_diameter_mm >= diameter {
                        return Err(RocketError::invalid_parameter(
                            "core diameter",
                            self.core_diameter_mm.to_string(),
                            "must be less than the shoulder diameter",
                        ));
                    }
                }
            }
        }

        if self.style.is_hollow() {
            if self.thickness_mm <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "thickness",
                    self.thickness_mm.to_string(),
                    "must be greater than zero",
                ));
            }
            if self.thickness_mm >= smaller / 2.0 {
                return Err(RocketError::invalid_parameter(
                    "thickness",
                    self.thickness_mm.to_string(),
                    "must be less than the front or back radius",
                ));
            }
        }

        if let Some(shoulder) = &self.fore_shoulder {
            shoulder.validate(
                "forward shoulder",
                Some(fore_mm),
                "can not exceed the transition diameter at the shoulder",
                self.style.is_hollow(),
            )?;
        }
        if let Some(shoulder) = &self.aft_shoulder {
            shoulder.validate(
                "aft shoulder",
                Some(aft_mm),
                "can not exceed the transition diameter at the shoulder",
                self.style.is_hollow(),
            )?;
        }
        Ok(())
    }

    pub fn build(&self, ctx: &SiblingContext) -> RocketResult<ShapeRecipe> {
        let fore = self
            .fore_diameter_mm
            .resolve(ctx.fore_diameter_mm, "Body tube")?;
        let aft = self
            .aft_diameter_mm
            .resolve(ctx.aft_diameter_mm, "Body tube")?;
        self.validate_against_diameters(fore, aft)?;

        // Equal ends degenerate to a tube, not a transition
        if (fore - aft).abs() < f64::EPSILON {
            return Err(RocketError::invalid_shape("Transition"));
        }

        let points = self
            .curve()
            .sample_transition(fore / 2.0, aft / 2.0, self.length_mm, self.clipped)
            .ok_or_else(|| RocketError::invalid_shape("Transition"))?;

        let mut recipe = ShapeRecipe::new("Transition");
        recipe.push(RecipeStep::RevolveProfile {
            points,
            wall_thickness_mm: if self.style.is_hollow() {
                Some(self.thickness_mm)
            } else {
                None
            },
        });

        if self.style == TransitionStyle::Capped {
            self.push_cap(&mut recipe, EndPosition::Forward, self.fore_cap_style, fore)?;
            self.push_cap(&mut recipe, EndPosition::Aft, self.aft_cap_style, aft)?;
        }

        if self.style == TransitionStyle::SolidCore {
            recipe.push(RecipeStep::Bore {
                diameter_mm: self.core_diameter_mm,
                length_mm: self.length_mm,
            });
        }

        if let Some(shoulder) = &self.fore_shoulder {
            self.push_shoulder(&mut recipe, ctx, shoulder, EndPosition::Forward, fore)?;
        }
        if let Some(shoulder) = &self.aft_shoulder {
            self.push_shoulder(&mut recipe, ctx, shoulder, EndPosition::Aft, aft)?;
        }

        Ok(recipe)
    }

    fn push_cap(
        &self,
        recipe: &mut ShapeRecipe,
        position: EndPosition,
        style: CapStyle,
        end_diameter_mm: f64,
    ) -> RocketResult<()> {
        if matches!(style, CapStyle::Bar | CapStyle::CrossBar) {
            match self.cap_bar_width_mm {
                Some(w) if w > 0.0 && w < end_diameter_mm => {}
                _ => {
                    let side = match position {
                        EndPosition::Forward => "Forward cap style",
                        EndPosition::Aft => "Aft cap style",
                    };
                    return Err(RocketError::invalid_shape(side));
                }
            }
        }
        recipe.push(RecipeStep::Cap {
            position,
            style,
            bar_width_mm: self.cap_bar_width_mm,
        });
        Ok(())
    }

    fn push_shoulder(
        &self,
        recipe: &mut ShapeRecipe,
        ctx: &SiblingContext,
        shoulder: &ShoulderParams,
        position: EndPosition,
        end_diameter_mm: f64,
    ) -> RocketResult<()> {
        let sibling = match position {
            EndPosition::Forward => ctx.fore_diameter_mm,
            EndPosition::Aft => ctx.aft_diameter_mm,
        };
        let diameter = shoulder.diameter_mm.resolve(sibling, "Body tube")?;
        if diameter <= 0.0 || diameter > end_diameter_mm {
            return Err(RocketError::invalid_shape("Transition"));
        }
        recipe.push(RecipeStep::Shoulder {
            position,
            diameter_mm: diameter,
            length_mm: shoulder.length_mm,
            thickness_mm: if self.style.is_hollow() {
                Some(shoulder.thickness_mm)
            } else {
                None
            },
        });
        Ok(())
    }
}
