//! # Nose Cones
//!
//! Axisymmetric nose cones over every profile family, solid or hollow,
//! optionally capped and optionally carrying an aft shoulder that mates
//! with the body tube behind.
//!
//! ## Example
//!
//! ```rust
//! use rocket_core::components::{DiameterSpec, NoseConeParams, NoseStyle, SiblingContext};
//! use rocket_core::profiles::NoseShape;
//!
//! let nose = NoseConeParams {
//!     shape: NoseShape::Ogive,
//!     style: NoseStyle::Solid,
//!     length_mm: 120.0,
//!     diameter_mm: DiameterSpec::Explicit(24.8),
//!     thickness_mm: 0.0,
//!     resolution: 100,
//!     cap_bar_width_mm: None,
//!     shoulder: None,
//! };
//! nose.validate().unwrap();
//! let recipe = nose.build(&SiblingContext::empty()).unwrap();
//! assert_eq!(recipe.component, "Nose cone");
//! ```

use serde::{Deserialize, Serialize};

use crate::components::{DiameterSpec, ShoulderParams, SiblingContext};
use crate::errors::{RocketError, RocketResult};
use crate::profiles::{NoseShape, ProfileCurve, ProfileKind};
use crate::recipe::{CapStyle, EndPosition, RecipeStep, ShapeRecipe};

/// How the nose cone volume is realized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NoseStyle {
    /// Solid of revolution
    #[default]
    Solid,
    /// Hollow shell, open at the base
    Hollow,
    /// Hollow shell with a capped base; the cap may carry bars
    Capped(CapStyle),
}

impl NoseStyle {
    fn is_hollow(&self) -> bool {
        !matches!(self, NoseStyle::Solid)
    }
}

/// Parameters for a nose cone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoseConeParams {
    pub shape: NoseShape,
    pub style: NoseStyle,
    pub length_mm: f64,
    pub diameter_mm: DiameterSpec,
    /// Wall thickness for hollow and capped styles
    pub thickness_mm: f64,
    /// Axial sample count for the profile polyline
    pub resolution: u32,
    /// Bar width for barred cap styles
    pub cap_bar_width_mm: Option<f64>,
    /// Aft shoulder mating with the body tube
    pub shoulder: Option<ShoulderParams>,
}

impl NoseConeParams {
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
        if let Some(diameter) = self.diameter_mm.explicit() {
            if diameter <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "diameter",
                    diameter.to_string(),
                    "must be greater than zero",
                ));
            }
            self.validate_against_diameter(diameter)?;
        } else {
            // Coefficient domains never depend on the realized diameter;
            // check them now even in Auto mode
            self.curve().validate_coefficients(ProfileKind::NoseCone)?;
        }
        Ok(())
    }

    /// Diameter-relative rules, re-run at build time for Auto diameters.
    fn validate_against_diameter(&self, diameter_mm: f64) -> RocketResult<()> {
        let radius = diameter_mm / 2.0;
        self.curve().validate(ProfileKind::NoseCone, radius)?;

        if self.style.is_hollow() {
            if self.thickness_mm <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "thickness",
                    self.thickness_mm.to_string(),
                    "must be greater than zero",
                ));
            }
            if self.thickness_mm >= radius {
                return Err(RocketError::invalid_parameter(
                    "thickness",
                    self.thickness_mm.to_string(),
                    "must be less than the nose cone radius",
                ));
            }
        }
        if let Some(shoulder) = &self.shoulder {
            shoulder.validate(
                "shoulder",
                Some(diameter_mm),
                "can not exceed the nose cone diameter",
                self.style.is_hollow(),
            )?;
        }
        Ok(())
    }

    pub fn build(&self, ctx: &SiblingContext) -> RocketResult<ShapeRecipe> {
        let diameter = self.diameter_mm.resolve(ctx.aft_diameter_mm, "Body tube")?;
        self.validate_against_diameter(diameter)?;

        // A hollow wall as long as the cone itself leaves no interior
        if self.style.is_hollow() && self.thickness_mm >= self.length_mm {
            return Err(RocketError::invalid_shape("Nose cone"));
        }

        let points = self
            .curve()
            .sample(diameter / 2.0, self.length_mm)
            .ok_or_else(|| RocketError::invalid_shape("Nose cone"))?;

        let mut recipe = ShapeRecipe::new("Nose cone");
        recipe.push(RecipeStep::RevolveProfile {
            points,
            wall_thickness_mm: if self.style.is_hollow() {
                Some(self.thickness_mm)
            } else {
                None
            },
        });

        if let NoseStyle::Capped(cap_style) = self.style {
            let bar_width = self.cap_bar_width_mm;
            if matches!(cap_style, CapStyle::Bar | CapStyle::CrossBar) {
                // Bar validity depends on the realized solid, not the raw
                // parameters: an oversized or missing bar is a build error
                match bar_width {
                    Some(w) if w > 0.0 && w < diameter => {}
                    _ => return Err(RocketError::invalid_shape("Nose cone cap style")),
                }
            }
            recipe.push(RecipeStep::Cap {
                position: EndPosition::Aft,
                style: cap_style,
                bar_width_mm: bar_width,
            });
        }

        if let Some(shoulder) = &self.shoulder {
            let shoulder_diameter = shoulder
                .diameter_mm
                .resolve(ctx.aft_diameter_mm, "Body tube")?;
            if shoulder_diameter <= 0.0 || shoulder_diameter > diameter {
                return Err(RocketError::invalid_shape("Nose cone"));
            }
            recipe.push(RecipeStep::Shoulder {
                position: EndPosition::Aft,
                diameter_mm: shoulder_diameter,
                length_mm: shoulder.length_mm,
                thickness_mm: if self.style.is_hollow() {
                    Some(shoulder.thickness_mm)
                } else {
                    None
                },
            });
        }

        Ok(recipe)
    }
}
