//! # Body Tubes
//!
//! The simplest airframe component: a hollow cylinder. Inner tubes
//! (motor mounts, stage couplers) share the same geometry with an
//! optional motor-mount role and aft overhang.
//!
//! ## Example
//!
//! ```rust
//! use rocket_core::components::{BodyTubeParams, SiblingContext};
//!
//! let tube = BodyTubeParams {
//!     inner_diameter_mm: 24.1,
//!     outer_diameter_mm: 24.8,
//!     length_mm: 300.0,
//! };
//! let recipe = tube.validate().and_then(|_| tube.build(&SiblingContext::empty())).unwrap();
//! assert_eq!(recipe.component, "Body tube");
//! ```

use serde::{Deserialize, Serialize};

use crate::components::SiblingContext;
use crate::errors::{RocketError, RocketResult};
use crate::recipe::{RecipeStep, ShapeRecipe};

/// Parameters for a plain body tube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyTubeParams {
    pub inner_diameter_mm: f64,
    pub outer_diameter_mm: f64,
    pub length_mm: f64,
}

impl BodyTubeParams {
    /// Validate tube dimensions
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
        Ok(())
    }

    /// Assemble the tube recipe
    pub fn build(&self, _ctx: &SiblingContext) -> RocketResult<ShapeRecipe> {
        let mut recipe = ShapeRecipe::new("Body tube");
        recipe.push(RecipeStep::Cylinder {
            outer_diameter_mm: self.outer_diameter_mm,
            inner_diameter_mm: Some(self.inner_diameter_mm),
            length_mm: self.length_mm,
        });
        Ok(recipe)
    }
}

/// Parameters for an inner tube (motor mount, coupler tube).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InnerTubeParams {
    pub tube: BodyTubeParams,

    /// This tube carries a motor
    pub motor_mount: bool,

    /// Aft overhang beyond the parent tube when motor mounted
    pub overhang_mm: f64,
}

impl InnerTubeParams {
    pub fn validate(&self) -> RocketResult<()> {
        self.tube.validate()?;
        if self.motor_mount && self.overhang_mm < 0.0 {
            return Err(RocketError::invalid_parameter(
                "overhang",
                self.overhang_mm.to_string(),
                "can not be negative",
            ));
        }
        Ok(())
    }

    pub fn build(&self, _ctx: &SiblingContext) -> RocketResult<ShapeRecipe> {
        let mut recipe = ShapeRecipe::new("Inner tube");
        let length = if self.motor_mount {
            self.tube.length_mm + self.overhang_mm
        } else {
            self.tube.length_mm
        };
        recipe.push(RecipeStep::Cylinder {
            outer_diameter_mm: self.tube.outer_diameter_mm,
            inner_diameter_mm: Some(self.tube.inner_diameter_mm),
            length_mm: length,
        });
        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_tube() -> BodyTubeParams {
        BodyTubeParams {
            inner_diameter_mm: 24.1,
            outer_diameter_mm: 24.8,
            length_mm: 300.0,
        }
    }

    #[test]
    fn test_valid_tube() {
        assert!(test_tube().validate().is_ok());
    }

    #[test]
    fn test_zero_inner_diameter() {
        let tube = BodyTubeParams {
            inner_diameter_mm: 0.0,
            outer_diameter_mm: 10.0,
            length_mm: 50.0,
        };
        let err = tube.validate().unwrap_err();
        assert_eq!(err.field(), Some("inner diameter"));
        assert!(err.to_string().contains("must be greater than zero"));
    }

    #[test]
    fn test_outer_not_greater_than_inner() {
        let mut tube = test_tube();
        tube.outer_diameter_mm = tube.inner_diameter_mm;
        let err = tube.validate().unwrap_err();
        assert_eq!(err.field(), Some("outer diameter"));
    }

    #[test]
    fn test_zero_length() {
        let mut tube = test_tube();
        tube.length_mm = 0.0;
        let err = tube.validate().unwrap_err();
        assert_eq!(err.field(), Some("length"));
    }

    #[test]
    fn test_build_deterministic() {
        let tube = test_tube();
        let ctx = SiblingContext::empty();
        let a = tube.build(&ctx).unwrap();
        let b = tube.build(&ctx).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_motor_mount_overhang() {
        let inner = InnerTubeParams {
            tube: test_tube(),
            motor_mount: true,
            overhang_mm: 3.0,
        };
        let recipe = inner.build(&SiblingContext::empty()).unwrap();
        match &recipe.steps[0] {
            RecipeStep::Cylinder { length_mm, .. } => assert_eq!(*length_mm, 303.0),
            other => panic!("unexpected step {:?}", other),
        }
    }
}
