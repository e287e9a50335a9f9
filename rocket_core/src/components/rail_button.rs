//! # Rail Buttons
//!
//! A rail button is a flanged standoff riding inside a launch-rail
//! channel: base flange, narrower middle post, top flange. The airfoil
//! style adds a teardrop fairing behind the button, which must be
//! longer than the button itself to fair at all.

use serde::{Deserialize, Serialize};

use crate::components::SiblingContext;
use crate::errors::{RocketError, RocketResult};
use crate::recipe::{RecipeStep, ShapeRecipe};
use crate::registry::PresetRegistry;

/// Base shape of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RailButtonStyle {
    #[default]
    Round,
    /// Round button with a trailing teardrop fairing
    Airfoil,
}

/// Countersink for the retaining fastener.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountersinkParams {
    pub angle_deg: f64,
    pub shank_diameter_mm: f64,
    pub head_diameter_mm: f64,
}

/// Parameters for a rail button.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RailButtonParams {
    pub style: RailButtonStyle,
    pub outer_diameter_mm: f64,
    /// Post diameter between the flanges
    pub inner_diameter_mm: f64,
    pub total_thickness_mm: f64,
    pub top_thickness_mm: f64,
    pub base_thickness_mm: f64,
    /// Overall length of the airfoil fairing
    pub length_mm: f64,
    /// Buttons are usually mounted in axial pairs
    pub instance_count: u32,
    pub instance_separation_mm: f64,
    pub countersink: Option<CountersinkParams>,
    pub fillet_radius_mm: Option<f64>,
}

impl RailButtonParams {
    /// A round button sized from a rail-profile preset; fairing,
    /// fastener and instancing keep their defaults.
    pub fn from_preset(registry: &PresetRegistry, name: &str) -> RocketResult<Self> {
        let preset = registry
            .rail_button(name)
            .ok_or_else(|| RocketError::preset_not_found(name))?;
        Ok(RailButtonParams {
            style: RailButtonStyle::Round,
            outer_diameter_mm: preset.outer_diameter_mm,
            inner_diameter_mm: preset.inner_diameter_mm,
            total_thickness_mm: preset.total_thickness_mm,
            top_thickness_mm: preset.top_thickness_mm,
            base_thickness_mm: preset.base_thickness_mm,
            length_mm: 0.0,
            instance_count: 1,
            instance_separation_mm: 0.0,
            countersink: None,
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
        if self.total_thickness_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "thickness",
                self.total_thickness_mm.to_string(),
                "must be greater than zero",
            ));
        }
        if self.top_thickness_mm + self.base_thickness_mm > self.total_thickness_mm {
            return Err(RocketError::invalid_parameter(
                "thickness",
                (self.top_thickness_mm + self.base_thickness_mm).to_string(),
                "top and base thickness can not exceed the total thickness",
            ));
        }
        if self.style == RailButtonStyle::Airfoil {
            if self.length_mm <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "length",
                    self.length_mm.to_string(),
                    "must be greater than zero for airfoil rail buttons",
                ));
            }
            if self.length_mm <= self.outer_diameter_mm {
                return Err(RocketError::invalid_parameter(
                    "length",
                    self.length_mm.to_string(),
                    "must be greater than the outer diameter for airfoil rail buttons",
                ));
            }
        }
        if self.instance_count < 1 {
            return Err(RocketError::invalid_parameter(
                "instance count",
                self.instance_count.to_string(),
                "must be at least one",
            ));
        }
        if self.instance_count > 1 && self.instance_separation_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "instance separation",
                self.instance_separation_mm.to_string(),
                "must be greater than zero",
            ));
        }
        if let Some(countersink) = &self.countersink {
            if countersink.angle_deg <= 0.0 || countersink.angle_deg >= 180.0 {
                return Err(RocketError::invalid_parameter(
                    "countersink angle",
                    countersink.angle_deg.to_string(),
                    "must be greater than 0 and less than 180 degrees",
                ));
            }
            if countersink.shank_diameter_mm <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "fastener shank diameter",
                    countersink.shank_diameter_mm.to_string(),
                    "must be greater than zero",
                ));
            }
            if countersink.head_diameter_mm <= countersink.shank_diameter_mm {
                return Err(RocketError::invalid_parameter(
                    "fastener head diameter",
                    countersink.head_diameter_mm.to_string(),
                    "must be greater than the shank diameter",
                ));
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
        let mut recipe = ShapeRecipe::new("Rail button");
        let middle = self.total_thickness_mm - self.top_thickness_mm - self.base_thickness_mm;

        recipe.push(RecipeStep::Cylinder {
            outer_diameter_mm: self.outer_diameter_mm,
            inner_diameter_mm: None,
            length_mm: self.base_thickness_mm,
        });
        // Flanges that meet leave no post between them
        if middle > 0.0 {
            recipe.push(RecipeStep::Cylinder {
                outer_diameter_mm: self.inner_diameter_mm,
                inner_diameter_mm: None,
                length_mm: middle,
            });
        }
        recipe.push(RecipeStep::Cylinder {
            outer_diameter_mm: self.outer_diameter_mm,
            inner_diameter_mm: None,
            length_mm: self.top_thickness_mm,
        });

        if self.style == RailButtonStyle::Airfoil {
            let radius = self.outer_diameter_mm / 2.0;
            recipe.push(RecipeStep::ExtrudeOutline {
                points: vec![
                    [0.0, radius],
                    [self.length_mm - radius, 0.0],
                    [0.0, -radius],
                ],
                thickness_mm: self.total_thickness_mm,
            });
        }

        if let Some(countersink) = &self.countersink {
            recipe.push(RecipeStep::Countersink {
                angle_deg: countersink.angle_deg,
                shank_diameter_mm: countersink.shank_diameter_mm,
                head_diameter_mm: countersink.head_diameter_mm,
            });
        }
        if let Some(radius) = self.fillet_radius_mm {
            recipe.push(RecipeStep::Fillet { radius_mm: radius });
        }
        if self.instance_count > 1 {
            recipe.push(RecipeStep::LinearPattern {
                count: self.instance_count,
                separation_mm: self.instance_separation_mm,
            });
        }
        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    fn test_button() -> RailButtonParams {
        RailButtonParams {
            style: RailButtonStyle::Round,
            outer_diameter_mm: 9.62,
            inner_diameter_mm: 6.2,
            total_thickness_mm: 7.6,
            top_thickness_mm: 2.4,
            base_thickness_mm: 3.2,
            length_mm: 0.0,
            instance_count: 1,
            instance_separation_mm: 0.0,
            countersink: None,
            fillet_radius_mm: None,
        }
    }

    #[test]
    fn test_valid_button() {
        assert!(test_button().validate().is_ok());
    }

    #[test]
    fn test_from_preset() {
        let button = RailButtonParams::from_preset(registry::presets(), "1010").unwrap();
        assert_eq!(button.outer_diameter_mm, 9.62);
        assert!(button.validate().is_ok());

        let err = RailButtonParams::from_preset(registry::presets(), "2020").unwrap_err();
        assert_eq!(err.to_string(), "Preset not found: 2020");
    }

    #[test]
    fn test_meeting_flanges_have_no_middle_post() {
        let mut button = test_button();
        button.total_thickness_mm = 7.5;
        button.top_thickness_mm = 4.0;
        button.base_thickness_mm = 3.5;
        assert!(button.validate().is_ok());
        let recipe = button.build(&SiblingContext::empty()).unwrap();
        let cylinders: Vec<_> = recipe
            .steps
            .iter()
            .filter(|s| matches!(s, RecipeStep::Cylinder { .. }))
            .collect();
        assert_eq!(cylinders.len(), 2);
    }

    #[test]
    fn test_outer_not_greater_than_inner() {
        let mut button = test_button();
        button.outer_diameter_mm = 6.2;
        let err = button.validate().unwrap_err();
        assert_eq!(err.field(), Some("outer diameter"));
        assert!(err.to_string().contains("greater than the inner diameter"));
    }

    #[test]
    fn test_flanges_exceed_total_thickness() {
        let mut button = test_button();
        button.top_thickness_mm = 4.0;
        button.base_thickness_mm = 4.0;
        let err = button.validate().unwrap_err();
        assert_eq!(err.field(), Some("thickness"));
        assert!(err
            .to_string()
            .contains("top and base thickness can not exceed the total thickness"));
    }

    #[test]
    fn test_airfoil_length_not_greater_than_outer() {
        // A 6 mm fairing cannot wrap an 8 mm button
        let mut button = test_button();
        button.style = RailButtonStyle::Airfoil;
        button.outer_diameter_mm = 8.0;
        button.length_mm = 6.0;
        let err = button.validate().unwrap_err();
        assert_eq!(err.field(), Some("length"));
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'length': 6 - must be greater than the outer diameter for airfoil rail buttons"
        );
    }

    #[test]
    fn test_airfoil_zero_length() {
        let mut button = test_button();
        button.style = RailButtonStyle::Airfoil;
        button.length_mm = 0.0;
        let err = button.validate().unwrap_err();
        assert!(err
            .to_string()
            .contains("greater than zero for airfoil rail buttons"));
    }

    #[test]
    fn test_round_ignores_length() {
        let mut button = test_button();
        button.length_mm = 0.0;
        assert!(button.validate().is_ok());
    }

    #[test]
    fn test_countersink_head_not_greater_than_shank() {
        let mut button = test_button();
        button.countersink = Some(CountersinkParams {
            angle_deg: 82.0,
            shank_diameter_mm: 4.0,
            head_diameter_mm: 4.0,
        });
        let err = button.validate().unwrap_err();
        assert_eq!(err.field(), Some("fastener head diameter"));
    }

    #[test]
    fn test_build_stack() {
        let button = test_button();
        let recipe = button.build(&SiblingContext::empty()).unwrap();
        let cylinders: Vec<_> = recipe
            .steps
            .iter()
            .filter(|s| matches!(s, RecipeStep::Cylinder { .. }))
            .collect();
        assert_eq!(cylinders.len(), 3);
        // Middle post length is the remainder of the stack
        assert!(recipe.steps.iter().any(|s| matches!(
            s,
            RecipeStep::Cylinder { outer_diameter_mm, length_mm, .. }
                if *outer_diameter_mm == 6.2 && (*length_mm - 2.0).abs() < 1e-9
        )));
    }

    #[test]
    fn test_airfoil_fairing_in_recipe() {
        let mut button = test_button();
        button.style = RailButtonStyle::Airfoil;
        button.length_mm = 15.0;
        let recipe = button.build(&SiblingContext::empty()).unwrap();
        assert!(recipe
            .steps
            .iter()
            .any(|s| matches!(s, RecipeStep::ExtrudeOutline { .. })));
    }

    #[test]
    fn test_button_pair() {
        let mut button = test_button();
        button.instance_count = 2;
        button.instance_separation_mm = 0.0;
        let err = button.validate().unwrap_err();
        assert_eq!(err.field(), Some("instance separation"));

        button.instance_separation_mm = 250.0;
        assert!(button.validate().is_ok());
        let recipe = button.build(&SiblingContext::empty()).unwrap();
        assert!(recipe.steps.iter().any(|s| matches!(
            s,
            RecipeStep::LinearPattern { count: 2, separation_mm } if *separation_mm == 250.0
        )));
    }

    #[test]
    fn test_countersink_and_fillet_in_recipe() {
        let mut button = test_button();
        button.countersink = Some(CountersinkParams {
            angle_deg: 82.0,
            shank_diameter_mm: 4.0,
            head_diameter_mm: 7.0,
        });
        button.fillet_radius_mm = Some(0.5);
        let recipe = button.build(&SiblingContext::empty()).unwrap();
        assert!(recipe
            .steps
            .iter()
            .any(|s| matches!(s, RecipeStep::Countersink { angle_deg, .. } if *angle_deg == 82.0)));
        assert!(recipe
            .steps
            .iter()
            .any(|s| matches!(s, RecipeStep::Fillet { radius_mm } if *radius_mm == 0.5)));
    }
}
