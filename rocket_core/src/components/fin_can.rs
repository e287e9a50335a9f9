//! # Fin Cans
//!
//! A cylindrical shroud uniting a radial fin set, with independently
//! styled leading and trailing edges, an optional launch lug and an
//! optional coupler. The can's inner diameter may be derived from the
//! tube it slides over.

use serde::{Deserialize, Serialize};

use crate::components::fin::FinParams;
use crate::components::{DiameterSpec, SiblingContext};
use crate::errors::{RocketError, RocketResult};
use crate::recipe::{EdgeStyle, EndPosition, RecipeStep, ShapeRecipe};
use crate::registry::{self, PresetRegistry};

/// One end of the can: edge style plus the axial length of the profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeParams {
    pub style: EdgeStyle,
    /// Axial extent of the taper/round; ignored for square edges
    pub length_mm: f64,
}

impl EdgeParams {
    pub fn square() -> Self {
        EdgeParams {
            style: EdgeStyle::Square,
            length_mm: 0.0,
        }
    }

    fn profiled_length(&self) -> f64 {
        match self.style {
            EdgeStyle::Square => 0.0,
            EdgeStyle::Taper | EdgeStyle::Round => self.length_mm,
        }
    }
}

/// A launch lug moulded onto the can. Length and wall thickness default
/// to the can's own when not given; an Auto bore takes the diameter of
/// the named launch-rod preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinCanLug {
    pub inner_diameter_mm: DiameterSpec,
    /// Rod-size preset the Auto bore resolves from
    pub rod_size: Option<String>,
    /// None spans the full can length
    pub length_mm: Option<f64>,
    /// None uses the can's wall thickness
    pub thickness_mm: Option<f64>,
    pub fillet_radius_mm: Option<f64>,
    pub fore_sweep_deg: Option<f64>,
    pub aft_sweep_deg: Option<f64>,
}

impl FinCanLug {
    fn validate(&self) -> RocketResult<()> {
        if let Some(inner) = self.inner_diameter_mm.explicit() {
            if inner <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "lug inner diameter",
                    inner.to_string(),
                    "must be greater than zero",
                ));
            }
        } else if self.rod_size.is_none() {
            return Err(RocketError::invalid_parameter(
                "lug inner diameter",
                "auto".to_string(),
                "requires a rod size preset",
            ));
        }
        if let Some(length) = self.length_mm {
            if length <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "lug length",
                    length.to_string(),
                    "must be greater than zero",
                ));
            }
        }
        if let Some(thickness) = self.thickness_mm {
            if thickness <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "lug thickness",
                    thickness.to_string(),
                    "must be greater than zero",
                ));
            }
        }
        if let Some(radius) = self.fillet_radius_mm {
            if radius <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "lug fillet radius",
                    radius.to_string(),
                    "must be greater than zero",
                ));
            }
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
        Ok(())
    }

    fn resolved_inner_diameter(&self, registry: &PresetRegistry) -> RocketResult<f64> {
        match self.inner_diameter_mm {
            DiameterSpec::Explicit(inner) => Ok(inner),
            DiameterSpec::Auto => {
                let name = match self.rod_size.as_deref() {
                    Some(name) => name,
                    None => {
                        return Err(RocketError::invalid_parameter(
                            "lug inner diameter",
                            "auto".to_string(),
                            "requires a rod size preset",
                        ))
                    }
                };
                registry
                    .launch_lug(name)
                    .map(|preset| preset.inner_diameter_mm)
                    .ok_or_else(|| RocketError::preset_not_found(name))
            }
        }
    }
}

/// How the coupler sits relative to the can body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CouplerStyle {
    /// Flush with the can's aft face
    #[default]
    Flush,
    /// Stepped down from the can's outer diameter
    Stepped,
}

/// A coupler sleeve extending from the can.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CouplerParams {
    pub style: CouplerStyle,
    pub inner_diameter_mm: f64,
    pub outer_diameter_mm: f64,
    pub length_mm: f64,
    pub thickness_mm: f64,
}

impl CouplerParams {
    fn validate(&self, can_inner_mm: Option<f64>, can_outer_mm: Option<f64>) -> RocketResult<()> {
        if self.length_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "coupler length",
                self.length_mm.to_string(),
                "must be greater than zero",
            ));
        }
        if self.thickness_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "coupler thickness",
                self.thickness_mm.to_string(),
                "must be greater than zero",
            ));
        }
        if self.outer_diameter_mm <= self.inner_diameter_mm {
            return Err(RocketError::invalid_parameter(
                "coupler outer diameter",
                self.outer_diameter_mm.to_string(),
                "must be greater than the inner diameter",
            ));
        }
        if let Some(can_inner) = can_inner_mm {
            if self.inner_diameter_mm > can_inner {
                return Err(RocketError::invalid_parameter(
                    "coupler inner diameter",
                    self.inner_diameter_mm.to_string(),
                    "can not exceed the fin can inner diameter",
                ));
            }
        }
        if let Some(can_outer) = can_outer_mm {
            if self.outer_diameter_mm >= can_outer {
                return Err(RocketError::invalid_parameter(
                    "coupler outer diameter",
                    self.outer_diameter_mm.to_string(),
                    "must be less than the fin can outer diameter",
                ));
            }
        }
        Ok(())
    }
}

/// Parameters for a fin can.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinCanParams {
    pub inner_diameter_mm: DiameterSpec,
    pub thickness_mm: f64,
    pub length_mm: f64,
    pub leading_edge: EdgeParams,
    pub trailing_edge: EdgeParams,
    /// The radial fin set carried by the can
    pub fin: FinParams,
    pub lug: Option<FinCanLug>,
    pub coupler: Option<CouplerParams>,
}

impl FinCanParams {
    pub fn validate(&self) -> RocketResult<()> {
        if self.thickness_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "thickness",
                self.thickness_mm.to_string(),
                "must be greater than zero",
            ));
        }
        if self.length_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "length",
                self.length_mm.to_string(),
                "must be greater than zero",
            ));
        }
        if let Some(inner) = self.inner_diameter_mm.explicit() {
            if inner <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    "inner diameter",
                    inner.to_string(),
                    "must be greater than zero",
                ));
            }
        }
        for (field, edge) in [
            ("leading edge", &self.leading_edge),
            ("trailing edge", &self.trailing_edge),
        ] {
            if edge.style != EdgeStyle::Square && edge.length_mm <= 0.0 {
                return Err(RocketError::invalid_parameter(
                    field,
                    edge.length_mm.to_string(),
                    "must be greater than zero",
                ));
            }
        }
        let edge_total = self.leading_edge.profiled_length() + self.trailing_edge.profiled_length();
        if edge_total > self.length_mm {
            return Err(RocketError::invalid_parameter(
                "edges",
                edge_total.to_string(),
                "leading and trailing edges can not exceed total length",
            ));
        }

        self.fin.validate()?;
        if let Some(lug) = &self.lug {
            lug.validate()?;
        }
        if let Some(coupler) = &self.coupler {
            let can_inner = self.inner_diameter_mm.explicit();
            let can_outer = can_inner.map(|d| d + 2.0 * self.thickness_mm);
            coupler.validate(can_inner, can_outer)?;
        }
        Ok(())
    }

    pub fn build(&self, ctx: &SiblingContext) -> RocketResult<ShapeRecipe> {
        self.build_with_registry(ctx, registry::presets())
    }

    /// Build against an explicit preset registry (tests inject one).
    pub fn build_with_registry(
        &self,
        ctx: &SiblingContext,
        registry: &PresetRegistry,
    ) -> RocketResult<ShapeRecipe> {
        let inner = self
            .inner_diameter_mm
            .resolve(ctx.parent_outer_diameter_mm, "Body tube")?;
        if inner <= 0.0 {
            return Err(RocketError::invalid_shape("Fin can"));
        }
        let outer = inner + 2.0 * self.thickness_mm;
        if let Some(coupler) = &self.coupler {
            coupler.validate(Some(inner), Some(outer))?;
        }

        let mut recipe = ShapeRecipe::new("Fin can");
        recipe.push(RecipeStep::Cylinder {
            outer_diameter_mm: outer,
            inner_diameter_mm: Some(inner),
            length_mm: self.length_mm,
        });
        for (position, edge) in [
            (EndPosition::Forward, &self.leading_edge),
            (EndPosition::Aft, &self.trailing_edge),
        ] {
            if edge.style != EdgeStyle::Square {
                recipe.push(RecipeStep::EdgeProfile {
                    position,
                    style: edge.style,
                    length_mm: edge.length_mm,
                });
            }
        }

        // Fins see the can's outer surface as their mounting tube
        let fin_ctx = SiblingContext {
            parent_outer_diameter_mm: Some(outer),
            ..*ctx
        };
        let fin_recipe = self.fin.build(&fin_ctx)?;
        recipe.steps.extend(fin_recipe.steps);

        if let Some(lug) = &self.lug {
            let lug_inner = lug.resolved_inner_diameter(registry)?;
            let lug_thickness = lug.thickness_mm.unwrap_or(self.thickness_mm);
            recipe.push(RecipeStep::Cylinder {
                outer_diameter_mm: lug_inner + 2.0 * lug_thickness,
                inner_diameter_mm: Some(lug_inner),
                length_mm: lug.length_mm.unwrap_or(self.length_mm),
            });
            if let Some(angle) = lug.fore_sweep_deg {
                recipe.push(RecipeStep::SweepEnd {
                    position: EndPosition::Forward,
                    angle_deg: angle,
                });
            }
            if let Some(angle) = lug.aft_sweep_deg {
                recipe.push(RecipeStep::SweepEnd {
                    position: EndPosition::Aft,
                    angle_deg: angle,
                });
            }
            if let Some(radius) = lug.fillet_radius_mm {
                recipe.push(RecipeStep::Fillet { radius_mm: radius });
            }
        }

        if let Some(coupler) = &self.coupler {
            recipe.push(RecipeStep::Cylinder {
                outer_diameter_mm: coupler.outer_diameter_mm,
                inner_diameter_mm: Some(coupler.inner_diameter_mm),
                length_mm: coupler.length_mm,
            });
            if coupler.style == CouplerStyle::Stepped {
                recipe.push(RecipeStep::Step {
                    diameter_mm: coupler.outer_diameter_mm,
                    thickness_mm: coupler.thickness_mm,
                });
            }
        }
        Ok(recipe)
    }
}
