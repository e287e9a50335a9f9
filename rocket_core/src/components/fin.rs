//! # Fins
//!
//! Fins are polymorphic over the planform: trapezoid (root/tip chord,
//! sweep, semi-span), ellipse, tube fin, and externally supplied sketch
//! outlines. Chords may be absolute lengths or percentages of the root
//! chord; percentages are resolved once, at the build boundary, so the
//! recipe only ever carries absolute values.
//!
//! Sketch outlines are checked at build time, not validation time:
//! whether a polyline closes into a single well-formed face cannot be
//! decided from parameters alone.

use serde::{Deserialize, Serialize};

use crate::components::{DiameterSpec, SiblingContext};
use crate::errors::{RocketError, RocketResult};
use crate::recipe::{RecipeStep, ShapeRecipe};

/// A chord length, absolute or relative to the root chord.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value")]
pub enum ChordLength {
    /// Absolute length in millimetres
    Absolute(f64),
    /// Percentage of the root chord
    Percent(f64),
}

impl ChordLength {
    /// Resolve to an absolute length against the given root chord.
    pub fn resolve(&self, root_chord_mm: f64) -> f64 {
        match self {
            ChordLength::Absolute(v) => *v,
            ChordLength::Percent(p) => root_chord_mm * p / 100.0,
        }
    }

    /// The percentage an absolute length represents of the root chord.
    pub fn as_percent(absolute_mm: f64, root_chord_mm: f64) -> f64 {
        absolute_mm / root_chord_mm * 100.0
    }

    fn raw(&self) -> f64 {
        match self {
            ChordLength::Absolute(v) | ChordLength::Percent(v) => *v,
        }
    }
}

/// Leading-edge sweep, as a length or an angle from the root.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value")]
pub enum SweepMode {
    /// Axial distance from root leading edge to tip leading edge
    Length(f64),
    /// Sweep angle in degrees; the length follows from the semi-span
    Angle(f64),
}

impl SweepMode {
    fn length_mm(&self, span_mm: f64) -> f64 {
        match self {
            SweepMode::Length(l) => *l,
            SweepMode::Angle(a) => span_mm * a.to_radians().tan(),
        }
    }
}

/// Airfoil cross section of a flat fin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CrossSection {
    #[default]
    Square,
    Round,
    Airfoil,
    Wedge,
    /// Thickness tapers toward the leading edge
    TaperLeading,
    /// Thickness tapers toward the trailing edge
    TaperTrailing,
    /// Thickness tapers toward both edges
    TaperBoth,
}

impl CrossSection {
    /// True for sections whose thickness varies over the chord. The
    /// flutter analyzer rejects these.
    pub fn is_tapered(&self) -> bool {
        matches!(
            self,
            CrossSection::Wedge
                | CrossSection::TaperLeading
                | CrossSection::TaperTrailing
                | CrossSection::TaperBoth
        )
    }
}

/// One edge of a sketch outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SketchEdge {
    Line { start: [f64; 2], end: [f64; 2] },
    Arc { start: [f64; 2], end: [f64; 2], center: [f64; 2] },
}

/// An externally supplied planar outline. Each inner vector is one
/// connected wire; more than one wire is a compound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FinSketch {
    pub wires: Vec<Vec<SketchEdge>>,
}

/// The fin planform family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "planform")]
pub enum FinPlanform {
    Trapezoid {
        root_chord_mm: f64,
        tip_chord_mm: ChordLength,
        /// Semi-span, root to tip
        span_mm: f64,
        sweep: SweepMode,
    },
    Ellipse {
        root_chord_mm: f64,
        span_mm: f64,
        /// Sample count for the half-ellipse outline
        resolution: u32,
    },
    Tube {
        outer_diameter_mm: DiameterSpec,
        wall_thickness_mm: f64,
        length_mm: f64,
    },
    Sketch(FinSketch),
}

/// A through-the-wall tab extending from the fin root into the body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TtwTab {
    /// Distance from the root leading edge to the tab's forward edge
    pub offset_mm: f64,
    pub length_mm: f64,
    pub height_mm: f64,
    pub thickness_mm: f64,
}

/// Parameters for a fin or fin set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinParams {
    pub planform: FinPlanform,
    pub cross_section: CrossSection,
    /// Fin thickness; tube fins use their wall thickness instead
    pub thickness_mm: f64,
    pub cant_angle_deg: f64,
    /// Number of fins in the radial set
    pub fin_count: u32,
    pub ttw: Option<TtwTab>,
}

impl FinParams {
    pub fn validate(&self) -> RocketResult<()> {
        if self.fin_count < 1 {
            return Err(RocketError::invalid_parameter(
                "fin count",
                self.fin_count.to_string(),
                "must be at least one",
            ));
        }
        if self.cant_angle_deg.abs() >= 90.0 {
            return Err(RocketError::invalid_parameter(
                "cant angle",
                self.cant_angle_deg.to_string(),
                "must be greater than -90 and less than 90 degrees",
            ));
        }

        match &self.planform {
            FinPlanform::Trapezoid {
                root_chord_mm,
                tip_chord_mm,
                span_mm,
                sweep,
            } => {
                self.validate_thickness()?;
                if *root_chord_mm <= 0.0 {
                    return Err(RocketError::invalid_parameter(
                        "root chord",
                        root_chord_mm.to_string(),
                        "must be greater than zero",
                    ));
                }
                if tip_chord_mm.raw() < 0.0 {
                    return Err(RocketError::invalid_parameter(
                        "tip chord",
                        tip_chord_mm.raw().to_string(),
                        "must be greater than or equal to zero",
                    ));
                }
                if *span_mm <= 0.0 {
                    return Err(RocketError::invalid_parameter(
                        "span",
                        span_mm.to_string(),
                        "must be greater than zero",
                    ));
                }
                if let SweepMode::Angle(a) = sweep {
                    if a.abs() >= 90.0 {
                        return Err(RocketError::invalid_parameter(
                            "sweep angle",
                            a.to_string(),
                            "must be greater than -90 and less than 90 degrees",
                        ));
                    }
                }
                self.validate_ttw(*root_chord_mm)?;
            }
            FinPlanform::Ellipse {
                root_chord_mm,
                span_mm,
                resolution,
            } => {
                self.validate_thickness()?;
                if *root_chord_mm <= 0.0 {
                    return Err(RocketError::invalid_parameter(
                        "root chord",
                        root_chord_mm.to_string(),
                        "must be greater than zero",
                    ));
                }
                if *span_mm <= 0.0 {
                    return Err(RocketError::invalid_parameter(
                        "span",
                        span_mm.to_string(),
                        "must be greater than zero",
                    ));
                }
                if *resolution < 1 {
                    return Err(RocketError::invalid_parameter(
                        "resolution",
                        resolution.to_string(),
                        "must be greater than zero",
                    ));
                }
                self.validate_ttw(*root_chord_mm)?;
            }
            FinPlanform::Tube {
                outer_diameter_mm,
                wall_thickness_mm,
                length_mm,
            } => {
                if self.ttw.is_some() {
                    return Err(RocketError::invalid_parameter(
                        "ttw tab",
                        "enabled",
                        "ttw tabs are not supported for tube fins",
                    ));
                }
                if *wall_thickness_mm <= 0.0 {
                    return Err(RocketError::invalid_parameter(
                        "wall thickness",
                        wall_thickness_mm.to_string(),
                        "must be greater than zero",
                    ));
                }
                if *length_mm <= 0.0 {
                    return Err(RocketError::invalid_parameter(
                        "length",
                        length_mm.to_string(),
                        "must be greater than zero",
                    ));
                }
                if let Some(od) = outer_diameter_mm.explicit() {
                    if od <= 0.0 {
                        return Err(RocketError::invalid_parameter(
                            "outer diameter",
                            od.to_string(),
                            "must be greater than zero",
                        ));
                    }
                    if *wall_thickness_mm >= od / 2.0 {
                        return Err(RocketError::invalid_parameter(
                            "wall thickness",
                            wall_thickness_mm.to_string(),
                            "must be less than the tube radius",
                        ));
                    }
                }
            }
            // Outline well-formedness cannot be checked from parameters;
            // deferred to build. The tab's own bounds still apply, but
            // there is no root chord to bound the offset against.
            FinPlanform::Sketch(_) => {
                self.validate_thickness()?;
                self.validate_ttw(f64::INFINITY)?;
            }
        }
        Ok(())
    }

    fn validate_thickness(&self) -> RocketResult<()> {
        if self.thickness_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "thickness",
                self.thickness_mm.to_string(),
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    fn validate_ttw(&self, root_chord_mm: f64) -> RocketResult<()> {
        let Some(tab) = &self.ttw else {
            return Ok(());
        };
        if tab.length_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "ttw length",
                tab.length_mm.to_string(),
                "must be greater than zero",
            ));
        }
        if tab.height_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "ttw height",
                tab.height_mm.to_string(),
                "must be greater than zero",
            ));
        }
        if tab.thickness_mm <= 0.0 {
            return Err(RocketError::invalid_parameter(
                "ttw thickness",
                tab.thickness_mm.to_string(),
                "must be greater than zero",
            ));
        }
        if tab.offset_mm >= root_chord_mm {
            return Err(RocketError::invalid_parameter(
                "ttw offset",
                tab.offset_mm.to_string(),
                "must be less than the root chord",
            ));
        }
        Ok(())
    }

    pub fn build(&self, ctx: &SiblingContext) -> RocketResult<ShapeRecipe> {
        let mut recipe = ShapeRecipe::new("Fin");

        match &self.planform {
            FinPlanform::Trapezoid {
                root_chord_mm,
                tip_chord_mm,
                span_mm,
                sweep,
            } => {
                let root = *root_chord_mm;
                let tip = tip_chord_mm.resolve(root);
                let sweep_len = sweep.length_mm(*span_mm);
                // Triangular when the tip chord resolves to zero
                let mut points = vec![[0.0, 0.0], [sweep_len, *span_mm]];
                if tip > 0.0 {
                    points.push([sweep_len + tip, *span_mm]);
                }
                points.push([root, 0.0]);
                recipe.push(RecipeStep::ExtrudeOutline {
                    points,
                    thickness_mm: self.thickness_mm,
                });
                self.push_ttw(&mut recipe);
            }
            FinPlanform::Ellipse {
                root_chord_mm,
                span_mm,
                resolution,
            } => {
                recipe.push(RecipeStep::ExtrudeOutline {
                    points: ellipse_outline(*root_chord_mm, *span_mm, *resolution),
                    thickness_mm: self.thickness_mm,
                });
                self.push_ttw(&mut recipe);
            }
            FinPlanform::Tube {
                outer_diameter_mm,
                wall_thickness_mm,
                length_mm,
            } => {
                let od = outer_diameter_mm.resolve(ctx.parent_outer_diameter_mm, "Body tube")?;
                if od <= 0.0 || *wall_thickness_mm >= od / 2.0 {
                    return Err(RocketError::invalid_shape("Fin"));
                }
                recipe.push(RecipeStep::Cylinder {
                    outer_diameter_mm: od,
                    inner_diameter_mm: Some(od - 2.0 * wall_thickness_mm),
                    length_mm: *length_mm,
                });
            }
            FinPlanform::Sketch(sketch) => {
                let points = sketch_face(sketch)?;
                recipe.push(RecipeStep::ExtrudeOutline {
                    points,
                    thickness_mm: self.thickness_mm,
                });
                self.push_ttw(&mut recipe);
            }
        }

        if self.cant_angle_deg != 0.0 {
            recipe.push(RecipeStep::Rotate {
                angle_deg: self.cant_angle_deg,
            });
        }
        if self.fin_count > 1 {
            recipe.push(RecipeStep::RadialPattern {
                count: self.fin_count,
                angle_separation_deg: 360.0 / f64::from(self.fin_count),
            });
        }
        Ok(recipe)
    }

    fn push_ttw(&self, recipe: &mut ShapeRecipe) {
        if let Some(tab) = &self.ttw {
            // The tab hangs below the root edge (negative span side)
            recipe.push(RecipeStep::ExtrudeOutline {
                points: vec![
                    [tab.offset_mm, 0.0],
                    [tab.offset_mm, -tab.height_mm],
                    [tab.offset_mm + tab.length_mm, -tab.height_mm],
                    [tab.offset_mm + tab.length_mm, 0.0],
                ],
                thickness_mm: tab.thickness_mm,
            });
        }
    }
}

fn ellipse_outline(root_chord_mm: f64, span_mm: f64, resolution: u32) -> Vec<[f64; 2]> {
    // Half ellipse over the root chord, closed along the root edge
    let a = root_chord_mm / 2.0;
    let mut points = Vec::with_capacity(resolution as usize + 1);
    for i in 0..=resolution {
        let theta = std::f64::consts::PI * f64::from(i) / f64::from(resolution);
        points.push([a - a * theta.cos(), span_mm * theta.sin()]);
    }
    points
}

/// Turn a sketch into a single closed straight-edged outline, or report
/// why it cannot form a fin face.
fn sketch_face(sketch: &FinSketch) -> RocketResult<Vec<[f64; 2]>> {
    if sketch.wires.is_empty() || sketch.wires.iter().all(|w| w.is_empty()) {
        return Err(RocketError::invalid_sketch("shape is empty"));
    }
    if sketch.wires.len() > 1 {
        return Err(RocketError::invalid_sketch("compound objects not supported"));
    }
    let wire = &sketch.wires[0];

    let mut segments = Vec::with_capacity(wire.len());
    for edge in wire {
        match edge {
            SketchEdge::Line { start, end } => segments.push((*start, *end)),
            SketchEdge::Arc { .. } => {
                return Err(RocketError::invalid_sketch(
                    "unable to handle shapes other than lines",
                ))
            }
        }
    }
    let points: Vec<[f64; 2]> = segments.iter().map(|(start, _)| *start).collect();

    // Consecutive edges must chain, and the last must return to the first
    for (i, (_, end)) in segments.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        if !points_coincide(*end, next) {
            return Err(RocketError::invalid_sketch("sketch must create a valid face"));
        }
    }
    if points.len() < 3 || self_intersects(&points) {
        return Err(RocketError::invalid_sketch("sketch must create a valid face"));
    }
    Ok(points)
}

fn points_coincide(a: [f64; 2], b: [f64; 2]) -> bool {
    (a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9
}

fn self_intersects(points: &[[f64; 2]]) -> bool {
    let n = points.len();
    for i in 0..n {
        for j in i + 1..n {
            // Adjacent segments share an endpoint by construction
            if j == i || (j + 1) % n == i || (i + 1) % n == j {
                continue;
            }
            let (a, b) = (points[i], points[(i + 1) % n]);
            let (c, d) = (points[j], points[(j + 1) % n]);
            if segments_cross(a, b, c, d) {
                return true;
            }
        }
    }
    false
}

fn segments_cross(a: [f64; 2], b: [f64; 2], c: [f64; 2], d: [f64; 2]) -> bool {
    let orient = |p: [f64; 2], q: [f64; 2], r: [f64; 2]| {
        (q[0] - p[0]) * (r[1] - p[1]) - (q[1] - p[1]) * (r[0] - p[0])
    };
    let d1 = orient(c, d, a);
    let d2 = orient(c, d, b);
    let d3 = orient(a, b, c);
    let d4 = orient(a, b, d);
    (d1 * d2 < 0.0) && (d3 * d4 < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_fin() -> FinParams {
        FinParams {
            planform: FinPlanform::Trapezoid {
                root_chord_mm: 100.0,
                tip_chord_mm: ChordLength::Absolute(40.0),
                span_mm: 75.0,
                sweep: SweepMode::Length(50.0),
            },
            cross_section: CrossSection::Square,
            thickness_mm: 3.0,
            cant_angle_deg: 0.0,
            fin_count: 3,
            ttw: None,
        }
    }

    fn line(start: [f64; 2], end: [f64; 2]) -> SketchEdge {
        SketchEdge::Line { start, end }
    }

    #[test]
    fn test_valid_fin() {
        assert!(test_fin().validate().is_ok());
    }

    #[test]
    fn test_ttw_offset_exceeds_root_chord() {
        let mut fin = test_fin();
        fin.ttw = Some(TtwTab {
            offset_mm: 100.0,
            length_mm: 40.0,
            height_mm: 10.0,
            thickness_mm: 3.0,
        });
        let err = fin.validate().unwrap_err();
        assert_eq!(err.field(), Some("ttw offset"));
        assert!(err.to_string().contains("less than the root chord"));
    }

    #[test]
    fn test_ttw_on_tube_fin() {
        let mut fin = test_fin();
        fin.planform = FinPlanform::Tube {
            outer_diameter_mm: DiameterSpec::Explicit(20.0),
            wall_thickness_mm: 1.0,
            length_mm: 60.0,
        };
        fin.ttw = Some(TtwTab {
            offset_mm: 10.0,
            length_mm: 40.0,
            height_mm: 10.0,
            thickness_mm: 3.0,
        });
        let err = fin.validate().unwrap_err();
        assert!(err.to_string().contains("not supported for tube fins"));
    }

    #[test]
    fn test_percent_chord_resolution_idempotent() {
        let root = 100.0;
        let percent = 37.5;
        let absolute = ChordLength::Percent(percent).resolve(root);
        assert!((ChordLength::as_percent(absolute, root) - percent).abs() < 1e-12);
    }

    #[test]
    fn test_percent_chord_in_recipe() {
        let mut fin = test_fin();
        fin.planform = FinPlanform::Trapezoid {
            root_chord_mm: 100.0,
            tip_chord_mm: ChordLength::Percent(40.0),
            span_mm: 75.0,
            sweep: SweepMode::Length(50.0),
        };
        let recipe = fin.build(&SiblingContext::empty()).unwrap();
        match &recipe.steps[0] {
            RecipeStep::ExtrudeOutline { points, .. } => {
                // Tip trailing edge sits at sweep + resolved tip chord
                assert_eq!(points[2], [90.0, 75.0]);
            }
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_sweep_angle_mode() {
        let mut fin = test_fin();
        fin.planform = FinPlanform::Trapezoid {
            root_chord_mm: 100.0,
            tip_chord_mm: ChordLength::Absolute(40.0),
            span_mm: 75.0,
            sweep: SweepMode::Angle(45.0),
        };
        let recipe = fin.build(&SiblingContext::empty()).unwrap();
        match &recipe.steps[0] {
            RecipeStep::ExtrudeOutline { points, .. } => {
                assert!((points[1][0] - 75.0).abs() < 1e-9);
            }
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_triangular_fin_outline() {
        let mut fin = test_fin();
        fin.planform = FinPlanform::Trapezoid {
            root_chord_mm: 100.0,
            tip_chord_mm: ChordLength::Absolute(0.0),
            span_mm: 75.0,
            sweep: SweepMode::Length(50.0),
        };
        let recipe = fin.build(&SiblingContext::empty()).unwrap();
        match &recipe.steps[0] {
            RecipeStep::ExtrudeOutline { points, .. } => assert_eq!(points.len(), 3),
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_fin_set_pattern() {
        let fin = test_fin();
        let recipe = fin.build(&SiblingContext::empty()).unwrap();
        assert!(recipe.steps.iter().any(|s| matches!(
            s,
            RecipeStep::RadialPattern { count: 3, angle_separation_deg } if *angle_separation_deg == 120.0
        )));
    }

    #[test]
    fn test_cant_angle_rotation() {
        let mut fin = test_fin();
        fin.cant_angle_deg = 5.0;
        let recipe = fin.build(&SiblingContext::empty()).unwrap();
        assert!(recipe
            .steps
            .iter()
            .any(|s| matches!(s, RecipeStep::Rotate { angle_deg } if *angle_deg == 5.0)));
    }

    #[test]
    fn test_tube_fin_auto_diameter() {
        let mut fin = test_fin();
        fin.planform = FinPlanform::Tube {
            outer_diameter_mm: DiameterSpec::Auto,
            wall_thickness_mm: 1.0,
            length_mm: 60.0,
        };
        assert!(fin.validate().is_ok());
        let err = fin.build(&SiblingContext::empty()).unwrap_err();
        assert_eq!(err.to_string(), "Body tube not found");

        let ctx = SiblingContext {
            parent_outer_diameter_mm: Some(24.8),
            ..SiblingContext::empty()
        };
        let recipe = fin.build(&ctx).unwrap();
        match &recipe.steps[0] {
            RecipeStep::Cylinder {
                outer_diameter_mm,
                inner_diameter_mm,
                ..
            } => {
                assert_eq!(*outer_diameter_mm, 24.8);
                assert_eq!(*inner_diameter_mm, Some(22.8));
            }
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_sketch_empty() {
        let mut fin = test_fin();
        fin.planform = FinPlanform::Sketch(FinSketch::default());
        assert!(fin.validate().is_ok());
        let err = fin.build(&SiblingContext::empty()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid sketch: shape is empty");
    }

    #[test]
    fn test_sketch_compound() {
        let wire = vec![
            line([0.0, 0.0], [50.0, 0.0]),
            line([50.0, 0.0], [25.0, 40.0]),
            line([25.0, 40.0], [0.0, 0.0]),
        ];
        let mut fin = test_fin();
        fin.planform = FinPlanform::Sketch(FinSketch {
            wires: vec![wire.clone(), wire],
        });
        let err = fin.build(&SiblingContext::empty()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid sketch: compound objects not supported");
    }

    #[test]
    fn test_sketch_with_arc() {
        let mut fin = test_fin();
        fin.planform = FinPlanform::Sketch(FinSketch {
            wires: vec![vec![
                line([0.0, 0.0], [50.0, 0.0]),
                SketchEdge::Arc {
                    start: [50.0, 0.0],
                    end: [0.0, 0.0],
                    center: [25.0, 0.0],
                },
            ]],
        });
        let err = fin.build(&SiblingContext::empty()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid sketch: unable to handle shapes other than lines"
        );
    }

    #[test]
    fn test_sketch_open_wire() {
        let mut fin = test_fin();
        fin.planform = FinPlanform::Sketch(FinSketch {
            wires: vec![vec![
                line([0.0, 0.0], [50.0, 0.0]),
                line([50.0, 0.0], [25.0, 40.0]),
            ]],
        });
        let err = fin.build(&SiblingContext::empty()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid sketch: sketch must create a valid face");
    }

    #[test]
    fn test_sketch_self_intersecting() {
        // Bowtie
        let mut fin = test_fin();
        fin.planform = FinPlanform::Sketch(FinSketch {
            wires: vec![vec![
                line([0.0, 0.0], [50.0, 40.0]),
                line([50.0, 40.0], [50.0, 0.0]),
                line([50.0, 0.0], [0.0, 40.0]),
                line([0.0, 40.0], [0.0, 0.0]),
            ]],
        });
        let err = fin.build(&SiblingContext::empty()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid sketch: sketch must create a valid face");
    }

    #[test]
    fn test_sketch_valid_face() {
        let mut fin = test_fin();
        fin.planform = FinPlanform::Sketch(FinSketch {
            wires: vec![vec![
                line([0.0, 0.0], [80.0, 0.0]),
                line([80.0, 0.0], [60.0, 50.0]),
                line([60.0, 50.0], [20.0, 50.0]),
                line([20.0, 50.0], [0.0, 0.0]),
            ]],
        });
        let recipe = fin.build(&SiblingContext::empty()).unwrap();
        match &recipe.steps[0] {
            RecipeStep::ExtrudeOutline { points, .. } => assert_eq!(points.len(), 4),
            other => panic!("unexpected step {:?}", other),
        }
    }
}
