//! # Shape Recipes
//!
//! A [`ShapeRecipe`] is the ordered list of primitive construction steps a
//! downstream solid-modeling kernel executes to realize a component. The
//! engine only ever emits recipes; it never talks to the kernel directly.
//!
//! Recipes are plain data: deterministic for a given parameter set,
//! structurally comparable, and consumed exactly once by the kernel.

use serde::{Deserialize, Serialize};

/// A sampled or closed-form axisymmetric profile point: axial position
/// (mm from the tip) and radius (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    pub x_mm: f64,
    pub radius_mm: f64,
}

impl ProfilePoint {
    pub fn new(x_mm: f64, radius_mm: f64) -> Self {
        Self { x_mm, radius_mm }
    }
}

/// Which end of a component a step applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndPosition {
    Forward,
    Aft,
}

/// Cap style for the flat end of a hollow nose cone or transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CapStyle {
    /// Open end, no cap
    #[default]
    Open,
    /// Flat solid cap
    Flat,
    /// Cap with a single bar across the opening
    Bar,
    /// Cap with two crossed bars
    CrossBar,
}

/// Edge treatment for a fin can's leading or trailing edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EdgeStyle {
    #[default]
    Square,
    Taper,
    Round,
}

/// One primitive construction step. The external kernel maps each step to
/// its native revolve/extrude/boolean/fillet operations; a kernel fault is
/// wrapped by the assembler into a generic build error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum RecipeStep {
    /// Revolve an axisymmetric profile polyline about the axis. A
    /// `wall_thickness_mm` of `None` means a solid of revolution; `Some`
    /// means a hollow shell of that thickness.
    RevolveProfile {
        points: Vec<ProfilePoint>,
        wall_thickness_mm: Option<f64>,
    },

    /// A cylinder or tube primitive along the axis.
    Cylinder {
        outer_diameter_mm: f64,
        inner_diameter_mm: Option<f64>,
        length_mm: f64,
    },

    /// A cylindrical shoulder stub extending from one end.
    Shoulder {
        position: EndPosition,
        diameter_mm: f64,
        length_mm: f64,
        thickness_mm: Option<f64>,
    },

    /// A stepped section of reduced diameter (bulkhead step).
    Step {
        diameter_mm: f64,
        thickness_mm: f64,
    },

    /// Cap the flat end of the current solid.
    Cap {
        position: EndPosition,
        style: CapStyle,
        bar_width_mm: Option<f64>,
    },

    /// Subtract a circle of equally spaced holes.
    HolePattern {
        hole_diameter_mm: f64,
        center_radius_mm: f64,
        count: u32,
    },

    /// Subtract a rectangular notch.
    Notch {
        width_mm: f64,
        height_mm: f64,
        depth_mm: f64,
    },

    /// Bore a centered cylindrical core out of the current solid.
    Bore {
        diameter_mm: f64,
        length_mm: f64,
    },

    /// Rotate the preceding sub-feature about its root edge (fin cant).
    Rotate { angle_deg: f64 },

    /// Shape a rail guide's mounting base: a V cut at the given angle, or
    /// a concave conformal contour matching the mounting tube diameter.
    GuideBase {
        v_angle_deg: Option<f64>,
        conformal_diameter_mm: Option<f64>,
    },

    /// Extrude a closed planar outline to a thickness (fins).
    ExtrudeOutline {
        points: Vec<[f64; 2]>,
        thickness_mm: f64,
    },

    /// Shape a fin can edge over the given axial length.
    EdgeProfile {
        position: EndPosition,
        style: EdgeStyle,
        length_mm: f64,
    },

    /// Sweep (shear) one end by an angle from vertical.
    SweepEnd {
        position: EndPosition,
        angle_deg: f64,
    },

    /// Fillet the most recent feature's exposed edges.
    Fillet { radius_mm: f64 },

    /// Subtract a countersunk fastener hole.
    Countersink {
        angle_deg: f64,
        shank_diameter_mm: f64,
        head_diameter_mm: f64,
    },

    /// Replicate the preceding sub-feature around the axis.
    RadialPattern {
        count: u32,
        angle_separation_deg: f64,
    },

    /// Replicate the preceding sub-feature along the axis.
    LinearPattern { count: u32, separation_mm: f64 },
}

/// An ordered construction recipe for one component. Consumed exactly once
/// by the external kernel and never retained by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecipe {
    /// Human-readable component family ("Body tube", "Nose cone", ...)
    pub component: String,

    /// Construction steps, in execution order
    pub steps: Vec<RecipeStep>,
}

impl ShapeRecipe {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            steps: Vec::new(),
        }
    }

    /// Append a step, keeping call sites chainable.
    pub fn push(&mut self, step: RecipeStep) -> &mut Self {
        self.steps.push(step);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
