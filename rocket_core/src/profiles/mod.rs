//! # Profile Curve Library
//!
//! Radius-vs-axial-position curves for axisymmetric nose cone and
//! transition shapes. Each family is a pure closed-form function of the
//! base radius `R` and length `L`; sampled families are evaluated at a
//! caller-chosen resolution and handed to the assembler as a polyline.
//!
//! Coefficient domains are family-specific and enforced here, before any
//! geometry is attempted:
//!
//! - Haack: `coefficient >= 0` (C = 0 is Von Karman, C = 1/3 is LV-Haack)
//! - Parabolic: `0 <= coefficient <= 1`, inclusive both ends
//! - Power series: `0 < coefficient <= 1`, exclusive at zero
//! - Blunted: `0 < nose radius < base radius`
//! - Secant ogive: defining-circle radius `>= base radius`
//!
//! ## Example
//!
//! ```rust
//! use rocket_core::profiles::{NoseShape, ProfileCurve, ProfileKind};
//!
//! let curve = ProfileCurve::new(NoseShape::Haack { coefficient: 0.0 }, 100);
//! curve.validate(ProfileKind::NoseCone, 20.0).unwrap();
//! let points = curve.sample(20.0, 120.0).unwrap();
//! assert_eq!(points.len(), 101);
//! ```

mod ogive;
mod series;

use serde::{Deserialize, Serialize};

use crate::errors::{RocketError, RocketResult};
use crate::recipe::ProfilePoint;

/// Whether a curve belongs to a nose cone or a transition. Only affects
/// the wording of coefficient errors, which name the component family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileKind {
    NoseCone,
    Transition,
}

impl ProfileKind {
    fn noun(&self) -> &'static str {
        match self {
            ProfileKind::NoseCone => "nose cones",
            ProfileKind::Transition => "transitions",
        }
    }
}

/// Tagged profile shape family. Shape-specific parameters live in the
/// variant that needs them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "shape")]
pub enum NoseShape {
    /// Straight cone, linear radius interpolation
    Conic,
    /// Cone with the tip replaced by a tangent spherical cap
    BluntedConic { nose_radius_mm: f64 },
    /// Tangent ogive circular arc
    #[default]
    Ogive,
    /// Ogive with the tip replaced by a tangent spherical cap
    BluntedOgive { nose_radius_mm: f64 },
    /// Ogive defined by an explicit circle radius larger than the
    /// tangent-ogive radius
    SecantOgive { circle_radius_mm: f64 },
    /// Quarter-ellipse profile
    Elliptical,
    /// Haack series (C = 0 Von Karman, C = 1/3 LV-Haack)
    Haack { coefficient: f64 },
    /// Parabolic series
    Parabolic { coefficient: f64 },
    /// Power series
    PowerSeries { coefficient: f64 },
}

impl NoseShape {
    /// Display name, as used in error messages
    pub fn display_name(&self) -> &'static str {
        match self {
            NoseShape::Conic => "conical",
            NoseShape::BluntedConic { .. } => "blunted conical",
            NoseShape::Ogive => "ogive",
            NoseShape::BluntedOgive { .. } => "blunted ogive",
            NoseShape::SecantOgive { .. } => "secant ogive",
            NoseShape::Elliptical => "elliptical",
            NoseShape::Haack { .. } => "Haack series",
            NoseShape::Parabolic { .. } => "parabolic series",
            NoseShape::PowerSeries { .. } => "power series",
        }
    }
}

/// An immutable profile curve: a shape family plus the sample count used
/// when the curve is handed off as a polyline. Derived purely from a
/// component's parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileCurve {
    pub shape: NoseShape,

    /// Number of axial sampling intervals. Controls faceting fidelity
    /// only, never shape correctness.
    pub resolution: u32,
}

impl ProfileCurve {
    pub fn new(shape: NoseShape, resolution: u32) -> Self {
        Self { shape, resolution }
    }

    /// Check the radius-independent domains: resolution and the per-family
    /// coefficient ranges. Used on its own when the base diameter is in
    /// Auto mode and not yet known.
    pub fn validate_coefficients(&self, kind: ProfileKind) -> RocketResult<()> {
        if self.resolution == 0 {
            return Err(RocketError::invalid_parameter(
                "resolution",
                self.resolution.to_string(),
                "must be a positive integer",
            ));
        }

        let noun = kind.noun();
        match self.shape {
            NoseShape::Conic | NoseShape::Ogive | NoseShape::Elliptical => Ok(()),
            NoseShape::BluntedConic { nose_radius_mm }
            | NoseShape::BluntedOgive { nose_radius_mm } => {
                if nose_radius_mm <= 0.0 {
                    return Err(RocketError::invalid_parameter(
                        "nose diameter",
                        (nose_radius_mm * 2.0).to_string(),
                        "must be greater than zero",
                    ));
                }
                Ok(())
            }
            NoseShape::SecantOgive { .. } => Ok(()),
            NoseShape::Haack { coefficient } => {
                if coefficient < 0.0 {
                    return Err(RocketError::invalid_parameter(
                        "coefficient",
                        coefficient.to_string(),
                        format!("for Haack series {} the coefficient must be >= 0", noun),
                    ));
                }
                Ok(())
            }
            NoseShape::Parabolic { coefficient } => {
                if !(0.0..=1.0).contains(&coefficient) {
                    return Err(RocketError::invalid_parameter(
                        "coefficient",
                        coefficient.to_string(),
                        format!(
                            "for parabolic series {} the coefficient must be in the range (0 <= coefficient <= 1)",
                            noun
                        ),
                    ));
                }
                Ok(())
            }
            NoseShape::PowerSeries { coefficient } => {
                if coefficient <= 0.0 || coefficient > 1.0 {
                    return Err(RocketError::invalid_parameter(
                        "coefficient",
                        coefficient.to_string(),
                        format!(
                            "for power series {} the coefficient must be in the range (0 < coefficient <= 1)",
                            noun
                        ),
                    ));
                }
                Ok(())
            }
        }
    }

    /// Check coefficient and shape-parameter domains. `base_radius_mm` is
    /// the radius the curve will be generated against; blunted and secant
    /// bounds are relative to it.
    pub fn validate(&self, kind: ProfileKind, base_radius_mm: f64) -> RocketResult<()> {
        self.validate_coefficients(kind)?;

        match self.shape {
            NoseShape::BluntedConic { nose_radius_mm }
            | NoseShape::BluntedOgive { nose_radius_mm } => {
                if nose_radius_mm >= base_radius_mm {
                    return Err(RocketError::invalid_parameter(
                        "nose diameter",
                        (nose_radius_mm * 2.0).to_string(),
                        "must be less than the base diameter",
                    ));
                }
                Ok(())
            }
            NoseShape::SecantOgive { circle_radius_mm } => {
                if circle_radius_mm < base_radius_mm {
                    return Err(RocketError::invalid_parameter(
                        "ogive diameter",
                        (circle_radius_mm * 2.0).to_string(),
                        "must be greater than or equal to the base diameter",
                    ));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Sample the curve into a polyline from the tip (x = 0) to the base
    /// (x = length). Returns `None` when the realized curve is degenerate
    /// for these dimensions (e.g. a secant arc with an imaginary center),
    /// which the assembler reports as a build error.
    pub fn sample(&self, base_radius_mm: f64, length_mm: f64) -> Option<Vec<ProfilePoint>> {
        if base_radius_mm <= 0.0 || length_mm <= 0.0 {
            return None;
        }
        let n = self.resolution.max(1);
        match self.shape {
            NoseShape::Conic => Some(series::sample_closed_form(
                base_radius_mm,
                length_mm,
                n,
                series::conic,
            )),
            NoseShape::Elliptical => Some(series::sample_closed_form(
                base_radius_mm,
                length_mm,
                n,
                series::elliptical,
            )),
            NoseShape::Haack { coefficient } => Some(series::sample_closed_form(
                base_radius_mm,
                length_mm,
                n,
                |r, l, x| series::haack(r, l, x, coefficient),
            )),
            NoseShape::Parabolic { coefficient } => Some(series::sample_closed_form(
                base_radius_mm,
                length_mm,
                n,
                |r, l, x| series::parabolic(r, l, x, coefficient),
            )),
            NoseShape::PowerSeries { coefficient } => Some(series::sample_closed_form(
                base_radius_mm,
                length_mm,
                n,
                |r, l, x| series::power(r, l, x, coefficient),
            )),
            NoseShape::Ogive => Some(series::sample_closed_form(
                base_radius_mm,
                length_mm,
                n,
                ogive::tangent_ogive,
            )),
            NoseShape::SecantOgive { circle_radius_mm } => {
                ogive::sample_secant(base_radius_mm, length_mm, circle_radius_mm, n)
            }
            NoseShape::BluntedConic { nose_radius_mm } => {
                ogive::sample_blunted_conic(base_radius_mm, length_mm, nose_radius_mm, n)
            }
            NoseShape::BluntedOgive { nose_radius_mm } => {
                ogive::sample_blunted_ogive(base_radius_mm, length_mm, nose_radius_mm, n)
            }
        }
    }

    /// Sample a transition between a smaller forward radius and a larger
    /// aft radius over `length_mm`.
    ///
    /// A clipped transition is the matching segment of a larger virtual
    /// nose curve; a non-clipped one is the full curve generated over the
    /// radius difference, extended at the center by the forward radius.
    pub fn sample_transition(
        &self,
        fore_radius_mm: f64,
        aft_radius_mm: f64,
        length_mm: f64,
        clipped: bool,
    ) -> Option<Vec<ProfilePoint>> {
        let (small, big) = if fore_radius_mm <= aft_radius_mm {
            (fore_radius_mm, aft_radius_mm)
        } else {
            (aft_radius_mm, fore_radius_mm)
        };
        if big <= 0.0 || length_mm <= 0.0 || big <= small {
            return None;
        }

        let points = if clipped {
            // Segment of a virtual full curve whose tip lies beyond the
            // small end, cut where the curve passes through the small
            // radius.
            let virtual_length = self.clipped_virtual_length(small, big, length_mm)?;
            let x0 = virtual_length - length_mm;
            let n = self.resolution.max(1) as usize;
            let mut out = Vec::with_capacity(n + 1);
            for i in 0..=n {
                let x = length_mm * (i as f64) / (n as f64);
                let radius = self.radius_at(big, virtual_length, x0 + x)?;
                out.push(ProfilePoint::new(x, radius));
            }
            // Pin the endpoints against rounding
            out[0] = ProfilePoint::new(0.0, small);
            out[n] = ProfilePoint::new(length_mm, big);
            out
        } else {
            // Full curve over the radius delta, offset radially outward
            self.sample(big - small, length_mm)?
                .into_iter()
                .map(|p| ProfilePoint::new(p.x_mm, p.radius_mm + small))
                .collect()
        };

        if fore_radius_mm <= aft_radius_mm {
            Some(points)
        } else {
            // Mirror so the profile still runs forward-to-aft
            let mut mirrored: Vec<ProfilePoint> = points
                .into_iter()
                .map(|p| ProfilePoint::new(length_mm - p.x_mm, p.radius_mm))
                .collect();
            mirrored.reverse();
            Some(mirrored)
        }
    }

    /// Radius of the sharp profile at axial position `x_mm`. The blunted
    /// variants evaluate as their underlying sharp family; clipping cuts
    /// the curve above any tip treatment anyway.
    fn radius_at(&self, base_radius_mm: f64, length_mm: f64, x_mm: f64) -> Option<f64> {
        let r = base_radius_mm;
        let l = length_mm;
        let x = x_mm.clamp(0.0, l);
        let y = match self.shape {
            NoseShape::Conic | NoseShape::BluntedConic { .. } => series::conic(r, l, x),
            NoseShape::Elliptical => series::elliptical(r, l, x),
            NoseShape::Haack { coefficient } => series::haack(r, l, x, coefficient),
            NoseShape::Parabolic { coefficient } => series::parabolic(r, l, x, coefficient),
            NoseShape::PowerSeries { coefficient } => series::power(r, l, x, coefficient),
            NoseShape::Ogive | NoseShape::BluntedOgive { .. } => ogive::tangent_ogive(r, l, x),
            NoseShape::SecantOgive { circle_radius_mm } => {
                ogive::secant(r, l, circle_radius_mm, x)?
            }
        };
        Some(y.max(0.0))
    }

    /// The virtual nose length whose curve meets the small radius exactly
    /// one transition length ahead of its base. Closed form for the
    /// conical families; the curved families solve the clip-plane radius
    /// by bisection.
    fn clipped_virtual_length(&self, small: f64, big: f64, length_mm: f64) -> Option<f64> {
        let conic_length = length_mm * big / (big - small);
        if matches!(self.shape, NoseShape::Conic | NoseShape::BluntedConic { .. }) {
            return Some(conic_length);
        }

        let shortfall =
            |lv: f64| -> Option<f64> { Some(self.radius_at(big, lv, lv - length_mm)? - small) };

        // Every supported family runs on or above the conic chord, so the
        // conic length brackets the root from above; double out if a
        // curve ever undershoots it.
        let mut lo = length_mm;
        let mut hi = conic_length;
        let mut expansions = 0;
        while shortfall(hi)? < 0.0 {
            hi *= 2.0;
            expansions += 1;
            if expansions > 60 {
                return None;
            }
        }
        for _ in 0..80 {
            let mid = 0.5 * (lo + hi);
            if shortfall(mid)? < 0.0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Some(0.5 * (lo + hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parabolic_bounds_inclusive() {
        for c in [0.0, 0.5, 1.0] {
            let curve = ProfileCurve::new(NoseShape::Parabolic { coefficient: c }, 50);
            assert!(curve.validate(ProfileKind::NoseCone, 10.0).is_ok());
        }
        let curve = ProfileCurve::new(NoseShape::Parabolic { coefficient: 1.0001 }, 50);
        assert!(curve.validate(ProfileKind::NoseCone, 10.0).is_err());
        let curve = ProfileCurve::new(NoseShape::Parabolic { coefficient: -0.0001 }, 50);
        assert!(curve.validate(ProfileKind::NoseCone, 10.0).is_err());
    }

    #[test]
    fn test_power_series_zero_excluded() {
        let curve = ProfileCurve::new(NoseShape::PowerSeries { coefficient: 0.0 }, 50);
        let err = curve.validate(ProfileKind::NoseCone, 20.0).unwrap_err();
        assert_eq!(err.field(), Some("coefficient"));
        assert!(err
            .to_string()
            .contains("(0 < coefficient <= 1)"));

        let curve = ProfileCurve::new(NoseShape::PowerSeries { coefficient: 1.0 }, 50);
        assert!(curve.validate(ProfileKind::NoseCone, 20.0).is_ok());
    }

    #[test]
    fn test_haack_no_upper_bound() {
        let curve = ProfileCurve::new(NoseShape::Haack { coefficient: 5.0 }, 50);
        assert!(curve.validate(ProfileKind::NoseCone, 20.0).is_ok());
        let curve = ProfileCurve::new(NoseShape::Haack { coefficient: -0.01 }, 50);
        assert!(curve.validate(ProfileKind::NoseCone, 20.0).is_err());
    }

    #[test]
    fn test_transition_error_wording() {
        let curve = ProfileCurve::new(NoseShape::PowerSeries { coefficient: 2.0 }, 50);
        let err = curve.validate(ProfileKind::Transition, 20.0).unwrap_err();
        assert!(err.to_string().contains("transitions"));
    }

    #[test]
    fn test_blunted_radius_bounds() {
        let curve = ProfileCurve::new(NoseShape::BluntedConic { nose_radius_mm: 25.0 }, 50);
        let err = curve.validate(ProfileKind::NoseCone, 20.0).unwrap_err();
        assert!(err.to_string().contains("less than the base diameter"));

        let curve = ProfileCurve::new(NoseShape::BluntedConic { nose_radius_mm: 0.0 }, 50);
        assert!(curve.validate(ProfileKind::NoseCone, 20.0).is_err());
    }

    #[test]
    fn test_sample_endpoints() {
        for shape in [
            NoseShape::Conic,
            NoseShape::Ogive,
            NoseShape::Elliptical,
            NoseShape::Haack { coefficient: 0.0 },
            NoseShape::Parabolic { coefficient: 0.5 },
            NoseShape::PowerSeries { coefficient: 0.75 },
        ] {
            let curve = ProfileCurve::new(shape, 100);
            let points = curve.sample(20.0, 120.0).unwrap();
            let first = points.first().unwrap();
            let last = points.last().unwrap();
            assert!(first.radius_mm.abs() < 1e-6, "{:?}", shape);
            assert!((last.radius_mm - 20.0).abs() < 1e-6, "{:?}", shape);
            assert!((last.x_mm - 120.0).abs() < 1e-6, "{:?}", shape);
        }
    }

    #[test]
    fn test_sample_monotonic_radius() {
        let curve = ProfileCurve::new(NoseShape::Ogive, 200);
        let points = curve.sample(12.0, 90.0).unwrap();
        for pair in points.windows(2) {
            assert!(pair[1].radius_mm >= pair[0].radius_mm - 1e-9);
        }
    }

    #[test]
    fn test_transition_sample_endpoints() {
        let curve = ProfileCurve::new(NoseShape::Conic, 50);
        let points = curve.sample_transition(10.0, 20.0, 60.0, true).unwrap();
        let first = points.first().unwrap();
        let last = points.last().unwrap();
        assert!((first.radius_mm - 10.0).abs() < 1e-6);
        assert!((last.radius_mm - 20.0).abs() < 1e-6);

        // Non-clipped starts at the fore radius as well
        let points = curve.sample_transition(10.0, 20.0, 60.0, false).unwrap();
        assert!((points.first().unwrap().radius_mm - 10.0).abs() < 1e-6);
        assert!((points.last().unwrap().radius_mm - 20.0).abs() < 1e-6);
    }

    #[test]
    fn test_clipped_ogive_continuous_at_small_end() {
        // The virtual ogive passes through the forward radius at the clip
        // plane; the first interval continues the curve instead of jumping
        let curve = ProfileCurve::new(NoseShape::Ogive, 100);
        let points = curve.sample_transition(10.0, 20.0, 60.0, true).unwrap();
        assert!((points[0].radius_mm - 10.0).abs() < 1e-6);
        assert!(points[1].radius_mm - points[0].radius_mm < 0.5);
        assert!((points.last().unwrap().radius_mm - 20.0).abs() < 1e-6);
    }

    #[test]
    fn test_clipped_transition_curved_families() {
        for shape in [
            NoseShape::Ogive,
            NoseShape::Elliptical,
            NoseShape::Haack { coefficient: 0.0 },
            NoseShape::Parabolic { coefficient: 0.5 },
            NoseShape::PowerSeries { coefficient: 0.75 },
            NoseShape::SecantOgive { circle_radius_mm: 200.0 },
        ] {
            let curve = ProfileCurve::new(shape, 50);
            let points = curve.sample_transition(10.0, 20.0, 60.0, true).unwrap();
            assert!((points[0].radius_mm - 10.0).abs() < 1e-6, "{:?}", shape);
            assert!(
                (points.last().unwrap().radius_mm - 20.0).abs() < 1e-6,
                "{:?}",
                shape
            );
            for pair in points.windows(2) {
                assert!(pair[1].radius_mm >= pair[0].radius_mm - 1e-9, "{:?}", shape);
                assert!(pair[1].radius_mm - pair[0].radius_mm < 1.0, "{:?}", shape);
            }
        }
    }

    #[test]
    fn test_transition_reversed_orientation() {
        // Fore larger than aft mirrors the profile
        let curve = ProfileCurve::new(NoseShape::Conic, 50);
        let points = curve.sample_transition(20.0, 10.0, 60.0, true).unwrap();
        assert!((points.first().unwrap().radius_mm - 20.0).abs() < 1e-6);
        assert!((points.last().unwrap().radius_mm - 10.0).abs() < 1e-6);
        assert!((points.first().unwrap().x_mm).abs() < 1e-6);
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let curve = ProfileCurve::new(NoseShape::Ogive, 0);
        let err = curve.validate(ProfileKind::NoseCone, 10.0).unwrap_err();
        assert_eq!(err.field(), Some("resolution"));
    }
}
