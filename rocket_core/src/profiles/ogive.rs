//! Circular-arc profile families: tangent ogive, secant ogive, and the
//! blunted cone/ogive variants whose tip is replaced by a tangent
//! spherical cap.
//!
//! Conventions match the rest of the library: `x` runs from the tip
//! (x = 0) to the base (x = l), radii are positive. Blunted profiles are
//! generated against the theoretical sharp length and shifted so the
//! spherical apex sits at x = 0; the realized solid is shorter than the
//! sharp profile by the truncated tip.

use crate::recipe::ProfilePoint;

/// Tangent ogive: arc of radius (r^2 + l^2) / 2r centered on the base
/// plane.
pub(super) fn tangent_ogive(r: f64, l: f64, x: f64) -> f64 {
    let rho = (r * r + l * l) / (2.0 * r);
    (rho * rho - (l - x) * (l - x)).max(0.0).sqrt() + r - rho
}

/// Secant ogive radius at `x`, for an arc of explicit circle radius
/// passing through the tip and the base edge. Returns `None` when the
/// tip-to-base chord is longer than the circle's diameter.
pub(super) fn secant(r: f64, l: f64, circle_radius: f64, x: f64) -> Option<f64> {
    let d = l * l + r * r;
    let discriminant = 4.0 * circle_radius * circle_radius - d;
    if discriminant < 0.0 {
        // Chord from tip to base edge does not fit on the circle
        return None;
    }

    // Arc center below the axis, from the tip/base chord
    let x_c = l / 2.0 + (r / 2.0) * (discriminant / d).sqrt();
    let y_c = (d - 2.0 * l * x_c) / (2.0 * r);
    let y = y_c + (circle_radius * circle_radius - (x - x_c) * (x - x_c)).max(0.0).sqrt();
    Some(y.max(0.0))
}

/// Sample the secant ogive into a polyline.
pub(super) fn sample_secant(
    r: f64,
    l: f64,
    circle_radius: f64,
    resolution: u32,
) -> Option<Vec<ProfilePoint>> {
    let n = resolution as usize;
    let mut points = Vec::with_capacity(n + 1);
    for i in 0..=n {
        let x = l * (i as f64) / (n as f64);
        points.push(ProfilePoint::new(x, secant(r, l, circle_radius, x)?));
    }
    // Pin the endpoints against rounding
    points[0] = ProfilePoint::new(0.0, 0.0);
    points[n] = ProfilePoint::new(l, r);
    Some(points)
}

/// Cone with a tangent spherical tip of radius `nose_radius`.
pub(super) fn sample_blunted_conic(
    r: f64,
    l: f64,
    nose_radius: f64,
    resolution: u32,
) -> Option<Vec<ProfilePoint>> {
    let d = (r * r + l * l).sqrt();
    // Sphere center on the axis, tangent to the cone flank
    let x_center = nose_radius * d / r;
    let x_tangent = x_center * l * l / (d * d);
    let x_apex = x_center - nose_radius;
    if x_tangent >= l || x_apex < 0.0 {
        return None;
    }

    let sphere = |x: f64| (nose_radius * nose_radius - (x - x_center) * (x - x_center)).max(0.0).sqrt();
    let cone = |x: f64| r * x / l;
    Some(sample_composite(
        x_apex,
        x_tangent,
        l,
        r,
        resolution,
        sphere,
        cone,
    ))
}

/// Tangent ogive with a tangent spherical tip of radius `nose_radius`.
pub(super) fn sample_blunted_ogive(
    r: f64,
    l: f64,
    nose_radius: f64,
    resolution: u32,
) -> Option<Vec<ProfilePoint>> {
    let rho = (r * r + l * l) / (2.0 * r);
    if nose_radius >= rho {
        return None;
    }
    // Internal tangency between the tip sphere and the ogive arc
    let reach = (rho - nose_radius) * (rho - nose_radius) - (rho - r) * (rho - r);
    if reach < 0.0 {
        return None;
    }
    let x_center = l - reach.sqrt();
    let x_apex = x_center - nose_radius;
    let x_tangent = l + rho * (x_center - l) / (rho - nose_radius);
    if x_apex < 0.0 || x_tangent >= l || x_tangent <= x_apex {
        return None;
    }

    let sphere = |x: f64| (nose_radius * nose_radius - (x - x_center) * (x - x_center)).max(0.0).sqrt();
    let arc = |x: f64| tangent_ogive(r, l, x);
    Some(sample_composite(
        x_apex,
        x_tangent,
        l,
        r,
        resolution,
        sphere,
        arc,
    ))
}

/// Uniformly sample a two-piece profile (spherical cap up to the tangency
/// point, body curve beyond it) over [x_apex, l], shifted so the apex
/// lands at x = 0.
fn sample_composite<S, B>(
    x_apex: f64,
    x_tangent: f64,
    l: f64,
    r: f64,
    resolution: u32,
    sphere: S,
    body: B,
) -> Vec<ProfilePoint>
where
    S: Fn(f64) -> f64,
    B: Fn(f64) -> f64,
{
    let n = resolution as usize;
    let span = l - x_apex;
    let mut points = Vec::with_capacity(n + 1);
    for i in 0..=n {
        let x = x_apex + span * (i as f64) / (n as f64);
        let y = if x <= x_tangent { sphere(x) } else { body(x) };
        points.push(ProfilePoint::new(x - x_apex, y.max(0.0)));
    }
    points[0] = ProfilePoint::new(0.0, 0.0);
    points[n] = ProfilePoint::new(span, r);
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: f64 = 10.0;
    const L: f64 = 80.0;

    #[test]
    fn test_tangent_ogive_endpoints() {
        assert!(tangent_ogive(R, L, 0.0).abs() < 1e-9);
        assert!((tangent_ogive(R, L, L) - R).abs() < 1e-9);
    }

    #[test]
    fn test_secant_reduces_to_tangent() {
        // At the tangent-ogive radius the secant arc center sits on the
        // base plane, so the curves coincide
        let rho = (R * R + L * L) / (2.0 * R);
        let points = sample_secant(R, L, rho, 100).unwrap();
        for p in &points {
            let expected = tangent_ogive(R, L, p.x_mm);
            assert!((p.radius_mm - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_secant_degenerate_radius() {
        // Circle smaller than half the tip-to-base chord cannot exist
        let chord = (L * L + R * R).sqrt();
        assert!(sample_secant(R, L, chord / 2.0 - 1.0, 50).is_none());
        assert!(sample_secant(R, L, chord / 2.0 + 1.0, 50).is_some());
    }

    #[test]
    fn test_blunted_conic_shape() {
        let points = sample_blunted_conic(R, L, 3.0, 200).unwrap();
        // Starts at the apex with zero radius, ends at the full base
        assert!(points[0].radius_mm.abs() < 1e-9);
        let last = points.last().unwrap();
        assert!((last.radius_mm - R).abs() < 1e-9);
        // Realized length is shorter than the sharp cone
        assert!(last.x_mm < L);
        // Radius never exceeds the base
        assert!(points.iter().all(|p| p.radius_mm <= R + 1e-9));
    }

    #[test]
    fn test_blunted_ogive_shape() {
        let points = sample_blunted_ogive(R, L, 3.0, 200).unwrap();
        assert!(points[0].radius_mm.abs() < 1e-9);
        let last = points.last().unwrap();
        assert!((last.radius_mm - R).abs() < 1e-9);
        assert!(last.x_mm < L);
        for pair in points.windows(2) {
            assert!(pair[1].radius_mm >= pair[0].radius_mm - 1e-9);
        }
    }

    #[test]
    fn test_blunted_conic_oversized_tip() {
        // Sampling guards against a tangency beyond the base even for
        // inputs that bypassed validation
        assert!(sample_blunted_conic(10.0, 12.0, 14.0, 50).is_none());
    }
}
