//! Closed-form profile families: conic, elliptical, Haack, parabolic and
//! power series. Each function returns the radius at axial position `x`
//! measured from the tip, for a curve of base radius `r` and length `l`.

use crate::recipe::ProfilePoint;

/// Straight cone: linear interpolation from the tip to the base.
pub(super) fn conic(r: f64, l: f64, x: f64) -> f64 {
    r * x / l
}

/// Quarter ellipse with semi-major axis `l` and semi-minor axis `r`.
pub(super) fn elliptical(r: f64, l: f64, x: f64) -> f64 {
    let t = (l - x) / l;
    r * (1.0 - t * t).max(0.0).sqrt()
}

/// Haack series. C = 0 gives the Von Karman (LD-Haack) profile,
/// C = 1/3 the LV-Haack profile.
pub(super) fn haack(r: f64, l: f64, x: f64, coefficient: f64) -> f64 {
    let theta = (1.0 - 2.0 * x / l).clamp(-1.0, 1.0).acos();
    let term = theta - (2.0 * theta).sin() / 2.0 + coefficient * theta.sin().powi(3);
    r / std::f64::consts::PI.sqrt() * term.max(0.0).sqrt()
}

/// Parabolic series, coefficient in [0, 1]. C = 0 degenerates to the
/// cone, C = 1 is the full parabola tangent at the base.
pub(super) fn parabolic(r: f64, l: f64, x: f64, coefficient: f64) -> f64 {
    let t = x / l;
    r * (2.0 * t - coefficient * t * t) / (2.0 - coefficient)
}

/// Power series, coefficient in (0, 1]. C = 1 degenerates to the cone,
/// C = 0.5 is the parabola of revolution.
pub(super) fn power(r: f64, l: f64, x: f64, coefficient: f64) -> f64 {
    r * (x / l).powf(coefficient)
}

/// Evaluate a radius function at `resolution + 1` evenly spaced axial
/// stations from the tip to the base.
pub(super) fn sample_closed_form<F>(r: f64, l: f64, resolution: u32, f: F) -> Vec<ProfilePoint>
where
    F: Fn(f64, f64, f64) -> f64,
{
    let n = resolution as usize;
    let mut points = Vec::with_capacity(n + 1);
    for i in 0..=n {
        let x = l * (i as f64) / (n as f64);
        points.push(ProfilePoint::new(x, f(r, l, x).max(0.0)));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: f64 = 10.0;
    const L: f64 = 80.0;

    #[test]
    fn test_conic_midpoint() {
        assert!((conic(R, L, 40.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_elliptical_endpoints() {
        assert!(elliptical(R, L, 0.0).abs() < 1e-12);
        assert!((elliptical(R, L, L) - R).abs() < 1e-12);
    }

    #[test]
    fn test_haack_von_karman_base() {
        // theta(L) = pi, so the term reduces to pi and the radius to R
        assert!((haack(R, L, L, 0.0) - R).abs() < 1e-9);
        assert!(haack(R, L, 0.0, 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_parabolic_degenerates_to_cone() {
        for x in [0.0, 20.0, 55.0, L] {
            assert!((parabolic(R, L, x, 0.0) - conic(R, L, x)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_power_unity_is_cone() {
        for x in [0.0, 20.0, 55.0, L] {
            assert!((power(R, L, x, 1.0) - conic(R, L, x)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_power_half_is_parabola_of_revolution() {
        // r(x)^2 proportional to x
        let r1 = power(R, L, 20.0, 0.5);
        let r2 = power(R, L, 40.0, 0.5);
        assert!((r2 * r2 / (r1 * r1) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_sample_count() {
        let points = sample_closed_form(R, L, 64, conic);
        assert_eq!(points.len(), 65);
        assert_eq!(points[0].x_mm, 0.0);
        assert!((points[64].x_mm - L).abs() < 1e-12);
    }
}
