//! Generalized Bezier evaluation and fixed-resolution sampling

use epicycles_core::CartesianPoint;

/// Evaluate the Bezier curve over `control_points` at `t`
///
/// Repeatedly replaces the control polygon by the lerps of its consecutive
/// points until one point is left (de Casteljau). Any number of control
/// points is accepted; a single point is returned as is and an empty slice
/// yields `None`.
pub fn bezier_point(control_points: &[CartesianPoint], t: f64) -> Option<CartesianPoint> {
    let mut points = control_points.to_vec();
    while points.len() > 1 {
        points = points.windows(2).map(|w| w[0].lerp(w[1], t)).collect();
    }
    points.pop()
}

/// Sample `f` at `count` evenly spaced parameters `t = i * (1 / count)`
///
/// The endpoint `t = 1` is never reached.
pub fn sample_parametric<F>(count: usize, f: F) -> impl Iterator<Item = CartesianPoint>
where
    F: Fn(f64) -> CartesianPoint,
{
    let step = 1.0 / count as f64;
    (0..count).map(move |i| f(i as f64 * step))
}

/// `count` samples along the straight segment from `from` towards `to`
pub fn sample_line(from: CartesianPoint, to: CartesianPoint, count: usize) -> Vec<CartesianPoint> {
    sample_parametric(count, |t| from.lerp(to, t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> CartesianPoint {
        CartesianPoint::new(x, y)
    }

    #[test]
    fn test_cubic_endpoints() {
        let cps = [pt(0.0, 0.0), pt(1.0, 2.0), pt(3.0, 2.0), pt(4.0, 0.0)];
        assert_eq!(bezier_point(&cps, 0.0), Some(cps[0]));
        assert_eq!(bezier_point(&cps, 1.0), Some(cps[3]));
    }

    #[test]
    fn test_cubic_midpoint() {
        let cps = [pt(0.0, 0.0), pt(0.0, 1.0), pt(1.0, 1.0), pt(1.0, 0.0)];
        let mid = bezier_point(&cps, 0.5).unwrap();
        assert!((mid.x - 0.5).abs() < 1e-12);
        assert!((mid.y - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_quadratic_matches_closed_form() {
        let (p0, p1, p2) = (pt(0.0, 0.0), pt(2.0, 4.0), pt(4.0, 0.0));
        let t = 0.3;
        let got = bezier_point(&[p0, p1, p2], t).unwrap();
        let u = 1.0 - t;
        let x = u * u * p0.x + 2.0 * u * t * p1.x + t * t * p2.x;
        let y = u * u * p0.y + 2.0 * u * t * p1.y + t * t * p2.y;
        assert!((got.x - x).abs() < 1e-12);
        assert!((got.y - y).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(bezier_point(&[], 0.5), None);
        assert_eq!(bezier_point(&[pt(3.0, 4.0)], 0.5), Some(pt(3.0, 4.0)));
        assert_eq!(
            bezier_point(&[pt(0.0, 0.0), pt(2.0, 2.0)], 0.25),
            Some(pt(0.5, 0.5))
        );
    }

    #[test]
    fn test_sample_line_excludes_endpoint() {
        let samples = sample_line(pt(0.0, 0.0), pt(10.0, 0.0), 100);
        assert_eq!(samples.len(), 100);
        assert_eq!(samples[0], pt(0.0, 0.0));
        let last = samples[99];
        assert!(last.x < 10.0);
        assert!(10.0 - last.x <= 0.1 + 1e-12);
    }
}
