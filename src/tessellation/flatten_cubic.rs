use crate::geometry::{CubicBezier, Curve};
use crate::math::distance_2d::{point_to_line_dist, MIN_CHORD_LENGTH};
use crate::math::Point2;

use super::FlattenParams;

/// Distance of the control points from the chord of `cubic`.
///
/// A chord shorter than [`MIN_CHORD_LENGTH`] counts as flat and yields `0`.
#[must_use]
pub fn cubic_deviation(cubic: &CubicBezier) -> f64 {
    let [p0, p1, p2, p3] = cubic.points();
    if (p3 - p0).norm() < MIN_CHORD_LENGTH {
        return 0.0;
    }
    point_to_line_dist(&p1, &p0, &p3).max(point_to_line_dist(&p2, &p0, &p3))
}

/// Flattens a cubic into polyline vertices, starting at `cubic.start()` and
/// ending at `cubic.end()`.
///
/// The curve is halved recursively until each piece's control points lie
/// within `params.flatness` of its chord or `params.max_depth` is reached.
#[must_use]
pub fn flatten_cubic(cubic: &CubicBezier, params: &FlattenParams) -> Vec<Point2> {
    let mut points = vec![cubic.start()];
    subdivide(cubic, params, 0, &mut points);
    points
}

fn subdivide(cubic: &CubicBezier, params: &FlattenParams, depth: u32, out: &mut Vec<Point2>) {
    if depth < params.max_depth && cubic_deviation(cubic) > params.flatness {
        let (first, second) = cubic.subdivide(0.5);
        subdivide(&first, params, depth + 1, out);
        subdivide(&second, params, depth + 1, out);
    } else {
        out.push(cubic.end());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::distance_2d::max_deviation;

    fn bump() -> CubicBezier {
        CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 0.0),
        )
    }

    fn samples(cubic: &CubicBezier) -> Vec<Point2> {
        (0..=400)
            .map(|i| cubic.point(f64::from(i) / 400.0).unwrap())
            .collect()
    }

    #[test]
    fn straight_cubic_is_one_line() {
        let c = CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
        );
        let pts = flatten_cubic(&c, &FlattenParams::default());
        assert_eq!(pts, vec![c.start(), c.end()]);
    }

    #[test]
    fn endpoints_are_preserved() {
        let c = bump();
        let pts = flatten_cubic(&c, &FlattenParams::new(0.01).unwrap());
        assert_eq!(pts[0], c.start());
        assert_eq!(pts[pts.len() - 1], c.end());
    }

    #[test]
    fn stays_within_flatness() {
        let c = bump();
        for flatness in [1.0, 0.1, 0.01] {
            let pts = flatten_cubic(&c, &FlattenParams::new(flatness).unwrap());
            let dev = max_deviation(&samples(&c), &pts);
            assert!(dev <= flatness, "deviation {dev} exceeds {flatness}");
        }
    }

    #[test]
    fn smaller_flatness_never_gives_fewer_points() {
        let c = bump();
        let mut previous = 0;
        for flatness in [2.0, 1.0, 0.5, 0.1, 0.05, 0.01, 0.001] {
            let n = flatten_cubic(&c, &FlattenParams::new(flatness).unwrap()).len();
            assert!(n >= previous, "{n} < {previous} at {flatness}");
            previous = n;
        }
    }

    #[test]
    fn smaller_flatness_never_deviates_more() {
        let s_curve = CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 10.0),
            Point2::new(10.0, -10.0),
            Point2::new(10.0, 0.0),
        );
        let cusp = CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 0.0),
        );
        for c in [bump(), s_curve, cusp] {
            let curve = samples(&c);
            let mut previous = f64::INFINITY;
            for flatness in [5.0, 2.0, 1.0, 0.5, 0.1, 0.05, 0.01, 1e-3, 1e-4] {
                let pts = flatten_cubic(&c, &FlattenParams::new(flatness).unwrap());
                let dev = max_deviation(&curve, &pts);
                assert!(dev <= previous + 1e-12, "{dev} > {previous} at {flatness}");
                previous = dev;
            }
        }
    }

    #[test]
    fn zero_chord_is_flat() {
        // Closed loop: start and end coincide.
        let c = CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 5.0),
            Point2::new(-5.0, 5.0),
            Point2::new(0.0, 0.0),
        );
        assert!(cubic_deviation(&c).abs() < f64::EPSILON);
        let pts = flatten_cubic(&c, &FlattenParams::default());
        assert_eq!(pts.len(), 2);
    }

    #[test]
    fn depth_cap_limits_output() {
        let c = bump();
        let params = FlattenParams::new(1e-12).unwrap().with_max_depth(3);
        let pts = flatten_cubic(&c, &params);
        assert_eq!(pts.len(), 9);
        assert_eq!(pts[pts.len() - 1], c.end());
    }
}
