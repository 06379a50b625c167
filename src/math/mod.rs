pub mod arc_2d;
pub mod distance_2d;
mod point;

pub use point::{to_point, HasCoordinates, PointInput};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Tolerance for structural joins: segment adjacency, path closure and
/// ring closure all use it.
pub const EPSILON: f64 = 1e-9;

/// Returns whether two points coincide within `tolerance`.
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2, tolerance: f64) -> bool {
    (a - b).norm() <= tolerance
}

/// Rotates a vector a quarter turn clockwise: `(x, y) -> (y, -x)`.
#[must_use]
pub fn rotate_cw(v: &Vector2) -> Vector2 {
    Vector2::new(v.y, -v.x)
}

/// 2D cross product (z component of the 3D cross product).
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Linear interpolation between two points.
#[must_use]
pub fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_cw_of_x_axis_points_down() {
        let n = rotate_cw(&Vector2::new(1.0, 0.0));
        assert!(n.x.abs() < 1e-12);
        assert!((n.y + 1.0).abs() < 1e-12);
    }

    #[test]
    fn cross_sign() {
        assert!(cross_2d(&Vector2::new(1.0, 0.0), &Vector2::new(0.0, 1.0)) > 0.0);
        assert!(cross_2d(&Vector2::new(0.0, 1.0), &Vector2::new(1.0, 0.0)) < 0.0);
    }

    #[test]
    fn coincidence_uses_tolerance() {
        let a = Point2::new(1.0, 1.0);
        let b = Point2::new(1.0 + 1e-10, 1.0);
        assert!(points_coincide(&a, &b, EPSILON));
        assert!(!points_coincide(&a, &Point2::new(1.1, 1.0), EPSILON));
    }

    #[test]
    fn lerp_midpoint() {
        let m = lerp(&Point2::new(0.0, 0.0), &Point2::new(4.0, 2.0), 0.5);
        assert!((m.x - 2.0).abs() < 1e-12);
        assert!((m.y - 1.0).abs() < 1e-12);
    }
}
