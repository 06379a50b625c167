use std::f64::consts::PI;

use crate::error::{check_positive, check_range, GeometryError, Result};
use crate::math::arc_2d::{arc_center_from_endpoints, arc_cubic_count, cubic_handle_factor, ArcCenter};
use crate::math::{points_coincide, Point2, Vector2, EPSILON};

use super::{CubicBezier, Curve};

/// An elliptical arc segment in SVG endpoint form.
///
/// The arc runs from `start` to `end` along the ellipse with radii
/// `radius = (rx, ry)` whose x axis is rotated by `rotation` degrees. Of the
/// four candidate arcs, `large_arc` picks the one sweeping more than 180° and
/// `sweep` picks the one travelling in the direction of increasing angle.
///
/// The center parameterization is computed once at construction and `t`
/// maps linearly onto the swept angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    start: Point2,
    end: Point2,
    radius: Vector2,
    rotation: f64,
    large_arc: bool,
    sweep: bool,
    params: ArcCenter,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// Radii too small to span the chord are scaled up uniformly, as SVG
    /// renderers do; [`Arc::radius`] reports the effective radii.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if either radius is zero or the
    /// endpoints coincide.
    pub fn new(
        start: Point2,
        radius: Vector2,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: Point2,
    ) -> Result<Self> {
        if radius.x.abs() < EPSILON || radius.y.abs() < EPSILON {
            return Err(GeometryError::Degenerate("arc radius must be non-zero".into()).into());
        }
        if points_coincide(&start, &end, EPSILON) {
            return Err(GeometryError::Degenerate("arc endpoints coincide".into()).into());
        }
        let params = arc_center_from_endpoints(
            &start, &end, radius.x, radius.y, rotation, large_arc, sweep,
        )
        .ok_or_else(|| GeometryError::Degenerate("arc has no center".into()))?;

        Ok(Self {
            start,
            end,
            radius: Vector2::new(params.rx, params.ry),
            rotation,
            large_arc,
            sweep,
            params,
        })
    }

    /// Builds a sub-arc sharing `parent`'s ellipse.
    fn sub_arc(parent: &Self, start: Point2, end: Point2, theta1: f64, delta: f64) -> Self {
        Self {
            start,
            end,
            radius: parent.radius,
            rotation: parent.rotation,
            large_arc: delta.abs() > PI,
            sweep: parent.sweep,
            params: ArcCenter {
                theta1,
                delta,
                ..parent.params
            },
        }
    }

    /// Returns the effective radii `(rx, ry)`.
    #[must_use]
    pub fn radius(&self) -> Vector2 {
        self.radius
    }

    /// Returns the x-axis rotation in degrees.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Returns the large-arc flag.
    #[must_use]
    pub fn large_arc(&self) -> bool {
        self.large_arc
    }

    /// Returns the sweep flag.
    #[must_use]
    pub fn sweep(&self) -> bool {
        self.sweep
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.params.center
    }

    /// Returns the center parameterization.
    #[must_use]
    pub fn center_params(&self) -> &ArcCenter {
        &self.params
    }

    /// Returns whether the arc sweeps no angle.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.params.delta.abs() < EPSILON
    }

    /// Approximates the arc with a sequence of cubic Béziers.
    ///
    /// Each cubic spans at most 90° and deviates from the arc by at most
    /// `error`; the first cubic starts exactly at [`Curve::start`] and the
    /// last ends exactly at [`Curve::end`]. Very tight tolerances stop at
    /// [`crate::math::arc_2d::MAX_ARC_CUBICS`] pieces.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if `error` is not positive.
    pub fn to_cubics(&self, error: f64) -> Result<Vec<CubicBezier>> {
        check_positive("error", error)?;
        let p = &self.params;
        let n = arc_cubic_count(p.rx.max(p.ry), p.delta.abs(), error);
        #[allow(clippy::cast_precision_loss)]
        let piece = p.delta / n as f64;
        let k = cubic_handle_factor(piece);

        #[allow(clippy::cast_precision_loss)]
        let angles: Vec<f64> = (0..=n).map(|i| p.theta1 + piece * i as f64).collect();
        let mut knots: Vec<Point2> = angles.iter().map(|&a| p.point_at_angle(a)).collect();
        knots[0] = self.start;
        knots[n] = self.end;

        Ok((0..n)
            .map(|i| {
                let c1 = knots[i] + p.derivative_at_angle(angles[i]) * k;
                let c2 = knots[i + 1] - p.derivative_at_angle(angles[i + 1]) * k;
                CubicBezier::new(knots[i], c1, c2, knots[i + 1])
            })
            .collect())
    }
}

impl Curve for Arc {
    fn point(&self, t: f64) -> Result<Point2> {
        check_range("t", t, 0.0, 1.0)?;
        if t <= 0.0 {
            return Ok(self.start);
        }
        if t >= 1.0 {
            return Ok(self.end);
        }
        Ok(self.params.point_at_angle(self.params.angle_at(t)))
    }

    fn derivative(&self, t: f64) -> Result<Vector2> {
        check_range("t", t, 0.0, 1.0)?;
        Ok(self.params.derivative_at_angle(self.params.angle_at(t)) * self.params.delta)
    }

    fn start(&self) -> Point2 {
        self.start
    }

    fn end(&self) -> Point2 {
        self.end
    }

    fn split(&self, t: f64) -> Result<(Self, Self)> {
        let mid = self.point(t)?;
        let angle = self.params.angle_at(t);
        let first = Self::sub_arc(self, self.start, mid, self.params.theta1, self.params.delta * t);
        let second = Self::sub_arc(self, mid, self.end, angle, self.params.delta * (1.0 - t));
        Ok((first, second))
    }
}
