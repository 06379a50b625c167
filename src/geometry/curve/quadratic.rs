use crate::error::{check_range, Result};
use crate::math::distance_2d::MIN_CHORD_LENGTH;
use crate::math::{lerp, to_point, Point2, PointInput, Vector2};

use super::{probe_tangent, CubicBezier, Curve};

/// A quadratic Bézier segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    start: Point2,
    control: Point2,
    end: Point2,
}

impl QuadraticBezier {
    /// Creates a new quadratic Bézier segment.
    #[must_use]
    pub fn new(start: Point2, control: Point2, end: Point2) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    /// Creates a quadratic from any point-like inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if an input cannot be read as a point.
    pub fn from_points<'a>(
        start: impl Into<PointInput<'a>>,
        control: impl Into<PointInput<'a>>,
        end: impl Into<PointInput<'a>>,
    ) -> Result<Self> {
        Ok(Self::new(to_point(start)?, to_point(control)?, to_point(end)?))
    }

    /// Returns the control point.
    #[must_use]
    pub fn control(&self) -> Point2 {
        self.control
    }

    /// Returns whether all three points coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        (self.control - self.start).norm() < MIN_CHORD_LENGTH
            && (self.end - self.start).norm() < MIN_CHORD_LENGTH
    }

    /// Exact degree elevation to a cubic Bézier.
    ///
    /// The cubic evaluates to the same point as `self` for every `t`.
    #[must_use]
    pub fn to_cubic(&self) -> CubicBezier {
        let control1 = self.start + (self.control - self.start) * (2.0 / 3.0);
        let control2 = self.end + (self.control - self.end) * (2.0 / 3.0);
        CubicBezier::new(self.start, control1, control2, self.end)
    }
}

impl Curve for QuadraticBezier {
    fn point(&self, t: f64) -> Result<Point2> {
        let mt = 1.0 - t;
        let coords =
            self.start.coords * (mt * mt) + self.control.coords * (2.0 * mt * t) + self.end.coords * (t * t);
        Ok(Point2::from(coords))
    }

    fn derivative(&self, t: f64) -> Result<Vector2> {
        Ok((self.control - self.start) * (2.0 * (1.0 - t)) + (self.end - self.control) * (2.0 * t))
    }

    fn start(&self) -> Point2 {
        self.start
    }

    fn end(&self) -> Point2 {
        self.end
    }

    fn split(&self, t: f64) -> Result<(Self, Self)> {
        check_range("t", t, 0.0, 1.0)?;
        let p01 = lerp(&self.start, &self.control, t);
        let p12 = lerp(&self.control, &self.end, t);
        let mid = lerp(&p01, &p12, t);
        Ok((Self::new(self.start, p01, mid), Self::new(mid, p12, self.end)))
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        let d = self.derivative(t)?;
        let len = d.norm();
        if len > MIN_CHORD_LENGTH {
            return Ok(d / len);
        }
        // At an end whose control point coincides with it, the direction is the chord.
        let chord = self.end - self.start;
        let chord_len = chord.norm();
        if (t <= 0.0 || t >= 1.0) && chord_len > MIN_CHORD_LENGTH {
            return Ok(chord / chord_len);
        }
        probe_tangent(self, t)
    }
}
