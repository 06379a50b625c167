use crate::error::{check_range, Result};
use crate::math::{lerp, to_point, Point2, PointInput, Vector2};

use super::{CubicBezier, Curve};

/// Default relative position of the handles produced by [`Line::to_cubic`].
pub const DEFAULT_HANDLE_RATIO: f64 = 1.0 / 3.0;

/// A straight segment from `start` to `end`.
///
/// The parametric form is: `P(t) = start + t * (end - start)`, which also
/// extrapolates for `t` outside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    start: Point2,
    end: Point2,
}

impl Line {
    /// Creates a new line segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Creates a line from any point-like inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if an input cannot be read as a point.
    pub fn from_points<'a>(
        start: impl Into<PointInput<'a>>,
        end: impl Into<PointInput<'a>>,
    ) -> Result<Self> {
        Ok(Self::new(to_point(start)?, to_point(end)?))
    }

    /// Returns the length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Converts the line to a cubic Bézier with handles at `t` and `1 - t`
    /// along the line.
    ///
    /// The result traces the same straight path but is not a degree-elevated
    /// identity: its parameterization differs unless `t = 1/3`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `t ∉ [0, 1]`.
    pub fn to_cubic(&self, t: f64) -> Result<CubicBezier> {
        check_range("t", t, 0.0, 1.0)?;
        let control1 = lerp(&self.start, &self.end, t);
        let control2 = lerp(&self.start, &self.end, 1.0 - t);
        Ok(CubicBezier::new(self.start, control1, control2, self.end))
    }
}

impl Curve for Line {
    fn point(&self, t: f64) -> Result<Point2> {
        Ok(lerp(&self.start, &self.end, t))
    }

    fn derivative(&self, _t: f64) -> Result<Vector2> {
        Ok(self.end - self.start)
    }

    fn start(&self) -> Point2 {
        self.start
    }

    fn end(&self) -> Point2 {
        self.end
    }

    fn split(&self, t: f64) -> Result<(Self, Self)> {
        check_range("t", t, 0.0, 1.0)?;
        let mid = lerp(&self.start, &self.end, t);
        Ok((Self::new(self.start, mid), Self::new(mid, self.end)))
    }
}
