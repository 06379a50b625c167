use crate::error::{check_range, Result};
use crate::geometry::Path;
use crate::math::distance_2d::MIN_CHORD_LENGTH;
use crate::math::{lerp, to_point, Point2, PointInput, Vector2};
use crate::tessellation::{flatten_cubic, FlattenParams};

use super::{probe_tangent, Curve};

/// Flatness used by [`CubicBezier::as_polyline`] when called through
/// [`CubicBezier::as_polyline_default`].
pub const DEFAULT_CUBIC_FLATNESS: f64 = 0.01;

/// A cubic Bézier segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    start: Point2,
    control1: Point2,
    control2: Point2,
    end: Point2,
}

impl CubicBezier {
    /// Creates a new cubic Bézier segment.
    #[must_use]
    pub fn new(start: Point2, control1: Point2, control2: Point2, end: Point2) -> Self {
        Self {
            start,
            control1,
            control2,
            end,
        }
    }

    /// Creates a cubic from any point-like inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if an input cannot be read as a point.
    pub fn from_points<'a>(
        start: impl Into<PointInput<'a>>,
        control1: impl Into<PointInput<'a>>,
        control2: impl Into<PointInput<'a>>,
        end: impl Into<PointInput<'a>>,
    ) -> Result<Self> {
        Ok(Self::new(
            to_point(start)?,
            to_point(control1)?,
            to_point(control2)?,
            to_point(end)?,
        ))
    }

    /// Returns the first control point.
    #[must_use]
    pub fn control1(&self) -> Point2 {
        self.control1
    }

    /// Returns the second control point.
    #[must_use]
    pub fn control2(&self) -> Point2 {
        self.control2
    }

    /// Returns `[start, control1, control2, end]`.
    #[must_use]
    pub fn points(&self) -> [Point2; 4] {
        [self.start, self.control1, self.control2, self.end]
    }

    /// Returns a copy with the control points replaced.
    #[must_use]
    pub fn with_controls(&self, control1: Point2, control2: Point2) -> Self {
        Self::new(self.start, control1, control2, self.end)
    }

    /// Returns whether all four points coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let [p0, p1, p2, p3] = self.points();
        (p1 - p0).norm() < MIN_CHORD_LENGTH
            && (p2 - p0).norm() < MIN_CHORD_LENGTH
            && (p3 - p0).norm() < MIN_CHORD_LENGTH
    }

    /// Flattens the curve into a path of lines deviating by at most
    /// `flatness` (up to the recursion cap).
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if `flatness` is not positive.
    pub fn as_polyline(&self, flatness: f64) -> Result<Path> {
        let params = FlattenParams::new(flatness)?;
        Ok(Path::polyline(&flatten_cubic(self, &params)))
    }

    /// [`CubicBezier::as_polyline`] with [`DEFAULT_CUBIC_FLATNESS`].
    ///
    /// # Errors
    ///
    /// Does not fail for the default flatness; the `Result` mirrors `as_polyline`.
    pub fn as_polyline_default(&self) -> Result<Path> {
        self.as_polyline(DEFAULT_CUBIC_FLATNESS)
    }

    /// De Casteljau split, without range checking.
    #[must_use]
    pub(crate) fn subdivide(&self, t: f64) -> (Self, Self) {
        let p01 = lerp(&self.start, &self.control1, t);
        let p12 = lerp(&self.control1, &self.control2, t);
        let p23 = lerp(&self.control2, &self.end, t);
        let p012 = lerp(&p01, &p12, t);
        let p123 = lerp(&p12, &p23, t);
        let mid = lerp(&p012, &p123, t);
        (
            Self::new(self.start, p01, p012, mid),
            Self::new(mid, p123, p23, self.end),
        )
    }
}

impl Curve for CubicBezier {
    fn point(&self, t: f64) -> Result<Point2> {
        let mt = 1.0 - t;
        let coords = self.start.coords * (mt * mt * mt)
            + self.control1.coords * (3.0 * mt * mt * t)
            + self.control2.coords * (3.0 * mt * t * t)
            + self.end.coords * (t * t * t);
        Ok(Point2::from(coords))
    }

    fn derivative(&self, t: f64) -> Result<Vector2> {
        let mt = 1.0 - t;
        Ok((self.control1 - self.start) * (3.0 * mt * mt)
            + (self.control2 - self.control1) * (6.0 * mt * t)
            + (self.end - self.control2) * (3.0 * t * t))
    }

    fn start(&self) -> Point2 {
        self.start
    }

    fn end(&self) -> Point2 {
        self.end
    }

    fn split(&self, t: f64) -> Result<(Self, Self)> {
        check_range("t", t, 0.0, 1.0)?;
        Ok(self.subdivide(t))
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        let d = self.derivative(t)?;
        let len = d.norm();
        if len > MIN_CHORD_LENGTH {
            return Ok(d / len);
        }
        // At an end with coincident handles the direction comes from the next
        // distinct control point.
        let ordered = if t <= 0.0 {
            Some([self.start, self.control1, self.control2, self.end])
        } else if t >= 1.0 {
            Some([self.end, self.control2, self.control1, self.start])
        } else {
            None
        };
        if let Some([anchor, rest @ ..]) = ordered {
            let sign = if t <= 0.0 { 1.0 } else { -1.0 };
            if let Some(dir) = rest
                .iter()
                .map(|p| *p - anchor)
                .find(|v| v.norm() > MIN_CHORD_LENGTH)
            {
                return Ok(dir.normalize() * sign);
            }
        }
        probe_tangent(self, t)
    }
}
