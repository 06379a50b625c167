mod arc;
mod cubic;
mod line;
mod quadratic;

pub use arc::Arc;
pub use cubic::CubicBezier;
pub use line::{Line, DEFAULT_HANDLE_RATIO};
pub use quadratic::QuadraticBezier;

use crate::error::{GeometryError, Result};
use crate::math::distance_2d::MIN_CHORD_LENGTH;
use crate::math::{rotate_cw, Point2, Vector2};

/// Parameter window used to recover a direction where the derivative vanishes.
const TANGENT_PROBE: f64 = 1e-6;

/// Trait for parametric 2D path segments defined on `t ∈ [0, 1]`.
pub trait Curve {
    /// Evaluates the segment at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment kind does not support `t`.
    fn point(&self, t: f64) -> Result<Point2>;

    /// Derivative `dP/dt` at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment kind does not support `t`.
    fn derivative(&self, t: f64) -> Result<Vector2>;

    /// Returns the point at `t = 0`.
    fn start(&self) -> Point2;

    /// Returns the point at `t = 1`.
    fn end(&self) -> Point2;

    /// Splits the segment at `t` into two segments that together reproduce it.
    ///
    /// Splitting at `0` or `1` yields one zero-length piece.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `t ∉ [0, 1]`.
    fn split(&self, t: f64) -> Result<(Self, Self)>
    where
        Self: Sized;

    /// Unit tangent in the direction of travel at `t`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the direction is undefined.
    fn tangent(&self, t: f64) -> Result<Vector2> {
        let d = self.derivative(t)?;
        let len = d.norm();
        if len > MIN_CHORD_LENGTH {
            return Ok(d / len);
        }
        probe_tangent(self, t)
    }

    /// Unit normal at `t`: the tangent turned a quarter clockwise.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the direction is undefined.
    fn normal(&self, t: f64) -> Result<Vector2> {
        Ok(rotate_cw(&self.tangent(t)?))
    }
}

/// Direction from a short chord around `t`, for points where `dP/dt = 0`.
fn probe_tangent<C: Curve + ?Sized>(curve: &C, t: f64) -> Result<Vector2> {
    let lo = (t - TANGENT_PROBE).clamp(0.0, 1.0);
    let hi = (t + TANGENT_PROBE).clamp(0.0, 1.0);
    let chord = curve.point(hi)? - curve.point(lo)?;
    let len = chord.norm();
    if len > 0.0 && len.is_finite() {
        Ok(chord / len)
    } else {
        Err(GeometryError::ZeroVector.into())
    }
}

/// One atomic path primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line(Line),
    Quadratic(QuadraticBezier),
    Cubic(CubicBezier),
    Arc(Arc),
}

impl Segment {
    /// Returns whether the segment has no extent.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        match self {
            Self::Line(line) => line.length() < MIN_CHORD_LENGTH,
            Self::Quadratic(quad) => quad.is_degenerate(),
            Self::Cubic(cubic) => cubic.is_degenerate(),
            Self::Arc(arc) => arc.is_degenerate(),
        }
    }

    /// Returns the cubic Bézier form of this segment.
    ///
    /// Lines use [`DEFAULT_HANDLE_RATIO`], quadratics are degree-elevated and
    /// arcs expand into a sequence approximating them within `arc_error`.
    ///
    /// # Errors
    ///
    /// Returns an error if `arc_error` is not positive.
    pub fn to_cubics(&self, arc_error: f64) -> Result<Vec<CubicBezier>> {
        match self {
            Self::Line(line) => Ok(vec![line.to_cubic(DEFAULT_HANDLE_RATIO)?]),
            Self::Quadratic(quad) => Ok(vec![quad.to_cubic()]),
            Self::Cubic(cubic) => Ok(vec![*cubic]),
            Self::Arc(arc) => arc.to_cubics(arc_error),
        }
    }

    /// Returns the cubic if this is a [`Segment::Cubic`].
    #[must_use]
    pub fn as_cubic(&self) -> Option<&CubicBezier> {
        match self {
            Self::Cubic(cubic) => Some(cubic),
            _ => None,
        }
    }

    /// Returns the line if this is a [`Segment::Line`].
    #[must_use]
    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Self::Line(line) => Some(line),
            _ => None,
        }
    }
}

impl Curve for Segment {
    fn point(&self, t: f64) -> Result<Point2> {
        match self {
            Self::Line(line) => line.point(t),
            Self::Quadratic(quad) => quad.point(t),
            Self::Cubic(cubic) => cubic.point(t),
            Self::Arc(arc) => arc.point(t),
        }
    }

    fn derivative(&self, t: f64) -> Result<Vector2> {
        match self {
            Self::Line(line) => line.derivative(t),
            Self::Quadratic(quad) => quad.derivative(t),
            Self::Cubic(cubic) => cubic.derivative(t),
            Self::Arc(arc) => arc.derivative(t),
        }
    }

    fn start(&self) -> Point2 {
        match self {
            Self::Line(line) => line.start(),
            Self::Quadratic(quad) => quad.start(),
            Self::Cubic(cubic) => cubic.start(),
            Self::Arc(arc) => arc.start(),
        }
    }

    fn end(&self) -> Point2 {
        match self {
            Self::Line(line) => line.end(),
            Self::Quadratic(quad) => quad.end(),
            Self::Cubic(cubic) => cubic.end(),
            Self::Arc(arc) => arc.end(),
        }
    }

    fn split(&self, t: f64) -> Result<(Self, Self)> {
        Ok(match self {
            Self::Line(line) => {
                let (a, b) = line.split(t)?;
                (a.into(), b.into())
            }
            Self::Quadratic(quad) => {
                let (a, b) = quad.split(t)?;
                (a.into(), b.into())
            }
            Self::Cubic(cubic) => {
                let (a, b) = cubic.split(t)?;
                (a.into(), b.into())
            }
            Self::Arc(arc) => {
                let (a, b) = arc.split(t)?;
                (a.into(), b.into())
            }
        })
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        match self {
            Self::Line(line) => line.tangent(t),
            Self::Quadratic(quad) => quad.tangent(t),
            Self::Cubic(cubic) => cubic.tangent(t),
            Self::Arc(arc) => arc.tangent(t),
        }
    }
}

impl From<Line> for Segment {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<QuadraticBezier> for Segment {
    fn from(quad: QuadraticBezier) -> Self {
        Self::Quadratic(quad)
    }
}

impl From<CubicBezier> for Segment {
    fn from(cubic: CubicBezier) -> Self {
        Self::Cubic(cubic)
    }
}

impl From<Arc> for Segment {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn segment_dispatches_to_variant() {
        let seg: Segment = Line::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0)).into();
        let p = seg.point(0.25).unwrap();
        assert!((p.x - 1.0).abs() < 1e-12);
        assert_eq!(seg.start(), Point2::new(0.0, 0.0));
        assert_eq!(seg.end(), Point2::new(4.0, 0.0));
    }

    #[test]
    fn segment_split_keeps_variant() {
        let seg: Segment = QuadraticBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 0.0),
        )
        .into();
        let (a, b) = seg.split(0.5).unwrap();
        assert!(matches!(a, Segment::Quadratic(_)));
        assert!(matches!(b, Segment::Quadratic(_)));
        assert!((a.end() - b.start()).norm() < 1e-12);
    }

    #[test]
    fn zero_length_line_has_no_tangent() {
        let seg: Segment = Line::new(Point2::new(1.0, 1.0), Point2::new(1.0, 1.0)).into();
        assert!(seg.is_degenerate());
        assert!(seg.tangent(0.5).is_err());
        assert!(seg.normal(0.5).is_err());
    }

    #[test]
    fn normal_is_clockwise_of_tangent() {
        let seg: Segment = Line::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)).into();
        let n = seg.normal(0.3).unwrap();
        assert!(n.x.abs() < 1e-12);
        assert!((n.y + 1.0).abs() < 1e-12);
    }

    #[test]
    fn line_to_cubics_is_single_cubic() {
        let seg: Segment = Line::new(Point2::new(0.0, 0.0), Point2::new(3.0, 0.0)).into();
        let cubics = seg.to_cubics(0.1).unwrap();
        assert_eq!(cubics.len(), 1);
        assert!((cubics[0].control1().x - 1.0).abs() < 1e-12);
    }
}
