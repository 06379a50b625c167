//! SVG path data reading and writing.
//!
//! Reading accepts the full command set (`M L H V C S Q T A Z`, absolute and
//! relative). Writing emits absolute `M L Q C A` commands and a trailing `Z`
//! for closed paths.

use svgtypes::{PathParser, PathSegment};
use tracing::trace;

use crate::error::{ParseError, Result};
use crate::math::{points_coincide, Point2, Vector2, EPSILON};

use super::curve::{Arc, CubicBezier, Curve, Line, QuadraticBezier, Segment};
use super::Path;

/// Parses path data into one path per connected subpath.
///
/// A moveto starts a new subpath; subpaths without segments are dropped.
///
/// # Errors
///
/// Returns `ParseError::Syntax` for malformed data.
pub fn parse_subpaths(data: &str) -> Result<Vec<Path>> {
    let mut builder = PathBuilder::default();
    for segment in PathParser::from(data) {
        builder.apply(segment.map_err(ParseError::from)?)?;
    }
    builder.finish()
}

/// Parses path data into a single connected path.
///
/// A moveto to the current point is allowed; any other moveto after the
/// first segment is rejected.
pub(crate) fn parse_path(data: &str) -> Result<Path> {
    let mut subpaths = parse_subpaths(data)?.into_iter();
    let Some(mut path) = subpaths.next() else {
        return Ok(Path::new());
    };
    for subpath in subpaths {
        let (Some(end), Some(start)) = (path.end(), subpath.start()) else {
            continue;
        };
        if !points_coincide(&end, &start, EPSILON) {
            return Err(ParseError::Disconnected {
                x: start.x,
                y: start.y,
            }
            .into());
        }
        for segment in subpath {
            path.push(segment)?;
        }
    }
    Ok(path)
}

/// Writes `path` as absolute path data.
pub(crate) fn write_path_data(path: &Path) -> String {
    let Some(start) = path.start() else {
        return String::new();
    };
    let mut out = format!("M {}", coord(&start));
    for segment in path {
        let command = match segment {
            Segment::Line(l) => format!(" L {}", coord(&l.end())),
            Segment::Quadratic(q) => format!(" Q {} {}", coord(&q.control()), coord(&q.end())),
            Segment::Cubic(c) => format!(
                " C {} {} {}",
                coord(&c.control1()),
                coord(&c.control2()),
                coord(&c.end())
            ),
            Segment::Arc(a) => format!(
                " A {},{} {} {},{} {}",
                a.radius().x,
                a.radius().y,
                a.rotation(),
                u8::from(a.large_arc()),
                u8::from(a.sweep()),
                coord(&a.end())
            ),
        };
        out.push_str(&command);
    }
    if path.is_closed() {
        out.push_str(" Z");
    }
    out
}

fn coord(p: &Point2) -> String {
    format!("{},{}", p.x, p.y)
}

/// Control point left by the previous command, for `S` and `T` reflection.
#[derive(Debug, Clone, Copy)]
enum LastControl {
    None,
    Cubic(Point2),
    Quadratic(Point2),
}

struct PathBuilder {
    current: Point2,
    subpath_start: Point2,
    last_control: LastControl,
    segments: Vec<Segment>,
    subpaths: Vec<Path>,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self {
            current: Point2::origin(),
            subpath_start: Point2::origin(),
            last_control: LastControl::None,
            segments: Vec::new(),
            subpaths: Vec::new(),
        }
    }
}

impl PathBuilder {
    fn resolve(&self, abs: bool, x: f64, y: f64) -> Point2 {
        if abs {
            Point2::new(x, y)
        } else {
            self.current + Vector2::new(x, y)
        }
    }

    fn reflect(&self, control: Option<Point2>) -> Point2 {
        control.map_or(self.current, |c| self.current + (self.current - c))
    }

    fn push(&mut self, segment: Segment) {
        self.current = segment.end();
        self.segments.push(segment);
    }

    fn flush(&mut self) -> Result<()> {
        if !self.segments.is_empty() {
            let segments = std::mem::take(&mut self.segments);
            self.subpaths.push(Path::from_segments(segments)?);
        }
        Ok(())
    }

    #[allow(clippy::too_many_lines)]
    fn apply(&mut self, segment: PathSegment) -> Result<()> {
        trace!(?segment, "path command");
        let mut last_control = LastControl::None;
        match segment {
            PathSegment::MoveTo { abs, x, y } => {
                let to = self.resolve(abs, x, y);
                self.flush()?;
                self.current = to;
                self.subpath_start = to;
            }
            PathSegment::LineTo { abs, x, y } => {
                let to = self.resolve(abs, x, y);
                self.push(Line::new(self.current, to).into());
            }
            PathSegment::HorizontalLineTo { abs, x } => {
                let to = if abs {
                    Point2::new(x, self.current.y)
                } else {
                    Point2::new(self.current.x + x, self.current.y)
                };
                self.push(Line::new(self.current, to).into());
            }
            PathSegment::VerticalLineTo { abs, y } => {
                let to = if abs {
                    Point2::new(self.current.x, y)
                } else {
                    Point2::new(self.current.x, self.current.y + y)
                };
                self.push(Line::new(self.current, to).into());
            }
            PathSegment::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let c1 = self.resolve(abs, x1, y1);
                let c2 = self.resolve(abs, x2, y2);
                let to = self.resolve(abs, x, y);
                self.push(CubicBezier::new(self.current, c1, c2, to).into());
                last_control = LastControl::Cubic(c2);
            }
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                let previous = match self.last_control {
                    LastControl::Cubic(c) => Some(c),
                    _ => None,
                };
                let c1 = self.reflect(previous);
                let c2 = self.resolve(abs, x2, y2);
                let to = self.resolve(abs, x, y);
                self.push(CubicBezier::new(self.current, c1, c2, to).into());
                last_control = LastControl::Cubic(c2);
            }
            PathSegment::Quadratic { abs, x1, y1, x, y } => {
                let control = self.resolve(abs, x1, y1);
                let to = self.resolve(abs, x, y);
                self.push(QuadraticBezier::new(self.current, control, to).into());
                last_control = LastControl::Quadratic(control);
            }
            PathSegment::SmoothQuadratic { abs, x, y } => {
                let previous = match self.last_control {
                    LastControl::Quadratic(c) => Some(c),
                    _ => None,
                };
                let control = self.reflect(previous);
                let to = self.resolve(abs, x, y);
                self.push(QuadraticBezier::new(self.current, control, to).into());
                last_control = LastControl::Quadratic(control);
            }
            PathSegment::EllipticalArc {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => {
                let to = self.resolve(abs, x, y);
                if rx.abs() < EPSILON || ry.abs() < EPSILON {
                    self.push(Line::new(self.current, to).into());
                } else if !points_coincide(&self.current, &to, EPSILON) {
                    let arc = Arc::new(
                        self.current,
                        Vector2::new(rx.abs(), ry.abs()),
                        x_axis_rotation,
                        large_arc,
                        sweep,
                        to,
                    )?;
                    self.push(arc.into());
                }
            }
            PathSegment::ClosePath { .. } => {
                if !points_coincide(&self.current, &self.subpath_start, EPSILON) {
                    self.push(Line::new(self.current, self.subpath_start).into());
                }
                self.current = self.subpath_start;
            }
        }
        self.last_control = last_control;
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<Path>> {
        self.flush()?;
        Ok(self.subpaths)
    }
}
