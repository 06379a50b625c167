//! Primitive shape records and their path data.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::math::EPSILON;

use super::Path;

/// A primitive shape, as found in SVG documents.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum ShapeRecord {
    /// Axis-aligned rectangle with optional corner radii.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: Option<f64>,
        ry: Option<f64>,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Polyline {
        points: Vec<(f64, f64)>,
    },
    /// Closed polyline.
    Polygon {
        points: Vec<(f64, f64)>,
    },
}

impl ShapeRecord {
    /// Returns the SVG element name of the shape.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Rect { .. } => "rect",
            Self::Circle { .. } => "circle",
            Self::Ellipse { .. } => "ellipse",
            Self::Line { .. } => "line",
            Self::Polyline { .. } => "polyline",
            Self::Polygon { .. } => "polygon",
        }
    }

    /// Returns path data tracing the shape.
    ///
    /// Circles and ellipses start at their leftmost point and are drawn as
    /// two half arcs. Rectangle corner radii follow the SVG rules: a missing
    /// radius copies the other one, and both are clamped to half the side.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for non-positive sizes and for
    /// point lists with fewer than two points.
    pub fn to_path_data(&self) -> Result<String> {
        match self {
            Self::Rect {
                x,
                y,
                width,
                height,
                rx,
                ry,
            } => rect_data(*x, *y, *width, *height, *rx, *ry),
            Self::Circle { cx, cy, r } => ellipse_data(*cx, *cy, *r, *r),
            Self::Ellipse { cx, cy, rx, ry } => ellipse_data(*cx, *cy, *rx, *ry),
            Self::Line { x1, y1, x2, y2 } => Ok(format!("M {x1},{y1} L {x2},{y2}")),
            Self::Polyline { points } => points_data(points, false),
            Self::Polygon { points } => points_data(points, true),
        }
    }

    /// Parses [`ShapeRecord::to_path_data`] into a path.
    ///
    /// # Errors
    ///
    /// See [`ShapeRecord::to_path_data`].
    pub fn to_path(&self) -> Result<Path> {
        Path::parse(&self.to_path_data()?)
    }
}

fn rect_data(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rx: Option<f64>,
    ry: Option<f64>,
) -> Result<String> {
    check_size("width", width)?;
    check_size("height", height)?;
    let (rx, ry) = match (rx, ry) {
        (None, None) => (0.0, 0.0),
        (Some(r), None) | (None, Some(r)) => (r, r),
        (Some(rx), Some(ry)) => (rx, ry),
    };
    let rx = rx.clamp(0.0, width / 2.0);
    let ry = ry.clamp(0.0, height / 2.0);
    let (right, bottom) = (x + width, y + height);

    if rx < EPSILON || ry < EPSILON {
        return Ok(format!("M {x},{y} H {right} V {bottom} H {x} Z"));
    }

    let mut d = format!("M {},{y}", x + rx);
    if width - 2.0 * rx > EPSILON {
        d.push_str(&format!(" H {}", right - rx));
    }
    d.push_str(&format!(" A {rx},{ry} 0 0 1 {right},{}", y + ry));
    if height - 2.0 * ry > EPSILON {
        d.push_str(&format!(" V {}", bottom - ry));
    }
    d.push_str(&format!(" A {rx},{ry} 0 0 1 {},{bottom}", right - rx));
    if width - 2.0 * rx > EPSILON {
        d.push_str(&format!(" H {}", x + rx));
    }
    d.push_str(&format!(" A {rx},{ry} 0 0 1 {x},{}", bottom - ry));
    if height - 2.0 * ry > EPSILON {
        d.push_str(&format!(" V {}", y + ry));
    }
    d.push_str(&format!(" A {rx},{ry} 0 0 1 {},{y} Z", x + rx));
    Ok(d)
}

fn ellipse_data(cx: f64, cy: f64, rx: f64, ry: f64) -> Result<String> {
    check_size("rx", rx)?;
    check_size("ry", ry)?;
    let (left, right) = (cx - rx, cx + rx);
    Ok(format!(
        "M {left},{cy} A {rx},{ry} 0 1 0 {right},{cy} A {rx},{ry} 0 1 0 {left},{cy} Z"
    ))
}

fn check_size(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::Degenerate(format!("shape {name} must be positive, got {value}")).into())
    }
}

fn points_data(points: &[(f64, f64)], close: bool) -> Result<String> {
    let [(x0, y0), rest @ ..] = points else {
        return Err(GeometryError::Degenerate("shape needs at least two points".into()).into());
    };
    if rest.is_empty() {
        return Err(GeometryError::Degenerate("shape needs at least two points".into()).into());
    }
    let mut d = format!("M {x0},{y0}");
    for (x, y) in rest {
        d.push_str(&format!(" L {x},{y}"));
    }
    if close {
        d.push_str(" Z");
    }
    Ok(d)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::LineaError;
    use crate::geometry::{Curve, Segment};
    use crate::math::Point2;

    #[test]
    fn plain_rect() {
        let rect = ShapeRecord::Rect {
            x: 1.0,
            y: 2.0,
            width: 10.0,
            height: 5.0,
            rx: None,
            ry: None,
        };
        assert_eq!(rect.to_path_data().unwrap(), "M 1,2 H 11 V 7 H 1 Z");
        let path = rect.to_path().unwrap();
        assert_eq!(path.len(), 4);
        assert!(path.is_closed());
    }

    #[test]
    fn rounded_rect_copies_missing_radius() {
        let rect = ShapeRecord::Rect {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
            rx: Some(2.0),
            ry: None,
        };
        let path = rect.to_path().unwrap();
        assert_eq!(path.len(), 8);
        assert!(path.is_closed());
        let arcs: Vec<_> = path
            .iter()
            .filter_map(|s| match s {
                Segment::Arc(a) => Some(a.radius()),
                _ => None,
            })
            .collect();
        assert_eq!(arcs.len(), 4);
        assert!(arcs.iter().all(|r| (r.x - 2.0).abs() < 1e-12 && (r.y - 2.0).abs() < 1e-12));
    }

    #[test]
    fn oversized_radius_is_clamped() {
        let rect = ShapeRecord::Rect {
            x: 0.0,
            y: 0.0,
            width: 4.0,
            height: 10.0,
            rx: Some(9.0),
            ry: Some(1.0),
        };
        let path = rect.to_path().unwrap();
        // Horizontal edges vanish, leaving four arcs and two vertical lines.
        assert_eq!(path.len(), 6);
        assert!(path.is_closed());
    }

    #[test]
    fn circle_is_two_half_arcs() {
        let circle = ShapeRecord::Circle {
            cx: 5.0,
            cy: 5.0,
            r: 2.0,
        };
        let path = circle.to_path().unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.start(), Some(Point2::new(3.0, 5.0)));
        assert!(path.is_closed());
        for s in &path {
            let mid = s.point(0.5).unwrap();
            assert!(((mid - Point2::new(5.0, 5.0)).norm() - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn ellipse_rejects_zero_radius() {
        let ellipse = ShapeRecord::Ellipse {
            cx: 0.0,
            cy: 0.0,
            rx: 0.0,
            ry: 1.0,
        };
        assert!(matches!(
            ellipse.to_path_data(),
            Err(LineaError::Geometry(GeometryError::Degenerate(_)))
        ));
    }

    #[test]
    fn line_and_points() {
        let line = ShapeRecord::Line {
            x1: 0.0,
            y1: 0.0,
            x2: 3.0,
            y2: 4.0,
        };
        assert_eq!(line.to_path_data().unwrap(), "M 0,0 L 3,4");

        let points = vec![(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)];
        let polyline = ShapeRecord::Polyline {
            points: points.clone(),
        };
        let polygon = ShapeRecord::Polygon { points };
        assert_eq!(polyline.to_path().unwrap().len(), 2);
        assert!(!polyline.to_path().unwrap().is_closed());
        let closed = polygon.to_path().unwrap();
        assert_eq!(closed.len(), 3);
        assert!(closed.is_closed());
        assert_eq!(polygon.tag(), "polygon");
    }

    #[test]
    fn single_point_is_degenerate() {
        let polyline = ShapeRecord::Polyline {
            points: vec![(1.0, 1.0)],
        };
        assert!(matches!(
            polyline.to_path_data(),
            Err(LineaError::Geometry(GeometryError::Degenerate(_)))
        ));
    }
}
