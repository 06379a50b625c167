use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::error::{GeometryError, LineaError, Result};
use crate::export::{ExportGeometry, PathGeometry};
use crate::math::{points_coincide, Point2, EPSILON};
use crate::operations::conversion::PathToCubics;
use crate::operations::offset::{OffsetParams, SampledOffset2D};
use crate::operations::smoothing::{FindKinks, SmoothJoints, SmoothParams};
use crate::tessellation::{FlattenParams, FlattenPath};

use super::curve::{Curve, Line, Segment};
use super::path_data;

/// An ordered sequence of endpoint-connected segments.
///
/// Adjacent segments share their joint point within [`EPSILON`]; this is
/// checked whenever segments are added. Operations never modify a path in
/// place, they return a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path from segments, checking adjacency.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Disconnected` if a segment does not start
    /// where the previous one ends.
    pub fn from_segments<I>(segments: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Segment>,
    {
        let mut path = Self::new();
        for segment in segments {
            path.push(segment)?;
        }
        Ok(path)
    }

    /// Creates a path of lines through `points`.
    #[must_use]
    pub fn polyline(points: &[Point2]) -> Self {
        Self {
            segments: points
                .windows(2)
                .map(|w| Segment::Line(Line::new(w[0], w[1])))
                .collect(),
        }
    }

    /// Appends a segment.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Disconnected` if the segment does not start at
    /// the current end of the path.
    pub fn push(&mut self, segment: impl Into<Segment>) -> Result<()> {
        let segment = segment.into();
        if let Some(end) = self.end() {
            let gap = (segment.start() - end).norm();
            if gap > EPSILON {
                return Err(GeometryError::Disconnected {
                    index: self.segments.len(),
                    gap,
                }
                .into());
            }
        }
        self.segments.push(segment);
        Ok(())
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns whether the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the segments in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates over the segments in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Returns the start of the first segment.
    #[must_use]
    pub fn start(&self) -> Option<Point2> {
        self.segments.first().map(Curve::start)
    }

    /// Returns the end of the last segment.
    #[must_use]
    pub fn end(&self) -> Option<Point2> {
        self.segments.last().map(Curve::end)
    }

    /// Returns whether the path ends where it starts, within [`EPSILON`].
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => points_coincide(&start, &end, EPSILON),
            _ => false,
        }
    }

    /// Returns whether every segment is a line.
    #[must_use]
    pub fn is_polyline(&self) -> bool {
        self.segments.iter().all(|s| matches!(s, Segment::Line(_)))
    }

    /// Parses SVG path data describing one connected path.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the data is malformed or moves to a
    /// disconnected subpath.
    pub fn parse(data: &str) -> Result<Self> {
        path_data::parse_path(data)
    }

    /// Serializes the path as SVG path data.
    #[must_use]
    pub fn to_path_data(&self) -> String {
        path_data::write_path_data(self)
    }

    /// Returns a copy with every segment converted to cubic Béziers; arcs are
    /// approximated within `arc_error`.
    ///
    /// # Errors
    ///
    /// Returns an error if `arc_error` is not positive.
    pub fn to_cubics(&self, arc_error: f64) -> Result<Self> {
        PathToCubics::new(self, arc_error).execute()
    }

    /// Flattens the path into lines deviating by at most `flatness`.
    ///
    /// # Errors
    ///
    /// Returns an error if `flatness` is not positive.
    pub fn as_polyline(&self, flatness: f64) -> Result<Self> {
        FlattenPath::new(self, FlattenParams::new(flatness)?).execute()
    }

    /// Returns the indices of segments whose start joint is a kink.
    #[must_use]
    pub fn kinks(&self, tolerance: f64) -> Vec<usize> {
        FindKinks::new(self, tolerance).execute()
    }

    /// Converts the path to cubics and smooths its kinks.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid parameters, or
    /// `OperationError::UnfixableKink` unless unfixable kinks are ignored.
    pub fn smoothed(&self, params: &SmoothParams) -> Result<Self> {
        let cubics = self.to_cubics(params.arc_tolerance)?;
        SmoothJoints::new(&cubics, *params).execute()
    }

    /// Approximates the parallel curve at `params.distance` by sampling.
    ///
    /// # Errors
    ///
    /// Returns an error if `params.steps` is zero.
    pub fn offset(&self, params: &OffsetParams) -> Result<Self> {
        SampledOffset2D::new(self, *params).execute()
    }

    /// Flattens the path and exports it as a closed region or open curve.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::EmptyPath` if the path has no line content.
    pub fn to_geometry(&self, flatness: f64) -> Result<PathGeometry> {
        ExportGeometry::new(self, FlattenParams::new(flatness)?).execute()
    }
}

impl Index<usize> for Path {
    type Output = Segment;

    fn index(&self, index: usize) -> &Segment {
        &self.segments[index]
    }
}

impl IntoIterator for Path {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl FromStr for Path {
    type Err = LineaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path_data())
    }
}
