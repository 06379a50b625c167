use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::geometry::{CubicBezier, Line, Path, Segment};
use crate::math::Point2;

use super::{flatten_cubic, FlattenParams};

/// Flattens a path into a path of lines.
#[derive(Debug)]
pub struct FlattenPath<'a> {
    path: &'a Path,
    params: FlattenParams,
}

impl<'a> FlattenPath<'a> {
    /// Creates a new `FlattenPath` operation.
    #[must_use]
    pub fn new(path: &'a Path, params: FlattenParams) -> Self {
        Self { path, params }
    }

    /// Executes the flattening.
    ///
    /// A path made only of lines is returned unchanged. Otherwise lines are
    /// kept, quadratics are degree-elevated and every cubic is subdivided.
    /// Arcs are expanded into cubics within half the flatness and those cubics
    /// are subdivided at the other half, so every line stays within the
    /// flatness of the true arc.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if the flatness is not
    /// positive.
    pub fn execute(&self) -> Result<Path> {
        self.params.validate()?;
        if self.path.is_polyline() {
            return Ok(self.path.clone());
        }

        let mut lines: Vec<Segment> = Vec::new();
        for segment in self.path {
            match segment {
                Segment::Line(line) => lines.push((*line).into()),
                Segment::Quadratic(quad) => push_cubic(&quad.to_cubic(), &self.params, &mut lines),
                Segment::Cubic(cubic) => push_cubic(cubic, &self.params, &mut lines),
                Segment::Arc(arc) => {
                    let half = FlattenParams {
                        flatness: self.params.flatness / 2.0,
                        ..self.params
                    };
                    for cubic in arc.to_cubics(half.flatness)? {
                        push_cubic(&cubic, &half, &mut lines);
                    }
                }
            }
        }
        debug!(
            segments = self.path.len(),
            lines = lines.len(),
            flatness = self.params.flatness,
            "flattened path"
        );
        Path::from_segments(lines)
    }
}

fn push_cubic(cubic: &CubicBezier, params: &FlattenParams, out: &mut Vec<Segment>) {
    let points: Vec<Point2> = flatten_cubic(cubic, params);
    out.extend(points.windows(2).map(|w| Segment::Line(Line::new(w[0], w[1]))));
}

/// Flattens independent paths in parallel.
///
/// Results come back in input order; the first failure is returned.
#[derive(Debug)]
pub struct FlattenBatch<'a> {
    paths: &'a [Path],
    params: FlattenParams,
}

impl<'a> FlattenBatch<'a> {
    /// Creates a new `FlattenBatch` operation.
    #[must_use]
    pub fn new(paths: &'a [Path], params: FlattenParams) -> Self {
        Self { paths, params }
    }

    /// Executes the batch.
    ///
    /// # Errors
    ///
    /// Returns the error of any path that fails to flatten.
    pub fn execute(&self) -> Result<Vec<Path>> {
        debug!(paths = self.paths.len(), "flattening batch");
        self.paths
            .par_iter()
            .map(|path| FlattenPath::new(path, self.params).execute())
            .collect()
    }
}
