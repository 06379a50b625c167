use tracing::debug;

use crate::error::{check_positive, Result};
use crate::geometry::{Path, Segment};

/// Converts every segment of a path into cubic Béziers.
///
/// Lines get handles at a third of their length, quadratics are
/// degree-elevated exactly, arcs expand into cubic sequences within
/// `arc_error` and cubics are kept.
#[derive(Debug)]
pub struct PathToCubics<'a> {
    path: &'a Path,
    arc_error: f64,
}

impl<'a> PathToCubics<'a> {
    /// Creates a new `PathToCubics` operation.
    #[must_use]
    pub fn new(path: &'a Path, arc_error: f64) -> Self {
        Self { path, arc_error }
    }

    /// Executes the conversion.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if `arc_error` is not
    /// positive.
    pub fn execute(&self) -> Result<Path> {
        check_positive("arc_error", self.arc_error)?;
        let mut cubics = Vec::with_capacity(self.path.len());
        for segment in self.path {
            cubics.extend(segment.to_cubics(self.arc_error)?.into_iter().map(Segment::Cubic));
        }
        debug!(
            segments = self.path.len(),
            cubics = cubics.len(),
            "converted path to cubics"
        );
        Path::from_segments(cubics)
    }
}
