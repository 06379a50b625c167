#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ExportError, Result};
use crate::geometry::{Curve, Path};
use crate::math::{points_coincide, EPSILON};
use crate::tessellation::{FlattenParams, FlattenPath};

/// Whether exported geometry encloses a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GeometryKind {
    ClosedRegion,
    OpenCurve,
}

/// Flattened path coordinates.
///
/// For a closed region the last coordinate equals the first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathGeometry {
    pub coordinates: Vec<(f64, f64)>,
    pub closed: bool,
}

impl PathGeometry {
    #[must_use]
    pub fn kind(&self) -> GeometryKind {
        if self.closed {
            GeometryKind::ClosedRegion
        } else {
            GeometryKind::OpenCurve
        }
    }
}

/// Flattens a path and exports its vertices.
#[derive(Debug)]
pub struct ExportGeometry<'a> {
    path: &'a Path,
    params: FlattenParams,
}

impl<'a> ExportGeometry<'a> {
    /// Creates a new `ExportGeometry` operation.
    #[must_use]
    pub fn new(path: &'a Path, params: FlattenParams) -> Self {
        Self { path, params }
    }

    /// Executes the export.
    ///
    /// The coordinates are the start of every flattened line followed by the
    /// end of the last one. When the first and last coordinates coincide
    /// within [`EPSILON`] the result is a closed region and the last
    /// coordinate is snapped onto the first.
    ///
    /// # Errors
    ///
    /// - `GeometryError::InvalidParameter` if the flatness is not positive
    /// - `ExportError::EmptyPath` if the path has no segments
    pub fn execute(&self) -> Result<PathGeometry> {
        let lines = FlattenPath::new(self.path, self.params).execute()?;
        let Some(last) = lines.end() else {
            return Err(ExportError::EmptyPath.into());
        };

        let mut points: Vec<_> = lines.iter().map(Curve::start).collect();
        points.push(last);
        let closed = points_coincide(&points[0], &last, EPSILON);
        if closed {
            let n = points.len();
            points[n - 1] = points[0];
        }

        debug!(coordinates = points.len(), closed, "exported geometry");
        Ok(PathGeometry {
            coordinates: points.iter().map(|p| (p.x, p.y)).collect(),
            closed,
        })
    }
}
