//! Export of flattened paths as plain coordinate geometry.

mod geometry_export;

pub use geometry_export::{ExportGeometry, GeometryKind, PathGeometry};
