pub mod error;
pub mod export;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{LineaError, Result};
pub use geometry::{Arc, CubicBezier, Curve, Line, Path, QuadraticBezier, Segment, ShapeRecord};
