pub mod curve;
pub mod path;
pub mod path_data;
pub mod shape;

pub use curve::{Arc, CubicBezier, Curve, Line, QuadraticBezier, Segment};
pub use path::Path;
pub use path_data::parse_subpaths;
pub use shape::ShapeRecord;
