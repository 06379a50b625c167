mod to_cubics;

pub use to_cubics::PathToCubics;

/// Default arc approximation error for [`PathToCubics`].
pub const DEFAULT_ARC_ERROR: f64 = 0.1;
