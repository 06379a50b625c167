mod flatten_cubic;
mod flatten_path;

pub use flatten_cubic::{cubic_deviation, flatten_cubic};
pub use flatten_path::{FlattenBatch, FlattenPath};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{check_positive, Result};

/// Default flatness used by path flattening and export.
pub const DEFAULT_FLATNESS: f64 = 0.1;

/// Default recursion cap for cubic subdivision.
pub const DEFAULT_MAX_DEPTH: u32 = 10;

/// Parameters controlling flattening quality.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlattenParams {
    /// Maximum allowed distance between a curve and its polyline.
    pub flatness: f64,
    /// Maximum subdivision depth. Reaching it is not an error; the curve is
    /// emitted as-is at that depth.
    pub max_depth: u32,
}

impl Default for FlattenParams {
    fn default() -> Self {
        Self {
            flatness: DEFAULT_FLATNESS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl FlattenParams {
    /// Creates parameters with the given flatness and the default depth cap.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if `flatness` is not
    /// positive and finite.
    pub fn new(flatness: f64) -> Result<Self> {
        check_positive("flatness", flatness)?;
        Ok(Self {
            flatness,
            ..Self::default()
        })
    }

    /// Returns a copy with a different depth cap.
    #[must_use]
    pub fn with_max_depth(self, max_depth: u32) -> Self {
        Self { max_depth, ..self }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        check_positive("flatness", self.flatness)
    }
}
