mod sampled_offset;

pub use sampled_offset::SampledOffset2D;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of samples per segment.
pub const DEFAULT_OFFSET_STEPS: usize = 10;

/// Parameters for [`SampledOffset2D`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OffsetParams {
    /// Signed distance along the segment normals.
    pub distance: f64,
    /// Samples taken per segment.
    pub steps: usize,
}

impl OffsetParams {
    /// Creates parameters with [`DEFAULT_OFFSET_STEPS`].
    #[must_use]
    pub fn new(distance: f64) -> Self {
        Self {
            distance,
            steps: DEFAULT_OFFSET_STEPS,
        }
    }

    /// Returns a copy with a different sample count.
    #[must_use]
    pub fn with_steps(self, steps: usize) -> Self {
        Self { steps, ..self }
    }
}
