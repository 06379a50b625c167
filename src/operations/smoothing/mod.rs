//! Kink detection and joint smoothing for paths of cubic Béziers.

mod find_kinks;
mod smooth_joints;

pub use find_kinks::FindKinks;
pub use smooth_joints::SmoothJoints;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{check_positive, GeometryError, Result};

/// Default tolerance on `1 - cos(angle)` below which a joint is smooth.
pub const DEFAULT_KINK_TOLERANCE: f64 = 1e-8;

/// Parameters for [`SmoothJoints`] and [`crate::geometry::Path::smoothed`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SmoothParams {
    /// Upper bound on the handle length placed at a smoothed joint.
    pub max_joint_size: f64,
    /// In `[0, 2)`. Handles are scaled by `1 - tightness / 2`, so values
    /// near 2 keep the curve close to the original corner.
    pub tightness: f64,
    /// Leave unfixable kinks in place instead of failing.
    pub ignore_unfixable_kinks: bool,
    /// Tolerance passed to [`FindKinks`].
    pub kink_tolerance: f64,
    /// Arc approximation error used when converting to cubics first.
    pub arc_tolerance: f64,
}

impl Default for SmoothParams {
    fn default() -> Self {
        Self {
            max_joint_size: 3.0,
            tightness: 1.99,
            ignore_unfixable_kinks: false,
            kink_tolerance: DEFAULT_KINK_TOLERANCE,
            arc_tolerance: 0.1,
        }
    }
}

impl SmoothParams {
    /// Checks that every parameter is in range.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if `max_joint_size` is not
    /// positive, `tightness` lies outside `[0, 2)` or `kink_tolerance` is
    /// negative.
    pub fn validate(&self) -> Result<()> {
        check_positive("max_joint_size", self.max_joint_size)?;
        if !(0.0..2.0).contains(&self.tightness) {
            return Err(GeometryError::InvalidParameter(format!(
                "tightness must be in [0, 2), got {}",
                self.tightness
            ))
            .into());
        }
        if self.kink_tolerance.is_nan() || self.kink_tolerance < 0.0 {
            return Err(GeometryError::InvalidParameter(format!(
                "kink_tolerance must be non-negative, got {}",
                self.kink_tolerance
            ))
            .into());
        }
        Ok(())
    }
}
