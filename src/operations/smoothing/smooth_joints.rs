use tracing::{debug, warn};

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{CubicBezier, Curve, Path, Segment};
use crate::math::{Point2, Vector2, EPSILON};

use super::find_kinks::{joint_tangents, previous_index};
use super::{FindKinks, SmoothParams};

/// Below this the summed tangents are treated as a reversal.
const REVERSAL_TOLERANCE: f64 = 1e-9;

/// Makes a path of cubics tangent-continuous at its kinks.
///
/// At a kink with vertex `q` between cubics `A` and `B`, both handles are
/// turned onto the bisecting direction `d = normalize(u + v)` of the unit
/// tangents. Their lengths start from the existing handle lengths (a third of
/// the chord when a handle is collapsed), are capped at `max_joint_size`
/// and scaled by `1 - tightness / 2`. Segment endpoints never move.
///
/// A joint that reverses direction, or whose handles would vanish, is
/// unfixable.
#[derive(Debug)]
pub struct SmoothJoints<'a> {
    path: &'a Path,
    params: SmoothParams,
}

impl<'a> SmoothJoints<'a> {
    /// Creates a new `SmoothJoints` operation.
    #[must_use]
    pub fn new(path: &'a Path, params: SmoothParams) -> Self {
        Self { path, params }
    }

    /// Executes the smoothing.
    ///
    /// # Errors
    ///
    /// - `GeometryError::InvalidParameter` for out-of-range parameters or a
    ///   segment that is not a cubic
    /// - `OperationError::UnfixableKink` for the first unfixable kink, unless
    ///   `ignore_unfixable_kinks` is set
    pub fn execute(&self) -> Result<Path> {
        self.params.validate()?;
        let mut cubics = self
            .path
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                segment.as_cubic().copied().ok_or_else(|| {
                    GeometryError::InvalidParameter(format!(
                        "joint smoothing needs cubic segments, segment {i} is not one"
                    ))
                })
            })
            .collect::<std::result::Result<Vec<CubicBezier>, _>>()?;

        let kinks = FindKinks::new(self.path, self.params.kink_tolerance).execute();
        let mut skipped = 0_usize;
        for &i in &kinks {
            let prev = previous_index(i, cubics.len());
            let Some((c2, c1)) = self.joint_handles(&cubics[prev], &cubics[i]) else {
                if self.params.ignore_unfixable_kinks {
                    warn!(segment = i, "leaving unfixable kink in place");
                    skipped += 1;
                    continue;
                }
                return Err(OperationError::UnfixableKink { segment: i }.into());
            };
            let a = cubics[prev];
            cubics[prev] = a.with_controls(a.control1(), c2);
            let b = cubics[i];
            cubics[i] = b.with_controls(c1, b.control2());
        }

        debug!(kinks = kinks.len(), skipped, "smoothed joints");
        Path::from_segments(cubics.into_iter().map(Segment::Cubic))
    }

    /// New `(a.control2, b.control1)` for the joint between `a` and `b`.
    fn joint_handles(&self, a: &CubicBezier, b: &CubicBezier) -> Option<(Point2, Point2)> {
        let (u, v) = joint_tangents(&Segment::Cubic(*a), &Segment::Cubic(*b))?;
        let sum: Vector2 = u + v;
        let len = sum.norm();
        if len < REVERSAL_TOLERANCE {
            return None;
        }
        let d = sum / len;
        let q = b.start();

        let base_a = handle_or_third(q - a.control2(), q - a.start());
        let base_b = handle_or_third(b.control1() - q, b.end() - q);
        let scale = 1.0 - self.params.tightness / 2.0;
        let len_a = base_a.min(self.params.max_joint_size) * scale;
        let len_b = base_b.min(self.params.max_joint_size) * scale;
        if len_a < EPSILON || len_b < EPSILON {
            return None;
        }
        Some((q - d * len_a, q + d * len_b))
    }
}

/// Length of `handle`, or a third of `chord` when the handle is collapsed.
fn handle_or_third(handle: Vector2, chord: Vector2) -> f64 {
    let len = handle.norm();
    if len < EPSILON {
        chord.norm() / 3.0
    } else {
        len
    }
}
