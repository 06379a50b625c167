use crate::geometry::{Curve, Path, Segment};
use crate::math::Vector2;

/// Finds joints where the tangent direction jumps.
///
/// Index `i` refers to the joint at the start of segment `i`. The first
/// joint is only considered when the path is closed, in which case the last
/// segment precedes it.
#[derive(Debug)]
pub struct FindKinks<'a> {
    path: &'a Path,
    tolerance: f64,
}

impl<'a> FindKinks<'a> {
    /// Creates a new `FindKinks` operation.
    #[must_use]
    pub fn new(path: &'a Path, tolerance: f64) -> Self {
        Self { path, tolerance }
    }

    /// Returns the kink indices in ascending order.
    #[must_use]
    pub fn execute(&self) -> Vec<usize> {
        let segments = self.path.segments();
        let first = usize::from(!self.path.is_closed());
        (first..segments.len())
            .filter(|&i| {
                let prev = previous_index(i, segments.len());
                match joint_tangents(&segments[prev], &segments[i]) {
                    Some((u, v)) => 1.0 - u.dot(&v) > self.tolerance,
                    None => true,
                }
            })
            .collect()
    }
}

/// Index of the segment before `i`, wrapping around.
pub(super) fn previous_index(i: usize, len: usize) -> usize {
    if i == 0 {
        len - 1
    } else {
        i - 1
    }
}

/// Unit tangents on either side of the joint between `prev` and `next`, or
/// `None` if either is undefined.
pub(super) fn joint_tangents(prev: &Segment, next: &Segment) -> Option<(Vector2, Vector2)> {
    Some((prev.tangent(1.0).ok()?, next.tangent(0.0).ok()?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn square_corners() {
        let open = Path::parse("M0,0 L10,0 L10,10 L0,10").unwrap();
        assert_eq!(FindKinks::new(&open, 1e-8).execute(), vec![1, 2]);

        let closed = Path::parse("M0,0 L10,0 L10,10 L0,10 Z").unwrap();
        assert_eq!(FindKinks::new(&closed, 1e-8).execute(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn tangent_continuous_joint_is_smooth() {
        let path = Path::parse("M0,0 C0,5 5,10 10,10 S20,5 20,0").unwrap();
        assert!(FindKinks::new(&path, 1e-8).execute().is_empty());
    }

    #[test]
    fn tolerance_hides_shallow_bends() {
        // About 0.57 degrees: 1 - cos = 5e-5.
        let path = Path::parse("M0,0 L10,0 L20,0.1").unwrap();
        assert_eq!(FindKinks::new(&path, 1e-8).execute(), vec![1]);
        assert!(FindKinks::new(&path, 1e-3).execute().is_empty());
    }

    #[test]
    fn degenerate_segment_counts_as_kink() {
        let path = Path::polyline(&[
            crate::math::Point2::new(0.0, 0.0),
            crate::math::Point2::new(1.0, 0.0),
            crate::math::Point2::new(1.0, 0.0),
        ]);
        assert_eq!(FindKinks::new(&path, 1e-8).execute(), vec![1]);
    }

    #[test]
    fn empty_path_has_no_kinks() {
        assert!(FindKinks::new(&Path::new(), 1e-8).execute().is_empty());
    }
}
