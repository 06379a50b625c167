use super::{cross_2d, Point2};

/// Chords shorter than this are treated as a single point.
pub const MIN_CHORD_LENGTH: f64 = 1e-12;

/// Returns the perpendicular distance from `p` to the infinite line through
/// `a` and `b`.
///
/// For a degenerate line (`|b - a| < MIN_CHORD_LENGTH`) this is the distance
/// from `p` to `a`.
#[must_use]
pub fn point_to_line_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let chord = b - a;
    let len = chord.norm();
    if len < MIN_CHORD_LENGTH {
        return (p - a).norm();
    }
    cross_2d(&chord, &(p - a)).abs() / len
}

/// Returns the minimum distance from `p` to the line segment from `a` to `b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (p - a).norm();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    (p - (a + d * t)).norm()
}

/// Returns the largest distance from any of `samples` to the polyline
/// through `vertices`.
///
/// Callers that need a guaranteed flattening bound use this to re-measure a
/// result against points sampled from the original curve.
#[must_use]
pub fn max_deviation(samples: &[Point2], vertices: &[Point2]) -> f64 {
    match vertices {
        [] => 0.0,
        [only] => samples.iter().map(|s| (s - only).norm()).fold(0.0, f64::max),
        _ => samples
            .iter()
            .map(|s| {
                vertices
                    .windows(2)
                    .map(|w| point_to_segment_dist(s, &w[0], &w[1]))
                    .fold(f64::INFINITY, f64::min)
            })
            .fold(0.0, f64::max),
    }
}
