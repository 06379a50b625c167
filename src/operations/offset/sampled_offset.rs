use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::{Curve, Line, Path, Segment};
use crate::math::{points_coincide, Point2, EPSILON};

use super::OffsetParams;

/// Approximates the parallel curve of a path by sampling.
///
/// Each non-degenerate segment is sampled at `k / steps` for
/// `k = 0..steps`, and every sample is pushed `distance` along the segment
/// normal (the tangent turned clockwise). An open path also samples the end
/// of its last segment; a closed path is closed back to its first sample.
/// Consecutive samples closer than [`EPSILON`] are merged.
///
/// # Limitations
///
/// The result is a polyline approximation. Self-intersections are not
/// removed, samples may cross each other in concave regions where
/// `|distance|` exceeds the radius of curvature, and accuracy drops as
/// curvature times distance grows relative to the sampling density.
#[derive(Debug)]
pub struct SampledOffset2D<'a> {
    path: &'a Path,
    params: OffsetParams,
}

impl<'a> SampledOffset2D<'a> {
    /// Creates a new `SampledOffset2D` operation.
    #[must_use]
    pub fn new(path: &'a Path, params: OffsetParams) -> Self {
        Self { path, params }
    }

    /// Executes the offset, returning a path of lines.
    ///
    /// # Errors
    ///
    /// - `GeometryError::InvalidParameter` if `steps` is zero
    /// - `GeometryError::ZeroVector` if a normal is undefined at a sample
    pub fn execute(&self) -> Result<Path> {
        let OffsetParams { distance, steps } = self.params;
        if steps == 0 {
            return Err(GeometryError::InvalidParameter("offset steps must be at least 1".into()).into());
        }

        let segments: Vec<&Segment> = self.path.iter().filter(|s| !s.is_degenerate()).collect();
        let mut samples: Vec<Point2> = Vec::with_capacity(segments.len() * steps + 1);
        for segment in &segments {
            for k in 0..steps {
                #[allow(clippy::cast_precision_loss)]
                let t = k as f64 / steps as f64;
                push_sample(&mut samples, offset_point(segment, t, distance)?);
            }
        }

        let closed = self.path.is_closed();
        if !closed {
            if let Some(last) = segments.last() {
                push_sample(&mut samples, offset_point(last, 1.0, distance)?);
            }
        }

        let mut result = Path::polyline(&samples);
        if closed {
            if let (Some(&first), Some(&last)) = (samples.first(), samples.last()) {
                if samples.len() > 1 && !points_coincide(&first, &last, EPSILON) {
                    result.push(Line::new(last, first))?;
                }
            }
        }

        debug!(
            segments = segments.len(),
            samples = samples.len(),
            distance,
            "sampled offset"
        );
        Ok(result)
    }
}

fn offset_point(segment: &Segment, t: f64, distance: f64) -> Result<Point2> {
    Ok(segment.point(t)? + segment.normal(t)? * distance)
}

fn push_sample(samples: &mut Vec<Point2>, p: Point2) {
    if !samples
        .last()
        .is_some_and(|last| points_coincide(last, &p, EPSILON))
    {
        samples.push(p);
    }
}
