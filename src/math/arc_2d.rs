//! 2D elliptical arc math utilities.
//!
//! Arcs are given in SVG endpoint form (start, end, radii, x-axis rotation in
//! degrees, large-arc and sweep flags) and evaluated in center form:
//! `P(θ) = center + R(φ) · (rx·cos θ, ry·sin θ)` for
//! `θ ∈ [theta1, theta1 + delta]`.
use std::f64::consts::{FRAC_PI_2, TAU};

use nalgebra::Rotation2;

use super::{cross_2d, Point2, Vector2, EPSILON};

/// Upper bound on the number of cubics generated for one arc.
pub const MAX_ARC_CUBICS: usize = 1024;

/// Center parameterization of an elliptical arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCenter {
    pub center: Point2,
    /// Effective x radius (scaled up if the given radii could not span the chord).
    pub rx: f64,
    /// Effective y radius.
    pub ry: f64,
    /// X-axis rotation in radians.
    pub phi: f64,
    /// Start angle in radians.
    pub theta1: f64,
    /// Signed sweep in radians. Positive is the direction of increasing angle.
    pub delta: f64,
}

impl ArcCenter {
    /// Evaluates the ellipse at angle `theta`.
    #[must_use]
    pub fn point_at_angle(&self, theta: f64) -> Point2 {
        let local = Vector2::new(self.rx * theta.cos(), self.ry * theta.sin());
        self.center + Rotation2::new(self.phi) * local
    }

    /// Derivative of the ellipse with respect to the angle at `theta`.
    #[must_use]
    pub fn derivative_at_angle(&self, theta: f64) -> Vector2 {
        let local = Vector2::new(-self.rx * theta.sin(), self.ry * theta.cos());
        Rotation2::new(self.phi) * local
    }

    /// Angle reached at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn angle_at(&self, t: f64) -> f64 {
        self.theta1 + self.delta * t
    }
}

/// Converts an SVG endpoint-form arc to center form.
///
/// Radii are made absolute and scaled up uniformly when they are too small
/// to reach from `start` to `end`. Returns `None` if either radius is zero
/// or the endpoints coincide.
#[must_use]
pub fn arc_center_from_endpoints(
    start: &Point2,
    end: &Point2,
    rx: f64,
    ry: f64,
    rotation_deg: f64,
    large_arc: bool,
    sweep: bool,
) -> Option<ArcCenter> {
    let mut rx = rx.abs();
    let mut ry = ry.abs();
    if rx < EPSILON || ry < EPSILON {
        return None;
    }
    if (end - start).norm() < EPSILON {
        return None;
    }

    let phi = rotation_deg.to_radians();
    let to_local = Rotation2::new(-phi);
    let half = (start - end) * 0.5;
    let p = to_local * half;

    // Scale radii up when the ellipse cannot span the chord.
    let lambda = (p.x * p.x) / (rx * rx) + (p.y * p.y) / (ry * ry);
    if lambda > 1.0 {
        let scale = lambda.sqrt();
        rx *= scale;
        ry *= scale;
    }

    let rx_sq = rx * rx;
    let ry_sq = ry * ry;
    let denom = rx_sq * p.y * p.y + ry_sq * p.x * p.x;
    if denom < EPSILON * EPSILON {
        return None;
    }
    let numerator = rx_sq * ry_sq - rx_sq * p.y * p.y - ry_sq * p.x * p.x;
    let sign = if large_arc == sweep { -1.0 } else { 1.0 };
    let coef = sign * (numerator / denom).max(0.0).sqrt();

    let center_local = Vector2::new(coef * rx * p.y / ry, -coef * ry * p.x / rx);
    let mid = Point2::new((start.x + end.x) * 0.5, (start.y + end.y) * 0.5);
    let center = mid + Rotation2::new(phi) * center_local;

    let v1 = Vector2::new((p.x - center_local.x) / rx, (p.y - center_local.y) / ry);
    let v2 = Vector2::new((-p.x - center_local.x) / rx, (-p.y - center_local.y) / ry);
    let theta1 = v1.y.atan2(v1.x);
    let mut delta = cross_2d(&v1, &v2).atan2(v1.dot(&v2));

    if !sweep && delta > 0.0 {
        delta -= TAU;
    } else if sweep && delta < 0.0 {
        delta += TAU;
    }

    Some(ArcCenter {
        center,
        rx,
        ry,
        phi,
        theta1,
        delta,
    })
}

/// Radial error bound of a single cubic approximating a circular arc of
/// radius `radius` spanning `angle` radians with `k = 4/3 · tan(angle/4)`.
#[must_use]
pub fn cubic_arc_error(radius: f64, angle: f64) -> f64 {
    let quarter = angle.abs() / 4.0;
    let s = quarter.sin();
    let c = quarter.cos();
    radius * (4.0 / 27.0) * s.powi(6) / (c * c)
}

/// Number of cubics needed so each spans at most 90° and deviates by at
/// most `error` from an arc of radius `radius` sweeping `abs_sweep`.
///
/// Stops at [`MAX_ARC_CUBICS`] without reporting failure.
#[must_use]
pub fn arc_cubic_count(radius: f64, abs_sweep: f64, error: f64) -> usize {
    if abs_sweep < EPSILON {
        return 1;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut n = ((abs_sweep / FRAC_PI_2) - EPSILON).ceil().max(1.0) as usize;
    #[allow(clippy::cast_precision_loss)]
    while n < MAX_ARC_CUBICS && cubic_arc_error(radius, abs_sweep / n as f64) > error {
        n += 1;
    }
    n
}

/// Returns `tan(angle / 4) · 4/3`, the handle length factor for one cubic piece.
#[must_use]
pub fn cubic_handle_factor(angle: f64) -> f64 {
    (4.0 / 3.0) * (angle / 4.0).tan()
}
