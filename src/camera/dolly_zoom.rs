//! Dolly-zoom ("Hitchcock zoom", "vertigo effect") kinematics.
//!
//! The camera travels toward (or away from) the subject while the field of
//! view widens (or narrows) so that the subject's half-height in the frame,
//! `distance · tan(fov / 2)`, never changes. Only the background
//! perspective moves.

use std::f64::consts::PI;

/// Default distance (meters) the dolly-zoom travels to.
pub const DEFAULT_TARGET_DISTANCE: f64 = 2.0;

/// Half-angle constant `distance · tan(fov · π / 360)` for a pose.
///
/// This is the subject's apparent half-height at unit image distance; a
/// dolly-zoom holds it fixed.
#[inline]
#[must_use]
pub fn framing_constant(distance: f64, fov_degrees: f64) -> f64 {
    distance * (fov_degrees * PI / 360.0).tan()
}

/// The FOV (degrees) that frames `constant` at `distance`.
///
/// Inverse of [`framing_constant`] solved for the angle.
#[inline]
#[must_use]
pub fn compensating_fov(constant: f64, distance: f64) -> f64 {
    (constant / distance).atan() * 360.0 / PI
}

/// Closed-form dolly-zoom curve from a captured start pose to a target
/// distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DollyZoom {
    start_distance: f64,
    start_fov: f64,
    target_distance: f64,
    constant: f64,
}

impl DollyZoom {
    /// Capture the start pose and precompute the framing constant.
    #[must_use]
    pub fn new(start_distance: f64, start_fov: f64, target_distance: f64) -> Self {
        Self {
            start_distance,
            start_fov,
            target_distance,
            constant: framing_constant(start_distance, start_fov),
        }
    }

    /// The invariant `k = startDistance · tan(startFOV / 2)`.
    #[must_use]
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Whether the curve moves the camera at all.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.start_distance == self.target_distance
    }

    /// Linearly interpolated distance at progress `p` (clamped to `[0, 1]`).
    ///
    /// `p ≥ 1` lands exactly on the target.
    #[must_use]
    pub fn distance_at(&self, p: f64) -> f64 {
        if p >= 1.0 {
            return self.target_distance;
        }
        let p = p.clamp(0.0, 1.0);
        self.start_distance - (self.start_distance - self.target_distance) * p
    }

    /// Compensating FOV (degrees) at progress `p`.
    ///
    /// At `p = 0` this returns the captured start FOV exactly rather than
    /// its `atan(tan(..))` round-trip.
    #[must_use]
    pub fn fov_at(&self, p: f64) -> f64 {
        if p <= 0.0 || self.is_noop() {
            return self.start_fov;
        }
        compensating_fov(self.constant, self.distance_at(p))
    }

    /// `(distance, fov)` at progress `p`.
    #[must_use]
    pub fn sample(&self, p: f64) -> (f64, f64) {
        (self.distance_at(p), self.fov_at(p))
    }
}
