//! Easing curves applied to camera-move progress.
//!
//! Every curve maps `[0, 1]` onto `[0, 1]` with fixed endpoints, so a move
//! always starts at its start pose and lands exactly on its target pose.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for camera-move progress.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear progress (no easing). The classic dolly-zoom uses this.
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Hermite smoothstep, `3t² − 2t³` (slow at both ends).
    SmoothStep,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f64,
        /// Second control point.
        c2: f64,
    },
}

impl EasingFunction {
    /// Evaluate the curve at `t`.
    ///
    /// Input is clamped to [0.0, 1.0]. NaN is treated as 0.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::SmoothStep => t * t * (3.0 - 2.0 * t),
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::Linear
    }
}
