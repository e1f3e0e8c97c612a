//! Camera moves: dolly, zoom and dolly-zoom curves over normalized progress.

use serde::{Deserialize, Serialize};

use super::dolly_zoom::DollyZoom;

/// The animated part of the camera: distance to subject and vertical FOV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Camera-to-subject distance in meters.
    pub distance: f64,
    /// Vertical field of view in degrees.
    pub fov: f64,
}

impl CameraPose {
    /// Pose from distance and FOV.
    #[must_use]
    pub const fn new(distance: f64, fov: f64) -> Self {
        Self { distance, fov }
    }
}

/// A requested camera move, relative to whatever pose the camera is in
/// when the move starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CameraMove {
    /// Travel to `target_distance` with a compensating FOV (vertigo effect).
    DollyZoom {
        /// Distance the move ends at.
        target_distance: f64,
    },
    /// Travel to `target_distance` with the FOV held.
    Dolly {
        /// Distance the move ends at.
        target_distance: f64,
    },
    /// Change the FOV to `target_fov` with the camera held in place.
    Zoom {
        /// FOV (degrees) the move ends at.
        target_fov: f64,
    },
}

impl CameraMove {
    /// Short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DollyZoom { .. } => "dolly-zoom",
            Self::Dolly { .. } => "dolly",
            Self::Zoom { .. } => "zoom",
        }
    }

    /// Capture `from` and build the concrete curve for this move.
    #[must_use]
    pub fn curve(&self, from: CameraPose) -> MoveCurve {
        match *self {
            Self::DollyZoom { target_distance } => MoveCurve::DollyZoom(
                DollyZoom::new(from.distance, from.fov, target_distance),
            ),
            Self::Dolly { target_distance } => MoveCurve::Linear {
                from,
                to: CameraPose::new(target_distance, from.fov),
            },
            Self::Zoom { target_fov } => MoveCurve::Linear {
                from,
                to: CameraPose::new(from.distance, target_fov),
            },
        }
    }
}

/// A move bound to its start pose; sampled by progress in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveCurve {
    /// Compensated dolly-zoom.
    DollyZoom(DollyZoom),
    /// Straight interpolation of distance and FOV.
    Linear {
        /// Pose at progress 0.
        from: CameraPose,
        /// Pose at progress 1.
        to: CameraPose,
    },
}

impl MoveCurve {
    /// Pose at progress `p`, clamped to `[0, 1]`.
    #[must_use]
    pub fn sample(&self, p: f64) -> CameraPose {
        match self {
            Self::DollyZoom(dz) => {
                let (distance, fov) = dz.sample(p);
                CameraPose::new(distance, fov)
            }
            Self::Linear { from, to } => {
                if p >= 1.0 {
                    return *to;
                }
                let p = p.clamp(0.0, 1.0);
                CameraPose::new(
                    from.distance + (to.distance - from.distance) * p,
                    from.fov + (to.fov - from.fov) * p,
                )
            }
        }
    }

    /// Final pose of the curve.
    #[must_use]
    pub fn end(&self) -> CameraPose {
        self.sample(1.0)
    }
}
