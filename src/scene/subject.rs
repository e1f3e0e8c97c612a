//! The humanoid subject: what it is doing and how that moves it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Amplitude (m) of the idle breathing bob.
const IDLE_BOB_AMPLITUDE: f32 = 0.1;
/// Turntable speed (rad/s) of the first pose.
const TURNTABLE_RATE: f32 = 0.6;

/// Subject behavior selected in the control panel.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SubjectAction {
    /// Standing, gently bobbing.
    #[default]
    Idle,
    /// Slowly turning on the spot.
    Pose1,
    /// Static pose.
    Pose2,
}

/// Rigid offset applied to the subject mesh for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SubjectMotion {
    /// Vertical offset in meters.
    pub lift: f32,
    /// Rotation about +Y in radians.
    pub yaw: f32,
}

impl SubjectAction {
    /// Motion `elapsed_secs` after the action was selected.
    #[must_use]
    pub fn motion_at(self, elapsed_secs: f32) -> SubjectMotion {
        match self {
            Self::Idle => SubjectMotion {
                lift: elapsed_secs.sin() * IDLE_BOB_AMPLITUDE,
                yaw: 0.0,
            },
            Self::Pose1 => SubjectMotion {
                lift: 0.0,
                yaw: (elapsed_secs * TURNTABLE_RATE) % std::f32::consts::TAU,
            },
            Self::Pose2 => SubjectMotion::default(),
        }
    }
}
