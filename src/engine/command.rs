//! The lab's complete interactive vocabulary.
//!
//! Every control-panel action, whether a slider drag, a button or a
//! scripted call, is a [`LabCommand`] passed to
//! [`CineLab::execute`](super::CineLab::execute).

use serde::{Deserialize, Serialize};

use crate::scene::{CompositionGrid, SubjectAction};

/// A user-facing operation on the lab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum LabCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Dolly slider. Cancels any camera move in flight.
    SetCameraDistance {
        /// Meters from the subject.
        distance: f64,
    },
    /// Height slider. Camera moves leave height alone, so one in flight
    /// keeps running.
    SetCameraHeight {
        /// Meters above the floor.
        height: f64,
    },
    /// Zoom slider, clamped to the slider range. Cancels any camera move
    /// in flight.
    SetCameraFov {
        /// Vertical field of view in degrees.
        fov: f64,
    },
    /// Dolly-zoom to the configured target distance.
    DollyZoom,
    /// Animated dolly at constant FOV.
    Dolly {
        /// Destination distance in meters.
        to: f64,
    },
    /// Animated zoom at constant distance.
    Zoom {
        /// Destination FOV in degrees.
        to_fov: f64,
    },
    /// Stop the camera move in flight where it is.
    CancelCameraMove,

    // ── Composition and subject ─────────────────────────────────────
    /// Choose the composition guide.
    SetGrid {
        /// Guide to overlay.
        grid: CompositionGrid,
    },
    /// Choose the subject action.
    SetSubjectAction {
        /// New action.
        action: SubjectAction,
    },

    // ── Lights ──────────────────────────────────────────────────────
    /// Toggle a light.
    SetLightEnabled {
        /// Rig id.
        id: String,
        /// Whether the light contributes.
        enabled: bool,
    },
    /// Recolor a light.
    SetLightColor {
        /// Rig id.
        id: String,
        /// `#rrggbb` or `#rgb`.
        color: String,
    },
    /// Change a light's intensity.
    SetLightIntensity {
        /// Rig id.
        id: String,
        /// Control-panel intensity.
        intensity: f64,
    },

    // ── Prompt ──────────────────────────────────────────────────────
    /// Describe the current shot through the text model.
    GeneratePrompt,
    /// Clear the prompt panel.
    DismissPrompt,
}

impl LabCommand {
    /// Whether this command edits a quantity camera moves animate
    /// (distance or FOV), which takes over from any camera move.
    #[must_use]
    pub const fn is_manual_camera_edit(&self) -> bool {
        matches!(
            self,
            Self::SetCameraDistance { .. } | Self::SetCameraFov { .. }
        )
    }
}
