//! Per-frame view models derived from a scene snapshot.
//!
//! Nothing here holds scene state of its own except the camera gizmo's
//! trailing position; everything else is recomputed from the snapshot each
//! frame.

pub mod composition;
pub mod labels;
pub mod stage;

pub use composition::{guides, Guide};
pub use labels::{subject_billboard, MonitorOverlay, StatusReadout};
pub use stage::{distance_rings, light_renders, CameraGizmo, DistanceRing, LightRender};

use glam::Vec3;

use crate::camera::core::Camera;
use crate::options::Options;
use crate::scene::{SceneState, SubjectMotion};
use crate::shot::ShotLabel;

/// Everything the two viewports and the status panel draw for one frame.
#[derive(Debug, Clone)]
pub struct FrameView {
    /// The shooting camera (camera-monitor viewport).
    pub camera: Camera,
    /// Shot label above the subject in the director's view.
    pub subject_label: ShotLabel,
    /// Camera-monitor annotations.
    pub monitor: MonitorOverlay,
    /// Control-panel status block.
    pub status: StatusReadout,
    /// Composition guides over the camera monitor.
    pub guides: Vec<Guide>,
    /// Floor rings; empty when disabled in options.
    pub rings: Vec<DistanceRing>,
    /// Enabled lights.
    pub lights: Vec<LightRender>,
    /// Subject offset for this frame.
    pub subject: SubjectMotion,
    /// Camera gizmo in the director's view.
    pub gizmo: CameraGizmo,
    /// Unit direction the gizmo points in (toward the subject).
    pub gizmo_facing: Vec3,
}

impl FrameView {
    /// Build the frame for `state`.
    ///
    /// `action_secs` is the time since the subject action was selected.
    /// `gizmo` is the gizmo position after this frame's follow step.
    #[must_use]
    pub fn build(
        state: &SceneState,
        options: &Options,
        action_secs: f32,
        gizmo: CameraGizmo,
    ) -> Self {
        let bilingual = options.display.bilingual_labels;
        let cam = &options.camera;
        Self {
            camera: Camera::shooting(state, cam.aspect, cam.znear, cam.zfar),
            subject_label: subject_billboard(state, bilingual),
            monitor: MonitorOverlay::new(state, bilingual),
            status: StatusReadout::new(state, bilingual),
            guides: guides(state.grid_type),
            rings: if options.display.show_distance_rings {
                distance_rings(state.camera_distance, bilingual)
            } else {
                Vec::new()
            },
            lights: light_renders(state),
            subject: state.subject_action.motion_at(action_secs),
            gizmo,
            gizmo_facing: gizmo.facing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::CompositionGrid;
    use crate::shot::ShotType;

    #[test]
    fn frame_reflects_state_and_options() {
        let state = SceneState {
            camera_distance: 1.2,
            grid_type: CompositionGrid::Thirds,
            ..SceneState::default()
        };
        let mut options = Options::default();
        options.display.show_distance_rings = false;

        let frame = FrameView::build(&state, &options, 0.0, CameraGizmo::at(&state));
        assert_eq!(frame.subject_label.shot, ShotType::CloseUp);
        assert_eq!(frame.monitor.badge, frame.subject_label);
        assert_eq!(frame.status.shot, frame.subject_label);
        assert_eq!(frame.guides.len(), 4);
        assert!(frame.rings.is_empty());
        assert_eq!(frame.lights.len(), 3);
        assert_eq!(frame.camera.fovy, 45.0);
        assert_eq!(frame.camera.aspect, options.camera.aspect);
    }

    #[test]
    fn rings_on_by_default() {
        let state = SceneState::default();
        let frame =
            FrameView::build(&state, &Options::default(), 1.0, CameraGizmo::default());
        assert_eq!(frame.rings.len(), 2);
        assert!(frame.guides.is_empty());
    }

    #[test]
    fn gizmo_points_from_its_position_to_the_subject() {
        let state = SceneState {
            camera_height: 1.0,
            ..SceneState::default()
        };
        let gizmo = CameraGizmo {
            position: Vec3::new(0.0, 1.0, 4.0),
        };
        let frame = FrameView::build(&state, &Options::default(), 0.0, gizmo);
        assert!((frame.gizmo_facing - Vec3::NEG_Z).length() < 1e-6);
        assert_eq!(frame.gizmo.position, gizmo.position);
    }
}
