//! Stage elements of the director's 3D view: floor distance rings, the
//! camera gizmo, and the light render list.

use glam::Vec3;

use crate::camera::core::{shooting_position, SUBJECT_LOOK_AT};
use crate::scene::{LightKind, SceneState};
use crate::shot::{ShotType, CLOSE_UP_MAX};

/// Ring color when the camera is not near it.
pub const RING_IDLE_COLOR: &str = "#475569";

/// Radius of the medium-shot reference ring, in meters.
pub const MEDIUM_RING_RADIUS: f64 = 4.0;

/// One reference ring on the stage floor, centered on the subject.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceRing {
    /// Ring radius in meters.
    pub radius: f64,
    /// The band this ring marks.
    pub shot: ShotType,
    /// Floor text, e.g. `1.5m [Close-up]`.
    pub label: String,
    /// Whether the camera is currently near this ring.
    pub highlighted: bool,
    /// `#rrggbb`: the band color when highlighted, grey otherwise.
    pub color: &'static str,
}

impl DistanceRing {
    fn new(radius: f64, shot: ShotType, highlighted: bool, bilingual: bool) -> Self {
        let name = if bilingual {
            shot.label_zh()
        } else {
            shot.label()
        };
        Self {
            radius,
            shot,
            label: format!("{radius:.1}m [{name}]"),
            highlighted,
            color: if highlighted {
                shot.color_hex()
            } else {
                RING_IDLE_COLOR
            },
        }
    }
}

/// The close-up and medium reference rings for a camera at `distance`.
///
/// The close-up ring lights up under 2 m, the medium ring between 3 and
/// 5 m (both exclusive).
#[must_use]
pub fn distance_rings(distance: f64, bilingual: bool) -> Vec<DistanceRing> {
    vec![
        DistanceRing::new(CLOSE_UP_MAX, ShotType::CloseUp, distance < 2.0, bilingual),
        DistanceRing::new(
            MEDIUM_RING_RADIUS,
            ShotType::Medium,
            distance > 3.0 && distance < 5.0,
            bilingual,
        ),
    ]
}

/// The shooting-camera marker drawn in the director's view.
///
/// It trails the configured camera position, closing a fixed fraction of
/// the gap each frame, and always faces the subject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraGizmo {
    /// Current displayed position.
    pub position: Vec3,
}

impl CameraGizmo {
    /// Gizmo already resting at the camera position for `state`.
    #[must_use]
    pub fn at(state: &SceneState) -> Self {
        Self {
            position: shooting_position(state),
        }
    }

    /// Advance one frame toward the camera position for `state`.
    pub fn follow(&mut self, state: &SceneState, factor: f32) {
        let target = shooting_position(state);
        self.position = self.position.lerp(target, factor.clamp(0.0, 1.0));
    }

    /// Unit vector from the gizmo toward the subject.
    #[must_use]
    pub fn facing(&self) -> Vec3 {
        (SUBJECT_LOOK_AT - self.position).normalize_or_zero()
    }
}

impl Default for CameraGizmo {
    fn default() -> Self {
        Self::at(&SceneState::default())
    }
}

/// A light as the renderer consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct LightRender {
    /// Rig id of the light.
    pub id: String,
    /// Emission type.
    pub kind: LightKind,
    /// World-space position.
    pub position: Vec3,
    /// Linear RGB in `[0, 1]`.
    pub color: [f32; 3],
    /// Intensity in renderer units.
    pub intensity: f32,
}

/// Render list for the enabled lights of `state`, in rig order.
#[must_use]
pub fn light_renders(state: &SceneState) -> Vec<LightRender> {
    state
        .enabled_lights()
        .map(|light| LightRender {
            id: light.id.clone(),
            kind: light.kind,
            position: light.position(),
            color: light.rgb(),
            intensity: light.render_intensity(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::light::RENDER_INTENSITY_SCALE;

    #[test]
    fn close_up_ring_lights_under_two_meters() {
        let rings = distance_rings(1.8, false);
        assert!(rings[0].highlighted);
        assert_eq!(rings[0].color, "#f87171");
        assert_eq!(rings[0].label, "1.5m [Close-up]");
        assert!(!rings[1].highlighted);
        assert_eq!(rings[1].color, RING_IDLE_COLOR);

        assert!(!distance_rings(2.0, false)[0].highlighted);
    }

    #[test]
    fn medium_ring_bounds_are_exclusive() {
        assert!(!distance_rings(3.0, false)[1].highlighted);
        assert!(distance_rings(3.01, false)[1].highlighted);
        assert!(distance_rings(4.99, false)[1].highlighted);
        assert!(!distance_rings(5.0, false)[1].highlighted);
        assert_eq!(distance_rings(4.0, false)[1].color, "#34d399");
    }

    #[test]
    fn bilingual_ring_labels() {
        let rings = distance_rings(6.0, true);
        assert_eq!(rings[0].label, "1.5m [特写]");
        assert_eq!(rings[1].label, "4.0m [中景]");
    }

    #[test]
    fn gizmo_closes_a_fraction_of_the_gap() {
        let mut gizmo = CameraGizmo::default();
        assert_eq!(gizmo.position, Vec3::new(0.0, 1.5, 6.0));

        let state = SceneState {
            camera_distance: 2.0,
            ..SceneState::default()
        };
        gizmo.follow(&state, 0.1);
        assert!((gizmo.position.z - 5.6).abs() < 1e-5);

        for _ in 0..200 {
            gizmo.follow(&state, 0.1);
        }
        assert!((gizmo.position.z - 2.0).abs() < 1e-4);
    }

    #[test]
    fn gizmo_faces_the_subject() {
        let gizmo = CameraGizmo::at(&SceneState {
            camera_height: 1.0,
            ..SceneState::default()
        });
        assert!((gizmo.facing() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn only_enabled_lights_render() {
        let mut state = SceneState::default();
        state.lights[1].enabled = false;
        let renders = light_renders(&state);
        let ids: Vec<&str> = renders.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["key", "rim"]);
        assert!(
            (renders[0].intensity
                - state.lights[0].intensity as f32 * RENDER_INTENSITY_SCALE)
                .abs()
                < 1e-4
        );
    }
}
