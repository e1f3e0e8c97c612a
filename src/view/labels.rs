//! Text overlays: subject billboard, camera-monitor badge, status readout.
//!
//! All three classify through [`ShotLabel::for_distance`], never by their
//! own thresholds.

use serde::Serialize;

use crate::scene::SceneState;
use crate::shot::ShotLabel;

/// Shot label floating above the subject in the 3D stage view.
#[must_use]
pub fn subject_billboard(state: &SceneState, bilingual: bool) -> ShotLabel {
    ShotLabel::for_distance(state.camera_distance, bilingual)
}

/// The camera-monitor inset: what the shooting camera sees, annotated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorOverlay {
    /// Shot badge in the lower-left corner.
    pub badge: ShotLabel,
    /// Lens readout, e.g. `45° · 6.0m`.
    pub lens: String,
}

impl MonitorOverlay {
    /// Overlay for `state`.
    #[must_use]
    pub fn new(state: &SceneState, bilingual: bool) -> Self {
        Self {
            badge: ShotLabel::for_distance(state.camera_distance, bilingual),
            lens: format!(
                "{:.0}° · {:.1}m",
                state.camera_fov, state.camera_distance
            ),
        }
    }
}

/// Live status block at the bottom of the control panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReadout {
    /// Current shot.
    pub shot: ShotLabel,
    /// Number of enabled lights.
    pub active_lights: usize,
    /// Dolly slider caption, e.g. `6.0m`.
    pub distance: String,
    /// Zoom slider caption, e.g. `45°`.
    pub fov: String,
    /// Height slider caption, e.g. `1.5m`.
    pub height: String,
    /// Active composition guide.
    pub composition: String,
}

impl StatusReadout {
    /// Readout for `state`.
    #[must_use]
    pub fn new(state: &SceneState, bilingual: bool) -> Self {
        Self {
            shot: ShotLabel::for_distance(state.camera_distance, bilingual),
            active_lights: state.enabled_lights().count(),
            distance: format!("{:.1}m", state.camera_distance),
            fov: format!("{:.0}°", state.camera_fov),
            height: format!("{:.1}m", state.camera_height),
            composition: state.grid_type.display_label(bilingual),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::CompositionGrid;
    use crate::shot::{classify, ShotType};

    fn at(distance: f64) -> SceneState {
        SceneState {
            camera_distance: distance,
            ..SceneState::default()
        }
    }

    #[test]
    fn every_label_site_agrees_with_the_classifier() {
        for step in 0..=1000 {
            let d = 1.0 + f64::from(step) * 0.009;
            let state = at(d);
            let expected = classify(d);
            assert_eq!(subject_billboard(&state, false).shot, expected);
            assert_eq!(MonitorOverlay::new(&state, false).badge.shot, expected);
            assert_eq!(StatusReadout::new(&state, false).shot.shot, expected);
        }
    }

    #[test]
    fn boundary_distances_on_every_site() {
        let state = at(2.5);
        assert_eq!(subject_billboard(&state, false).text, "Medium Shot");
        assert_eq!(MonitorOverlay::new(&state, false).badge.text, "Medium Shot");
        assert_eq!(StatusReadout::new(&state, false).shot.text, "Medium Shot");

        let state = at(1.5);
        assert_eq!(
            StatusReadout::new(&state, false).shot.shot,
            ShotType::MediumCloseUp
        );
    }

    #[test]
    fn lighting_does_not_change_the_shot() {
        let mut state = at(6.0);
        let all_on = StatusReadout::new(&state, false);
        assert_eq!(all_on.shot.text, "Wide Shot");
        assert_eq!(all_on.active_lights, 3);

        state.lights[0].enabled = false;
        state.lights[1].enabled = false;
        let one_on = StatusReadout::new(&state, false);
        assert_eq!(one_on.shot, all_on.shot);
        assert_eq!(one_on.active_lights, 1);
    }

    #[test]
    fn slider_captions() {
        let status = StatusReadout::new(&SceneState::default(), false);
        assert_eq!(status.distance, "6.0m");
        assert_eq!(status.fov, "45°");
        assert_eq!(status.height, "1.5m");
        assert_eq!(status.composition, "None");

        let monitor = MonitorOverlay::new(&SceneState::default(), true);
        assert_eq!(monitor.lens, "45° · 6.0m");
        assert_eq!(monitor.badge.text, "全景 (Wide Shot)");
    }

    #[test]
    fn composition_caption_follows_language() {
        let state = SceneState {
            grid_type: CompositionGrid::GoldenSpiral,
            ..SceneState::default()
        };
        assert_eq!(StatusReadout::new(&state, false).composition, "Golden Spiral");
        assert_eq!(
            StatusReadout::new(&state, true).composition,
            "黄金螺旋 (Golden Spiral)"
        );
    }
}
