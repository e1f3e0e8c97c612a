//! The single owner of [`SceneState`].
//!
//! Every write goes through [`SceneStore::replace`] or
//! [`SceneStore::update`], which validate the whole candidate state and then
//! swap it in as a new immutable snapshot. Readers hold `Arc` snapshots, so
//! they never observe a half-applied edit, and a snapshot handed to another
//! thread (the prompt request) stays valid after later edits.

use std::collections::HashSet;
use std::sync::Arc;

use super::light::LightConfig;
use super::state::{
    SceneState, DISTANCE_RANGE, FOV_VALID_RANGE, HEIGHT_RANGE, INTENSITY_RANGE,
};
use crate::util::color;

/// Color given to a seeded light whose color does not parse.
const SEED_FALLBACK_COLOR: &str = "#ffffff";

/// Versioned holder of the current scene snapshot.
#[derive(Debug, Clone)]
pub struct SceneStore {
    current: Arc<SceneState>,
    revision: u64,
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new(SceneState::default())
    }
}

impl SceneStore {
    /// Store seeded with `initial` (validated; its light rig becomes fixed).
    #[must_use]
    pub fn new(initial: SceneState) -> Self {
        let fallback = SceneState::default();
        let mut initial = initial;
        sanitize_camera(&mut initial, &fallback);
        seed_lights(&mut initial.lights);
        Self {
            current: Arc::new(initial),
            revision: 0,
        }
    }

    /// Cheap shared handle to the current state.
    #[must_use]
    pub fn snapshot(&self) -> Arc<SceneState> {
        Arc::clone(&self.current)
    }

    /// Borrow the current state.
    #[must_use]
    pub fn get(&self) -> &SceneState {
        &self.current
    }

    /// Number of writes that actually changed the state.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the whole state.
    pub fn replace(&mut self, next: SceneState) {
        self.commit(next);
    }

    /// Edit a copy of the current state and commit it.
    pub fn update(&mut self, edit: impl FnOnce(&mut SceneState)) {
        let mut next = SceneState::clone(&self.current);
        edit(&mut next);
        self.commit(next);
    }

    fn commit(&mut self, mut next: SceneState) {
        let prev = &*self.current;
        sanitize_camera(&mut next, prev);
        sanitize_lights(&mut next, prev);

        if next == *prev {
            return;
        }
        self.current = Arc::new(next);
        self.revision += 1;
        log::trace!("scene revision {}", self.revision);
    }
}

/// `value` clamped into `range`, or `fallback` if it is not finite.
fn clamp_finite(value: f64, fallback: f64, (lo, hi): (f64, f64)) -> f64 {
    if value.is_finite() {
        value.clamp(lo, hi)
    } else {
        log::warn!("rejected non-finite scene value, keeping {fallback}");
        fallback
    }
}

fn sanitize_camera(next: &mut SceneState, prev: &SceneState) {
    next.camera_distance =
        clamp_finite(next.camera_distance, prev.camera_distance, DISTANCE_RANGE);
    next.camera_height =
        clamp_finite(next.camera_height, prev.camera_height, HEIGHT_RANGE);
    next.camera_fov =
        clamp_finite(next.camera_fov, prev.camera_fov, FOV_VALID_RANGE);
}

/// Lights are created once; an edit may change them but not add, drop or
/// reorder them.
fn sanitize_lights(next: &mut SceneState, prev: &SceneState) {
    let same_rig = next.lights.len() == prev.lights.len()
        && next.lights.iter().zip(&prev.lights).all(|(a, b)| a.id == b.id);
    if !same_rig {
        log::warn!("rejected edit that changes the light rig");
        next.lights.clone_from(&prev.lights);
        return;
    }
    for (light, before) in next.lights.iter_mut().zip(&prev.lights) {
        sanitize_light_numbers(light, Some(before));
        if color::parse_hex(&light.color).is_none() {
            log::warn!(
                "rejected color {:?} for light {}, keeping {}",
                light.color,
                light.id,
                before.color
            );
            light.color.clone_from(&before.color);
        }
    }
}

/// Validate a seeded rig: the first light with a given id wins and bad
/// colors become white.
fn seed_lights(lights: &mut Vec<LightConfig>) {
    let mut seen = HashSet::new();
    lights.retain(|light| {
        let first = seen.insert(light.id.clone());
        if !first {
            log::warn!("dropped duplicate light id {:?}", light.id);
        }
        first
    });
    for light in lights.iter_mut() {
        sanitize_light_numbers(light, None);
        if color::parse_hex(&light.color).is_none() {
            log::warn!(
                "rejected color {:?} for light {}, using {SEED_FALLBACK_COLOR}",
                light.color,
                light.id
            );
            light.color = SEED_FALLBACK_COLOR.to_owned();
        }
    }
}

fn sanitize_light_numbers(light: &mut LightConfig, before: Option<&LightConfig>) {
    let fallback = before.map_or(0.0, |b| b.intensity);
    light.intensity = clamp_finite(light.intensity, fallback, INTENSITY_RANGE);
    if light.position.iter().any(|c| !c.is_finite()) {
        light.position = before.map_or([0.0; 3], |b| b.position);
    }
}
