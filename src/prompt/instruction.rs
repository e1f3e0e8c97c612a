//! Turns a scene snapshot into the instruction sent to the text model.

use crate::scene::SceneState;

/// Comma-separated description of every enabled light, in rig order.
#[must_use]
pub fn describe_lighting(state: &SceneState) -> String {
    state
        .enabled_lights()
        .map(crate::scene::LightConfig::describe)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the cinematographer instruction for `state`.
#[must_use]
pub fn build_instruction(state: &SceneState) -> String {
    format!(
        "Generate a high-quality cinematic AI video generation prompt based on these technical 3D scene parameters:
- Camera FOV: {fov} (Higher means wide angle, lower means telephoto)
- Camera Distance: {distance:.1} meters from subject
- Camera Elevation: {height:.1} meters
- Composition Style: {composition}
- Lighting Setup: {lighting}

The subject is a stylized character.
Describe the scene in English (as AI tools like Veo/Midjourney work best with English) in a way that sounds like a professional cinematographer.
Include keywords for mood, lighting (like 'rim light', 'volumetric fog'), and camera lens characteristics.
Keep the output concise and formatted as a single string of keywords and descriptive phrases.",
        fov = state.camera_fov,
        distance = state.camera_distance,
        height = state.camera_height,
        composition = state.grid_type.display_label(true),
        lighting = describe_lighting(state),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::CompositionGrid;

    #[test]
    fn default_scene_instruction() {
        let text = build_instruction(&SceneState::default());
        assert!(text.contains("- Camera FOV: 45 "));
        assert!(text.contains("- Camera Distance: 6.0 meters"));
        assert!(text.contains("- Camera Elevation: 1.5 meters"));
        assert!(text.contains("- Composition Style: 无 (None)"));
        assert!(text.contains(
            "- Lighting Setup: 主光 (Key Light) (Color: #ffffff, Intensity: 5), \
             补光 (Fill Light) (Color: #4455ff, Intensity: 2), \
             轮廓光 (Rim Light) (Color: #ff4400, Intensity: 8)"
        ));
    }

    #[test]
    fn disabled_lights_are_left_out() {
        let mut state = SceneState::default();
        state.lights[0].enabled = false;
        state.lights[2].enabled = false;
        assert_eq!(
            describe_lighting(&state),
            "补光 (Fill Light) (Color: #4455ff, Intensity: 2)"
        );

        state.lights[1].enabled = false;
        assert_eq!(describe_lighting(&state), "");
    }

    #[test]
    fn distances_round_to_one_decimal() {
        let state = SceneState {
            camera_distance: 2.345,
            camera_height: 0.26,
            camera_fov: 102.5,
            grid_type: CompositionGrid::Thirds,
            ..SceneState::default()
        };
        let text = build_instruction(&state);
        assert!(text.contains("Camera Distance: 2.3 meters"));
        assert!(text.contains("Camera Elevation: 0.3 meters"));
        assert!(text.contains("Camera FOV: 102.5 "));
        assert!(text.contains("Composition Style: 三分法 (Rule of Thirds)"));
    }
}
