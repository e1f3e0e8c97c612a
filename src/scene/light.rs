//! Light rig: per-light configuration and the default three-point setup.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::color;

/// Renderer intensity units per control-panel intensity step.
pub const RENDER_INTENSITY_SCALE: f32 = 20.0;

/// How a light emits.
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
pub enum LightKind {
    /// Omnidirectional point light.
    #[default]
    Point,
    /// Cone light aimed at the subject.
    Spot,
    /// Parallel rays (sun-like).
    Directional,
}

/// One light of the rig. Identity is `id`; everything else is editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LightConfig {
    /// Stable unique key (`key`, `fill`, `rim`).
    #[schemars(skip)]
    pub id: String,
    /// Display name.
    #[schemars(skip)]
    pub name: String,
    /// Whether the light contributes to the scene.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Color as `#rrggbb`.
    #[schemars(title = "Color", extend("format" = "color"))]
    pub color: String,
    /// Control-panel intensity.
    #[schemars(title = "Intensity", range(min = 0.0, max = 10.0), extend("step" = 0.5))]
    pub intensity: f64,
    /// World-space position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Emission type.
    #[schemars(skip)]
    pub kind: LightKind,
}

impl LightConfig {
    /// Position as a vector.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    /// Color as RGB in `[0, 1]`, falling back to white for a bad hex.
    #[must_use]
    pub fn rgb(&self) -> [f32; 3] {
        color::parse_hex(&self.color).unwrap_or([1.0; 3])
    }

    /// Intensity in renderer units.
    #[must_use]
    pub fn render_intensity(&self) -> f32 {
        self.intensity as f32 * RENDER_INTENSITY_SCALE
    }

    /// One-line description used in generated prompts.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{} (Color: {}, Intensity: {})",
            self.name, self.color, self.intensity
        )
    }
}

fn light(
    id: &str,
    name: &str,
    color: &str,
    intensity: f64,
    position: [f32; 3],
    kind: LightKind,
) -> LightConfig {
    LightConfig {
        id: id.to_owned(),
        name: name.to_owned(),
        enabled: true,
        color: color.to_owned(),
        intensity,
        position,
        kind,
    }
}

/// The three-point rig every session starts with: key, fill and rim.
#[must_use]
pub fn default_lights() -> Vec<LightConfig> {
    vec![
        light("key", "主光 (Key Light)", "#ffffff", 5.0, [3.0, 3.0, 3.0], LightKind::Spot),
        light(
            "fill",
            "补光 (Fill Light)",
            "#4455ff",
            2.0,
            [-4.0, 2.0, 2.0],
            LightKind::Point,
        ),
        light("rim", "轮廓光 (Rim Light)", "#ff4400", 8.0, [0.0, 4.0, -4.0], LightKind::Spot),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rig_is_key_fill_rim() {
        let lights = default_lights();
        let ids: Vec<&str> = lights.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["key", "fill", "rim"]);
        assert!(lights.iter().all(|l| l.enabled));
        assert_eq!(lights[1].kind, LightKind::Point);
        assert_eq!(lights[2].position(), Vec3::new(0.0, 4.0, -4.0));
    }

    #[test]
    fn render_units() {
        let key = &default_lights()[0];
        assert_eq!(key.render_intensity(), 100.0);
        assert_eq!(key.rgb(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn describe_matches_prompt_format() {
        let fill = &default_lights()[1];
        assert_eq!(fill.describe(), "补光 (Fill Light) (Color: #4455ff, Intensity: 2)");
    }

    #[test]
    fn bad_color_renders_white() {
        let mut l = default_lights().remove(2);
        l.color = "orange".to_owned();
        assert_eq!(l.rgb(), [1.0, 1.0, 1.0]);
    }
}
