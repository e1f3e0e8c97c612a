use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Overlay and label presentation.
pub struct DisplayOptions {
    /// Show "中文 (English)" shot labels instead of English only.
    #[schemars(title = "Bilingual Labels")]
    pub bilingual_labels: bool,
    /// Draw the distance rings on the stage floor.
    #[schemars(title = "Distance Rings")]
    pub show_distance_rings: bool,
    /// Per-frame blend factor of the camera gizmo toward its target.
    #[schemars(title = "Gizmo Follow", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub gizmo_follow: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            bilingual_labels: false,
            show_distance_rings: true,
            gizmo_follow: 0.1,
        }
    }
}
