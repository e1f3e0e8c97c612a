//! The scene record every component reads.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::light::{default_lights, LightConfig};
use super::subject::SubjectAction;
use crate::camera::moves::CameraPose;

/// Control-panel range for camera distance (m).
pub const DISTANCE_RANGE: (f64, f64) = (1.0, 10.0);
/// Control-panel range for camera height (m).
pub const HEIGHT_RANGE: (f64, f64) = (0.2, 4.0);
/// Control-panel range for the FOV slider (degrees).
pub const FOV_SLIDER_RANGE: (f64, f64) = (10.0, 100.0);
/// Range any stored FOV must lie in. Wider than the slider so animated
/// moves can exceed it.
pub const FOV_VALID_RANGE: (f64, f64) = (1.0, 179.0);
/// Control-panel range for light intensity.
pub const INTENSITY_RANGE: (f64, f64) = (0.0, 10.0);

/// 2D framing guide drawn over the render.
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
pub enum CompositionGrid {
    /// No guide.
    #[default]
    None,
    /// Rule of thirds.
    Thirds,
    /// Center point and circle.
    Center,
    /// Golden-section lines with a spiral.
    GoldenSpiral,
}

impl CompositionGrid {
    /// Every grid, in control-panel order.
    pub const ALL: [CompositionGrid; 4] = [
        CompositionGrid::None,
        CompositionGrid::Thirds,
        CompositionGrid::Center,
        CompositionGrid::GoldenSpiral,
    ];

    /// English name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Thirds => "Rule of Thirds",
            Self::Center => "Center Composition",
            Self::GoldenSpiral => "Golden Spiral",
        }
    }

    /// Chinese name.
    #[must_use]
    pub const fn label_zh(self) -> &'static str {
        match self {
            Self::None => "无",
            Self::Thirds => "三分法",
            Self::Center => "中心构图",
            Self::GoldenSpiral => "黄金螺旋",
        }
    }

    /// `中文 (English)` when `bilingual`, else the English name.
    #[must_use]
    pub fn display_label(self, bilingual: bool) -> String {
        if bilingual {
            format!("{} ({})", self.label_zh(), self.label())
        } else {
            self.label().to_owned()
        }
    }
}

/// Camera, composition, lighting and subject settings for one moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Scene")]
pub struct SceneState {
    /// Camera-to-subject distance in meters.
    #[schemars(title = "Dolly Distance", range(min = 1.0, max = 10.0), extend("step" = 0.1))]
    pub camera_distance: f64,
    /// Camera elevation in meters.
    #[schemars(title = "Camera Height", range(min = 0.2, max = 4.0), extend("step" = 0.1))]
    pub camera_height: f64,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 10.0, max = 100.0), extend("step" = 1.0))]
    pub camera_fov: f64,
    /// Composition guide.
    #[schemars(title = "Composition Grid")]
    pub grid_type: CompositionGrid,
    /// Light rig in display order.
    #[schemars(title = "Lights")]
    pub lights: Vec<LightConfig>,
    /// Subject behavior.
    #[schemars(title = "Subject Action")]
    pub subject_action: SubjectAction,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            camera_distance: 6.0,
            camera_height: 1.5,
            camera_fov: 45.0,
            grid_type: CompositionGrid::None,
            lights: default_lights(),
            subject_action: SubjectAction::Idle,
        }
    }
}

impl SceneState {
    /// JSON Schema describing the control surface (ranges, steps, titles).
    #[must_use]
    pub fn control_schema() -> schemars::Schema {
        schemars::schema_for!(SceneState)
    }

    /// The animated camera parameters.
    #[must_use]
    pub fn camera_pose(&self) -> CameraPose {
        CameraPose::new(self.camera_distance, self.camera_fov)
    }

    /// Write an animated pose back.
    pub fn set_camera_pose(&mut self, pose: CameraPose) {
        self.camera_distance = pose.distance;
        self.camera_fov = pose.fov;
    }

    /// Look up a light by id.
    #[must_use]
    pub fn light(&self, id: &str) -> Option<&LightConfig> {
        self.lights.iter().find(|l| l.id == id)
    }

    /// Mutable lookup of a light by id.
    pub fn light_mut(&mut self, id: &str) -> Option<&mut LightConfig> {
        self.lights.iter_mut().find(|l| l.id == id)
    }

    /// Lights currently contributing, in display order.
    pub fn enabled_lights(&self) -> impl Iterator<Item = &LightConfig> {
        self.lights.iter().filter(|l| l.enabled)
    }
}
