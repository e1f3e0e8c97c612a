use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::camera::dolly_zoom::DEFAULT_TARGET_DISTANCE;
use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Shooting-camera projection and camera-move parameters.
pub struct CameraOptions {
    /// Distance the dolly-zoom travels to, in meters.
    #[schemars(title = "Dolly-Zoom Target", range(min = 1.0, max = 10.0), extend("step" = 0.1))]
    pub dolly_zoom_target: f64,
    /// Duration of camera moves in milliseconds.
    #[schemars(title = "Move Duration (ms)", range(min = 0, max = 10000), extend("step" = 100))]
    pub move_duration_ms: u64,
    /// Progress curve applied to camera moves.
    #[schemars(skip)]
    pub easing: EasingFunction,
    /// Clamp animated FOV to the slider range instead of letting the
    /// dolly-zoom run past it.
    #[schemars(title = "Clamp Move FOV")]
    pub clamp_move_fov: bool,
    /// Viewport aspect ratio of the camera monitor.
    #[schemars(skip)]
    pub aspect: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl CameraOptions {
    /// Move duration as a [`Duration`].
    #[must_use]
    pub fn move_duration(&self) -> Duration {
        Duration::from_millis(self.move_duration_ms)
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            dolly_zoom_target: DEFAULT_TARGET_DISTANCE,
            move_duration_ms: 2000,
            easing: EasingFunction::Linear,
            clamp_move_fov: false,
            aspect: 16.0 / 10.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}
