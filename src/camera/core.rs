use glam::{Mat4, Vec3};

use crate::scene::state::SceneState;

/// Point on the subject the shooting camera always looks at (chest height).
pub const SUBJECT_LOOK_AT: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// The shooting camera for a scene: on the +Z axis at
    /// `(0, height, distance)`, looking at [`SUBJECT_LOOK_AT`].
    #[must_use]
    pub fn shooting(
        state: &SceneState,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        Self {
            eye: shooting_position(state),
            target: SUBJECT_LOOK_AT,
            up: Vec3::Y,
            aspect,
            fovy: state.camera_fov as f32,
            znear,
            zfar,
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// World → camera transform.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection matrix ([0,1] depth range).
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

}

/// World-space position of the shooting camera for `state`.
#[must_use]
pub fn shooting_position(state: &SceneState) -> Vec3 {
    Vec3::new(0.0, state.camera_height as f32, state.camera_distance as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(distance: f64, height: f64, fov: f64) -> Camera {
        let state = SceneState {
            camera_distance: distance,
            camera_height: height,
            camera_fov: fov,
            ..SceneState::default()
        };
        Camera::shooting(&state, 16.0 / 9.0, 0.1, 100.0)
    }

    #[test]
    fn eye_follows_scene_state() {
        let cam = camera(6.0, 1.5, 45.0);
        assert_eq!(cam.eye, Vec3::new(0.0, 1.5, 6.0));
        assert_eq!(cam.target, SUBJECT_LOOK_AT);
        assert_eq!(cam.fovy, 45.0);
    }

    #[test]
    fn look_at_target_projects_to_center() {
        let cam = camera(4.0, 2.0, 60.0);
        let clip = cam.build_matrix() * SUBJECT_LOOK_AT.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn dolly_zoom_pose_keeps_half_height() {
        use crate::camera::dolly_zoom::DollyZoom;

        // Eye level with the look-at point so eye–target distance equals
        // the camera distance.
        // Projection y scale is 1 / tan(fov / 2).
        let half_height = |cam: &Camera| {
            (cam.target - cam.eye).length() / cam.build_projection().y_axis.y
        };
        let dz = DollyZoom::new(6.0, 45.0, 2.0);
        let before = half_height(&camera(6.0, 1.0, 45.0));
        let (d, f) = dz.sample(0.7);
        let after = half_height(&camera(d, 1.0, f));
        assert!((before - after).abs() < 1e-4, "{before} vs {after}");
    }
}
