//! Camera system for the lab's shooting camera.
//!
//! Provides the perspective camera built from scene state, dolly-zoom
//! kinematics, camera-move curves, and the cancelable move animator.

/// Frame-driven camera-move runner with explicit cancellation.
pub mod animator;
/// Core camera struct and matrices.
pub mod core;
/// Dolly-zoom kinematics.
pub mod dolly_zoom;
/// Dolly, zoom and dolly-zoom curves.
pub mod moves;

pub use animator::{CameraAnimator, MoveHandle};
pub use dolly_zoom::DollyZoom;
pub use moves::{CameraMove, CameraPose};
