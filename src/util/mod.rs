//! Shared helpers: easing curves for camera moves and hex color parsing.

pub mod color;
pub mod easing;
