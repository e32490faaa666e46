//! Camera pose derivation from grid dimensions and view presets

/// Camera target and position calculations
pub mod framing;

pub use framing::{CameraView, calculate_camera_position, camera_target, interpolate_position};
