//! Camera target and position calculations
//!
//! Pure functions of the grid shape and an enumerated view preset. The
//! camera looks at the vertical midpoint of the grid, and preset
//! positions scale with the larger grid dimension so the whole scene
//! stays in frame. Poses are `[x, y, z]` arrays ready for the hosting
//! renderer.

use std::fmt;

use crate::io::configuration::{
    CAMERA_DEPTH_BASE, CAMERA_DEPTH_FACTOR, CAMERA_HEIGHT_FACTOR, CAMERA_ISO_DEPTH_BASE,
    CAMERA_ISO_DEPTH_FACTOR, CAMERA_LATERAL_FACTOR, FRONT_VIEW_X, FRONT_VIEW_Y,
};
use crate::math::bounds::clamp_value;
use crate::math::interpolation::{lerp, smoothstep};

/// Enumerated camera preset determining pose relative to grid size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraView {
    /// Elevated three-quarter view; the studio's default framing
    #[default]
    Iso,
    /// Head-on view from in front of the grid
    Front,
    /// Side view from the left of the grid
    Left,
}

impl CameraView {
    /// Parse a view name, falling back to `Iso` for unrecognised values
    ///
    /// View names arrive from user-facing controls; an unknown name
    /// selects the default framing rather than failing.
    pub fn parse(name: &str) -> Self {
        match name {
            "front" => Self::Front,
            "left" => Self::Left,
            _ => Self::Iso,
        }
    }

    /// Preset name as the studio labels it
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iso => "iso",
            Self::Front => "front",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for CameraView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Camera look-at point: the vertical midpoint of the grid
pub const fn camera_target(row_count: usize, x_offset: f32, z_offset: f32) -> [f32; 3] {
    [x_offset, row_count as f32 / 2.0, z_offset]
}

/// Camera position for a view preset over a rows × columns grid
pub const fn calculate_camera_position(
    row_count: usize,
    column_count: usize,
    view: CameraView,
) -> [f32; 3] {
    let larger_dimension = if row_count > column_count {
        row_count
    } else {
        column_count
    };
    let grid_size = larger_dimension as f32;
    let vertical_offset = grid_size * CAMERA_HEIGHT_FACTOR;
    let depth_offset = CAMERA_DEPTH_BASE + grid_size * CAMERA_DEPTH_FACTOR;

    match view {
        CameraView::Front => [FRONT_VIEW_X, FRONT_VIEW_Y, depth_offset],
        CameraView::Left => [-grid_size * CAMERA_LATERAL_FACTOR, vertical_offset, 0.0],
        CameraView::Iso => [
            grid_size * CAMERA_LATERAL_FACTOR,
            vertical_offset,
            CAMERA_ISO_DEPTH_BASE + grid_size * CAMERA_ISO_DEPTH_FACTOR,
        ],
    }
}

/// Eased camera position between two poses
///
/// `progress` is clamped to [0, 1] and smoothstep-eased, so a
/// transition driven frame by frame settles at both ends without
/// overshoot.
pub fn interpolate_position(from: [f32; 3], to: [f32; 3], progress: f32) -> [f32; 3] {
    let eased = smoothstep(clamp_value(progress, 0.0, 1.0));
    let [from_x, from_y, from_z] = from;
    let [to_x, to_y, to_z] = to;
    [
        lerp(from_x, to_x, eased),
        lerp(from_y, to_y, eased),
        lerp(from_z, to_z, eased),
    ]
}
