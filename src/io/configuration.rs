//! Studio constants and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Default number of grid rows
pub const DEFAULT_ROW_COUNT: usize = 4;
/// Default number of grid columns
pub const DEFAULT_COLUMN_COUNT: usize = 8;
/// Default number of blocks scattered into a demo scene
pub const DEFAULT_BLOCK_COUNT: usize = 6;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Probability that the scatter generator prefers a two-cell block
pub const DOUBLE_BLOCK_PROBABILITY: f64 = 0.5;

// Cell colors are RGBA to match the snapshot export pipeline
/// Grid-level default color applied to newly built cells
pub const DEFAULT_ACTIVE_COLOR: [u8; 4] = [76, 141, 245, 255];
/// Fill color for disabled cells in snapshots
pub const DISABLED_CELL_COLOR: [u8; 4] = [120, 120, 120, 255];
/// Transparent background for unoccupied cells
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 0];

/// Resting height of a placed block mesh
pub const BLOCK_STAND_HEIGHT: f32 = 0.5;

// Camera framing factors; the pose scales with the larger dimension
/// Lateral distance factor for the side and isometric presets
pub const CAMERA_LATERAL_FACTOR: f32 = 1.2;
/// Height factor for the elevated presets
pub const CAMERA_HEIGHT_FACTOR: f32 = 1.5;
/// Base camera distance in front of the grid
pub const CAMERA_DEPTH_BASE: f32 = 5.0;
/// Distance growth per grid unit for the front preset
pub const CAMERA_DEPTH_FACTOR: f32 = 2.0;
/// Base depth of the isometric preset
pub const CAMERA_ISO_DEPTH_BASE: f32 = 3.0;
/// Depth growth per grid unit for the isometric preset
pub const CAMERA_ISO_DEPTH_FACTOR: f32 = 1.5;
/// Lateral position of the front preset
pub const FRONT_VIEW_X: f32 = 0.5;
/// Height of the front preset
pub const FRONT_VIEW_Y: f32 = 2.0;

// Output settings
/// Edge length of one cell in exported snapshots, in pixels
pub const EXPORT_CELL_PIXELS: u32 = 16;

// Rate limiting defaults for UI event handlers
/// Default throttle interval for scroll-driven handlers, in milliseconds
pub const DEFAULT_THROTTLE_INTERVAL_MS: u64 = 100;
/// Default debounce delay for burst-driven handlers, in milliseconds
pub const DEFAULT_DEBOUNCE_DELAY_MS: u64 = 250;
