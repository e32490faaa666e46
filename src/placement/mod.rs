//! Block placement validation and demo scene generation

/// Build-block shapes and placement records
pub mod block;
/// Placement and removal invariant enforcement
pub mod engine;
/// Seeded random scene generation
pub mod scatter;

pub use block::{BlockId, BlockKind, Coordinates, RenderedBlock};
