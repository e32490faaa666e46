//! Spatial grid model and cell adjacency primitives
//!
//! This module contains the studio's spatial state:
//! - Pure index and adjacency math over (row, column) positions
//! - The grid of selectable cells and the placed-block registry

/// Pure index and adjacency primitives
pub mod adjacency;
/// Cell and grid state management
pub mod grid;

pub use grid::{Cell, GridModel};
