//! Placement and removal invariant enforcement
//!
//! Stateless operations over a [`GridModel`]: every function validates
//! its full precondition set before mutating, so a failed call leaves
//! the grid exactly as it was. The engine itself holds no state
//! between calls.

use crate::io::configuration::BLOCK_STAND_HEIGHT;
use crate::io::error::{Result, StudioError};
use crate::placement::block::{BlockId, BlockKind, Coordinates, RenderedBlock};
use crate::spatial::adjacency;
use crate::spatial::grid::GridModel;

/// Cell indices a block of `kind` would occupy anchored at `anchor_index`
///
/// The anchor comes first; further cells are derived from it through
/// the adjacency guards.
///
/// # Errors
///
/// Returns `OutOfBounds` when the anchor does not exist or the kind
/// requires a neighbour outside the grid.
pub fn footprint(grid: &GridModel, kind: BlockKind, anchor_index: usize) -> Result<Vec<usize>> {
    let anchor = grid.cell_at_index(anchor_index)?;
    let row_index = anchor.row_index();
    let column_index = anchor.column_index();

    match kind {
        BlockKind::Single => Ok(vec![anchor_index]),
        BlockKind::Double => {
            if adjacency::has_right_adjacent_column(column_index, grid.cols()) {
                Ok(vec![
                    anchor_index,
                    adjacency::cell_right_index(row_index, column_index, grid.cols()),
                ])
            } else {
                Err(StudioError::OutOfBounds {
                    row_index,
                    column_index: column_index + 1,
                    row_count: grid.rows(),
                    column_count: grid.cols(),
                })
            }
        }
    }
}

/// Place a block of `kind` anchored at `anchor_index`
///
/// Assigns a fresh id, derives the mesh coordinates from the anchor
/// cell, stamps the back-reference onto every footprint cell, and
/// registers the block with the grid. No partial placement: the grid
/// is untouched on any failure.
///
/// # Errors
///
/// Returns `OutOfBounds` when a required cell does not exist and
/// `CellOccupied` when any footprint cell already carries a block.
pub fn place(
    grid: &mut GridModel,
    kind: BlockKind,
    anchor_index: usize,
) -> Result<&RenderedBlock> {
    let cell_indexes = footprint(grid, kind, anchor_index)?;

    for &index in &cell_indexes {
        let cell = grid.cell_at_index(index)?;
        if let Some(block_id) = cell.block_id() {
            return Err(StudioError::CellOccupied {
                cell_index: index,
                block_id,
            });
        }
    }

    let anchor = grid.cell_at_index(anchor_index)?;
    let coordinates = Coordinates {
        x: anchor.column_index() as f32,
        y: BLOCK_STAND_HEIGHT,
        z: anchor.row_index() as f32,
    };

    let id = grid.allocate_block_id();
    Ok(grid.record_block(RenderedBlock::new(id, kind, cell_indexes, coordinates)))
}

/// Remove the block with the given id
///
/// Clears the back-reference on every cell the block occupied and
/// returns the removed record. A second removal of the same id fails
/// with `UnknownBlock` rather than silently succeeding, so "already
/// removed" stays observable to delete-mode callers.
///
/// # Errors
///
/// Returns `UnknownBlock` when no block with that id exists.
pub fn remove(grid: &mut GridModel, block_id: BlockId) -> Result<RenderedBlock> {
    grid.erase_block(block_id)
        .ok_or(StudioError::UnknownBlock { block_id })
}

/// Whether a block of `kind` could be placed at `anchor_index`
///
/// Pure precondition probe for hover and preview feedback; never
/// mutates the grid.
pub fn can_place(grid: &GridModel, kind: BlockKind, anchor_index: usize) -> bool {
    footprint(grid, kind, anchor_index).is_ok_and(|cell_indexes| {
        cell_indexes.iter().all(|&index| {
            grid.cell_at_index(index)
                .is_ok_and(|cell| cell.block_id().is_none())
        })
    })
}
