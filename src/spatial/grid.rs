//! Cell and grid state management
//!
//! `GridModel` owns every cell of a rows × columns grid plus the map of
//! placed blocks. All cells are allocated together when the grid is
//! built and mutated in place as selection and placement occur; a
//! rebuild discards every cell and every placed block.

use ndarray::Array2;
use std::collections::HashMap;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, StudioError};
use crate::placement::block::{BlockId, RenderedBlock};
use crate::spatial::adjacency;

/// RGBA display color of a cell
pub type CellColor = [u8; 4];

/// One addressable unit of the 2D grid
///
/// Cells carry their selection state, display color, and a weak
/// back-reference to the block occupying them. The linear `index` is
/// derived from (row, column) once at construction; nothing recomputes
/// it independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    row_index: usize,
    column_index: usize,
    index: usize,
    active: bool,
    disabled: bool,
    has_outline: bool,
    has_disabled_outline: bool,
    is_start_cell: bool,
    is_end_cell: bool,
    color: CellColor,
    block_id: Option<BlockId>,
}

impl Cell {
    pub(crate) const fn new(
        row_index: usize,
        column_index: usize,
        column_count: usize,
        color: CellColor,
    ) -> Self {
        Self {
            row_index,
            column_index,
            index: adjacency::cell_index(row_index, column_index, column_count),
            active: false,
            disabled: false,
            has_outline: false,
            has_disabled_outline: false,
            is_start_cell: false,
            is_end_cell: false,
            color,
            block_id: None,
        }
    }

    /// Row this cell sits on
    pub const fn row_index(&self) -> usize {
        self.row_index
    }

    /// Column this cell sits on
    pub const fn column_index(&self) -> usize {
        self.column_index
    }

    /// Linear index within the grid's row-major cell order
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Whether the cell is currently selected for building
    pub const fn active(&self) -> bool {
        self.active
    }

    /// Whether the cell cannot be selected
    pub const fn disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the cell sits on the outlined selection path
    pub const fn has_outline(&self) -> bool {
        self.has_outline
    }

    /// Whether the cell sits on the selection path but is disabled
    pub const fn has_disabled_outline(&self) -> bool {
        self.has_disabled_outline
    }

    /// Whether the cell anchors a multi-cell drag selection
    pub const fn is_start_cell(&self) -> bool {
        self.is_start_cell
    }

    /// Whether the cell terminates a multi-cell drag selection
    pub const fn is_end_cell(&self) -> bool {
        self.is_end_cell
    }

    /// Display color of the cell
    pub const fn color(&self) -> CellColor {
        self.color
    }

    /// Id of the block occupying this cell, if any
    ///
    /// Set if and only if this cell's index appears in that block's
    /// footprint; the authoritative record lives in the grid's block
    /// map.
    pub const fn block_id(&self) -> Option<BlockId> {
        self.block_id
    }
}

/// A rows × columns grid of cells plus the registry of placed blocks
///
/// Exclusive owner of its cells and blocks: at most one block occupies
/// a given cell at any time, and all mutation happens through this
/// type's methods (the placement engine uses crate-internal hooks).
#[derive(Debug, Clone)]
pub struct GridModel {
    row_count: usize,
    column_count: usize,
    cells: Array2<Cell>,
    blocks: HashMap<BlockId, RenderedBlock>,
    next_block_id: BlockId,
    default_color: CellColor,
}

impl GridModel {
    /// Create a grid with every cell inactive, enabled, and unoccupied
    ///
    /// Cells are allocated in row-major order and take `default_color`
    /// as their display color.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` when either dimension is zero or
    /// exceeds [`MAX_GRID_DIMENSION`].
    pub fn new(
        row_count: usize,
        column_count: usize,
        default_color: CellColor,
    ) -> Result<Self> {
        validate_dimensions(row_count, column_count)?;

        let cells = Array2::from_shape_fn((row_count, column_count), |(row, column)| {
            Cell::new(row, column, column_count, default_color)
        });

        Ok(Self {
            row_count,
            column_count,
            cells,
            blocks: HashMap::new(),
            next_block_id: 0,
            default_color,
        })
    }

    /// Number of rows in the grid
    pub const fn rows(&self) -> usize {
        self.row_count
    }

    /// Number of columns in the grid
    pub const fn cols(&self) -> usize {
        self.column_count
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.row_count * self.column_count
    }

    /// Grid-level default cell color
    pub const fn default_color(&self) -> CellColor {
        self.default_color
    }

    /// Cell at a (row, column) position
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when either index is outside the grid.
    pub fn cell_at(&self, row_index: usize, column_index: usize) -> Result<&Cell> {
        self.cells
            .get([row_index, column_index])
            .ok_or(StudioError::OutOfBounds {
                row_index,
                column_index,
                row_count: self.row_count,
                column_count: self.column_count,
            })
    }

    /// Cell at a linear row-major index
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when the index is outside the grid.
    pub fn cell_at_index(&self, index: usize) -> Result<&Cell> {
        let (row_index, column_index) = self.position_of(index)?;
        self.cell_at(row_index, column_index)
    }

    /// Iterate all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Set whether the cell at `index` is selected for building
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when the index is outside the grid.
    pub fn set_active(&mut self, index: usize, value: bool) -> Result<()> {
        self.cell_mut(index)?.active = value;
        Ok(())
    }

    /// Set whether the cell at `index` can be selected
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when the index is outside the grid.
    pub fn set_disabled(&mut self, index: usize, value: bool) -> Result<()> {
        self.cell_mut(index)?.disabled = value;
        Ok(())
    }

    /// Set the display color of the cell at `index`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when the index is outside the grid.
    pub fn set_color(&mut self, index: usize, color: CellColor) -> Result<()> {
        self.cell_mut(index)?.color = color;
        Ok(())
    }

    /// Mark the straight selection path between two cells
    ///
    /// Sets the start/end marks on the endpoints and outlines every
    /// cell on the path between them (disabled cells receive the
    /// disabled outline instead). Only same-row or same-column ranges
    /// are valid; validation happens before any cell is touched.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when either endpoint is outside the grid,
    /// `InvalidSelection` when the endpoints share neither a row nor a
    /// column.
    pub fn mark_selection_range(&mut self, start_index: usize, end_index: usize) -> Result<()> {
        let (start_row, start_column) = self.position_of(start_index)?;
        let (end_row, end_column) = self.position_of(end_index)?;

        if start_row != end_row && start_column != end_column {
            return Err(StudioError::InvalidSelection {
                start_index,
                end_index,
            });
        }

        if start_row == end_row {
            let (first, last) = ordered(start_column, end_column);
            for column in first..=last {
                self.outline_cell(start_row, column);
            }
        } else {
            let (first, last) = ordered(start_row, end_row);
            for row in first..=last {
                self.outline_cell(row, start_column);
            }
        }

        if let Some(cell) = self.cells.get_mut([start_row, start_column]) {
            cell.is_start_cell = true;
        }
        if let Some(cell) = self.cells.get_mut([end_row, end_column]) {
            cell.is_end_cell = true;
        }

        Ok(())
    }

    /// Clear all selection marks and outlines
    pub fn clear_selection(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.has_outline = false;
            cell.has_disabled_outline = false;
            cell.is_start_cell = false;
            cell.is_end_cell = false;
        }
    }

    /// Discard all cells and blocks and reallocate at new dimensions
    ///
    /// Destructive: callers must have confirmed intent beforehand. The
    /// block id counter is not reset, so ids stay unique for the
    /// session.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` when either dimension is zero or
    /// exceeds [`MAX_GRID_DIMENSION`]; the grid is unchanged on error.
    pub fn resize(&mut self, new_row_count: usize, new_column_count: usize) -> Result<()> {
        validate_dimensions(new_row_count, new_column_count)?;

        let default_color = self.default_color;
        self.cells = Array2::from_shape_fn((new_row_count, new_column_count), |(row, column)| {
            Cell::new(row, column, new_column_count, default_color)
        });
        self.blocks.clear();
        self.row_count = new_row_count;
        self.column_count = new_column_count;

        Ok(())
    }

    /// The placed block with the given id, if present
    pub fn block(&self, block_id: BlockId) -> Option<&RenderedBlock> {
        self.blocks.get(&block_id)
    }

    /// Iterate all placed blocks in arbitrary order
    pub fn blocks(&self) -> impl Iterator<Item = &RenderedBlock> {
        self.blocks.values()
    }

    /// Number of placed blocks
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub(crate) fn allocate_block_id(&mut self) -> BlockId {
        let id = self.next_block_id;
        self.next_block_id += 1;
        id
    }

    // Callers have already validated the footprint; stamping and
    // registration happen together so cells and the block map never
    // disagree.
    pub(crate) fn record_block(&mut self, block: RenderedBlock) -> &RenderedBlock {
        let id = block.id();
        for &index in block.cell_indexes() {
            let position = adjacency::cell_position(index, self.column_count);
            if let Some(cell) = self.cells.get_mut([position.0, position.1]) {
                cell.block_id = Some(id);
            }
        }
        self.blocks.entry(id).or_insert(block)
    }

    pub(crate) fn erase_block(&mut self, block_id: BlockId) -> Option<RenderedBlock> {
        let block = self.blocks.remove(&block_id)?;
        for &index in block.cell_indexes() {
            let position = adjacency::cell_position(index, self.column_count);
            if let Some(cell) = self.cells.get_mut([position.0, position.1]) {
                cell.block_id = None;
            }
        }
        Some(block)
    }

    fn position_of(&self, index: usize) -> Result<(usize, usize)> {
        let position = adjacency::cell_position(index, self.column_count);
        if index < self.cell_count() {
            Ok(position)
        } else {
            Err(StudioError::OutOfBounds {
                row_index: position.0,
                column_index: position.1,
                row_count: self.row_count,
                column_count: self.column_count,
            })
        }
    }

    fn cell_mut(&mut self, index: usize) -> Result<&mut Cell> {
        let (row_index, column_index) = self.position_of(index)?;
        let (row_count, column_count) = (self.row_count, self.column_count);
        self.cells
            .get_mut([row_index, column_index])
            .ok_or(StudioError::OutOfBounds {
                row_index,
                column_index,
                row_count,
                column_count,
            })
    }

    fn outline_cell(&mut self, row_index: usize, column_index: usize) {
        if let Some(cell) = self.cells.get_mut([row_index, column_index]) {
            if cell.disabled {
                cell.has_disabled_outline = true;
            } else {
                cell.has_outline = true;
            }
        }
    }
}

const fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}

const fn validate_dimensions(row_count: usize, column_count: usize) -> Result<()> {
    if row_count == 0
        || column_count == 0
        || row_count > MAX_GRID_DIMENSION
        || column_count > MAX_GRID_DIMENSION
    {
        Err(StudioError::InvalidDimension {
            row_count,
            column_count,
        })
    } else {
        Ok(())
    }
}
