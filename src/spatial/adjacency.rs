//! Pure index and adjacency primitives over (row, column) grid positions
//!
//! Neighbour index functions are unchecked low-level primitives: they
//! return a raw linear index with no bounds validation and must be
//! paired with the matching `has_*` guard. The guards
//! themselves are total — an out-of-range position simply has no
//! neighbour. The same convention applies uniformly to all four
//! directions.

/// True iff a column exists immediately to the right of `column_index`
pub const fn has_right_adjacent_column(column_index: usize, column_count: usize) -> bool {
    column_index + 1 < column_count
}

/// True iff a column exists immediately to the left of `column_index`
pub const fn has_left_adjacent_column(column_index: usize) -> bool {
    column_index > 0
}

/// True iff a row exists immediately below `row_index`
pub const fn has_down_adjacent_row(row_index: usize, row_count: usize) -> bool {
    row_index + 1 < row_count
}

/// True iff a row exists immediately above `row_index`
pub const fn has_up_adjacent_row(row_index: usize) -> bool {
    row_index > 0
}

/// Linear index of the cell at (`row_index`, `column_index`)
pub const fn cell_index(row_index: usize, column_index: usize, column_count: usize) -> usize {
    row_index * column_count + column_index
}

/// (row, column) position of the cell at a linear index
///
/// # Panics
///
/// Panics when `column_count` is zero; grids are validated non-empty
/// before any index math runs.
pub const fn cell_position(index: usize, column_count: usize) -> (usize, usize) {
    (index / column_count, index % column_count)
}

/// Linear index of the cell immediately to the right
///
/// Performs no bounds validation and returns an index outside the grid
/// when the position has no right neighbour; callers must check
/// [`has_right_adjacent_column`] first.
pub const fn cell_right_index(
    row_index: usize,
    column_index: usize,
    column_count: usize,
) -> usize {
    row_index * column_count + (column_index + 1)
}

/// Linear index of the cell immediately to the left
///
/// Performs no bounds validation; callers must check
/// [`has_left_adjacent_column`] first.
///
/// # Panics
///
/// Panics in debug builds when `column_index` is zero (the guard was
/// skipped).
pub const fn cell_left_index(row_index: usize, column_index: usize, column_count: usize) -> usize {
    row_index * column_count + (column_index - 1)
}

/// Linear index of the cell immediately below
///
/// Performs no bounds validation and returns an index outside the grid
/// when the position has no lower neighbour; callers must check
/// [`has_down_adjacent_row`] first.
pub const fn cell_down_index(row_index: usize, column_index: usize, column_count: usize) -> usize {
    (row_index + 1) * column_count + column_index
}

/// Linear index of the cell immediately above
///
/// Performs no bounds validation; callers must check
/// [`has_up_adjacent_row`] first.
///
/// # Panics
///
/// Panics in debug builds when `row_index` is zero (the guard was
/// skipped).
pub const fn cell_up_index(row_index: usize, column_index: usize, column_count: usize) -> usize {
    (row_index - 1) * column_count + column_index
}
