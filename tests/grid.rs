//! Validates grid construction, cell mutation, and selection marking

use blockstudio::StudioError;
use blockstudio::io::configuration::DEFAULT_ACTIVE_COLOR;
use blockstudio::spatial::grid::GridModel;

fn grid(rows: usize, cols: usize) -> GridModel {
    GridModel::new(rows, cols, DEFAULT_ACTIVE_COLOR).unwrap()
}

#[test]
fn test_new_grid_cells_start_clear() {
    let grid = grid(4, 8);

    assert_eq!(grid.rows(), 4);
    assert_eq!(grid.cols(), 8);
    assert_eq!(grid.cell_count(), 32);
    assert_eq!(grid.block_count(), 0);

    for row_index in 0..4 {
        for column_index in 0..8 {
            let cell = grid.cell_at(row_index, column_index).unwrap();
            assert_eq!(cell.index(), row_index * 8 + column_index);
            assert_eq!(cell.row_index(), row_index);
            assert_eq!(cell.column_index(), column_index);
            assert!(!cell.active());
            assert!(!cell.disabled());
            assert!(!cell.has_outline());
            assert!(!cell.is_start_cell());
            assert!(!cell.is_end_cell());
            assert_eq!(cell.color(), DEFAULT_ACTIVE_COLOR);
            assert!(cell.block_id().is_none());
        }
    }
}

#[test]
fn test_zero_dimensions_rejected() {
    let no_rows = GridModel::new(0, 8, DEFAULT_ACTIVE_COLOR);
    assert!(matches!(
        no_rows,
        Err(StudioError::InvalidDimension { row_count: 0, .. })
    ));

    let no_cols = GridModel::new(4, 0, DEFAULT_ACTIVE_COLOR);
    assert!(matches!(
        no_cols,
        Err(StudioError::InvalidDimension {
            column_count: 0,
            ..
        })
    ));
}

#[test]
fn test_cell_at_out_of_bounds() {
    let grid = grid(4, 8);

    assert!(matches!(
        grid.cell_at(4, 0),
        Err(StudioError::OutOfBounds { row_index: 4, .. })
    ));
    assert!(matches!(
        grid.cell_at(0, 8),
        Err(StudioError::OutOfBounds {
            column_index: 8,
            ..
        })
    ));
    assert!(matches!(
        grid.cell_at_index(32),
        Err(StudioError::OutOfBounds { .. })
    ));
}

#[test]
fn test_cell_mutation_targets_single_cell() {
    let mut grid = grid(3, 3);

    grid.set_active(4, true).unwrap();
    grid.set_disabled(4, true).unwrap();
    grid.set_color(4, [10, 20, 30, 255]).unwrap();

    let center = grid.cell_at(1, 1).unwrap();
    assert!(center.active());
    assert!(center.disabled());
    assert_eq!(center.color(), [10, 20, 30, 255]);

    // Neighbours stay untouched
    for index in [0, 1, 2, 3, 5, 6, 7, 8] {
        let cell = grid.cell_at_index(index).unwrap();
        assert!(!cell.active());
        assert!(!cell.disabled());
    }

    assert!(matches!(
        grid.set_active(9, true),
        Err(StudioError::OutOfBounds { .. })
    ));
}

#[test]
fn test_row_selection_outlines_path() {
    let mut grid = grid(4, 8);

    // Row 1, columns 2..=5, dragged right to left
    grid.mark_selection_range(13, 10).unwrap();

    assert!(grid.cell_at_index(13).unwrap().is_start_cell());
    assert!(grid.cell_at_index(10).unwrap().is_end_cell());
    for index in 10..=13 {
        assert!(grid.cell_at_index(index).unwrap().has_outline());
    }
    assert!(!grid.cell_at_index(9).unwrap().has_outline());
    assert!(!grid.cell_at_index(14).unwrap().has_outline());
}

#[test]
fn test_column_selection_outlines_path() {
    let mut grid = grid(4, 8);

    // Column 3, rows 0..=2
    grid.mark_selection_range(3, 19).unwrap();

    assert!(grid.cell_at_index(3).unwrap().is_start_cell());
    assert!(grid.cell_at_index(19).unwrap().is_end_cell());
    for index in [3, 11, 19] {
        assert!(grid.cell_at_index(index).unwrap().has_outline());
    }
    assert!(!grid.cell_at_index(27).unwrap().has_outline());
}

#[test]
fn test_disabled_cells_get_disabled_outline() {
    let mut grid = grid(1, 4);
    grid.set_disabled(2, true).unwrap();

    grid.mark_selection_range(0, 3).unwrap();

    let disabled = grid.cell_at_index(2).unwrap();
    assert!(disabled.has_disabled_outline());
    assert!(!disabled.has_outline());
    assert!(grid.cell_at_index(1).unwrap().has_outline());
}

#[test]
fn test_diagonal_selection_rejected_without_mutation() {
    let mut grid = grid(4, 8);

    let result = grid.mark_selection_range(0, 9);
    assert!(matches!(
        result,
        Err(StudioError::InvalidSelection {
            start_index: 0,
            end_index: 9,
        })
    ));

    assert!(grid.cells().all(|cell| {
        !cell.has_outline()
            && !cell.has_disabled_outline()
            && !cell.is_start_cell()
            && !cell.is_end_cell()
    }));
}

#[test]
fn test_clear_selection_resets_marks() {
    let mut grid = grid(4, 8);
    grid.mark_selection_range(8, 15).unwrap();

    grid.clear_selection();

    assert!(grid.cells().all(|cell| {
        !cell.has_outline()
            && !cell.has_disabled_outline()
            && !cell.is_start_cell()
            && !cell.is_end_cell()
    }));
}

#[test]
fn test_resize_discards_cells_and_blocks() {
    use blockstudio::placement::block::BlockKind;
    use blockstudio::placement::engine;

    let mut grid = grid(4, 8);
    engine::place(&mut grid, BlockKind::Double, 3).unwrap();
    grid.set_active(0, true).unwrap();

    grid.resize(2, 2).unwrap();

    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.cols(), 2);
    assert_eq!(grid.block_count(), 0);
    assert!(grid.cells().all(|cell| !cell.active() && cell.block_id().is_none()));

    assert!(matches!(
        grid.resize(0, 5),
        Err(StudioError::InvalidDimension { .. })
    ));
    // Failed resize leaves dimensions alone
    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.cols(), 2);
}
