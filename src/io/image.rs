//! PNG snapshot export of grid state
//!
//! Renders a top-down view of the grid, one square per cell, so a
//! captured scene can be saved or handed to the upload collaborator
//! without the 3D renderer in the loop.

use image::{ImageBuffer, Rgba};
use std::path::Path;

use crate::io::configuration::{BACKGROUND_COLOR, DISABLED_CELL_COLOR, EXPORT_CELL_PIXELS};
use crate::io::error::{Result, StudioError};
use crate::spatial::grid::{Cell, GridModel};

// Occupied and active cells keep their display color; disabled cells
// get a fixed gray; everything else stays transparent.
fn cell_fill(cell: &Cell) -> Rgba<u8> {
    let color = if cell.block_id().is_some() || cell.active() {
        cell.color()
    } else if cell.disabled() {
        DISABLED_CELL_COLOR
    } else {
        BACKGROUND_COLOR
    };

    Rgba(color)
}

/// Export the grid as a PNG snapshot
///
/// Each cell becomes an [`EXPORT_CELL_PIXELS`] square, so the image
/// dimensions are `columns × P` by `rows × P`. Parent directories are
/// created as needed.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_snapshot(grid: &GridModel, output_path: &Path) -> Result<()> {
    let width = grid.cols() as u32 * EXPORT_CELL_PIXELS;
    let height = grid.rows() as u32 * EXPORT_CELL_PIXELS;
    let mut img = ImageBuffer::new(width, height);

    for cell in grid.cells() {
        let fill = cell_fill(cell);
        let origin_x = cell.column_index() as u32 * EXPORT_CELL_PIXELS;
        let origin_y = cell.row_index() as u32 * EXPORT_CELL_PIXELS;

        for offset_y in 0..EXPORT_CELL_PIXELS {
            for offset_x in 0..EXPORT_CELL_PIXELS {
                img.put_pixel(origin_x + offset_x, origin_y + offset_y, fill);
            }
        }
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| StudioError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path).map_err(|e| StudioError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
