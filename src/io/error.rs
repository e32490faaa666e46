//! Error types for studio operations
//!
//! Core failures are local, synchronous, and indicate caller logic
//! errors rather than transient conditions; none are retried and none
//! are silently swallowed. The upload collaborator tracks its own
//! transient failures with a separate type (`io::upload`).

use std::fmt;
use std::path::PathBuf;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::placement::block::BlockId;

/// Main error type for all studio operations
#[derive(Debug)]
pub enum StudioError {
    /// Grid dimensions outside the supported range
    InvalidDimension {
        /// Requested number of rows
        row_count: usize,
        /// Requested number of columns
        column_count: usize,
    },

    /// A cell position outside the grid was addressed
    OutOfBounds {
        /// Row of the missing cell
        row_index: usize,
        /// Column of the missing cell
        column_index: usize,
        /// Number of rows in the grid
        row_count: usize,
        /// Number of columns in the grid
        column_count: usize,
    },

    /// A selection range that is not a straight row or column segment
    InvalidSelection {
        /// Linear index of the selection anchor
        start_index: usize,
        /// Linear index of the selection terminus
        end_index: usize,
    },

    /// A placement footprint overlaps an existing block
    CellOccupied {
        /// Linear index of the contested cell
        cell_index: usize,
        /// Id of the block already occupying it
        block_id: BlockId,
    },

    /// No block with the requested id exists
    UnknownBlock {
        /// The unmatched id
        block_id: BlockId,
    },

    /// Failed to save a snapshot image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The upload collaborator rejected a published snapshot
    Upload {
        /// Destination the publish was addressed to
        destination: String,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for StudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension {
                row_count,
                column_count,
            } => {
                write!(
                    f,
                    "Invalid grid dimensions {row_count}x{column_count}: each dimension must be between 1 and {MAX_GRID_DIMENSION}"
                )
            }
            Self::OutOfBounds {
                row_index,
                column_index,
                row_count,
                column_count,
            } => {
                write!(
                    f,
                    "Cell ({row_index}, {column_index}) is outside the {row_count}x{column_count} grid"
                )
            }
            Self::InvalidSelection {
                start_index,
                end_index,
            } => {
                write!(
                    f,
                    "Selection from cell {start_index} to cell {end_index} is not a straight row or column segment"
                )
            }
            Self::CellOccupied {
                cell_index,
                block_id,
            } => {
                write!(f, "Cell {cell_index} is already occupied by block {block_id}")
            }
            Self::UnknownBlock { block_id } => {
                write!(f, "No block with id {block_id} exists")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export snapshot to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Upload {
                destination,
                reason,
            } => {
                write!(f, "Failed to publish snapshot to '{destination}': {reason}")
            }
        }
    }
}

impl std::error::Error for StudioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for studio results
pub type Result<T> = std::result::Result<T, StudioError>;

impl From<std::io::Error> for StudioError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<image::ImageError> for StudioError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}
