//! Command-line interface for rendering demo block scenes to PNG

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::camera::framing::{self, CameraView};
use crate::io::configuration::{
    DEFAULT_ACTIVE_COLOR, DEFAULT_BLOCK_COUNT, DEFAULT_COLUMN_COUNT, DEFAULT_ROW_COUNT,
    DEFAULT_SEED,
};
use crate::io::error::Result;
use crate::io::image::export_grid_snapshot;
use crate::io::progress::ProgressManager;
use crate::io::upload::{DirectoryStore, SnapshotUploader, UploadUrlProvider};
use crate::placement::scatter::ScatterGenerator;
use crate::spatial::grid::GridModel;

#[derive(Parser)]
#[command(name = "blockstudio")]
#[command(
    author,
    version,
    about = "Render a demo build-block scene to a PNG snapshot"
)]
/// Command-line arguments for the scene rendering tool
pub struct Cli {
    /// Output PNG file for the snapshot
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Number of grid rows
    #[arg(short = 'r', long, default_value_t = DEFAULT_ROW_COUNT)]
    pub rows: usize,

    /// Number of grid columns
    #[arg(short = 'c', long, default_value_t = DEFAULT_COLUMN_COUNT)]
    pub cols: usize,

    /// Number of blocks to scatter into the scene
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_COUNT)]
    pub blocks: usize,

    /// Random seed for reproducible layouts
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Camera preset to report (iso, front, left; unknown names fall back to iso)
    #[arg(short = 'v', long, default_value = "iso")]
    pub view: String,

    /// Publish the snapshot into this directory after export
    #[arg(short, long)]
    pub publish: Option<PathBuf>,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates scene generation, snapshot export, and publishing
pub struct StudioProcessor {
    cli: Cli,
}

impl StudioProcessor {
    /// Create a processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the scene, export the snapshot, and optionally publish it
    ///
    /// # Errors
    ///
    /// Returns an error if grid construction, placement, snapshot
    /// export, or publishing fails.
    // Allow print for user feedback on the rendered scene
    #[allow(clippy::print_stderr)]
    pub fn process(&self) -> Result<()> {
        let mut grid = GridModel::new(self.cli.rows, self.cli.cols, DEFAULT_ACTIVE_COLOR)?;

        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(self.cli.blocks));

        let mut generator =
            ScatterGenerator::new(grid.cell_count(), self.cli.blocks, self.cli.seed);
        while generator.place_next(&mut grid)?.is_some() {
            if let Some(ref bar) = progress {
                bar.update(generator.placed());
            }
        }
        if let Some(ref bar) = progress {
            bar.finish();
        }

        let view = CameraView::parse(&self.cli.view);
        let [target_x, target_y, target_z] = framing::camera_target(grid.rows(), 0.0, 0.0);
        let [position_x, position_y, position_z] =
            framing::calculate_camera_position(grid.rows(), grid.cols(), view);

        export_grid_snapshot(&grid, &self.cli.output)?;

        if !self.cli.quiet {
            eprintln!(
                "Placed {} block(s) on a {}x{} grid; {view} camera at [{position_x:.1}, {position_y:.1}, {position_z:.1}] looking at [{target_x:.1}, {target_y:.1}, {target_z:.1}]",
                generator.placed(),
                grid.rows(),
                grid.cols(),
            );
        }

        if let Some(ref publish_dir) = self.cli.publish {
            let destination = self.publish_snapshot(publish_dir)?;
            if !self.cli.quiet {
                eprintln!("Published snapshot to {destination}");
            }
        }

        Ok(())
    }

    fn publish_snapshot(&self, publish_dir: &Path) -> Result<String> {
        let store = DirectoryStore::new(publish_dir);
        let file_name = self.cli.output.file_name().map_or_else(
            || "snapshot.png".to_string(),
            |name| name.to_string_lossy().to_string(),
        );

        let destination = store.request_upload_url(&file_name, "image/png")?;
        let bytes = std::fs::read(&self.cli.output)?;
        store.upload(&bytes, &destination)?;

        Ok(destination)
    }
}
