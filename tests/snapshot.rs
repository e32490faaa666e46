//! Validates snapshot export and the filesystem upload collaborators

use blockstudio::io::cli::{Cli, StudioProcessor};
use blockstudio::io::configuration::{
    DEFAULT_ACTIVE_COLOR, DISABLED_CELL_COLOR, EXPORT_CELL_PIXELS,
};
use blockstudio::io::image::export_grid_snapshot;
use blockstudio::io::upload::{DirectoryStore, SnapshotUploader, UploadUrlProvider};
use blockstudio::placement::block::BlockKind;
use blockstudio::placement::engine;
use blockstudio::spatial::grid::GridModel;

#[test]
fn test_snapshot_dimensions_and_cell_fills() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("scene.png");

    let mut grid = GridModel::new(2, 3, DEFAULT_ACTIVE_COLOR).unwrap();
    engine::place(&mut grid, BlockKind::Double, 0).unwrap();
    grid.set_disabled(5, true).unwrap();

    export_grid_snapshot(&grid, &output).unwrap();

    let snapshot = image::open(&output).unwrap().to_rgba8();
    assert_eq!(snapshot.width(), 3 * EXPORT_CELL_PIXELS);
    assert_eq!(snapshot.height(), 2 * EXPORT_CELL_PIXELS);

    // Occupied cell keeps its display color
    assert_eq!(snapshot.get_pixel(0, 0).0, DEFAULT_ACTIVE_COLOR);
    // Disabled cell (row 1, column 2) renders gray
    assert_eq!(
        snapshot
            .get_pixel(2 * EXPORT_CELL_PIXELS, EXPORT_CELL_PIXELS)
            .0,
        DISABLED_CELL_COLOR
    );
    // Untouched cell (row 1, column 0) stays transparent
    assert_eq!(snapshot.get_pixel(0, EXPORT_CELL_PIXELS).0[3], 0);
}

#[test]
fn test_snapshot_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("nested/captures/scene.png");

    let grid = GridModel::new(2, 2, DEFAULT_ACTIVE_COLOR).unwrap();
    export_grid_snapshot(&grid, &output).unwrap();

    assert!(output.exists());
}

#[test]
fn test_directory_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = DirectoryStore::new(dir.path());

    let destination = store
        .request_upload_url("capture.png", "image/png")
        .unwrap();
    store.upload(b"snapshot-bytes", &destination).unwrap();

    let written = std::fs::read(dir.path().join("capture.png")).unwrap();
    assert_eq!(written, b"snapshot-bytes");
}

#[test]
fn test_directory_store_rejects_bad_requests() {
    let dir = tempfile::tempdir().unwrap();
    let store = DirectoryStore::new(dir.path());

    assert!(store.request_upload_url("", "image/png").is_err());
    assert!(store.request_upload_url("capture.png", "text/html").is_err());
}

#[test]
fn test_processor_renders_and_publishes() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("scene.png");
    let publish = dir.path().join("published");

    let cli = Cli {
        output: output.clone(),
        rows: 4,
        cols: 8,
        blocks: 4,
        seed: 7,
        view: "front".to_string(),
        publish: Some(publish.clone()),
        quiet: true,
    };

    StudioProcessor::new(cli).process().unwrap();

    assert!(output.exists());
    assert!(publish.join("scene.png").exists());
}
