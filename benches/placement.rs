//! Performance measurement for placement probes at varying grid densities

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use blockstudio::camera::framing::{CameraView, calculate_camera_position};
use blockstudio::io::configuration::DEFAULT_ACTIVE_COLOR;
use blockstudio::placement::block::BlockKind;
use blockstudio::placement::engine;
use blockstudio::placement::scatter::ScatterGenerator;
use blockstudio::spatial::grid::GridModel;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Measures a full-grid `can_place` sweep as occupancy increases
fn bench_can_place_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("can_place_sweep");

    for fill_percent in &[0_usize, 25, 50, 75] {
        let Ok(mut grid) = GridModel::new(64, 64, DEFAULT_ACTIVE_COLOR) else {
            group.finish();
            return;
        };

        // Blocks average close to two cells, so halve the cell count
        let target = grid.cell_count() * fill_percent / 100 / 2;
        let mut generator = ScatterGenerator::new(grid.cell_count(), target, 12345);
        while let Ok(Some(_)) = generator.place_next(&mut grid) {}

        group.bench_with_input(
            BenchmarkId::from_parameter(fill_percent),
            fill_percent,
            |b, _| {
                b.iter(|| {
                    for anchor_index in 0..grid.cell_count() {
                        black_box(engine::can_place(
                            &grid,
                            BlockKind::Double,
                            black_box(anchor_index),
                        ));
                    }
                });
            },
        );
    }

    group.finish();
}

/// Measures a place/remove cycle on an otherwise empty grid
fn bench_place_remove_cycle(c: &mut Criterion) {
    let Ok(mut grid) = GridModel::new(64, 64, DEFAULT_ACTIVE_COLOR) else {
        return;
    };

    c.bench_function("place_remove_cycle", |b| {
        b.iter(|| {
            if let Ok(id) = engine::place(&mut grid, BlockKind::Double, black_box(130))
                .map(|block| block.id())
            {
                let _ = engine::remove(&mut grid, id);
            }
        });
    });
}

/// Measures camera pose derivation for a large grid
fn bench_camera_position(c: &mut Criterion) {
    c.bench_function("calculate_camera_position", |b| {
        b.iter(|| calculate_camera_position(black_box(48), black_box(64), CameraView::Iso));
    });
}

criterion_group!(
    benches,
    bench_can_place_sweep,
    bench_place_remove_cycle,
    bench_camera_position
);
criterion_main!(benches);
