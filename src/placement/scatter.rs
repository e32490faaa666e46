//! Seeded random scene generation for demo layouts
//!
//! Mirrors the interactive placement flow one step at a time: each
//! call attempts a single placement, so a driving loop can interleave
//! progress reporting between steps. Generation is reproducible for a
//! fixed seed and grid.

use bitvec::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::io::configuration::DOUBLE_BLOCK_PROBABILITY;
use crate::io::error::Result;
use crate::placement::block::{BlockId, BlockKind};
use crate::placement::engine;
use crate::spatial::grid::GridModel;

/// Seeded generator placing random blocks one step at a time
///
/// Tracks attempted anchors in a bit mask so every cell is tried at
/// most once, which bounds a full run at one pass over the grid even
/// when the target count is unreachable.
pub struct ScatterGenerator {
    rng: StdRng,
    attempted: BitVec,
    target: usize,
    placed: usize,
}

impl ScatterGenerator {
    /// Create a generator for a grid with `cell_count` cells
    ///
    /// `target` is the number of blocks to aim for; `seed` makes the
    /// layout reproducible.
    pub fn new(cell_count: usize, target: usize, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            attempted: bitvec![0; cell_count],
            target,
            placed: 0,
        }
    }

    /// Attempt the next placement
    ///
    /// Samples an untried anchor, prefers a randomly chosen kind, and
    /// falls back to a single-cell block when the preferred footprint
    /// does not fit. Returns `None` once the target count is reached
    /// or every anchor has been attempted.
    ///
    /// # Errors
    ///
    /// Propagates placement failures; these do not occur for anchors
    /// that passed the `can_place` probe.
    pub fn place_next(&mut self, grid: &mut GridModel) -> Result<Option<BlockId>> {
        while !self.is_complete() {
            let Some(anchor_index) = self.sample_anchor() else {
                return Ok(None);
            };

            let preferred = if self.rng.random::<f64>() < DOUBLE_BLOCK_PROBABILITY {
                BlockKind::Double
            } else {
                BlockKind::Single
            };

            let kind = if engine::can_place(grid, preferred, anchor_index) {
                Some(preferred)
            } else if engine::can_place(grid, BlockKind::Single, anchor_index) {
                Some(BlockKind::Single)
            } else {
                None
            };

            if let Some(kind) = kind {
                let block_id = engine::place(grid, kind, anchor_index)?.id();
                self.placed += 1;
                return Ok(Some(block_id));
            }
        }

        Ok(None)
    }

    /// Number of blocks placed so far
    pub const fn placed(&self) -> usize {
        self.placed
    }

    /// Number of blocks the generator is aiming for
    pub const fn target(&self) -> usize {
        self.target
    }

    /// Whether the target count has been reached
    pub const fn is_complete(&self) -> bool {
        self.placed >= self.target
    }

    // Random untried anchor: a random starting point, then the first
    // untried cell at or after it, wrapping to the front of the grid.
    fn sample_anchor(&mut self) -> Option<usize> {
        if self.attempted.is_empty() || self.attempted.all() {
            return None;
        }

        let start = self.rng.random_range(0..self.attempted.len());
        let index = self
            .attempted
            .get(start..)
            .and_then(|tail| tail.iter_zeros().next().map(|offset| start + offset))
            .or_else(|| self.attempted.iter_zeros().next())?;

        self.attempted.set(index, true);
        Some(index)
    }
}
