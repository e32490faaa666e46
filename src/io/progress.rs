//! Progress reporting for scene generation

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PLACEMENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single-bar progress display for scatter generation
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar sized for `target` placements
    pub fn new(target: usize) -> Self {
        let bar = ProgressBar::new(target as u64);
        bar.set_style(PLACEMENT_STYLE.clone());
        bar.set_message("placing blocks");

        Self { bar }
    }

    /// Report the number of blocks placed so far
    pub fn update(&self, placed: usize) {
        self.bar.set_position(placed as u64);
    }

    /// Clear the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
