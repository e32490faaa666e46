//! CLI entry point for the block studio scene renderer

use blockstudio::io::cli::{Cli, StudioProcessor};
use clap::Parser;

fn main() -> blockstudio::Result<()> {
    let cli = Cli::parse();
    let processor = StudioProcessor::new(cli);
    processor.process()
}
