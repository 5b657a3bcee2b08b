//! CellBlocks terminal browser - entry point

mod runtime;

use anyhow::Result;
use clap::Parser;

use cellblocks::cli::CliArgs;
use cellblocks::config::AppConfig;

use runtime::App;

fn main() -> Result<()> {
    let _args = CliArgs::parse();

    // The terminal belongs to the UI, so there is nowhere to report this
    let _ = cellblocks::tracing::init();

    let config = AppConfig::load();
    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    tracing::info!("Starting cellblocks {} ({}x{})", env!("CARGO_PKG_VERSION"), width, height);

    App::new(config, width, height).run()
}
