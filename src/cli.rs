//! Command-line argument parsing
//!
//! The browser takes no options of its own; data location and timing come
//! from `config.yaml`. clap still provides `--help` and `--version`.

use clap::Parser;

/// Browse, search and copy CellBlocks cards in the terminal
#[derive(Parser, Debug)]
#[command(
    name = "cellblocks",
    version,
    about = "Browse, search and copy CellBlocks cards in the terminal"
)]
pub struct CliArgs {}
