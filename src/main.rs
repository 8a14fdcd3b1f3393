//! wordstats - word length statistics analyzer
//!
//! wordstats provides:
//! - Word tokenization with configurable delimiters
//! - Concurrent word-length tallying
//! - Bucketing into user-defined or auto-derived length ranges
//! - Table and ASCII bar chart rendering with ranked colors

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod render;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
