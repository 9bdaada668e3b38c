//! weekplan - place events into a weekly time grid.
//!
//! Loads a plan file of pre-busy ranges and events, asks a placement
//! strategy for a slot per event, commits each slot and prints the result.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;
mod plan_file;
mod render;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
