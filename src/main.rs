//! # Classroom Clone CLI
//!
//! This is the binary entry point for the `classroom-clone` command-line tool.
//!
//! It parses command-line arguments using `clap`, dispatches to the selected
//! command, and lets `anyhow` report any top-level error. The logic lives in
//! the `classroom_clone` library crate; the binary is a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
