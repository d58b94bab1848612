//! flitz: a simple, configurable file explorer
//!
//! The binary exposes the configuration layer on the command line; the GUI consumes
//! the same `flitz::ConfigLoader`.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
