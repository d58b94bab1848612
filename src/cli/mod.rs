//! Command-line interface for flitz
//!
//! Provides the `config` subcommand family for inspecting and creating settings files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

/// A simple, configurable file explorer
#[derive(Parser)]
#[command(name = "flitz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the primary config file (defaults to ~/.flitz.yml)
    #[arg(short = 'c', long, value_name = "FILE", global = true, env = "FLITZ_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect, validate or create the settings file
    Config(config::ConfigArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // A RUST_LOG filter replaces the level chosen from --verbose.
    let fallback = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let log_layer =
        fmt::layer().with_writer(std::io::stderr).with_ansi(std::io::stderr().is_terminal());
    let _ = tracing_subscriber::registry()
        .with(log_layer)
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Config(args) => config::run(args, cli.config.as_deref()),
    }
}
