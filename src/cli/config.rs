//! `flitz config` subcommands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::Path;

use flitz::config::{write_default_config, ConfigLoader};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration after merging all files
    Show {
        /// Print JSON instead of YAML
        #[arg(long)]
        json: bool,
    },

    /// Print the path of the primary config file
    Path,

    /// Write the default settings to the primary config path
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Load the configuration and report whether it is valid
    Check,
}

pub fn run(args: ConfigArgs, explicit: Option<&Path>) -> Result<()> {
    let loader = ConfigLoader::new();

    match args.command {
        ConfigCommand::Show { json } => {
            let cfg = loader.load(explicit).context("Failed to load configuration")?;
            let rendered = if json {
                serde_json::to_string_pretty(&cfg).context("Failed to render config as JSON")?
            } else {
                serde_yaml::to_string(&cfg).context("Failed to render config as YAML")?
            };
            println!("{}", rendered.trim_end());
        }
        ConfigCommand::Path => {
            let path = loader
                .primary_path(explicit)
                .context("Could not determine the home directory; pass --config")?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = loader
                .primary_path(explicit)
                .context("Could not determine the home directory; pass --config")?;
            write_default_config(&path, force)?;
            println!("Wrote default settings to {}", path.display());
        }
        ConfigCommand::Check => {
            loader.load(explicit).context("Configuration is invalid")?;
            println!("OK");
        }
    }

    Ok(())
}
