//! cordon CLI: thin wrapper over cordon-core.
//!
//! Hosts embed the core directly; this binary exists to exercise and
//! inspect it from a terminal: replay interaction scripts against a live
//! registry and validate configuration files.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use cordon_core::config::Config;
use cordon_core::logging::{init_logging, LogConfig};

mod simulate;

#[derive(Parser)]
#[command(name = "cordon", version, about = "Cuboid region selection sessions")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = "cordon.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a JSON-lines interaction script and print the status lines
    Simulate {
        /// Script file, one directive per line (enable/disable/interact)
        #[arg(long)]
        script: PathBuf,
    },
    /// Load and validate the configuration file
    CheckConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Simulate { script } => {
            let config = load_or_default(&cli.config)?;
            init_logging(&LogConfig::from_general(&config.general))
                .context("failed to initialize logging")?;
            simulate::run(&config, &script)
        }
        Command::CheckConfig => {
            let config = Config::load_from_path(&cli.config)
                .with_context(|| format!("invalid config {}", cli.config.display()))?;
            println!(
                "Configuration OK: marker tag key '{}', {} registry shard(s).",
                config.markers.tag_key, config.registry.shards
            );
            Ok(())
        }
    }
}

/// Load the config file when present; otherwise fall back to defaults so
/// `simulate` works out of the box.
fn load_or_default(path: &Path) -> anyhow::Result<Config> {
    if path.exists() {
        Config::load_from_path(path).with_context(|| format!("invalid config {}", path.display()))
    } else {
        Ok(Config::default())
    }
}
