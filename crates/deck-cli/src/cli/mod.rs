//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::logging::WorkerGuard;
use deck_core::{config, logging};
use tracing::debug;

mod commands;

#[derive(Parser)]
#[command(name = "deck")]
#[command(version)]
#[command(about = "Present Markdown slide decks in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Present a deck full-screen
    Present {
        /// Markdown file with slides separated by `---` lines
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Slide number to open at (1-based)
        #[arg(short, long, value_name = "N")]
        start: Option<usize>,
    },

    /// Print the slide titles of a deck
    Outline {
        /// Markdown file with slides separated by `---` lines
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Present { file, start } => {
            let (config, _log_guard) = setup()?;
            commands::present::run(&file, start, &config)
        }
        Commands::Outline { file } => {
            let (_config, _log_guard) = setup()?;
            commands::outline::run(&file)
        }

        // Config commands must work even when the existing file is broken.
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}

/// Loads config and starts file logging.
///
/// Logging is best-effort; a read-only home must not block presenting. The
/// guard must outlive the command so buffered lines are flushed.
fn setup() -> Result<(config::Config, Option<WorkerGuard>)> {
    let config = config::Config::load().context("load config")?;
    let guard = logging::init(&config.log).ok();
    debug!(?config, "config loaded");
    Ok((config, guard))
}
