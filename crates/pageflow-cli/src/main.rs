use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pageflow_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "pageflow")]
#[command(author, version, about = "Adaptive fullpage section navigation for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Deck file to present (shorthand for `run --deck`)
    #[arg(short = 'd', long = "deck")]
    deck: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the fullpage TUI
    Run {
        /// Deck file; the built-in demo deck is used when omitted
        #[arg(short, long)]
        deck: Option<PathBuf>,
    },
    /// Validate a deck file and print a summary
    Check {
        /// Deck file to validate
        deck: PathBuf,
    },
    /// Write the starter kit (config, example deck, README) to a directory
    Export {
        /// Target directory
        #[arg(short = 'o', long, default_value = "pageflow-starter")]
        dir: PathBuf,
        /// Also copy the example deck to the clipboard (OSC 52)
        #[arg(long)]
        copy: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Handle commands
    match cli.command {
        Some(Commands::Run { deck }) => commands::run::run(config, deck.or(cli.deck)),
        None => commands::run::run(config, cli.deck),
        Some(Commands::Check { deck }) => commands::check::run(&deck),
        Some(Commands::Export { dir, copy }) => commands::export::run(&dir, copy),
    }
}
