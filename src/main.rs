//! Conquest - Entry Point
//!
//! Parses the command line, loads configuration, sets up logging and runs
//! one session in the terminal.

use clap::Parser;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use conquest::campaign::GameSession;
use conquest::core::config::GameConfig;
use conquest::core::error::Result;
use conquest::ui::{play, TerminalOptions};

/// Turn-based territory conquest against three static armies
#[derive(Parser, Debug)]
#[command(name = "conquest")]
#[command(about = "Conquer territories with dice combat and complete your secret mission")]
struct Args {
    /// Random seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not clear the screen between menus
    #[arg(long)]
    no_clear: bool,

    /// Write a JSON summary of the finished session to this path
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.no_clear {
        config.clear_screen = false;
    }

    // RUST_LOG wins over the config file; logs go to stderr, away from the map
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!("Conquest starting...");

    let mut session = GameSession::new(&config)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    play(
        &mut session,
        &mut input,
        &mut out,
        TerminalOptions {
            clear_screen: config.clear_screen,
        },
    )?;

    if let Some(path) = &args.summary {
        let json = serde_json::to_string_pretty(&session.summary())?;
        fs::write(path, json)?;
        tracing::info!(path = %path.display(), "Wrote session summary");
    }

    tracing::info!(
        attacks = session.attacks(),
        conquests = session.conquests(),
        status = ?session.status(),
        "Session finished"
    );
    Ok(())
}
