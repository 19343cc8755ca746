//! oxo CLI - Perfect-play tic-tac-toe on the terminal
//!
//! This CLI provides:
//! - An interactive game against the minimax engine
//! - Outcome and best-move analysis of arbitrary boards
//! - Arena runs of the engine against baseline strategies

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use oxo::{AppConfig, cli::commands};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-tac-toe against an engine that never loses", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine
    Play(commands::play::PlayArgs),

    /// Report the outcome of a board
    Evaluate(commands::evaluate::EvaluateArgs),

    /// Show the engine's move for a board
    BestMove(commands::best_move::BestMoveArgs),

    /// Run the engine against a baseline strategy
    Arena(commands::arena::ArenaArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    init_tracing(cli.verbose, &config.log_level);
    debug!(?config, "starting oxo");

    match cli.command {
        Commands::Play(args) => commands::play::execute(args, &config),
        Commands::Evaluate(args) => commands::evaluate::execute(args, &config),
        Commands::BestMove(args) => commands::best_move::execute(args, &config),
        Commands::Arena(args) => commands::arena::execute(args, &config),
    }
}

/// `RUST_LOG` wins; otherwise `-v` picks the level, falling back to the config
fn init_tracing(verbose: u8, configured: &str) {
    let level = match verbose {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}
