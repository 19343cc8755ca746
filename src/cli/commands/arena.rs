//! Arena command - pit the engine against a baseline strategy

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::{
    arena::{Arena, ArenaConfig, MinimaxStrategy, ProgressObserver, RandomStrategy},
    cli::output::{format_rate, print_kv, print_section},
    config::AppConfig,
    engine::Scoring,
    ports::Strategy,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Opponent {
    /// Uniformly random legal moves
    Random,
    /// A second copy of the engine
    Minimax,
}

#[derive(Parser, Debug)]
#[command(about = "Play the engine against a baseline strategy")]
pub struct ArenaArgs {
    /// Opponent strategy
    #[arg(long, value_enum, default_value = "random")]
    pub opponent: Opponent,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Let the engine play X and open every game
    #[arg(long)]
    pub engine_first: bool,

    /// Scoring policy of the engine under test (defaults to the configured one)
    #[arg(long)]
    pub scoring: Option<Scoring>,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: ArenaArgs, config: &AppConfig) -> Result<()> {
    let scoring = args.scoring.unwrap_or(config.scoring);
    let arena_config = ArenaConfig {
        games: args.games,
        seed: args.seed,
        engine_first: args.engine_first,
        scoring,
    };

    let mut opponent: Box<dyn Strategy> = match args.opponent {
        Opponent::Random => Box::new(RandomStrategy::new("Random".to_string())),
        Opponent::Minimax => {
            Box::new(MinimaxStrategy::new("Minimax".to_string()).with_scoring(scoring))
        }
    };

    println!(
        "Engine ({}) vs {} for {} games",
        arena_config.marks().engine,
        opponent.name(),
        args.games
    );

    let mut arena = Arena::new(arena_config).with_observer(Box::new(ProgressObserver::new()));
    let result = arena.run(opponent.as_mut())?;

    print_section("Arena Results");
    print_kv("Opponent", &result.opponent);
    print_kv("Games", &result.total_games.to_string());
    print_kv(
        "Wins",
        &format!("{} ({})", result.wins, format_rate(result.win_rate)),
    );
    print_kv(
        "Draws",
        &format!("{} ({})", result.draws, format_rate(result.draw_rate)),
    );
    print_kv(
        "Losses",
        &format!("{} ({})", result.losses, format_rate(result.loss_rate)),
    );

    if let Some(path) = args.export {
        result
            .save(&path)
            .with_context(|| format!("failed to export results to {}", path.display()))?;
        println!("\nResults exported to: {}", path.display());
    }
    Ok(())
}
