//! Match runner: the engine against one opponent strategy

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    engine::{Marks, Minimax, Scoring},
    ports::{Observer, Strategy},
    tictactoe::{Board, Mark, Outcome, evaluate},
};

/// Arena configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Number of games to play
    pub games: usize,

    /// Seed handed to the opponent before the run
    pub seed: Option<u64>,

    /// Whether the engine plays X and opens every game
    pub engine_first: bool,

    /// Scoring policy of the engine under test
    pub scoring: Scoring,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
            engine_first: false,
            scoring: Scoring::default(),
        }
    }
}

impl ArenaConfig {
    /// Marks for this run; X always opens, so `engine_first` decides who holds it
    pub fn marks(&self) -> Marks {
        if self.engine_first {
            Marks::for_engine(Mark::X)
        } else {
            Marks::for_engine(Mark::O)
        }
    }
}

/// Result of an arena run, from the engine's perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaResult {
    pub opponent: String,
    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
}

impl ArenaResult {
    pub fn new(opponent: String, wins: usize, draws: usize, losses: usize) -> Self {
        let total_games = wins + draws + losses;
        let rate = |n: usize| {
            if total_games > 0 {
                n as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            opponent,
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path.as_ref()).map_err(|source| Error::Io {
            operation: format!("create {}", path.as_ref().display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref()).map_err(|source| Error::Io {
            operation: format!("open {}", path.as_ref().display()),
            source,
        })?;
        Ok(serde_json::from_reader(file)?)
    }
}

/// Plays a series of games between the engine and an opponent
pub struct Arena {
    config: ArenaConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl Arena {
    pub fn new(config: ArenaConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the arena
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Run all configured games against `opponent`
    pub fn run(&mut self, opponent: &mut dyn Strategy) -> Result<ArenaResult> {
        if let Some(seed) = self.config.seed {
            opponent.set_rng_seed(seed)?;
        }

        let marks = self.config.marks();
        let engine = Minimax::new(marks).with_scoring(self.config.scoring);

        let mut wins = 0;
        let mut draws = 0;
        let mut losses = 0;

        for observer in &mut self.observers {
            observer.on_start(self.config.games)?;
        }

        for game_num in 0..self.config.games {
            let outcome = Self::play_game(&engine, opponent)?;

            match outcome.winner() {
                Some(mark) if mark == marks.engine => wins += 1,
                Some(_) => losses += 1,
                None => draws += 1,
            }

            for observer in &mut self.observers {
                observer.on_game_end(game_num, outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_finish()?;
        }

        let result = ArenaResult::new(opponent.name().to_string(), wins, draws, losses);
        info!(
            opponent = %result.opponent,
            games = result.total_games,
            wins,
            draws,
            losses,
            "arena run complete"
        );
        Ok(result)
    }

    fn play_game(engine: &Minimax, opponent: &mut dyn Strategy) -> Result<Outcome> {
        let marks = engine.marks();
        let mut board = Board::new();
        let mut to_move = Mark::X;

        loop {
            let outcome = evaluate(&board);
            if outcome.is_terminal() {
                debug!(board = %board.encode(), ?outcome, "arena game finished");
                return Ok(outcome);
            }

            let position = if to_move == marks.engine {
                engine.choose_move(&mut board).ok_or(Error::NoValidMoves)?
            } else {
                opponent.select_move(&board, to_move)?
            };
            board.place(position, to_move)?;
            to_move = to_move.opponent();
        }
    }
}
