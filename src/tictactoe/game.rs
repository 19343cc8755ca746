//! Human-versus-engine game session

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::{Board, Mark, Outcome, evaluate};
use crate::engine::{Marks, Minimax, Scoring};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub mark: Mark,
}

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    AwaitingHumanMove,
    AwaitingEngineMove,
    Finished(Outcome),
}

impl GamePhase {
    pub fn is_finished(self) -> bool {
        matches!(self, GamePhase::Finished(_))
    }
}

/// One long-lived board shared by a human and the engine.
///
/// The human always opens. Placements go through [`Session::play_human`] and
/// [`Session::play_engine`]; the session is the only owner of the board and
/// lends it to the search, which hands it back unchanged.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    engine: Minimax,
    phase: GamePhase,
    moves: Vec<Move>,
}

impl Session {
    pub fn new(marks: Marks) -> Self {
        Self::with_engine(Minimax::new(marks))
    }

    pub fn with_scoring(marks: Marks, scoring: Scoring) -> Self {
        Self::with_engine(Minimax::new(marks).with_scoring(scoring))
    }

    fn with_engine(engine: Minimax) -> Self {
        Session {
            board: Board::new(),
            engine,
            phase: GamePhase::AwaitingHumanMove,
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn marks(&self) -> Marks {
        self.engine.marks()
    }

    /// Moves of the current game, oldest first
    pub fn history(&self) -> &[Move] {
        &self.moves
    }

    /// Place the human's mark at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game is finished,
    /// [`crate::Error::NotHumanTurn`] while the engine is to move, and the
    /// board's placement errors for an out-of-range or occupied cell. The
    /// session is unchanged on error.
    #[instrument(skip(self), fields(board = %self.board.encode()))]
    pub fn play_human(&mut self, position: usize) -> crate::Result<GamePhase> {
        match self.phase {
            GamePhase::AwaitingHumanMove => {}
            GamePhase::AwaitingEngineMove => return Err(crate::Error::NotHumanTurn),
            GamePhase::Finished(_) => return Err(crate::Error::GameOver),
        }

        let mark = self.marks().opponent;
        if let Err(err) = self.board.place(position, mark) {
            warn!(position, %err, "rejected human move");
            return Err(err);
        }
        self.record(position, mark, GamePhase::AwaitingEngineMove);
        Ok(self.phase)
    }

    /// Let the engine choose and place its mark. Returns the chosen cell and
    /// the phase after the move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game is finished and
    /// [`crate::Error::NotEngineTurn`] while the human is to move.
    #[instrument(skip(self), fields(board = %self.board.encode()))]
    pub fn play_engine(&mut self) -> crate::Result<(usize, GamePhase)> {
        match self.phase {
            GamePhase::AwaitingEngineMove => {}
            GamePhase::AwaitingHumanMove => return Err(crate::Error::NotEngineTurn),
            GamePhase::Finished(_) => return Err(crate::Error::GameOver),
        }

        let position = self
            .engine
            .choose_move(&mut self.board)
            .ok_or(crate::Error::NoValidMoves)?;
        let mark = self.marks().engine;
        self.board.place(position, mark)?;
        self.record(position, mark, GamePhase::AwaitingHumanMove);
        Ok((position, self.phase))
    }

    /// Start over with an empty board and the human to move
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.moves.clear();
        self.phase = GamePhase::AwaitingHumanMove;
        debug!("session reset");
    }

    fn record(&mut self, position: usize, mark: Mark, next: GamePhase) {
        self.moves.push(Move { position, mark });
        let outcome = evaluate(&self.board);
        self.phase = if outcome.is_terminal() {
            info!(?outcome, moves = self.moves.len(), "game finished");
            GamePhase::Finished(outcome)
        } else {
            next
        };
        debug!(position, %mark, phase = ?self.phase, "move applied");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Marks::default())
    }
}
