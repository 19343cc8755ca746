//! Search engine: exhaustive minimax over the tic-tac-toe game tree
//!
//! The engine plays the maximizing side with [`Marks::engine`]; the opponent
//! minimizes with [`Marks::opponent`]. Every legal continuation is explored,
//! no pruning or memoisation is used; the full 3x3 tree from an empty board is
//! well under a million nodes.

pub mod minimax;
mod scoped;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use minimax::{Minimax, MoveScore, SearchStats};

use crate::tictactoe::{Board, Mark};

/// Score of a position won by the engine under flat scoring
pub const WIN_SCORE: i32 = 10;

/// The two marks of a session: the engine's own (maximizer) and the
/// opponent's (minimizer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marks {
    pub engine: Mark,
    pub opponent: Mark,
}

impl Marks {
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if both sides use the
    /// same mark.
    pub fn new(engine: Mark, opponent: Mark) -> crate::Result<Self> {
        if engine == opponent {
            return Err(crate::Error::InvalidConfiguration {
                message: format!("engine and opponent cannot both play {engine}"),
            });
        }
        Ok(Self { engine, opponent })
    }

    /// Engine plays `engine`, the opponent the other mark
    pub fn for_engine(engine: Mark) -> Self {
        Self {
            engine,
            opponent: engine.opponent(),
        }
    }
}

impl Default for Marks {
    /// Human plays X and moves first, the engine answers with O
    fn default() -> Self {
        Self::for_engine(Mark::O)
    }
}

/// How terminal positions are scored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scoring {
    /// +10 for an engine win, -10 for a loss, 0 for a draw
    #[default]
    Flat,
    /// Like `Flat`, shifted towards zero by the number of plies searched, so
    /// quicker wins and slower losses score higher
    #[serde(rename = "depth", alias = "depth-adjusted")]
    DepthAdjusted,
}

impl Scoring {
    fn win(self, depth: u32) -> i32 {
        match self {
            Scoring::Flat => WIN_SCORE,
            Scoring::DepthAdjusted => WIN_SCORE - depth as i32,
        }
    }

    fn loss(self, depth: u32) -> i32 {
        -self.win(depth)
    }
}

impl FromStr for Scoring {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flat" => Ok(Scoring::Flat),
            "depth" | "depth-adjusted" => Ok(Scoring::DepthAdjusted),
            other => Err(crate::Error::InvalidConfiguration {
                message: format!("unknown scoring '{other}' (expected 'flat' or 'depth')"),
            }),
        }
    }
}

impl fmt::Display for Scoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scoring::Flat => write!(f, "flat"),
            Scoring::DepthAdjusted => write!(f, "depth"),
        }
    }
}

/// Choose the optimal cell for `marks.engine` using flat scoring.
///
/// Returns `None` when the board has no empty cell or is already decided.
/// The board is restored to its exact pre-call contents before returning.
pub fn choose_move(board: &mut Board, marks: Marks) -> Option<usize> {
    Minimax::new(marks).choose_move(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_must_differ() {
        assert!(Marks::new(Mark::X, Mark::X).is_err());
        let marks = Marks::new(Mark::X, Mark::O).unwrap();
        assert_eq!(marks, Marks::for_engine(Mark::X));
        assert_eq!(Marks::default().engine, Mark::O);
    }

    #[test]
    fn scoring_parses_and_displays() {
        assert_eq!("flat".parse::<Scoring>().unwrap(), Scoring::Flat);
        assert_eq!("Depth".parse::<Scoring>().unwrap(), Scoring::DepthAdjusted);
        assert!("fast".parse::<Scoring>().is_err());
        assert_eq!(Scoring::DepthAdjusted.to_string(), "depth");
    }

    #[test]
    fn depth_adjusted_scores_shrink_with_depth() {
        assert_eq!(Scoring::Flat.win(5), 10);
        assert_eq!(Scoring::Flat.loss(5), -10);
        assert_eq!(Scoring::DepthAdjusted.win(1), 9);
        assert_eq!(Scoring::DepthAdjusted.loss(3), -7);
    }
}
