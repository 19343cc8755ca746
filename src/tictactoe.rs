//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod outcome;
pub mod validation;

pub use board::{Board, Cell, Mark};
pub use game::{GamePhase, Move, Session};
pub use lines::{LineAnalyzer, WIN_LINES};
pub use outcome::{Outcome, evaluate};
