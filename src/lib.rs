//! Perfect-play tic-tac-toe
//!
//! This crate provides:
//! - Board, mark and win-line primitives for the 3x3 game
//! - The outcome evaluator ([`evaluate`])
//! - An exhaustive minimax search engine ([`choose_move`])
//! - A human-vs-engine session state machine
//! - Strategies and an arena for pitting the engine against other players
//! - Configuration and the `oxo` command-line front end

pub mod arena;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod ports;
pub mod tictactoe;

pub use config::AppConfig;
pub use engine::{Marks, Minimax, MoveScore, Scoring, choose_move};
pub use error::{Error, Result};
pub use tictactoe::{Board, Cell, GamePhase, Mark, Outcome, Session, evaluate};
