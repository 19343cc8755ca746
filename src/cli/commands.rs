//! Subcommand implementations

pub mod arena;
pub mod best_move;
pub mod evaluate;
pub mod play;

use crate::tictactoe::Board;

/// Parse a board argument, attaching the raw input to the error
pub(crate) fn parse_board(input: &str) -> anyhow::Result<Board> {
    use anyhow::Context;

    Board::from_string(input).with_context(|| format!("could not parse board '{input}'"))
}
