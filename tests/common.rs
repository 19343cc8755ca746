//! Common test utilities for the oxo test suite.
//!
//! Game-tree walkers shared by the optimality tests.

use oxo::{Board, Mark, Minimax, Outcome, evaluate};

/// Tally of the finished games reached by [`walk_every_reply`]
#[derive(Debug, Default)]
pub struct Leaves {
    pub engine_wins: usize,
    pub draws: usize,
    pub engine_losses: usize,
}

impl Leaves {
    pub fn total(&self) -> usize {
        self.engine_wins + self.draws + self.engine_losses
    }
}

/// Play the engine against every possible sequence of opponent replies,
/// starting from `board` with `to_move` due, and tally how each game ends.
///
/// Also checks after every engine call that the board was handed back
/// unchanged and that the chosen cell was empty.
pub fn walk_every_reply(board: &mut Board, engine: &Minimax, to_move: Mark, leaves: &mut Leaves) {
    let marks = engine.marks();
    match evaluate(board) {
        Outcome::WinBy(mark) if mark == marks.engine => {
            leaves.engine_wins += 1;
            return;
        }
        Outcome::WinBy(_) => {
            leaves.engine_losses += 1;
            return;
        }
        Outcome::Draw => {
            leaves.draws += 1;
            return;
        }
        Outcome::Undecided => {}
    }

    if to_move == marks.engine {
        let before = *board;
        let position = engine.choose_move(board).expect("undecided board must have a move");
        assert_eq!(*board, before, "search must restore the board");
        assert!(before.is_empty_at(position), "engine chose occupied cell {position}");

        let mut next = *board;
        next.place(position, to_move).unwrap();
        walk_every_reply(&mut next, engine, to_move.opponent(), leaves);
    } else {
        for position in board.empty_positions() {
            let mut next = *board;
            next.place(position, to_move).unwrap();
            walk_every_reply(&mut next, engine, to_move.opponent(), leaves);
        }
    }
}
