//! Scoped hypothetical placements

use std::ops::{Deref, DerefMut};

use crate::tictactoe::{Board, Cell, Mark};

/// A mark placed for exploration only.
///
/// The cell is restored to its previous contents when the guard is dropped,
/// so every return path out of a search frame leaves the board as it found
/// it.
pub(crate) struct Hypothetical<'a> {
    board: &'a mut Board,
    pos: usize,
    previous: Cell,
}

impl<'a> Hypothetical<'a> {
    pub(crate) fn place(board: &'a mut Board, pos: usize, mark: Mark) -> Self {
        let previous = board.get(pos);
        debug_assert!(previous.is_empty(), "hypothetical move onto occupied cell {pos}");
        board.set(pos, mark.to_cell());
        Self {
            board,
            pos,
            previous,
        }
    }
}

impl Deref for Hypothetical<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Hypothetical<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Hypothetical<'_> {
    fn drop(&mut self) {
        self.board.set(self.pos, self.previous);
    }
}
