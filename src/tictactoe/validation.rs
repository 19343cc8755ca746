//! Board validation logic
//!
//! The evaluator and the search engine never validate their input; callers
//! that accept boards from outside (the CLI, tests) can fail fast here.

use super::{Board, LineAnalyzer, Mark};

impl Board {
    /// Check that the board could have been reached by alternating moves
    /// with X moving first.
    ///
    /// # Errors
    ///
    /// See [`Board::validate_opened_by`].
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.validate_opened_by(Mark::X)
    }

    /// Check that the board could have been reached by alternating moves
    /// with `first` moving first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] when `first` is not level
    /// with or one ahead of the other mark, and
    /// [`crate::Error::ConflictingWinners`] when both marks hold a full line.
    pub fn validate_opened_by(&self, first: Mark) -> Result<(), crate::Error> {
        let x_count = self.count(Mark::X);
        let o_count = self.count(Mark::O);
        let (lead, trail) = match first {
            Mark::X => (x_count, o_count),
            Mark::O => (o_count, x_count),
        };

        if !(lead == trail || lead == trail + 1) {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        }

        if LineAnalyzer::has_won(self.cells(), Mark::X) && LineAnalyzer::has_won(self.cells(), Mark::O)
        {
            return Err(crate::Error::ConflictingWinners {
                first: Mark::X,
                second: Mark::O,
            });
        }

        Ok(())
    }

    /// The mark due to move on a validated board
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }
}
