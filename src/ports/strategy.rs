//! Strategy port - anything that can pick a cell to play

use crate::{
    Result,
    tictactoe::{Board, Mark},
};

/// A player able to choose moves on a tic-tac-toe board
///
/// # Examples
///
/// ```
/// use oxo::{Board, Mark, ports::Strategy};
///
/// struct FirstEmpty;
///
/// impl Strategy for FirstEmpty {
///     fn select_move(&mut self, board: &Board, _mark: Mark) -> oxo::Result<usize> {
///         board
///             .empty_positions()
///             .first()
///             .copied()
///             .ok_or(oxo::Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "first-empty"
///     }
/// }
///
/// let mut player = FirstEmpty;
/// assert_eq!(player.select_move(&Board::new(), Mark::X)?, 0);
/// # Ok::<(), oxo::Error>(())
/// ```
pub trait Strategy: Send {
    /// Select a cell for `mark` to play on `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid moves are available.
    fn select_move(&mut self, board: &Board, mark: Mark) -> Result<usize>;

    /// Used for identification in arena reports and logging.
    fn name(&self) -> &str;

    /// Reseed any internal randomness. Deterministic strategies ignore it.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
