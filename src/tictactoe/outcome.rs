//! Outcome evaluation

use serde::{Deserialize, Serialize};

use super::{Board, LineAnalyzer, Mark};

/// Result of evaluating a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Undecided,
    WinBy(Mark),
    Draw,
}

impl Outcome {
    /// Check if the game is over (win or draw)
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Undecided)
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::WinBy(mark) => Some(mark),
            Outcome::Undecided | Outcome::Draw => None,
        }
    }
}

/// Decide whether `board` is won, drawn or still in play.
///
/// The first fully occupied win line decides the result. A legally reached
/// board never has winning lines for both marks, so the scan order does not
/// matter there.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((_, mark)) = LineAnalyzer::winning_line(board.cells()) {
        Outcome::WinBy(mark)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}

impl Board {
    pub fn outcome(&self) -> Outcome {
        evaluate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn empty_board_is_undecided() {
        assert_eq!(evaluate(&Board::new()), Outcome::Undecided);
    }

    #[test]
    fn full_row_wins_regardless_of_other_cells() {
        assert_eq!(evaluate(&board("OOO......")), Outcome::WinBy(Mark::O));
        assert_eq!(evaluate(&board("OOOXX.X..")), Outcome::WinBy(Mark::O));
        assert_eq!(evaluate(&board("OOOXXOXXO")), Outcome::WinBy(Mark::O));
    }

    #[test]
    fn every_line_is_detected() {
        for line in crate::tictactoe::WIN_LINES {
            let mut cells = [crate::Cell::Empty; 9];
            for idx in line {
                cells[idx] = crate::Cell::X;
            }
            assert_eq!(
                evaluate(&Board::from_cells(cells)),
                Outcome::WinBy(Mark::X),
                "line {line:?}"
            );
        }
    }

    #[test]
    fn full_board_without_line_is_draw() {
        // XOX
        // XOO
        // OXX
        let drawn = board("XOXXOOOXX");
        assert_eq!(evaluate(&drawn), Outcome::Draw);
        assert!(evaluate(&drawn).is_terminal());
        assert_eq!(evaluate(&drawn).winner(), None);
    }

    #[test]
    fn win_on_last_cell_is_not_a_draw() {
        // XOX
        // OXO
        // OXX  (X completes the diagonal with the final move)
        let won = board("XOXOXOOXX");
        assert!(won.is_full());
        assert_eq!(won.outcome(), Outcome::WinBy(Mark::X));
    }

    #[test]
    fn partial_board_is_undecided() {
        assert_eq!(evaluate(&board("XX.OO....")), Outcome::Undecided);
        assert!(!Outcome::Undecided.is_terminal());
    }
}
