//! Winning line analysis for Tic-Tac-Toe

use std::collections::BTreeSet;

use super::{Cell, Mark};

/// Winning line indices on the 3x3 board
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// The first line fully occupied by a single mark, and that mark
    pub fn winning_line(cells: &[Cell; 9]) -> Option<([usize; 3], Mark)> {
        WIN_LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            let mark = cells[a].mark()?;
            (cells[b] == cells[a] && cells[c] == cells[a]).then_some((line, mark))
        })
    }

    /// Check if a mark has three in a row
    pub fn has_won(cells: &[Cell; 9], mark: Mark) -> bool {
        let target = mark.to_cell();
        WIN_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Find all positions that would immediately complete a line for the mark
    pub fn winning_moves(cells: &[Cell; 9], mark: Mark) -> BTreeSet<usize> {
        WIN_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, mark, line))
            .collect()
    }

    /// Find the completing position in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], mark: Mark, line: &[usize; 3]) -> Option<usize> {
        let target = mark.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None, // Opponent piece in line
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Mark::X));
        assert!(!LineAnalyzer::has_won(&cells, Mark::O));
        assert_eq!(
            LineAnalyzer::winning_line(&cells),
            Some(([0, 1, 2], Mark::X))
        );
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[1] = Cell::O;
        cells[4] = Cell::O;
        cells[7] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Mark::O));
        assert_eq!(
            LineAnalyzer::winning_line(&cells),
            Some(([1, 4, 7], Mark::O))
        );
    }

    #[test]
    fn test_has_won_anti_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::X;
        cells[4] = Cell::X;
        cells[6] = Cell::X;

        assert_eq!(
            LineAnalyzer::winning_line(&cells),
            Some(([2, 4, 6], Mark::X))
        );
    }

    #[test]
    fn test_no_line_for_mixed_marks() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::O;
        cells[2] = Cell::X;

        assert_eq!(LineAnalyzer::winning_line(&cells), None);
        assert_eq!(LineAnalyzer::winning_line(&[Cell::Empty; 9]), None);
    }

    #[test]
    fn test_winning_moves_multiple() {
        // XX.
        // X..
        // ...
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[3] = Cell::X;

        let moves = LineAnalyzer::winning_moves(&cells, Mark::X);
        assert_eq!(moves.into_iter().collect::<Vec<_>>(), vec![2, 6]);
        assert!(LineAnalyzer::winning_moves(&cells, Mark::O).is_empty());
    }

    #[test]
    fn test_blocked_line_is_not_a_winning_move() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::O;

        assert!(LineAnalyzer::winning_moves(&cells, Mark::X).is_empty());
    }
}
