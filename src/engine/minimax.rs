//! Minimax search

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Marks, Scoring, scoped::Hypothetical};
use crate::tictactoe::{Board, Outcome, evaluate};

/// Score of one candidate move for the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    pub position: usize,
    pub score: i32,
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions passed to the scorer, including terminal ones
    pub nodes: u64,
}

/// Optimal player for a fixed pair of marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    marks: Marks,
    scoring: Scoring,
}

impl Minimax {
    pub fn new(marks: Marks) -> Self {
        Self {
            marks,
            scoring: Scoring::default(),
        }
    }

    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn marks(&self) -> Marks {
        self.marks
    }

    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    /// Pick the highest-scoring empty cell for the engine.
    ///
    /// Ties go to the lowest index. Returns `None` if the board is full or
    /// already decided.
    pub fn choose_move(&self, board: &mut Board) -> Option<usize> {
        self.choose_move_with_stats(board).0
    }

    pub fn choose_move_with_stats(&self, board: &mut Board) -> (Option<usize>, SearchStats) {
        let mut stats = SearchStats::default();
        let mut best: Option<MoveScore> = None;

        for candidate in self.score_candidates(board, &mut stats) {
            // Strictly greater keeps the first of equal scores.
            if best.is_none_or(|b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }

        debug!(
            board = %board.encode(),
            engine = %self.marks.engine,
            chosen = ?best.map(|b| b.position),
            score = ?best.map(|b| b.score),
            nodes = stats.nodes,
            "minimax search complete"
        );
        (best.map(|b| b.position), stats)
    }

    /// Evaluate every empty cell in ascending order and return its minimax
    /// score for the engine.
    pub fn evaluate_moves(&self, board: &mut Board) -> Vec<MoveScore> {
        let mut stats = SearchStats::default();
        self.score_candidates(board, &mut stats)
    }

    fn score_candidates(&self, board: &mut Board, stats: &mut SearchStats) -> Vec<MoveScore> {
        if evaluate(board).is_terminal() {
            return Vec::new();
        }

        board
            .empty_positions()
            .into_iter()
            .map(|position| {
                let mut placed = Hypothetical::place(board, position, self.marks.engine);
                let score = self.score(&mut placed, false, 1, stats);
                MoveScore { position, score }
            })
            .collect()
    }

    /// Minimax value of `board` for the engine, with `maximizing` telling
    /// whose mark goes down next. `depth` counts the plies placed so far.
    fn score(&self, board: &mut Board, maximizing: bool, depth: u32, stats: &mut SearchStats) -> i32 {
        stats.nodes += 1;

        match evaluate(board) {
            Outcome::WinBy(mark) if mark == self.marks.engine => return self.scoring.win(depth),
            Outcome::WinBy(_) => return self.scoring.loss(depth),
            Outcome::Draw => return 0,
            Outcome::Undecided => {}
        }

        let mark = if maximizing {
            self.marks.engine
        } else {
            self.marks.opponent
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in board.empty_positions() {
            let mut placed = Hypothetical::place(board, pos, mark);
            let value = self.score(&mut placed, !maximizing, depth + 1, stats);
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }

        best
    }
}
