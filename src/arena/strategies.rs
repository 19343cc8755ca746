//! Baseline strategies

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    engine::{Marks, Minimax, Scoring},
    ports::Strategy,
    tictactoe::{Board, Mark},
};

/// Optimal policy (minimax) usable as an arena opponent
pub struct MinimaxStrategy {
    name: String,
    scoring: Scoring,
}

impl MinimaxStrategy {
    pub fn new(name: String) -> Self {
        Self {
            name,
            scoring: Scoring::default(),
        }
    }

    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }
}

impl Strategy for MinimaxStrategy {
    fn select_move(&mut self, board: &Board, mark: Mark) -> Result<usize> {
        let mut scratch = *board;
        Minimax::new(Marks::for_engine(mark))
            .with_scoring(self.scoring)
            .choose_move(&mut scratch)
            .ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Random policy (baseline)
pub struct RandomStrategy {
    name: String,
    rng: StdRng,
}

impl RandomStrategy {
    /// Create a new random strategy seeded from system entropy
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random strategy with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self, board: &Board, _mark: Mark) -> Result<usize> {
        let moves = board.empty_positions();
        if moves.is_empty() {
            return Err(Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_strategy_only_picks_empty_cells() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let mut random = RandomStrategy::with_seed("Random".to_string(), 7);
        for _ in 0..50 {
            let pos = random.select_move(&board, Mark::O).unwrap();
            assert!(board.is_empty_at(pos));
        }
    }

    #[test]
    fn random_strategy_is_reproducible_with_seed() {
        let board = Board::new();
        let mut a = RandomStrategy::with_seed("a".to_string(), 42);
        let mut b = RandomStrategy::with_seed("b".to_string(), 0);
        b.set_rng_seed(42).unwrap();
        for _ in 0..10 {
            assert_eq!(
                a.select_move(&board, Mark::X).unwrap(),
                b.select_move(&board, Mark::X).unwrap()
            );
        }
    }

    #[test]
    fn strategies_fail_on_full_board() {
        let full = Board::from_string("XOXXOOOXX").unwrap();
        let mut random = RandomStrategy::with_seed("Random".to_string(), 1);
        assert!(matches!(
            random.select_move(&full, Mark::X),
            Err(Error::NoValidMoves)
        ));
        let mut minimax = MinimaxStrategy::new("Minimax".to_string());
        assert!(minimax.select_move(&full, Mark::X).is_err());
    }

    #[test]
    fn minimax_strategy_does_not_touch_the_board() {
        let board = Board::from_string("XX.OO....").unwrap();
        let mut minimax = MinimaxStrategy::new("Minimax".to_string());
        assert_eq!(minimax.select_move(&board, Mark::O).unwrap(), 2);
        assert_eq!(minimax.select_move(&board, Mark::X).unwrap(), 2);
        assert_eq!(board.encode(), "XX.OO....");
    }
}
