//! Observer port - watching arena runs

use crate::{Result, tictactoe::Outcome};

/// Observer trait for monitoring arena runs
///
/// Methods are called in order: `on_start` once, `on_game_end` after each
/// game, `on_finish` once at the end. All methods default to no-ops.
pub trait Observer {
    fn on_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, _outcome: Outcome) -> Result<()> {
        Ok(())
    }

    fn on_finish(&mut self) -> Result<()> {
        Ok(())
    }
}
