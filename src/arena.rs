//! Arena for pitting the engine against other strategies
//!
//! This module provides:
//! - Baseline strategies (random, minimax)
//! - Observers for progress reporting
//! - The match runner that tallies results from the engine's perspective

pub mod observers;
pub mod runner;
pub mod strategies;

pub use observers::ProgressObserver;
pub use runner::{Arena, ArenaConfig, ArenaResult};
pub use strategies::{MinimaxStrategy, RandomStrategy};

pub use crate::ports::{Observer, Strategy};
