//! Ports (trait boundaries) between the game core and its players.
//!
//! The arena drives any [`Strategy`] against the engine and reports progress
//! through [`Observer`]s; concrete implementations live in
//! [`crate::arena`].

pub mod observer;
pub mod strategy;

pub use observer::Observer;
pub use strategy::Strategy;
