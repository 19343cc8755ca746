//! Command-line front end for `oxo`
//!
//! Each subcommand lives in [`commands`] as a clap args struct plus an
//! `execute` function; [`output`] holds the shared terminal formatting.

pub mod commands;
pub mod output;
