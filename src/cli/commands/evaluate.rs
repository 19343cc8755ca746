//! Evaluate command - report the outcome of a board

use anyhow::Result;
use clap::Parser;

use super::parse_board;
use crate::{
    cli::output::{print_kv, print_section, render_board},
    config::AppConfig,
    tictactoe::{LineAnalyzer, Outcome, evaluate},
};

#[derive(Parser, Debug)]
#[command(about = "Report whether a board is won, drawn or still in play")]
pub struct EvaluateArgs {
    /// Board as 9 cells in row-major order, e.g. "XO.XO...." (whitespace ignored)
    pub board: String,

    /// Reject boards that could not arise from alternating play
    #[arg(long)]
    pub strict: bool,
}

pub fn execute(args: EvaluateArgs, _config: &AppConfig) -> Result<()> {
    let board = parse_board(&args.board)?;
    if args.strict {
        board.validate()?;
    }

    let outcome = evaluate(&board);

    print_section("Board");
    println!("{}", render_board(&board));

    print_section("Outcome");
    match outcome {
        Outcome::WinBy(mark) => {
            print_kv("Result", &format!("{mark} wins"));
            if let Some((line, _)) = LineAnalyzer::winning_line(board.cells()) {
                print_kv("Line", &format!("{line:?}"));
            }
        }
        Outcome::Draw => print_kv("Result", "draw"),
        Outcome::Undecided => {
            print_kv("Result", "undecided");
            print_kv("Empty cells", &format!("{:?}", board.empty_positions()));
        }
    }
    Ok(())
}
