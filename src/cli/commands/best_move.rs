//! Best-move command - run the engine on a single board

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use super::parse_board;
use crate::{
    cli::output::{print_kv, print_section, render_board},
    config::AppConfig,
    engine::{Marks, Minimax, MoveScore, Scoring},
    tictactoe::{LineAnalyzer, Mark, Outcome, evaluate},
};

#[derive(Parser, Debug)]
#[command(about = "Show the engine's move and per-cell scores for a board")]
pub struct BestMoveArgs {
    /// Board as 9 cells in row-major order, e.g. "XX.OO...." (whitespace ignored)
    pub board: String,

    /// Mark the engine plays (defaults to the mark due to move)
    #[arg(long)]
    pub engine_mark: Option<Mark>,

    /// Scoring policy: `flat` or `depth` (defaults to the configured one)
    #[arg(long)]
    pub scoring: Option<Scoring>,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct BestMoveReport {
    board: String,
    engine: Mark,
    scoring: Scoring,
    outcome: Outcome,
    best_move: Option<usize>,
    scores: Vec<MoveScore>,
}

pub fn execute(args: BestMoveArgs, config: &AppConfig) -> Result<()> {
    let mut board = parse_board(&args.board)?;
    let engine_mark = args.engine_mark.unwrap_or_else(|| board.next_mark());
    let scoring = args.scoring.unwrap_or(config.scoring);

    let engine = Minimax::new(Marks::for_engine(engine_mark)).with_scoring(scoring);
    let (best_move, stats) = engine.choose_move_with_stats(&mut board);
    let scores = engine.evaluate_moves(&mut board);

    let report = BestMoveReport {
        board: board.encode(),
        engine: engine_mark,
        scoring,
        outcome: evaluate(&board),
        best_move,
        scores,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Board");
    println!("{}", render_board(&board));

    print_section("Engine");
    print_kv("Engine mark", &engine_mark.to_string());
    print_kv("Scoring", &scoring.to_string());
    print_kv("Nodes searched", &stats.nodes.to_string());
    match best_move {
        Some(position) => print_kv("Best move", &position.to_string()),
        None => print_kv("Best move", "no move"),
    }

    let wins = LineAnalyzer::winning_moves(board.cells(), engine_mark);
    if !wins.is_empty() {
        print_kv("Winning cells", &format!("{wins:?}"));
    }
    let threats = LineAnalyzer::winning_moves(board.cells(), engine_mark.opponent());
    if !threats.is_empty() {
        print_kv("Threats", &format!("{threats:?}"));
    }

    if !report.scores.is_empty() {
        print_section("Scores");
        for MoveScore { position, score } in &report.scores {
            print_kv(&format!("Cell {position}"), &format!("{score:+}"));
        }
    }
    Ok(())
}
