//! Output formatting for the CLI

use crate::tictactoe::{Board, Cell, Outcome};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:16} {}", format!("{}:", key), value);
}

/// Render the board as a grid, showing the index of each empty cell so the
/// player knows what to type
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .cells()
        .chunks(3)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Cell::Empty => (row * 3 + col).to_string(),
                    other => other.to_char().to_string(),
                })
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .map(|line| format!(" {line}"))
        .collect();
    rows.join("\n---+---+---\n")
}

/// The line shown when a game ends, or `None` while it is still going
pub fn outcome_message(outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::WinBy(mark) => Some(format!("Winner: {mark}")),
        Outcome::Draw => Some("It's a draw!".to_string()),
        Outcome::Undecided => None,
    }
}

/// Format a rate in [0, 1] as a percentage
pub fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}
