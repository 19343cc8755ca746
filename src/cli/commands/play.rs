//! Play command - interactive game against the engine on the terminal

use std::{
    io::{self, BufRead, Write},
    thread,
    time::Duration,
};

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{outcome_message, render_board},
    config::AppConfig,
    tictactoe::{GamePhase, Mark, Session},
};

#[derive(Parser, Debug)]
#[command(about = "Play a game against the engine")]
pub struct PlayArgs {
    /// Mark you play (you always move first)
    #[arg(long)]
    pub human_mark: Option<Mark>,

    /// Pause before the engine's move is shown, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

pub fn execute(args: PlayArgs, config: &AppConfig) -> Result<()> {
    let mut config = config.clone();
    if let Some(mark) = args.human_mark {
        config = config.with_human_mark(mark);
    }
    if let Some(delay_ms) = args.delay_ms {
        config = config.with_engine_delay_ms(delay_ms);
    }

    let mut session = Session::with_scoring(config.marks()?, config.scoring);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut session, stdin.lock(), stdout.lock(), config.engine_delay())
}

/// What the player typed at a prompt
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Place(usize),
    Reset,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "q" | "quit" => Command::Quit,
        "r" | "reset" => Command::Reset,
        other => other
            .parse()
            .map(Command::Place)
            .unwrap_or_else(|_| Command::Unknown(line.to_string())),
    }
}

/// Drive `session` from `input` until the player quits or input ends.
///
/// The engine's reply is held back by `delay`; the search itself never waits.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
    delay: Duration,
) -> Result<()> {
    let human = session.marks().opponent;
    writeln!(output, "You play {human}. Enter a cell 0-8, 'r' to reset, 'q' to quit.")?;
    writeln!(output, "{}", render_board(session.board()))?;

    let mut line = String::new();
    loop {
        match session.phase() {
            GamePhase::AwaitingEngineMove => {
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                let (position, _) = session.play_engine()?;
                writeln!(output, "\nEngine plays {position}")?;
                writeln!(output, "{}", render_board(session.board()))?;
                continue;
            }
            GamePhase::Finished(outcome) => {
                if let Some(message) = outcome_message(outcome) {
                    writeln!(output, "\n{message}")?;
                }
                write!(output, "Play again? [r/q]: ")?;
            }
            GamePhase::AwaitingHumanMove => {
                write!(output, "\nYour move ({human}): ")?;
            }
        }
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        match parse_command(&line) {
            Command::Quit => return Ok(()),
            Command::Reset => {
                session.reset();
                writeln!(output, "\nNew game")?;
                writeln!(output, "{}", render_board(session.board()))?;
            }
            Command::Place(position) if !session.phase().is_finished() => {
                if let Err(err) = session.play_human(position) {
                    writeln!(output, "{err}")?;
                    continue;
                }
                writeln!(output, "{}", render_board(session.board()))?;
            }
            Command::Place(_) => writeln!(output, "The game is over.")?,
            Command::Unknown(text) => writeln!(output, "'{text}' is not a cell, 'r' or 'q'")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn play(input: &str) -> (Session, String) {
        let mut session = Session::default();
        let mut output = Vec::new();
        run(&mut session, Cursor::new(input), &mut output, Duration::ZERO).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command(" 4 \n"), Command::Place(4));
        assert_eq!(parse_command("R\n"), Command::Reset);
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("nine"), Command::Unknown("nine".to_string()));
    }

    #[test]
    fn engine_answers_a_human_move() {
        let (session, output) = play("0\nq\n");
        assert!(output.contains("Engine plays 4"));
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn bad_input_is_reported_and_reprompted() {
        let (session, output) = play("abc\n9\n4\nq\n");
        assert!(output.contains("'abc' is not a cell"));
        assert!(output.contains("out of bounds"));
        assert_eq!(session.board().get(4), crate::Cell::X);
    }

    #[test]
    fn reset_clears_the_board() {
        let (session, output) = play("4\nr\nq\n");
        assert!(output.contains("New game"));
        assert!(session.history().is_empty());
    }

    #[test]
    fn full_game_ends_without_a_human_win() {
        let (session, output) = play("0\n1\n2\n3\n5\n6\n7\n8\nq\n");
        assert!(session.phase().is_finished());
        assert!(output.contains("Winner: O") || output.contains("It's a draw!"));
        assert!(!output.contains("Winner: X"));
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let (session, _) = play("4\n");
        assert_eq!(session.phase(), GamePhase::AwaitingHumanMove);
    }
}
