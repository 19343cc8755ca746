//! Session transitions driven through the public API

use oxo::{Board, Error, GamePhase, Mark, Marks, Outcome, Scoring, Session};

/// Human plays the lowest empty cell every turn until the game ends
fn play_out(session: &mut Session) -> Outcome {
    loop {
        match session.phase() {
            GamePhase::AwaitingHumanMove => {
                let pos = session.board().empty_positions()[0];
                session.play_human(pos).unwrap();
            }
            GamePhase::AwaitingEngineMove => {
                session.play_engine().unwrap();
            }
            GamePhase::Finished(outcome) => return outcome,
        }
    }
}

#[test]
fn greedy_human_never_beats_the_engine() {
    for marks in [Marks::default(), Marks::for_engine(Mark::X)] {
        let mut session = Session::new(marks);
        let outcome = play_out(&mut session);
        assert_ne!(outcome, Outcome::WinBy(marks.opponent), "{marks:?}");
        assert_eq!(session.board().outcome(), outcome);
    }
}

#[test]
fn history_alternates_human_and_engine() {
    let mut session = Session::default();
    play_out(&mut session);

    let history = session.history();
    assert!(history.len() >= 5);
    for (i, mv) in history.iter().enumerate() {
        let expected = if i % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(mv.mark, expected, "move {i}");
    }
    assert_eq!(history.len(), session.board().occupied_count());
}

#[test]
fn engine_blocks_an_open_two() {
    let mut session = Session::default();
    session.play_human(0).unwrap();
    session.play_engine().unwrap();
    session.play_human(1).unwrap();

    // X threatens 2; the engine has to take it.
    let (pos, phase) = session.play_engine().unwrap();
    assert_eq!(pos, 2);
    assert_eq!(phase, GamePhase::AwaitingHumanMove);
}

#[test]
fn errors_leave_the_session_untouched() {
    let mut session = Session::default();
    session.play_human(4).unwrap();

    let board = *session.board();
    assert!(matches!(session.play_human(0), Err(Error::NotHumanTurn)));
    assert_eq!(*session.board(), board);
    assert_eq!(session.phase(), GamePhase::AwaitingEngineMove);

    session.play_engine().unwrap();
    let board = *session.board();
    assert!(matches!(session.play_engine(), Err(Error::NotEngineTurn)));
    assert!(matches!(
        session.play_human(4),
        Err(Error::CellOccupied { position: 4 })
    ));
    assert!(matches!(session.play_human(9), Err(Error::InvalidPosition { .. })));
    assert_eq!(*session.board(), board);
    assert_eq!(session.phase(), GamePhase::AwaitingHumanMove);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn reset_works_from_every_phase() {
    let mut session = Session::with_scoring(Marks::default(), Scoring::DepthAdjusted);
    session.reset();
    assert_eq!(session.phase(), GamePhase::AwaitingHumanMove);

    session.play_human(3).unwrap();
    session.reset();
    assert_eq!(session.board(), &Board::new());

    play_out(&mut session);
    assert!(session.phase().is_finished());
    session.reset();
    assert_eq!(session.phase(), GamePhase::AwaitingHumanMove);
    assert!(session.history().is_empty());
    session.play_human(0).unwrap();
}
