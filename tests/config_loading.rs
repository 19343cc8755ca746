//! Loading `AppConfig` from TOML files on disk

use std::{io::Write, time::Duration};

use oxo::{AppConfig, Error, Mark, Scoring, Session};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn full_file_round_trips_into_a_session() {
    let file = write_config(
        r#"
        human_mark = "O"
        engine_mark = "X"
        engine_delay_ms = 0
        scoring = "depth"
        log_level = "debug"
        "#,
    );

    let config = AppConfig::load(file.path()).unwrap();
    assert_eq!(config.engine_delay(), Duration::ZERO);
    assert_eq!(config.scoring, Scoring::DepthAdjusted);
    assert_eq!(config.log_level, "debug");

    let mut session = Session::with_scoring(config.marks().unwrap(), config.scoring);
    session.play_human(4).unwrap();
    assert_eq!(session.board().get(4), oxo::Cell::O);
}

#[test]
fn empty_file_uses_defaults() {
    let file = write_config("");
    let config = AppConfig::load(file.path()).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.human_mark, Mark::X);
    assert_eq!(config.engine_delay_ms, 500);
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn malformed_values_are_rejected() {
    for contents in [
        "human_mark = \"Z\"",
        "engine_delay_ms = -1",
        "scoring = \"alpha-beta\"",
        "human_mark = 3",
    ] {
        let file = write_config(contents);
        assert!(AppConfig::load(file.path()).is_err(), "{contents}");
    }
}

#[test]
fn same_mark_for_both_sides_is_rejected() {
    let file = write_config("human_mark = \"X\"\nengine_mark = \"X\"");
    let err = AppConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { .. }));
}
