//! End-to-end runs through the loader: settings and sequence files on disk,
//! parsed and simulated the way the command line tool does it.

use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};
use turtle::{report, ErrorKind, Limits, Loader, Outcome, SequenceReport, TurtleError};

const SIMPLE_SETTINGS: &str = "2,2\n0,0,E\n1,1\n0,1\n";

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn outcomes(settings: &str, sequences: &str) -> Vec<Outcome> {
    let dir = tempdir().unwrap();
    let settings_path = write(&dir, "game-settings.txt", settings);
    let sequences_path = write(&dir, "moves.txt", sequences);

    let settings = Loader::load_settings(&settings_path, &Limits::default()).unwrap();
    let sequences = Loader::load_sequences(&sequences_path).unwrap();

    report(&settings, &sequences)
        .into_iter()
        .map(|r| r.outcome)
        .collect()
}

#[test]
fn test_simple_board_scenarios() {
    assert_eq!(
        outcomes(SIMPLE_SETTINGS, "mrm\nrm\nm\nmm\n"),
        vec![
            Outcome::Success,
            Outcome::MineHit,
            Outcome::StillInDanger,
            Outcome::OutOfBounds,
        ]
    );
}

#[test]
fn test_larger_board() {
    // 5x4 board, turtle at the top left facing north.
    //
    //   T . . M .
    //   . M . . .
    //   . . . M .
    //   . . . . E
    let settings = "5,4\n0,0,N\n4,3\n3,0\n1,1\n3,2\n";
    let sequences = "\
rrmmmrrrmmmm
rmm
rmmrmmmrrrmm
m
rrrm
rmmm
rrmrrrm
";

    assert_eq!(
        outcomes(settings, sequences),
        vec![
            Outcome::Success,
            Outcome::StillInDanger,
            Outcome::Success,
            Outcome::OutOfBounds,
            Outcome::OutOfBounds,
            Outcome::MineHit,
            Outcome::MineHit,
        ]
    );
}

#[test]
fn test_report_lines() {
    let dir = tempdir().unwrap();
    let settings_path = write(&dir, "settings.txt", SIMPLE_SETTINGS);
    let sequences_path = write(&dir, "moves.txt", "mrm\nrm\n");

    let settings = Loader::load_settings(&settings_path, &Limits::default()).unwrap();
    let sequences = Loader::load_sequences(&sequences_path).unwrap();

    let lines: Vec<String> = report(&settings, &sequences)
        .iter()
        .map(SequenceReport::to_string)
        .collect();
    assert_eq!(lines, vec!["Sequence 1: Success", "Sequence 2: Mine Hit"]);
}

#[test]
fn test_duplicate_mine_file_rejected() {
    let dir = tempdir().unwrap();
    let path = write(&dir, "settings.txt", "2,2\n0,0,E\n1,1\n0,1\n0,1\n");

    let error = Loader::load_settings(&path, &Limits::default()).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Domain);
    assert!(error.to_string().contains("Duplicate mine (0, 1)"));
}

#[test]
fn test_two_line_settings_file_rejected() {
    let dir = tempdir().unwrap();
    let path = write(&dir, "settings.txt", "2,2\n0,0,E\n");

    let result = Loader::load_settings(&path, &Limits::default());
    assert_eq!(result, Err(TurtleError::MissingLines(2)));
}

#[test]
fn test_invalid_sequence_file_rejected() {
    let dir = tempdir().unwrap();
    let path = write(&dir, "moves.txt", "mrm\nmrx\n");

    let error = Loader::load_sequences(&path).unwrap_err();
    assert!(matches!(
        error,
        TurtleError::UnknownMove {
            symbol: 'x',
            line: 2,
            column: 3,
        }
    ));
}
