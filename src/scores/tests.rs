use super::*;

use std::io::{Cursor, Write};

use crate::infrastructure::hash::HashAlgorithm;

fn board_from(text: &str) -> ScoreBoard {
    ScoreBoard::from_reader(Cursor::new(text), &TableConfig::default()).unwrap()
}

#[test]
fn test_parse_line() {
    assert_eq!(
        parse_line("90 alice"),
        Some(ScoreRecord { username: "alice".to_string(), score: 90 })
    );
    assert_eq!(
        parse_line("  -5\tbob extra"),
        Some(ScoreRecord { username: "bob".to_string(), score: -5 })
    );
    assert_eq!(parse_line("alice 90"), None);
    assert_eq!(parse_line("90"), None);
    assert_eq!(parse_line(""), None);
}

#[test]
fn test_from_reader_loads_records() {
    let board = board_from("90 alice\n72 bob\n85 carol\n");
    assert_eq!(board.len(), 3);
    assert_eq!(board.score("bob"), Some(72));
    assert_eq!(board.score("dave"), None);
    assert!(board.rejected().is_empty());
    assert_eq!(board.stopped_at(), None);
}

#[test]
fn test_duplicate_username_keeps_first_score() {
    let board = board_from("90 alice\n10 alice\n72 bob\n");
    assert_eq!(board.len(), 2);
    assert_eq!(board.score("alice"), Some(90));
    assert_eq!(
        board.rejected(),
        &[ScoreRecord { username: "alice".to_string(), score: 10 }]
    );
}

#[test]
fn test_reading_stops_at_malformed_line() {
    let board = board_from("90 alice\nnot a score\n72 bob\n");
    assert_eq!(board.len(), 1);
    assert_eq!(board.stopped_at(), Some(2));
    assert_eq!(board.score("bob"), None);
}

#[test]
fn test_records_sorted_by_username() {
    let board = board_from("1 carol\n2 alice\n3 bob\n");
    let names: Vec<String> = board.records().into_iter().map(|r| r.username).collect();
    assert_eq!(names, vec!["alice", "bob", "carol"]);
}

#[test]
fn test_forget() {
    let mut board = board_from("90 alice\n72 bob\n");
    assert!(board.forget("alice"));
    assert!(!board.forget("alice"));
    assert_eq!(board.len(), 1);
    assert_eq!(board.score("bob"), Some(72));
}

#[test]
fn test_single_bucket_config() {
    let config = TableConfig::new(1, HashAlgorithm::Xxh64);
    let board = ScoreBoard::from_reader(Cursor::new("1 a\n2 b\n3 c\n"), &config).unwrap();
    assert_eq!(board.table().bucket(0).map(|chain| chain.len()), Some(3));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "100 alice").unwrap();
    writeln!(file, "50 bob").unwrap();

    let board = ScoreBoard::load(file.path(), &TableConfig::default()).unwrap();
    assert_eq!(board.len(), 2);
    assert_eq!(board.score("alice"), Some(100));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = ScoreBoard::load(dir.path().join("Scores.txt"), &TableConfig::default());
    assert!(matches!(result, Err(ScoreError::IoError(_))));
}

#[test]
fn test_invalid_config_surfaces_table_error() {
    let config = TableConfig::new(0, HashAlgorithm::Fnv1a);
    let result = ScoreBoard::new(&config);
    assert!(matches!(result, Err(ScoreError::Table(_))));
}

#[test]
fn test_record_serializes() {
    let record = ScoreRecord { username: "alice".to_string(), score: 90 };
    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        r#"{"username":"alice","score":90}"#
    );
}
