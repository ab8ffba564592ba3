//! Integration tests for high-score boards backed by a shared store.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use headstart::backend::{KeyValueStore, MemoryStore};
use headstart::error::EngineError;
use headstart::highscore::{HighScoreBoard, ScoreOrder};

/// A store two boards can share, standing in for a browser's cookie jar.
#[derive(Clone, Default)]
struct SharedStore {
    inner: Arc<Mutex<MemoryStore>>,
}

impl KeyValueStore for SharedStore {
    fn read(&self, name: &str) -> Option<String> {
        self.inner.lock().unwrap().read(name)
    }

    fn write(&mut self, name: &str, value: &str, ttl: Duration) {
        self.inner.lock().unwrap().write(name, value, ttl);
    }
}

#[test]
fn scores_survive_reopening_the_board() {
    let store = SharedStore::default();

    let mut board =
        HighScoreBoard::new("arcade", ScoreOrder::Ascending, Box::new(store.clone())).unwrap();
    board.add_score("ada", 120.0);
    board.add_score("brin", 340.0);
    drop(board);

    let reopened =
        HighScoreBoard::new("arcade", ScoreOrder::Ascending, Box::new(store)).unwrap();
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.get_at(0).unwrap().name, "brin");
    assert_eq!(reopened.get_at(1).unwrap().name, "ada");
}

#[test]
fn reset_clears_the_persisted_board_too() {
    let store = SharedStore::default();

    let mut board =
        HighScoreBoard::new("arcade", ScoreOrder::Ascending, Box::new(store.clone())).unwrap();
    board.add_score("ada", 120.0);
    board.reset();
    drop(board);

    let reopened = HighScoreBoard::new("arcade", ScoreOrder::Ascending, Box::new(store)).unwrap();
    assert!(reopened.is_empty());
}

#[test]
fn boards_with_different_names_do_not_share_scores() {
    let store = SharedStore::default();

    let mut arcade =
        HighScoreBoard::new("arcade", ScoreOrder::Ascending, Box::new(store.clone())).unwrap();
    arcade.add_score("ada", 1.0);

    let golf = HighScoreBoard::new("golf", ScoreOrder::Descending, Box::new(store)).unwrap();
    assert!(golf.is_empty());
}

#[test]
fn every_insertion_lands_at_its_ordered_position() {
    let mut board = HighScoreBoard::new(
        "arcade",
        ScoreOrder::Ascending,
        Box::new(MemoryStore::new()),
    )
    .unwrap();
    for score in [50.0, 10.0, 90.0, 30.0, 90.0] {
        board.add_score("p", score);
    }
    let scores: Vec<f64> = board.get_all().iter().map(|e| e.score).collect();
    assert_eq!(scores, vec![90.0, 90.0, 50.0, 30.0, 10.0]);

    // Ascending boards read best-first; out of range is an error, not a
    // panic.
    assert_eq!(board.get_at(0).unwrap().score, 90.0);
    assert!(matches!(
        board.get_at(5),
        Err(EngineError::IndexOutOfRange { index: 5, len: 5 })
    ));
}

#[test]
fn descending_boards_read_best_last() {
    let mut board = HighScoreBoard::new(
        "golf",
        ScoreOrder::Descending,
        Box::new(MemoryStore::new()),
    )
    .unwrap();
    for score in [50.0, 10.0, 90.0, 30.0] {
        board.add_score("p", score);
    }
    let scores: Vec<f64> = board.get_all().iter().map(|e| e.score).collect();
    assert_eq!(scores, vec![10.0, 30.0, 50.0, 90.0]);
}
