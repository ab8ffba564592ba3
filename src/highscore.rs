//! Persistent high-score boards.
//!
//! A [`HighScoreBoard`] keeps an ordered list of name/score entries and
//! mirrors every mutation to a [`KeyValueStore`] under the board's name, so
//! scores survive across sessions. The ordering policy is fixed at
//! construction: [`ScoreOrder::Ascending`] keeps the best score at index 0,
//! [`ScoreOrder::Descending`] keeps it at the end.

use std::str::FromStr;
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::backend::KeyValueStore;
use crate::error::EngineError;

/// Persisted entries expire after this long without a write.
const PERSIST_TTL: Duration = Duration::from_secs(10 * 24 * 60 * 60);

/// One score on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: f64,
}

/// How entries are kept sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreOrder {
    /// Best score first. Ties go below the existing equal scores.
    #[default]
    Ascending,
    /// Best score last. Ties go above the existing equal scores.
    Descending,
}

impl FromStr for ScoreOrder {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" | "ASCENDING" => Ok(Self::Ascending),
            "DESC" | "DESCENDING" => Ok(Self::Descending),
            _ => Err(EngineError::InvalidOrder {
                value: s.to_owned(),
            }),
        }
    }
}

/// An ordered, persistent score board.
pub struct HighScoreBoard {
    name: String,
    order: ScoreOrder,
    entries: Vec<HighScoreEntry>,
    store: Box<dyn KeyValueStore>,
}

impl HighScoreBoard {
    /// Open the board stored under `name`, creating it empty if the store
    /// has nothing for it. Corrupt stored data is discarded with a warning
    /// rather than failing the open.
    pub fn new(
        name: &str,
        order: ScoreOrder,
        store: Box<dyn KeyValueStore>,
    ) -> Result<Self, EngineError> {
        if name.is_empty() {
            return Err(EngineError::MissingRequiredField { field: "name" });
        }
        let entries = match store.read(name) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!("discarding unreadable scores for board {name}: {err}");
                Vec::new()
            }),
            None => Vec::new(),
        };
        Ok(Self {
            name: name.to_owned(),
            order,
            entries,
            store,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn order(&self) -> ScoreOrder {
        self.order
    }

    /// Insert a score at its ordered position and persist the board.
    pub fn add_score(&mut self, name: &str, score: f64) {
        let index = self.position_for(score);
        self.entries.insert(
            index,
            HighScoreEntry {
                name: name.to_owned(),
                score,
            },
        );
        self.persist();
    }

    /// Drop every entry and persist the empty board.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// All entries in board order.
    pub fn get_all(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    /// The entry at `index`, or `IndexOutOfRange` past the end.
    pub fn get_at(&self, index: usize) -> Result<&HighScoreEntry, EngineError> {
        self.entries.get(index).ok_or(EngineError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insertion index for `score` under the board's ordering. Equal scores
    /// never displace ones already on the board.
    fn position_for(&self, score: f64) -> usize {
        match self.order {
            ScoreOrder::Ascending => {
                for (i, entry) in self.entries.iter().enumerate().rev() {
                    if score <= entry.score {
                        return i + 1;
                    }
                }
                0
            }
            ScoreOrder::Descending => {
                for (i, entry) in self.entries.iter().enumerate() {
                    if score < entry.score {
                        return i;
                    }
                }
                self.entries.len()
            }
        }
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.entries) {
            Ok(encoded) => self.store.write(&self.name, &encoded, PERSIST_TTL),
            Err(err) => warn!("failed to encode scores for board {}: {err}", self.name),
        }
    }
}
