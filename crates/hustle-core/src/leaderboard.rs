//! Leaderboard - ranked top-N final scores in a JSON document.
//!
//! Document shape:
//!
//! ```json
//! {
//!   "leaderboard": [ { "name": "John", "score": 100 } ],
//!   "max_entries": 10
//! }
//! ```
//!
//! Entries are kept sorted by score, highest first; inserting past the
//! capacity drops the lowest entry.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    leaderboard: Vec<LeaderboardEntry>,
    max_entries: usize,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self {
            leaderboard: Vec::new(),
            max_entries: 10,
        }
    }
}

/// Why the leaderboard document could not be read or written.
#[derive(Debug)]
pub enum LeaderboardError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl From<std::io::Error> for LeaderboardError {
    fn from(e: std::io::Error) -> Self {
        LeaderboardError::Io(e)
    }
}

impl From<serde_json::Error> for LeaderboardError {
    fn from(e: serde_json::Error) -> Self {
        LeaderboardError::Json(e)
    }
}

impl std::fmt::Display for LeaderboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaderboardError::Io(e) => write!(f, "IO error: {}", e),
            LeaderboardError::Json(e) => write!(f, "Leaderboard document error: {}", e),
        }
    }
}

impl std::error::Error for LeaderboardError {}

impl Leaderboard {
    pub fn new(max_entries: usize) -> Self {
        Self {
            leaderboard: Vec::new(),
            max_entries,
        }
    }

    /// Read a leaderboard document.
    pub fn load<R: Read>(reader: R) -> Result<Self, LeaderboardError> {
        let mut board: Leaderboard = serde_json::from_reader(reader)?;
        board.sort();
        Ok(board)
    }

    /// Write the document back out.
    pub fn save<W: Write>(&self, writer: W) -> Result<(), LeaderboardError> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Read the document at `path`, or start an empty board if the file
    /// does not exist yet.
    pub fn load_path(path: &std::path::Path) -> Result<Self, LeaderboardError> {
        match std::fs::File::open(path) {
            Ok(file) => Self::load(file),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save_path(&self, path: &std::path::Path) -> Result<(), LeaderboardError> {
        self.save(std::fs::File::create(path)?)
    }

    /// Insert a final score, keeping the board sorted and capped.
    pub fn add_score(&mut self, name: impl Into<String>, score: i32) {
        self.leaderboard.push(LeaderboardEntry {
            name: name.into(),
            score,
        });
        self.sort();
        self.leaderboard.truncate(self.max_entries);
    }

    fn sort(&mut self) {
        // Stable sort: equal scores keep their insertion order.
        self.leaderboard.sort_by(|a, b| b.score.cmp(&a.score));
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.leaderboard
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Name at a rank, with a placeholder past the end.
    pub fn name_at(&self, index: usize) -> &str {
        self.leaderboard
            .get(index)
            .map(|entry| entry.name.as_str())
            .unwrap_or("---")
    }

    /// Score at a rank, zero past the end.
    pub fn score_at(&self, index: usize) -> i32 {
        self.leaderboard.get(index).map(|entry| entry.score).unwrap_or(0)
    }

    /// The board rendered one rank per line: `1. name: score`.
    pub fn render_text(&self) -> String {
        let mut text = String::new();
        for (index, entry) in self.leaderboard.iter().enumerate() {
            text.push_str(&format!("{}. {}: {}\n", index + 1, entry.name, entry.score));
        }
        text
    }
}
