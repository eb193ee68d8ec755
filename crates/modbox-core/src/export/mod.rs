//! Export formats for the score board.

mod console;

pub use console::format_board_console;

use serde::Serialize;

use crate::error::Result;
use crate::score::ScoreBoard;

/// Serializable copy of the board at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub capacity: usize,
    pub entries: Vec<SnapshotRow>,
}

/// One ranked row of a snapshot. `rank` is one-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotRow {
    pub rank: usize,
    pub name: String,
    pub score: i32,
}

impl BoardSnapshot {
    pub fn from_board(board: &ScoreBoard) -> Self {
        Self {
            capacity: board.capacity(),
            entries: board
                .iter()
                .map(|(rank, entry)| SnapshotRow {
                    rank: rank.ordinal(),
                    name: entry.name.clone(),
                    score: entry.score,
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
