use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// A single score on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreEntry {
    pub score: i32,
    pub name: String,
}

impl ScoreEntry {
    pub fn new(score: i32, name: impl Into<String>) -> Self {
        Self {
            score,
            name: name.into(),
        }
    }
}

/// Parses `NAME=SCORE`. The name is everything before the last `=`.
impl FromStr for ScoreEntry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, score) = s
            .rsplit_once('=')
            .ok_or_else(|| Error::InvalidEntry(format!("expected NAME=SCORE, got '{}'", s)))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidEntry(format!("missing name in '{}'", s)));
        }
        let score = score
            .trim()
            .parse::<i32>()
            .map_err(|e| Error::InvalidEntry(format!("bad score in '{}': {}", s, e)))?;
        Ok(Self::new(score, name))
    }
}

/// Zero-based position of an entry on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(usize);

impl Rank {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based index into the board
    pub fn index(self) -> usize {
        self.0
    }

    /// One-based place as shown to the player ("1." for the top score)
    pub fn ordinal(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ordinal())
    }
}

/// Keep at most `max_chars` characters of a player name.
///
/// Counts characters rather than bytes so multi-byte names are never split.
pub fn truncate_name(name: &str, max_chars: usize) -> &str {
    match name.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &name[..byte_index],
        None => name,
    }
}
