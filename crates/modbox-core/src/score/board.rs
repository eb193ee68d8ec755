use super::entry::{Rank, ScoreEntry};

/// Fixed-capacity board of the best scores, highest first.
///
/// ## Ordering Rules
///
/// - Entries are kept in non-increasing score order.
/// - A new score is placed before the first entry it strictly beats, so
///   equal scores keep their submission order.
/// - When the board is full, an accepted score evicts the lowest entry.
///   A score that would land past the last slot is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    entries: Vec<ScoreEntry>,
    capacity: usize,
}

impl ScoreBoard {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Insert a score and return the rank it reached.
    ///
    /// Returns `None` without touching the board when the score does not
    /// qualify for a slot.
    pub fn submit(&mut self, score: i32, name: impl Into<String>) -> Option<Rank> {
        let insert_pos = self.insert_position(score);
        if insert_pos >= self.capacity {
            return None;
        }

        if self.is_full() {
            self.entries.pop();
        }
        self.entries.insert(insert_pos, ScoreEntry::new(score, name));

        Some(Rank::new(insert_pos))
    }

    /// Position a score would take: before the first entry it strictly beats
    fn insert_position(&self, score: i32) -> usize {
        self.entries
            .iter()
            .position(|entry| score > entry.score)
            .unwrap_or(self.entries.len())
    }

    /// Rank a score would reach if submitted now, without inserting it
    pub fn rank_for(&self, score: i32) -> Option<Rank> {
        let insert_pos = self.insert_position(score);
        (insert_pos < self.capacity).then(|| Rank::new(insert_pos))
    }

    pub fn get(&self, index: usize) -> Option<&ScoreEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rank, &ScoreEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (Rank::new(index), entry))
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Lowest score still on the board
    pub fn lowest(&self) -> Option<&ScoreEntry> {
        self.entries.last()
    }
}
