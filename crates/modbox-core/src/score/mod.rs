//! Ranked high score board and score submission.

mod board;
mod entry;
mod record;

pub use board::ScoreBoard;
pub use entry::{Rank, ScoreEntry, truncate_name};
pub use record::record_score;
