use tracing::{debug, info, warn};

use super::board::ScoreBoard;
use super::entry::Rank;
use crate::audio::{Audio, Tone};

/// Submit a score and notify the player when it made the board.
///
/// Plays `tone` once for an accepted score. Audio failures are logged and
/// never undo or fail the submission.
pub fn record_score<A: Audio + ?Sized>(
    board: &mut ScoreBoard,
    audio: &mut A,
    tone: Tone,
    score: i32,
    name: impl Into<String>,
) -> Option<Rank> {
    let Some(rank) = board.submit(score, name) else {
        debug!(
            "Score {} did not reach the board (lowest kept: {:?})",
            score,
            board.lowest().map(|e| e.score)
        );
        return None;
    };

    if let Err(e) = audio.play_tone(tone) {
        warn!("Failed to play score tone: {}", e);
    }
    info!("High score saved: {} at position {}", score, rank.ordinal());

    Some(rank)
}
