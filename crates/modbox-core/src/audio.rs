//! Audio feedback abstraction.

use std::time::Duration;

use crate::config::tone;
use crate::error::Result;

/// A single beep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration: Duration,
}

impl Tone {
    pub const fn new(frequency_hz: u32, duration: Duration) -> Self {
        Self {
            frequency_hz,
            duration,
        }
    }

    /// Tone played when a high score is saved
    pub const fn score_saved() -> Self {
        Self::new(
            tone::FREQUENCY_HZ,
            Duration::from_millis(tone::DURATION_MS),
        )
    }
}

impl Default for Tone {
    fn default() -> Self {
        Self::score_saved()
    }
}

/// Trait for devices that can play a tone.
pub trait Audio {
    fn play_tone(&mut self, tone: Tone) -> Result<()>;
}

/// Audio sink that plays nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Audio for Silent {
    fn play_tone(&mut self, _tone: Tone) -> Result<()> {
        Ok(())
    }
}
