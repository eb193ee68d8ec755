use std::io::{self, Write};

use modbox_core::{Audio, Error, Tone};
use tracing::debug;

/// Rings the terminal bell in place of a buzzer.
///
/// Terminals cannot pick a pitch, so only the fact that a tone played is kept.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl TerminalBell {
    pub fn new() -> Self {
        Self
    }
}

impl Audio for TerminalBell {
    fn play_tone(&mut self, tone: Tone) -> modbox_core::Result<()> {
        debug!(
            "Tone {} Hz for {} ms",
            tone.frequency_hz,
            tone.duration.as_millis()
        );
        let mut stderr = io::stderr();
        stderr
            .write_all(b"\x07")
            .and_then(|_| stderr.flush())
            .map_err(|e| Error::Audio(e.to_string()))
    }
}
