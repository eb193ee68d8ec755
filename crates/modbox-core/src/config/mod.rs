//! Configuration and screen constants.
//!
//! This module contains:
//! - `Config` - user-tunable settings loaded from a TOML file
//! - `layout` - screen coordinates and colors of the high score screen
//! - Polling and tone defaults

mod file;
pub mod layout;

pub use file::*;

/// Back-button polling configuration.
pub mod polling {
    /// Delay (in ms) between two reads of the back button.
    pub const POLL_INTERVAL_MS: u64 = 10;
}

/// Submission feedback tone.
pub mod tone {
    /// Frequency of the tone played when a score is saved.
    pub const FREQUENCY_HZ: u32 = 1800;

    /// Duration (in ms) of the tone played when a score is saved.
    pub const DURATION_MS: u64 = 150;
}

/// Board sizing defaults.
pub mod board {
    /// Number of entries kept on the board.
    pub const DEFAULT_CAPACITY: usize = 5;

    /// Largest board the config accepts.
    pub const MAX_CAPACITY: usize = 100;

    /// Maximum number of characters kept from a player name.
    pub const DEFAULT_MAX_NAME_LEN: usize = 10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_constants() {
        assert_eq!(tone::FREQUENCY_HZ, 1800);
        assert_eq!(tone::DURATION_MS, 150);
    }

    #[test]
    fn test_default_capacity_fits_screen() {
        // Last entry line must stay above the footer prompt.
        let last_row = layout::ENTRY_Y
            + (board::DEFAULT_CAPACITY as i32 - 1) * layout::ENTRY_SPACING;
        assert!(last_row < layout::FOOTER_Y);
    }
}
