use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use super::{board, polling, tone};
use crate::audio::Tone;
use crate::error::{Error, Result};
use crate::input::Button;

/// User-tunable settings of the high score screen
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of entries kept on the board
    pub capacity: usize,
    /// Maximum number of characters kept from a player name
    pub max_name_len: usize,
    /// Delay between two reads of the back button
    pub poll_interval_ms: u64,
    /// Button that leaves the high score screen
    pub back_button: Button,
    pub tone: ToneConfig,
}

/// Tone played when a score is saved
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToneConfig {
    pub frequency_hz: u32,
    pub duration_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: board::DEFAULT_CAPACITY,
            max_name_len: board::DEFAULT_MAX_NAME_LEN,
            poll_interval_ms: polling::POLL_INTERVAL_MS,
            back_button: Button::B,
            tone: ToneConfig::default(),
        }
    }
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            frequency_hz: tone::FREQUENCY_HZ,
            duration_ms: tone::DURATION_MS,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse config from TOML content. Missing keys keep their defaults.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidConfig(
                "capacity must be at least 1".to_string(),
            ));
        }
        if self.capacity > board::MAX_CAPACITY {
            return Err(Error::InvalidConfig(format!(
                "capacity must be at most {}, got {}",
                board::MAX_CAPACITY,
                self.capacity
            )));
        }
        if self.max_name_len == 0 {
            return Err(Error::InvalidConfig(
                "max_name_len must be at least 1".to_string(),
            ));
        }
        if self.tone.frequency_hz == 0 {
            return Err(Error::InvalidConfig(
                "tone.frequency_hz must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn tone(&self) -> Tone {
        Tone::new(
            self.tone.frequency_hz,
            Duration::from_millis(self.tone.duration_ms),
        )
    }
}
