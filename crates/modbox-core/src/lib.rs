pub mod audio;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod input;
pub mod mock;
pub mod score;
pub mod screen;

pub use audio::{Audio, Silent, Tone};
pub use config::Config;
pub use display::{Color, Display, format_entry_line, render_high_scores};
pub use error::{Error, Result};
pub use export::{BoardSnapshot, SnapshotRow, format_board_console};
pub use input::{ActiveLow, Button, InputSource, PinLevels, PollingWaiter, WaitForBack};
pub use score::{Rank, ScoreBoard, ScoreEntry, record_score, truncate_name};
pub use screen::{Menu, Navigation, Screen, show_high_scores};
