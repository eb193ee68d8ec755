//! CLI argument definitions for modbox.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use modbox_core::ScoreEntry;

#[derive(Parser)]
#[command(name = "modbox")]
#[command(about = "modbox high score board", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "modbox.toml", env = "MODBOX_CONFIG")]
    pub config: PathBuf,

    /// Number of entries kept on the board (overrides the config file)
    #[arg(long)]
    pub capacity: Option<usize>,

    /// How to show the board after submitting
    #[arg(short, long, value_enum, default_value = "screen")]
    pub output: OutputFormat,

    /// Scores to submit, in order, as NAME=SCORE
    #[arg(value_name = "ENTRY")]
    pub entries: Vec<ScoreEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Interactive high score screen, leave with the back key
    Screen,
    /// Colored summary on stdout
    Console,
    /// JSON snapshot on stdout
    Json,
}
