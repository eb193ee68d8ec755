//! Submit scores and show the resulting board.

use anyhow::Result;
use modbox_core::{
    Audio, BoardSnapshot, Config, Navigation, PollingWaiter, ScoreBoard, ScoreEntry, format_board_console,
    record_score, show_high_scores, truncate_name,
};
use tracing::{info, warn};

use crate::cli::OutputFormat;
use crate::terminal::{RawModeGuard, TerminalBell, TerminalDisplay, TerminalInput, TerminalMenu};

/// Run one session: submit `entries` in order, then show the board
pub fn run(config: &Config, entries: &[ScoreEntry], output: OutputFormat) -> Result<()> {
    let board = submit_all(config, entries, &mut TerminalBell::new());

    match output {
        OutputFormat::Json => {
            println!("{}", BoardSnapshot::from_board(&board).to_json()?);
        }
        OutputFormat::Console => {
            println!("{}", format_board_console(&board));
        }
        OutputFormat::Screen => show_screen(config, &board)?,
    }

    Ok(())
}

fn submit_all<A: Audio>(config: &Config, entries: &[ScoreEntry], audio: &mut A) -> ScoreBoard {
    let mut board = ScoreBoard::new(config.capacity);

    for entry in entries {
        let name = board_name(&entry.name, config.max_name_len);
        record_score(&mut board, audio, config.tone(), entry.score, name);
    }

    info!(
        "Submitted {} scores, {} on the board",
        entries.len(),
        board.len()
    );
    board
}

/// Name as stored on the board, cut to `max_chars` characters
fn board_name(name: &str, max_chars: usize) -> &str {
    let kept = truncate_name(name, max_chars);
    if kept.len() < name.len() {
        warn!("Name '{}' shortened to '{}'", name, kept);
    }
    kept
}

fn show_screen(config: &Config, board: &ScoreBoard) -> Result<()> {
    let _raw_mode = RawModeGuard::enable()?;

    let mut display = TerminalDisplay::stdout();
    let mut waiter = PollingWaiter::new(TerminalInput::new(), config.back_button)
        .with_interval(config.poll_interval());
    let mut navigation = Navigation::new();
    let mut menu = TerminalMenu::new();

    show_high_scores(
        board,
        &mut display,
        &mut waiter,
        config.back_button,
        &mut navigation,
        &mut menu,
    )?;

    Ok(())
}
