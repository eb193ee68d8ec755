use super::Display;
use crate::config::layout;
use crate::error::Result;
use crate::input::Button;
use crate::score::{Rank, ScoreBoard, ScoreEntry};

/// Format one board line: "<place>. <name> - <score>"
pub fn format_entry_line(rank: Rank, entry: &ScoreEntry) -> String {
    format!("{}. {} - {}", rank.ordinal(), entry.name, entry.score)
}

/// Draw the high score screen.
///
/// Draw order: clear, title, two separator lines, one line per entry (or the
/// empty-board placeholder), footer prompt naming `back`.
pub fn render_high_scores<D: Display + ?Sized>(
    display: &mut D,
    board: &ScoreBoard,
    back: Button,
) -> Result<()> {
    display.clear(layout::BACKGROUND)?;

    display.set_color(layout::TITLE_COLOR, layout::BACKGROUND)?;
    display.set_text_scale(layout::TITLE_SCALE)?;
    display.move_cursor(layout::TITLE_X, layout::TITLE_Y)?;
    display.write_line(layout::TITLE)?;

    for y in layout::SEPARATOR_Y {
        display.draw_horizontal_line(
            layout::SEPARATOR_X,
            y,
            layout::SEPARATOR_LENGTH,
            layout::SEPARATOR_COLOR,
        )?;
    }

    display.set_color(layout::ENTRY_COLOR, layout::BACKGROUND)?;
    display.set_text_scale(layout::ENTRY_SCALE)?;

    if board.is_empty() {
        display.move_cursor(layout::PLACEHOLDER_X, layout::PLACEHOLDER_Y)?;
        display.write_line(layout::PLACEHOLDER)?;
    } else {
        for (rank, entry) in board.iter() {
            display.move_cursor(layout::ENTRY_X, layout::entry_y(rank.index()))?;
            display.write_line(&format_entry_line(rank, entry))?;
        }
    }

    display.set_color(layout::FOOTER_COLOR, layout::BACKGROUND)?;
    display.move_cursor(layout::FOOTER_X, layout::FOOTER_Y)?;
    display.write_line(&layout::footer_text(back))?;

    Ok(())
}
