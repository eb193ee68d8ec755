//! Console summary of the board with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::config::layout;
use crate::display::format_entry_line;
use crate::score::{Rank, ScoreBoard};

/// Format the board for console display.
///
/// Returns a multi-line string framed by border lines, with the podium
/// places highlighted.
pub fn format_board_console(board: &ScoreBoard) -> String {
    let mut output = String::new();

    let longest = board
        .iter()
        .map(|(rank, entry)| format_entry_line(rank, entry).chars().count())
        .max()
        .unwrap_or(0);
    let border_width = (longest + 4).max(30);
    let border = "━".repeat(border_width);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  {} ({}/{})",
        layout::TITLE.cyan().bold(),
        board.len(),
        board.capacity()
    );
    let _ = writeln!(output, "{}", border_dim);

    if board.is_empty() {
        let _ = writeln!(output, "  {}", layout::PLACEHOLDER.dimmed());
    } else {
        for (rank, entry) in board.iter() {
            let line = format_entry_line(rank, entry);
            let _ = writeln!(output, "  {}", format_colored_line(rank, &line));
        }
    }
    let _ = write!(output, "{}", border_dim);

    output
}

/// Color a board line by place
fn format_colored_line(rank: Rank, line: &str) -> String {
    match rank.ordinal() {
        1 => line.yellow().bold().to_string(),
        2 => line.white().bold().to_string(),
        3 => line.truecolor(205, 127, 50).to_string(),
        _ => line.to_string(),
    }
}
