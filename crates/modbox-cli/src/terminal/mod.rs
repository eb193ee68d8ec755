//! Terminal implementations of the console collaborators.
//!
//! The high score screen is laid out in panel pixels; here each 6x8 pixel
//! glyph cell of the panel font maps to one terminal cell.

mod audio;
mod display;
mod input;
mod menu;

pub use audio::TerminalBell;
pub use display::TerminalDisplay;
pub use input::TerminalInput;
pub use menu::TerminalMenu;

use std::io::{self, Write};

use crossterm::style::{Attribute, ResetColor, SetAttribute};
use crossterm::{QueueableCommand, terminal};

/// Width in pixels of one glyph cell at text scale 1
pub const CELL_WIDTH: i32 = 6;
/// Height in pixels of one glyph cell at text scale 1
pub const CELL_HEIGHT: i32 = 8;

/// Map a panel pixel coordinate to a terminal cell (column, row)
pub fn pixel_to_cell(x: i32, y: i32) -> (u16, u16) {
    let column = (x.max(0) / CELL_WIDTH).min(u16::MAX as i32) as u16;
    let row = (y.max(0) / CELL_HEIGHT).min(u16::MAX as i32) as u16;
    (column, row)
}

/// Restore default colors and attributes so the shell is left as found
fn reset_style<W: Write>(out: &mut W) -> io::Result<()> {
    out.queue(ResetColor)?
        .queue(SetAttribute(Attribute::Reset))?
        .flush()
}

/// Keeps the terminal in raw mode while alive
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = reset_style(&mut stdout);
        let _ = terminal::disable_raw_mode();
        let _ = writeln!(stdout);
    }
}
