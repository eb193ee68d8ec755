use std::io::Stdout;

use modbox_core::config::layout;
use modbox_core::{Display, Menu};

use super::TerminalDisplay;

const MENU_TITLE: &str = "MODBOX";
const MENU_ITEMS: [&str; 3] = ["Play", "High scores", "Settings"];

/// Main menu drawn on its own handle to stdout
pub struct TerminalMenu {
    display: TerminalDisplay<Stdout>,
}

impl TerminalMenu {
    pub fn new() -> Self {
        Self {
            display: TerminalDisplay::stdout(),
        }
    }
}

impl Default for TerminalMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu for TerminalMenu {
    fn show_menu(&mut self) -> modbox_core::Result<()> {
        draw_menu(&mut self.display)
    }
}

fn draw_menu<D: Display>(display: &mut D) -> modbox_core::Result<()> {
    display.clear(layout::BACKGROUND)?;

    display.set_color(layout::TITLE_COLOR, layout::BACKGROUND)?;
    display.set_text_scale(layout::TITLE_SCALE)?;
    display.move_cursor(layout::TITLE_X, layout::TITLE_Y)?;
    display.write_line(MENU_TITLE)?;

    display.set_color(layout::ENTRY_COLOR, layout::BACKGROUND)?;
    display.set_text_scale(layout::ENTRY_SCALE)?;
    for (index, item) in MENU_ITEMS.iter().enumerate() {
        display.move_cursor(layout::ENTRY_X, layout::entry_y(index))?;
        display.write_line(&format!("{}. {}", index + 1, item))?;
    }

    Ok(())
}
