use std::io::{self, Stdout, Write};

use crossterm::cursor::{MoveTo, MoveToNextLine};
use crossterm::style::{
    Attribute, Color as TermColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{ExecutableCommand, QueueableCommand};
use modbox_core::{Color, Display, Error};

use super::{CELL_WIDTH, pixel_to_cell};

/// Draws the panel primitives with crossterm escape sequences.
///
/// Text scale 2 and above is shown bold, since a terminal cannot
/// enlarge single glyphs.
pub struct TerminalDisplay<W: Write> {
    out: W,
    scale: u8,
}

impl TerminalDisplay<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out, scale: 1 }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Black => TermColor::Black,
        Color::White => TermColor::White,
        Color::Red => TermColor::Red,
        Color::Green => TermColor::Green,
        Color::Blue => TermColor::Blue,
        Color::Cyan => TermColor::Cyan,
        Color::Magenta => TermColor::Magenta,
        Color::Yellow => TermColor::Yellow,
    }
}

fn display_error(e: io::Error) -> Error {
    Error::Display(e.to_string())
}

impl<W: Write> Display for TerminalDisplay<W> {
    fn clear(&mut self, background: Color) -> modbox_core::Result<()> {
        self.out
            .queue(SetBackgroundColor(term_color(background)))
            .and_then(|out| out.queue(Clear(ClearType::All)))
            .and_then(|out| out.execute(MoveTo(0, 0)))
            .map_err(display_error)?;
        Ok(())
    }

    fn set_color(&mut self, foreground: Color, background: Color) -> modbox_core::Result<()> {
        self.out
            .queue(SetForegroundColor(term_color(foreground)))
            .and_then(|out| out.queue(SetBackgroundColor(term_color(background))))
            .map_err(display_error)?;
        Ok(())
    }

    fn set_text_scale(&mut self, scale: u8) -> modbox_core::Result<()> {
        self.scale = scale.max(1);
        Ok(())
    }

    fn move_cursor(&mut self, x: i32, y: i32) -> modbox_core::Result<()> {
        let (column, row) = pixel_to_cell(x, y);
        self.out.queue(MoveTo(column, row)).map_err(display_error)?;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> modbox_core::Result<()> {
        if self.scale > 1 {
            self.out
                .queue(SetAttribute(Attribute::Bold))
                .and_then(|out| out.queue(Print(text)))
                .and_then(|out| out.queue(SetAttribute(Attribute::NormalIntensity)))
                .map_err(display_error)?;
        } else {
            self.out.queue(Print(text)).map_err(display_error)?;
        }
        self.out.execute(MoveToNextLine(1)).map_err(display_error)?;
        Ok(())
    }

    fn draw_horizontal_line(
        &mut self,
        x: i32,
        y: i32,
        length: u32,
        color: Color,
    ) -> modbox_core::Result<()> {
        let (column, row) = pixel_to_cell(x, y);
        let cells = (length as usize).div_ceil(CELL_WIDTH as usize);
        self.out
            .queue(MoveTo(column, row))
            .and_then(|out| out.queue(SetForegroundColor(term_color(color))))
            .and_then(|out| out.execute(Print("━".repeat(cells))))
            .map_err(display_error)?;
        Ok(())
    }
}
