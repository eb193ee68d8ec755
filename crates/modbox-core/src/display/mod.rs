//! Display abstraction for the score screens.
//!
//! The `Display` trait mirrors the primitives of a small text-capable panel,
//! so the high score screen can be drawn on hardware, in a terminal, or into
//! a recording double in tests.

mod render;

pub use render::{format_entry_line, render_high_scores};

use strum::{Display as StrumDisplay, EnumIter};

use crate::error::Result;

/// Panel colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    Black,
    White,
    Red,
    Green,
    Blue,
    Cyan,
    Magenta,
    Yellow,
}

impl Color {
    /// 16-bit 5-6-5 value used by SPI TFT panels
    pub fn to_rgb565(self) -> u16 {
        match self {
            Self::Black => 0x0000,
            Self::White => 0xFFFF,
            Self::Red => 0xF800,
            Self::Green => 0x07E0,
            Self::Blue => 0x001F,
            Self::Cyan => 0x07FF,
            Self::Magenta => 0xF81F,
            Self::Yellow => 0xFFE0,
        }
    }
}

/// Trait for text-capable display surfaces.
///
/// Coordinates are in panel pixels with the origin at the top-left corner.
pub trait Display {
    /// Fill the whole screen with the background color.
    fn clear(&mut self, background: Color) -> Result<()>;

    /// Set the foreground and background color of subsequent text.
    fn set_color(&mut self, foreground: Color, background: Color) -> Result<()>;

    /// Set the text magnification (1 = native font size).
    fn set_text_scale(&mut self, scale: u8) -> Result<()>;

    fn move_cursor(&mut self, x: i32, y: i32) -> Result<()>;

    /// Write text at the cursor and move the cursor to the next line.
    fn write_line(&mut self, text: &str) -> Result<()>;

    fn draw_horizontal_line(&mut self, x: i32, y: i32, length: u32, color: Color) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_rgb565_values_are_distinct() {
        let mut values: Vec<u16> = Color::iter().map(Color::to_rgb565).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), Color::iter().count());
    }

    #[test]
    fn test_color_names() {
        assert_eq!(Color::Cyan.to_string(), "cyan");
        assert_eq!(Color::Yellow.to_string(), "yellow");
    }
}
