//! Screen layout of the high score view.
//!
//! Coordinates are in display pixels on a 240x240 panel.

use crate::display::Color;
use crate::input::Button;

pub const BACKGROUND: Color = Color::Black;

pub const TITLE: &str = "HIGH SCORES";
pub const TITLE_X: i32 = 40;
pub const TITLE_Y: i32 = 20;
pub const TITLE_SCALE: u8 = 2;
pub const TITLE_COLOR: Color = Color::Cyan;

/// Two separator lines are drawn under the title, two pixels apart.
pub const SEPARATOR_X: i32 = 20;
pub const SEPARATOR_Y: [i32; 2] = [50, 52];
pub const SEPARATOR_LENGTH: u32 = 200;
pub const SEPARATOR_COLOR: Color = Color::White;

pub const ENTRY_X: i32 = 20;
pub const ENTRY_Y: i32 = 70;
pub const ENTRY_SPACING: i32 = 20;
pub const ENTRY_SCALE: u8 = 1;
pub const ENTRY_COLOR: Color = Color::White;

pub const PLACEHOLDER: &str = "No scores yet!";
pub const PLACEHOLDER_X: i32 = 50;
pub const PLACEHOLDER_Y: i32 = 100;

pub const FOOTER_X: i32 = 40;
pub const FOOTER_Y: i32 = 200;
pub const FOOTER_COLOR: Color = Color::Yellow;

/// Footer prompt naming the button that leaves the screen.
pub fn footer_text(back: Button) -> String {
    format!("Press {} to return", back)
}

/// Y coordinate of the entry line at `index`.
pub fn entry_y(index: usize) -> i32 {
    ENTRY_Y + index as i32 * ENTRY_SPACING
}
