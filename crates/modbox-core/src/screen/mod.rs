//! Screen navigation state and the high score screen flow.

mod high_scores;

pub use high_scores::show_high_scores;

use strum::Display;
use tracing::debug;

use crate::error::Result;

/// Screens of the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Screen {
    #[default]
    Menu,
    Playing,
    HighScores,
}

/// Tracks which screen is active.
///
/// Owned by the caller and passed to each screen routine.
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    current: Screen,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn go_to(&mut self, screen: Screen) {
        if self.current != screen {
            debug!("Screen changed: {} -> {}", self.current, screen);
        }
        self.current = screen;
    }
}

/// Collaborator that draws the main menu.
pub trait Menu {
    fn show_menu(&mut self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_starts_on_menu() {
        let nav = Navigation::new();
        assert_eq!(nav.current(), Screen::Menu);
    }

    #[test]
    fn test_go_to() {
        let mut nav = Navigation::new();
        nav.go_to(Screen::HighScores);
        assert_eq!(nav.current(), Screen::HighScores);
        nav.go_to(Screen::Menu);
        assert_eq!(nav.current(), Screen::Menu);
    }

    #[test]
    fn test_screen_names() {
        assert_eq!(Screen::HighScores.to_string(), "high_scores");
        assert_eq!(Screen::Menu.to_string(), "menu");
    }
}
