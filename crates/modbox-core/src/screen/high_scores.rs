use tracing::info;

use super::{Menu, Navigation, Screen};
use crate::display::{Display, render_high_scores};
use crate::error::Result;
use crate::input::{Button, WaitForBack};
use crate::score::ScoreBoard;

/// Show the board, block until the back button, then return to the menu.
///
/// The wait has no timeout. On return the navigation state is
/// `Screen::Menu` and the menu has been drawn.
pub fn show_high_scores<D, W, M>(
    board: &ScoreBoard,
    display: &mut D,
    waiter: &mut W,
    back: Button,
    navigation: &mut Navigation,
    menu: &mut M,
) -> Result<()>
where
    D: Display + ?Sized,
    W: WaitForBack + ?Sized,
    M: Menu + ?Sized,
{
    navigation.go_to(Screen::HighScores);
    render_high_scores(display, board, back)?;
    info!("Showing {} high scores", board.len());

    waiter.wait_for_back_press()?;

    navigation.go_to(Screen::Menu);
    menu.show_menu()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PollingWaiter;
    use crate::mock::{RecordingDisplay, RecordingMenu, ScriptedInput};
    use std::time::Duration;

    #[test]
    fn test_flow_returns_to_menu() {
        let mut board = ScoreBoard::new(3);
        board.submit(5, "A");
        let mut display = RecordingDisplay::new();
        let mut waiter = PollingWaiter::new(ScriptedInput::pressed_after(Button::B, 2), Button::B)
            .with_interval(Duration::ZERO);
        let mut navigation = Navigation::new();
        let mut menu = RecordingMenu::new();

        show_high_scores(
            &board,
            &mut display,
            &mut waiter,
            Button::B,
            &mut navigation,
            &mut menu,
        )
        .unwrap();

        assert_eq!(navigation.current(), Screen::Menu);
        assert_eq!(menu.shown(), 1);
        assert_eq!(display.lines()[1], "1. A - 5");
    }

    #[test]
    fn test_failed_wait_stays_on_screen() {
        let board = ScoreBoard::new(3);
        let mut display = RecordingDisplay::new();
        let mut waiter = PollingWaiter::new(ScriptedInput::new(vec![None]), Button::B)
            .with_interval(Duration::ZERO);
        let mut navigation = Navigation::new();
        let mut menu = RecordingMenu::new();

        let result = show_high_scores(
            &board,
            &mut display,
            &mut waiter,
            Button::B,
            &mut navigation,
            &mut menu,
        );

        assert!(result.is_err());
        assert_eq!(navigation.current(), Screen::HighScores);
        assert_eq!(menu.shown(), 0);
    }
}
