use std::thread;
use std::time::Duration;

use tracing::debug;

use super::{Button, InputSource};
use crate::config::polling;
use crate::error::Result;

/// Capability that blocks until the player asks to leave the screen.
pub trait WaitForBack {
    /// Block the calling thread until the back button is pressed.
    fn wait_for_back_press(&mut self) -> Result<()>;
}

/// Busy-waits on an input source with a fixed delay between polls.
///
/// There is no timeout: the wait ends only when the button reads pressed
/// or the input source fails.
#[derive(Debug)]
pub struct PollingWaiter<I> {
    input: I,
    button: Button,
    interval: Duration,
}

impl<I: InputSource> PollingWaiter<I> {
    pub fn new(input: I, button: Button) -> Self {
        Self {
            input,
            button,
            interval: Duration::from_millis(polling::POLL_INTERVAL_MS),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn button(&self) -> Button {
        self.button
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn into_inner(self) -> I {
        self.input
    }
}

impl<I: InputSource> WaitForBack for PollingWaiter<I> {
    fn wait_for_back_press(&mut self) -> Result<()> {
        let mut polls: u64 = 1;
        while !self.input.is_pressed(self.button)? {
            thread::sleep(self.interval);
            polls += 1;
        }
        debug!("{} pressed after {} polls", self.button, polls);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::ScriptedInput;

    #[test]
    fn test_returns_once_pressed() {
        let input = ScriptedInput::pressed_after(Button::B, 3);
        let mut waiter = PollingWaiter::new(input, Button::B).with_interval(Duration::ZERO);

        waiter.wait_for_back_press().unwrap();

        assert_eq!(waiter.input().polls(), 4);
    }

    #[test]
    fn test_already_pressed_returns_immediately() {
        let input = ScriptedInput::pressed_after(Button::B, 0);
        let mut waiter = PollingWaiter::new(input, Button::B);

        waiter.wait_for_back_press().unwrap();

        assert_eq!(waiter.input().polls(), 1);
    }

    #[test]
    fn test_other_buttons_do_not_end_wait() {
        let input = ScriptedInput::new(vec![
            Some(Button::A),
            Some(Button::Start),
            None,
            Some(Button::B),
        ]);
        let mut waiter = PollingWaiter::new(input, Button::B).with_interval(Duration::ZERO);

        waiter.wait_for_back_press().unwrap();

        assert_eq!(waiter.input().polls(), 4);
    }

    #[test]
    fn test_input_error_ends_wait() {
        let input = ScriptedInput::new(vec![None, None]);
        let mut waiter = PollingWaiter::new(input, Button::B).with_interval(Duration::ZERO);

        assert!(waiter.wait_for_back_press().is_err());
    }

    #[test]
    fn test_default_interval() {
        let waiter = PollingWaiter::new(ScriptedInput::new(vec![]), Button::A);
        assert_eq!(waiter.interval(), Duration::from_millis(10));
        assert_eq!(waiter.button(), Button::A);
    }
}
