//! Button input for the score screens.
//!
//! This module provides the button set, the `InputSource` polling trait,
//! an adapter for active-low hardware pins, and the blocking wait used to
//! leave a screen.

mod wait;

pub use wait::{PollingWaiter, WaitForBack};

use serde::Deserialize;
use strum::{Display, EnumString};

use crate::error::Result;

/// Console buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Button {
    A,
    B,
    Up,
    Down,
    Left,
    Right,
    Start,
}

/// Trait for polling button state.
pub trait InputSource {
    /// Whether `button` is held down right now.
    fn is_pressed(&mut self, button: Button) -> Result<bool>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn is_pressed(&mut self, button: Button) -> Result<bool> {
        (**self).is_pressed(button)
    }
}

/// Trait for reading raw digital pin levels wired to buttons.
pub trait PinLevels {
    /// Whether the pin wired to `button` reads high.
    fn is_high(&mut self, button: Button) -> Result<bool>;
}

/// Buttons wired with pull-ups: a pressed button pulls its pin low.
#[derive(Debug, Clone, Default)]
pub struct ActiveLow<P> {
    pins: P,
}

impl<P: PinLevels> ActiveLow<P> {
    pub fn new(pins: P) -> Self {
        Self { pins }
    }
}

impl<P: PinLevels> InputSource for ActiveLow<P> {
    fn is_pressed(&mut self, button: Button) -> Result<bool> {
        Ok(!self.pins.is_high(button)?)
    }
}
