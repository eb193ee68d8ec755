//! Test doubles for the console collaborators
//!
//! Recording and scripted implementations of `Display`, `InputSource`,
//! `Audio` and `Menu`, so screen logic can be verified without hardware.

use crate::audio::{Audio, Tone};
use crate::display::{Color, Display};
use crate::error::{Error, Result};
use crate::input::{Button, InputSource};
use crate::screen::Menu;

/// One primitive issued to a `RecordingDisplay`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Clear(Color),
    SetColor(Color, Color),
    SetTextScale(u8),
    MoveCursor { x: i32, y: i32 },
    WriteLine(String),
    HorizontalLine { x: i32, y: i32, length: u32, color: Color },
}

/// Display that records every call instead of drawing
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    calls: Vec<DrawCall>,
    fail_after: Option<usize>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `count` calls, then fail every following one
    pub fn failing_after(count: usize) -> Self {
        Self {
            calls: Vec::new(),
            fail_after: Some(count),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Text written so far, one item per `write_line`
    pub fn lines(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::WriteLine(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, call: DrawCall) -> Result<()> {
        if self.fail_after.is_some_and(|limit| self.calls.len() >= limit) {
            return Err(Error::Display(format!("Display unavailable for {:?}", call)));
        }
        self.calls.push(call);
        Ok(())
    }
}

impl Display for RecordingDisplay {
    fn clear(&mut self, background: Color) -> Result<()> {
        self.record(DrawCall::Clear(background))
    }

    fn set_color(&mut self, foreground: Color, background: Color) -> Result<()> {
        self.record(DrawCall::SetColor(foreground, background))
    }

    fn set_text_scale(&mut self, scale: u8) -> Result<()> {
        self.record(DrawCall::SetTextScale(scale))
    }

    fn move_cursor(&mut self, x: i32, y: i32) -> Result<()> {
        self.record(DrawCall::MoveCursor { x, y })
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.record(DrawCall::WriteLine(text.to_string()))
    }

    fn draw_horizontal_line(&mut self, x: i32, y: i32, length: u32, color: Color) -> Result<()> {
        self.record(DrawCall::HorizontalLine {
            x,
            y,
            length,
            color,
        })
    }
}

/// Input that replays a fixed script.
///
/// Each poll consumes one frame; a frame names the button held during it
/// (`None` for no button). Polling past the end of the script is an error.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<Option<Button>>,
    polls: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<Option<Button>>) -> Self {
        Self { frames, polls: 0 }
    }

    /// `idle` empty frames followed by one frame holding `button`
    pub fn pressed_after(button: Button, idle: usize) -> Self {
        let mut frames = vec![None; idle];
        frames.push(Some(button));
        Self::new(frames)
    }

    /// Number of polls served so far
    pub fn polls(&self) -> usize {
        self.polls
    }
}

impl InputSource for ScriptedInput {
    fn is_pressed(&mut self, button: Button) -> Result<bool> {
        let frame = self.frames.get(self.polls).copied().ok_or_else(|| {
            Error::Input(format!("Input script exhausted after {} polls", self.polls))
        })?;
        self.polls += 1;
        Ok(frame == Some(button))
    }
}

/// Audio that records played tones
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    played: Vec<Tone>,
    fail: bool,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Audio whose every tone fails
    pub fn failing() -> Self {
        Self {
            played: Vec::new(),
            fail: true,
        }
    }

    pub fn played(&self) -> &[Tone] {
        &self.played
    }
}

impl Audio for RecordingAudio {
    fn play_tone(&mut self, tone: Tone) -> Result<()> {
        if self.fail {
            return Err(Error::Audio("Buzzer not connected".to_string()));
        }
        self.played.push(tone);
        Ok(())
    }
}

/// Menu that counts how often it was shown
#[derive(Debug, Clone, Default)]
pub struct RecordingMenu {
    shown: usize,
}

impl RecordingMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> usize {
        self.shown
    }
}

impl Menu for RecordingMenu {
    fn show_menu(&mut self) -> Result<()> {
        self.shown += 1;
        Ok(())
    }
}
