use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

use crate::config::KeyBindings;

/// Frames a held key keeps the paddle moving when the terminal does not
/// report key releases. Bridges the gap before the OS key repeat kicks in.
pub const HOLD_FRAMES: u8 = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Press(Direction),
    Release(Direction),
    Quit,
}

/// Key codes resolved from the configured bindings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Controls {
    pub up: KeyCode,
    pub down: KeyCode,
    pub quit: KeyCode,
}

impl Controls {
    /// Resolve bindings, falling back to the defaults for unparseable keys
    pub fn from_bindings(bindings: &KeyBindings) -> Self {
        let defaults = KeyBindings::default();
        let resolve = |configured: &str, fallback: &str| {
            parse_key(configured).unwrap_or_else(|| {
                warn!(key = configured, "unknown key binding, using {}", fallback);
                parse_key(fallback).unwrap_or(KeyCode::Null)
            })
        };

        Self {
            up: resolve(&bindings.paddle_up, &defaults.paddle_up),
            down: resolve(&bindings.paddle_down, &defaults.paddle_down),
            quit: resolve(&bindings.quit, &defaults.quit),
        }
    }

    /// Translate one key event. Esc and Ctrl-C always quit.
    pub fn translate(&self, key: KeyEvent) -> Option<InputEvent> {
        let is_ctrl_c =
            key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        let pressed = matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat);

        if pressed && (key.code == KeyCode::Esc || is_ctrl_c || same_key(key.code, self.quit)) {
            return Some(InputEvent::Quit);
        }

        let direction = if same_key(key.code, self.up) {
            Direction::Up
        } else if same_key(key.code, self.down) {
            Direction::Down
        } else {
            return None;
        };

        Some(match key.kind {
            KeyEventKind::Release => InputEvent::Release(direction),
            _ => InputEvent::Press(direction),
        })
    }
}

/// Letter keys match regardless of case
fn same_key(a: KeyCode, b: KeyCode) -> bool {
    match (a, b) {
        (KeyCode::Char(x), KeyCode::Char(y)) => x.eq_ignore_ascii_case(&y),
        _ => a == b,
    }
}

/// Parse a key name from the config file ("Up", "Esc", "W", ...)
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let code = match name.to_ascii_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c.to_ascii_lowercase()),
                _ => return None,
            }
        }
    };
    Some(code)
}

/// Drain pending terminal events without blocking
pub fn poll_input(controls: &Controls) -> Result<Vec<InputEvent>, std::io::Error> {
    let mut events = Vec::new();

    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            if let Some(input) = controls.translate(key) {
                events.push(input);
            }
        }
    }

    Ok(events)
}

/// The human paddle's movement intent, one of `{-1, 0, 1}`.
///
/// Key-down sets the direction outright. Key-up returns to neutral, but only
/// when it releases the direction currently in effect.
#[derive(Clone, Debug)]
pub struct Intent {
    value: i8,
    releases_reported: bool,
    hold_frames_left: u8,
}

impl Intent {
    /// `releases_reported` tells whether the terminal sends key-up events
    pub fn new(releases_reported: bool) -> Self {
        Self {
            value: 0,
            releases_reported,
            hold_frames_left: 0,
        }
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Press(Direction::Down) => self.value = 1,
            InputEvent::Press(Direction::Up) => self.value = -1,
            // A release only cancels the direction it matches
            InputEvent::Release(Direction::Down) if self.value > 0 => self.value = 0,
            InputEvent::Release(Direction::Up) if self.value < 0 => self.value = 0,
            InputEvent::Release(_) | InputEvent::Quit => return,
        }

        if let InputEvent::Press(_) = event {
            self.hold_frames_left = HOLD_FRAMES;
        }
    }

    /// Call once per frame after the intent was consumed
    pub fn end_frame(&mut self) {
        if self.releases_reported || self.value == 0 {
            return;
        }

        self.hold_frames_left = self.hold_frames_left.saturating_sub(1);
        if self.hold_frames_left == 0 {
            self.value = 0;
        }
    }

    pub fn value(&self) -> i8 {
        self.value
    }

    pub fn direction(&self) -> Option<Direction> {
        match self.value {
            1 => Some(Direction::Down),
            -1 => Some(Direction::Up),
            _ => None,
        }
    }
}
