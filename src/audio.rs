//! Fire-and-forget sound cues.
//!
//! A terminal has one sound, the bell, so cues are told apart by how many
//! times it rings.

use std::io::{self, Write};

use tracing::warn;

use crate::game::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Paddle or wall hit
    Hit,
    /// The human won the round
    Win,
    /// The human lost the round
    Lose,
}

impl Cue {
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::HitSound => Some(Cue::Hit),
            GameEvent::WinSound => Some(Cue::Win),
            GameEvent::LoseSound => Some(Cue::Lose),
            GameEvent::PointScored(_) => None,
        }
    }

    fn bells(self) -> usize {
        match self {
            Cue::Hit => 1,
            Cue::Win => 2,
            Cue::Lose => 3,
        }
    }
}

pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Rings the terminal bell on `out`
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: Cue) {
        let bells = "\x07".repeat(cue.bells());
        if let Err(e) = self
            .out
            .write_all(bells.as_bytes())
            .and_then(|_| self.out.flush())
        {
            warn!(error = %e, ?cue, "failed to ring terminal bell");
        }
    }
}

pub struct Muted;

impl AudioSink for Muted {
    fn play(&mut self, _cue: Cue) {}
}

/// Bell on stdout when `sound` is enabled, silence otherwise
pub fn create_sink(sound: bool) -> Box<dyn AudioSink> {
    if sound {
        Box::new(TerminalBell::new(io::stdout()))
    } else {
        Box::new(Muted)
    }
}
