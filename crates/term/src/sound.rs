//! Terminal bell as a sound backend.
//!
//! A terminal has exactly one sound, so only the events worth interrupting
//! the player for ring it: a cleared layer and game over. Everything else,
//! unknown names included, is silently ignored.

use std::io::{self, Write};

use crate::core::SoundEffects;
use crate::types::SoundEvent;

const BEL: &[u8] = b"\x07";

/// `SoundEffects` that rings the terminal bell.
pub struct BellSound<W: Write = io::Stdout> {
    out: W,
    muted: bool,
    rings: u32,
}

impl BellSound<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for BellSound<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> BellSound<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            muted: false,
            rings: 0,
        }
    }

    /// Bells rung so far.
    pub fn rings(&self) -> u32 {
        self.rings
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn rings_for(name: &str) -> bool {
        matches!(
            SoundEvent::from_str(name),
            Some(SoundEvent::Line | SoundEvent::GameOver)
        )
    }
}

impl<W: Write> SoundEffects for BellSound<W> {
    fn play(&mut self, name: &str) {
        if self.muted || !Self::rings_for(name) {
            return;
        }
        // Fire-and-forget: a failed bell must not stop the game.
        if self.out.write_all(BEL).and_then(|_| self.out.flush()).is_ok() {
            self.rings += 1;
        }
    }

    fn stop(&mut self, _name: &str) {}

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}
