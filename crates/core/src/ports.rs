//! Ports - narrow interfaces to the outside world
//!
//! The engine only ever talks to sound, storage and rendering through these
//! traits. Implementations live in the frontend crates; the no-op and
//! in-memory ones here keep the engine usable headless and in tests.

use crate::snapshot::GameSnapshot;

/// Fire-and-forget sound triggers.
///
/// Implementations ignore unknown names, and ignore `play` while muted.
pub trait SoundEffects {
    fn play(&mut self, name: &str);
    fn stop(&mut self, name: &str);
    fn set_muted(&mut self, muted: bool);
    fn is_muted(&self) -> bool;
}

/// High-score storage: one non-negative integer.
pub trait Persistence {
    /// Stored high score, 0 when nothing has been saved yet.
    fn load(&mut self) -> u32;
    fn save(&mut self, high_score: u32);
}

/// Consumer of per-frame snapshots. Never receives engine references.
pub trait Renderer {
    type Error;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<(), Self::Error>;
}

/// Sound port that only tracks the mute flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSound {
    muted: bool,
}

impl SoundEffects for NoSound {
    fn play(&mut self, _name: &str) {}

    fn stop(&mut self, _name: &str) {}

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}

/// In-memory high score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStore {
    pub high_score: u32,
}

impl MemoryStore {
    pub fn new(high_score: u32) -> Self {
        Self { high_score }
    }
}

impl Persistence for MemoryStore {
    fn load(&mut self) -> u32 {
        self.high_score
    }

    fn save(&mut self, high_score: u32) {
        self.high_score = high_score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load(), 0);
        store.save(700);
        assert_eq!(store.load(), 700);
    }

    #[test]
    fn test_no_sound_tracks_mute() {
        let mut sound = NoSound::default();
        assert!(!sound.is_muted());
        sound.set_muted(true);
        sound.play("line");
        assert!(sound.is_muted());
    }
}
