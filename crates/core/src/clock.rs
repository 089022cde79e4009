//! Frame clock - turns frame timestamps into elapsed milliseconds
//!
//! The scheduler hands the engine a monotonic timestamp every frame. After a
//! pause (or before the first frame) the clock has no valid baseline, and the
//! next timestamp becomes the baseline instead of producing a large delta.

/// Delta tracker for frame timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameClock {
    last_ms: Option<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous frame; 0 when (re)establishing a baseline.
    ///
    /// Timestamps that go backwards yield 0 and become the new baseline.
    pub fn tick(&mut self, now_ms: u64) -> u32 {
        let dt = match self.last_ms {
            Some(last) => now_ms.saturating_sub(last).min(u32::MAX as u64) as u32,
            None => 0,
        };
        self.last_ms = Some(now_ms);
        dt
    }

    /// Use `now_ms` as the new baseline.
    pub fn rebase(&mut self, now_ms: u64) {
        self.last_ms = Some(now_ms);
    }

    /// Forget the baseline; the next `tick` returns 0.
    pub fn invalidate(&mut self) {
        self.last_ms = None;
    }

    pub fn has_baseline(&self) -> bool {
        self.last_ms.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(5_000), 0);
        assert_eq!(clock.tick(5_016), 16);
    }

    #[test]
    fn test_invalidate_swallows_gap() {
        let mut clock = FrameClock::new();
        clock.tick(0);
        clock.invalidate();
        assert!(!clock.has_baseline());
        assert_eq!(clock.tick(60_000), 0);
        assert_eq!(clock.tick(60_020), 20);
    }

    #[test]
    fn test_rebase() {
        let mut clock = FrameClock::new();
        clock.tick(100);
        clock.rebase(900);
        assert_eq!(clock.tick(910), 10);
    }

    #[test]
    fn test_backwards_time_is_zero() {
        let mut clock = FrameClock::new();
        clock.tick(1_000);
        assert_eq!(clock.tick(500), 0);
        assert_eq!(clock.tick(510), 10);
    }
}
