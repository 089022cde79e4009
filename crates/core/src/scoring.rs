//! Scoring module - layer-clear points and gravity speed-up
//!
//! Score grows by a flat amount per cleared layer. The drop interval shrinks
//! by one step per `SPEEDUP_SCORE_STEP` points, proportionally in between,
//! and is clamped at `MIN_DROP_INTERVAL_MS`.

use crate::types::{
    INITIAL_DROP_INTERVAL_MS, MIN_DROP_INTERVAL_MS, POINTS_PER_LAYER, SPEEDUP_INTERVAL_STEP_MS,
    SPEEDUP_SCORE_STEP,
};

/// Points for clearing `lines` layers in one lock.
pub fn line_clear_points(lines: usize) -> u32 {
    (lines as u32).saturating_mul(POINTS_PER_LAYER)
}

/// Drop interval for a score: `max(100, 1200 - (score / 500) * 100)`.
///
/// The division is exact rather than truncating, so 100 points already
/// shave 20ms off. Computed in u64 to keep huge scores from overflowing.
pub fn drop_interval_for_score(score: u32) -> u32 {
    let reduction = score as u64 * SPEEDUP_INTERVAL_STEP_MS as u64 / SPEEDUP_SCORE_STEP as u64;
    let interval = (INITIAL_DROP_INTERVAL_MS as u64).saturating_sub(reduction);
    interval.max(MIN_DROP_INTERVAL_MS as u64) as u32
}
