//! Scoring module - score, level and gravity pacing rules
//!
//! Every removed cell is worth one point, so a single full row scores 10.
//! The level advances by one whenever a lock leaves the score at or above
//! `LEVEL_SCORE_STEP * level`; a lock never advances more than one level even
//! if it crosses several thresholds.

use crate::types::{GRAVITY_TICKS, LEVEL_SCORE_STEP};

/// Points awarded for removing `removed` cells
pub fn cleared_points(removed: usize) -> u32 {
    removed as u32
}

/// Level after a lock that left the score at `score`
pub fn next_level(level: u32, score: u32) -> u32 {
    if score >= LEVEL_SCORE_STEP.saturating_mul(level) {
        level + 1
    } else {
        level
    }
}

/// Number of ticks between two gravity steps at `level`
///
/// Never zero, so levels above `GRAVITY_TICKS` fall on every tick.
pub fn gravity_period(level: u32) -> u64 {
    (GRAVITY_TICKS / level.max(1) as u64).max(1)
}

/// Whether tick `count` moves the active piece down at `level`
pub fn is_gravity_tick(count: u64, level: u32) -> bool {
    count % gravity_period(level) == 0
}
