//! Score formula
//!
//! Faster clears and fewer shots pay more; an expired timer pays a flat point.

use crate::consts::{EXPIRED_TIME_POINTS, GOLDEN_MULTIPLIER};

/// Points for hitting the target
///
/// `shots_taken` is at least 1 for any real hit; 0 is treated as 1.
pub fn compute_score(time_remaining: f32, shots_taken: u32, golden: bool) -> f32 {
    debug_assert!(shots_taken >= 1, "a hit needs at least one shot");
    let base = if time_remaining > 0.0 {
        time_remaining / shots_taken.max(1) as f32
    } else {
        EXPIRED_TIME_POINTS
    };
    if golden { base * GOLDEN_MULTIPLIER } else { base }
}
