//! Dissimilarity → chemistry score.
//!
//! The base score is a deterministic, monotone function of the average
//! normalized landmark distance. A bounded random bonus is added on top; the
//! RNG is always supplied by the caller.

use rand::Rng;

use crate::config::MAX_SCORE;

/// `clamp(100 - avg_diff * sensitivity, 0, 100)`. A NaN product scores 0.
pub fn base_score(avg_diff: f32, sensitivity: f32) -> f32 {
    let raw = 100.0 - avg_diff * sensitivity;
    if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, 100.0)
    }
}

/// `floor(min(99, base_score + bonus))`, never below 0. A NaN sum scores 0.
pub fn final_score(base_score: f32, bonus: f32) -> u8 {
    let sum = base_score + bonus;
    if sum.is_nan() || sum <= 0.0 {
        return 0;
    }
    sum.min(MAX_SCORE as f32).floor() as u8
}

/// Uniform draw from `[min, max]`. Collapses to `min` for an empty range and
/// to 0 when the bounds or their span are not finite.
pub fn draw_bonus<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if !min.is_finite() || !max.is_finite() || !(max - min).is_finite() {
        0.0
    } else if min >= max {
        min
    } else {
        rng.gen_range(min..=max)
    }
}
