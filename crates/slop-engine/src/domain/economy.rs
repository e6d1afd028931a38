//! Scoring and cost formulas.

/// Sanity cost of a modifier after the thesis penalty, rounded up.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn effective_sanity_cost(base_cost: u8, sanity_penalty: f64) -> i32 {
    (f64::from(base_cost) * sanity_penalty).ceil() as i32
}

/// Credit granted for a passed vibe check, rounded to the nearest credit.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn credit_gain(base_credit: u32, clout_multiplier: f64) -> u32 {
    (f64::from(base_credit) * clout_multiplier).round().max(0.0) as u32
}

/// The vibe check: does the accumulated score clear the scene's bar?
#[must_use]
pub fn vibe_check(score: u8, required: u8) -> bool {
    score >= required
}
