//! Engine tuning knobs.

use std::time::Duration;

/// Timing and economy constants for a session.
///
/// The defaults are the shipped game balance; tests shrink the durations
/// or pin the economy values as needed.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Sanity at session start and after a restart.
    pub initial_sanity: i32,
    /// Below this sanity the manual-breathing deadline is active.
    pub critical_sanity: i32,
    /// The manual-breathing countdown duration.
    pub breath_interval: Duration,
    /// Probability that a modifier application opens an interruption.
    pub ad_trigger_chance: f64,
    /// Social credit cost of the paid interruption skip.
    pub ad_skip_cost: u32,
    /// Delay before the free interruption skip unlocks.
    pub ad_free_skip_delay: Duration,
    /// Length of the non-cancellable title-drop interstitial.
    pub title_drop_duration: Duration,
    /// Offset of a scene's narrative line within its reveal batch.
    pub narrative_lead: Duration,
    /// Offset of the first dialogue line within a scene reveal batch.
    pub dialogue_start: Duration,
    /// Spacing between consecutive dialogue lines.
    pub dialogue_spacing: Duration,
    /// Sanity healed between ordinary scenes.
    pub scene_heal: i32,
    /// Sanity healed by the therapy interstitial.
    pub therapy_heal: i32,
    /// Base credit granted for a passed vibe check, before the thesis
    /// multiplier.
    pub base_credit: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_sanity: 100,
            critical_sanity: 20,
            breath_interval: Duration::from_millis(8000),
            ad_trigger_chance: 0.25,
            ad_skip_cost: 50,
            ad_free_skip_delay: Duration::from_secs(5),
            title_drop_duration: Duration::from_millis(4500),
            narrative_lead: Duration::from_millis(500),
            dialogue_start: Duration::from_millis(2000),
            dialogue_spacing: Duration::from_millis(1500),
            scene_heal: 20,
            therapy_heal: 50,
            base_credit: 100,
        }
    }
}
