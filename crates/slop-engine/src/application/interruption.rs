//! The interruption gate (pop-up ad).
//!
//! While an interruption is visible every other affordance is rejected
//! and the deadline timer is suspended; the engine's open/close paths
//! own that coupling. This struct tracks what is showing and when the
//! free skip unlocks.

use std::time::Duration;

use slop_content::AdSpot;
use tokio::time::Instant;

/// The currently visible interruption.
#[derive(Debug, Clone)]
pub(crate) struct ActiveAd {
    pub spot: AdSpot,
    pub free_skip_at: Instant,
}

/// Gate state plus the generation used to tag the free-skip unlock
/// timer.
#[derive(Debug, Default)]
pub(crate) struct AdGate {
    generation: u64,
    active: Option<ActiveAd>,
}

impl AdGate {
    /// Opens the gate with `spot`. Returns the generation for the
    /// unlock notification timer.
    pub fn open(&mut self, spot: AdSpot, now: Instant, free_skip_delay: Duration) -> u64 {
        self.generation += 1;
        self.active = Some(ActiveAd {
            spot,
            free_skip_at: now + free_skip_delay,
        });
        self.generation
    }

    /// Closes the gate. Safe to call when nothing is showing.
    pub fn close(&mut self) {
        self.generation += 1;
        self.active = None;
    }

    pub fn is_visible(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ActiveAd> {
        self.active.as_ref()
    }

    /// Whether the free skip is available, measured against wall-clock
    /// time independently of the deadline timer.
    pub fn free_skip_ready(&self, now: Instant) -> bool {
        self.active
            .as_ref()
            .is_some_and(|ad| now >= ad.free_skip_at)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
