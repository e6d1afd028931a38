//! Test RNGs — deterministic `DeterministicRng` implementations.

use std::collections::VecDeque;

use slop_core::rng::DeterministicRng;

/// An RNG whose `next_f64` rolls never trigger the 25% interruption
/// chance. Range requests return `min`. The default for engine tests that
/// are not about the ad gate.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAdRng;

impl DeterministicRng for NoAdRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }

    fn next_f64(&mut self) -> f64 {
        1.0
    }
}

/// An RNG whose `next_f64` rolls always trigger the interruption chance.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysAdRng;

impl DeterministicRng for AlwaysAdRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// An RNG that replays scripted values. When a queue runs dry it behaves
/// like [`NoAdRng`], so a test only scripts the rolls it cares about.
#[derive(Debug, Default)]
pub struct ScriptedRng {
    floats: VecDeque<f64>,
    ints: VecDeque<u32>,
}

impl ScriptedRng {
    /// Creates a scripted RNG with queued `next_f64` rolls and
    /// `next_u32_range` picks.
    #[must_use]
    pub fn new(floats: impl Into<VecDeque<f64>>, ints: impl Into<VecDeque<u32>>) -> Self {
        Self {
            floats: floats.into(),
            ints: ints.into(),
        }
    }
}

impl DeterministicRng for ScriptedRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.ints.pop_front().map_or(min, |v| v.clamp(min, max))
    }

    fn next_f64(&mut self) -> f64 {
        self.floats.pop_front().unwrap_or(1.0)
    }
}
