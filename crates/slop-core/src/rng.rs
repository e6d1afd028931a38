//! Random number generator abstraction for determinism.
//!
//! In production, this wraps the thread-local RNG. In tests, a scripted
//! implementation is injected so interruption rolls and ad-spot picks are
//! repeatable.

/// Abstraction over random number generation.
pub trait DeterministicRng: Send {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;

    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;
}

/// Production RNG backed by the thread-local generator.
///
/// Holds no state of its own; each call grabs the thread-local handle, so
/// the struct stays `Send` even though `ThreadRng` itself is not.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl DeterministicRng for ThreadRngSource {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        use rand::Rng;
        rand::rng().random_range(min..=max)
    }

    fn next_f64(&mut self) -> f64 {
        use rand::Rng;
        rand::rng().random::<f64>()
    }
}
