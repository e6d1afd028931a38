//! Shared test mocks and utilities for the Everything Is Slop engine.

mod clock;
mod generator;
mod rng;
mod unlock;

pub use clock::FixedClock;
pub use generator::{EchoGenerator, FailingGenerator};
pub use rng::{AlwaysAdRng, NoAdRng, ScriptedRng};
pub use unlock::MemoryUnlockStore;
