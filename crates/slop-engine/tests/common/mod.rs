//! Shared helpers for engine integration tests.
//!
//! Every test runs under `#[tokio::test(start_paused = true)]`: time only
//! moves through `advance_ms`, and `settle` drains the message hops
//! between the engine task and its spawned timers without moving time.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use slop_content::ContentRegistry;
use slop_core::rng::DeterministicRng;
use slop_core::unlock::UnlockStore;
use slop_engine::{EngineConfig, EngineHandle, PlayerInput, SessionEngine, SessionSnapshot};
use slop_generation::TextGenerator;
use slop_test_support::{EchoGenerator, FixedClock, MemoryUnlockStore, NoAdRng};

pub async fn start_engine(
    rng: Box<dyn DeterministicRng>,
    generator: Arc<dyn TextGenerator>,
    unlock: Arc<dyn UnlockStore>,
) -> EngineHandle {
    SessionEngine::spawn(
        Arc::new(ContentRegistry::builtin()),
        generator,
        unlock,
        Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2060, 5, 12, 9, 0, 0).unwrap(),
        )),
        rng,
        EngineConfig::default(),
    )
    .await
    .unwrap()
}

pub async fn start_default() -> EngineHandle {
    start_engine(
        Box::new(NoAdRng),
        Arc::new(EchoGenerator),
        Arc::new(MemoryUnlockStore::default()),
    )
    .await
}

/// Lets queued messages drain without advancing the paused clock.
pub async fn settle() {
    for _ in 0..32 {
        tokio::task::yield_now().await;
    }
}

/// Advances the paused clock, then drains whatever that released.
pub async fn advance_ms(ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    settle().await;
}

/// Skips the prologue, binds `thesis`, sits through the title drop, and
/// starts the first scene's task.
pub async fn begin_task(handle: &EngineHandle, thesis: &str) {
    handle.apply(PlayerInput::Advance).await.unwrap();
    handle
        .apply(PlayerInput::SelectThesis(thesis.to_owned()))
        .await
        .unwrap();
    advance_ms(4500).await;
    handle.apply(PlayerInput::Advance).await.unwrap();
}

/// Applies a modifier and waits for the degrade call to resolve.
pub async fn apply_modifier(handle: &EngineHandle, id: &str) {
    handle
        .apply(PlayerInput::ApplyModifier(id.to_owned()))
        .await
        .unwrap();
    settle().await;
}

/// Submits the task text and waits for the reaction to resolve.
pub async fn submit(handle: &EngineHandle) {
    handle.apply(PlayerInput::Submit).await.unwrap();
    settle().await;
}

pub fn log_texts(snapshot: &SessionSnapshot) -> Vec<String> {
    snapshot.logs.iter().map(|l| l.text.clone()).collect()
}

pub fn log_contains(snapshot: &SessionSnapshot, needle: &str) -> bool {
    snapshot.logs.iter().any(|l| l.text.contains(needle))
}

pub fn log_count(snapshot: &SessionSnapshot, needle: &str) -> usize {
    snapshot
        .logs
        .iter()
        .filter(|l| l.text.contains(needle))
        .count()
}
