//! The manual-breathing deadline, driven end to end through the engine.

mod common;

use common::{advance_ms, apply_modifier, begin_task, log_count, start_default};
use slop_engine::{GameState, PlayerInput};

/// Two brainrot applications drop sanity from 100 to 10, under the
/// critical threshold of 20, arming the deadline.
async fn enter_critical(handle: &slop_engine::EngineHandle) {
    begin_task(handle, "ai_is_slop").await;
    apply_modifier(handle, "add_brainrot").await;
    apply_modifier(handle, "add_brainrot").await;
    let snapshot = handle.snapshot();
    assert_eq!(snapshot.stats.sanity, 10);
    assert!(snapshot.breath.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_deadline_is_inactive_above_the_threshold() {
    let handle = start_default().await;
    begin_task(&handle, "ai_is_slop").await;
    assert!(handle.snapshot().breath.is_none());

    advance_ms(60_000).await;

    assert_eq!(handle.snapshot().state, GameState::SceneTask);
}

#[tokio::test(start_paused = true)]
async fn test_expiry_fires_at_the_full_interval_and_only_once() {
    let handle = start_default().await;
    enter_critical(&handle).await;

    advance_ms(7_900).await;
    assert_eq!(handle.snapshot().state, GameState::SceneTask);

    advance_ms(100).await;
    let snapshot = handle.snapshot();
    assert_eq!(snapshot.state, GameState::GameOverSanity);
    assert_eq!(log_count(&snapshot, "CRITICAL FAILURE"), 1);

    // Nothing re-arms in a terminal state.
    advance_ms(60_000).await;
    assert_eq!(log_count(&handle.snapshot(), "CRITICAL FAILURE"), 1);
}

#[tokio::test(start_paused = true)]
async fn test_breathing_restarts_the_countdown() {
    let handle = start_default().await;
    enter_critical(&handle).await;

    advance_ms(5_000).await;
    handle.apply(PlayerInput::Breathe).await.unwrap();

    // 5s into the original window plus 7.9s into the new one.
    advance_ms(7_900).await;
    assert_eq!(handle.snapshot().state, GameState::SceneTask);

    advance_ms(100).await;
    assert_eq!(handle.snapshot().state, GameState::GameOverSanity);
}

#[tokio::test(start_paused = true)]
async fn test_healing_past_the_threshold_disarms_the_deadline() {
    let handle = start_default().await;
    begin_task(&handle, "ai_is_slop").await;
    apply_modifier(&handle, "add_brainrot").await;
    apply_modifier(&handle, "add_brainrot").await;
    common::submit(&handle).await;
    assert_eq!(handle.snapshot().state, GameState::SceneResult);

    // Advancing heals +20 (sanity 30) on the way into scene 2.
    handle.apply(PlayerInput::Advance).await.unwrap();
    let snapshot = handle.snapshot();
    assert_eq!(snapshot.stats.sanity, 30);
    assert!(snapshot.breath.is_none());

    advance_ms(60_000).await;
    assert_ne!(handle.snapshot().state, GameState::GameOverSanity);
}
