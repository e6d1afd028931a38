//! The ad gate: input blocking, skip paths, and the deadline coupling.

mod common;

use std::sync::Arc;

use common::{advance_ms, apply_modifier, begin_task, log_contains, settle, start_engine, submit};
use slop_engine::{GameState, PlayerInput};
use slop_test_support::{EchoGenerator, MemoryUnlockStore, ScriptedRng};

async fn start_with_rolls(rolls: Vec<f64>) -> slop_engine::EngineHandle {
    start_engine(
        Box::new(ScriptedRng::new(rolls, Vec::<u32>::new())),
        Arc::new(EchoGenerator),
        Arc::new(MemoryUnlockStore::default()),
    )
    .await
}

#[tokio::test(start_paused = true)]
async fn test_free_skip_rejected_before_five_seconds_accepted_after() {
    // The first modifier application rolls under 0.25 and opens the ad.
    let handle = start_with_rolls(vec![0.0]).await;
    begin_task(&handle, "ai_is_slop").await;

    apply_modifier(&handle, "add_filler").await;
    let snapshot = handle.snapshot();
    let ad = snapshot.ad.as_ref().unwrap();
    assert!(!ad.free_skip_ready);

    handle.apply(PlayerInput::SkipAdFree).await.unwrap();
    assert!(handle.snapshot().ad.is_some(), "early skip must be rejected");

    advance_ms(5_000).await;
    assert!(handle.snapshot().ad.as_ref().unwrap().free_skip_ready);

    handle.apply(PlayerInput::SkipAdFree).await.unwrap();
    assert!(handle.snapshot().ad.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_inputs_are_rejected_while_the_ad_is_visible() {
    let handle = start_with_rolls(vec![0.0]).await;
    begin_task(&handle, "ai_is_slop").await;
    apply_modifier(&handle, "add_filler").await;
    let before = handle.snapshot();
    assert!(before.ad.is_some());

    handle
        .apply(PlayerInput::ApplyModifier("add_brainrot".to_owned()))
        .await
        .unwrap();
    handle.apply(PlayerInput::Submit).await.unwrap();
    settle().await;

    let snapshot = handle.snapshot();
    assert_eq!(snapshot.state, GameState::SceneTask);
    assert_eq!(snapshot.stats.slop_integrity, before.stats.slop_integrity);
    assert!(!log_contains(&snapshot, "> SUBMITTED:"));
}

#[tokio::test(start_paused = true)]
async fn test_paid_skip_requires_fifty_credit_and_deducts_exactly_fifty() {
    // No ad during scene 1; the first modifier of scene 2 triggers one.
    let handle = start_with_rolls(vec![1.0, 0.0]).await;
    begin_task(&handle, "ai_is_slop").await;

    // Broke: the paid skip must be rejected outright.
    apply_modifier(&handle, "add_brainrot").await;
    submit(&handle).await;
    handle.apply(PlayerInput::Advance).await.unwrap();
    handle.apply(PlayerInput::Advance).await.unwrap();
    assert_eq!(handle.snapshot().state, GameState::SceneTask);
    assert_eq!(handle.snapshot().stats.social_credit, 200);

    apply_modifier(&handle, "add_filler").await;
    assert!(handle.snapshot().ad.is_some());

    handle.apply(PlayerInput::SkipAdPaid).await.unwrap();
    let snapshot = handle.snapshot();
    assert!(snapshot.ad.is_none());
    assert_eq!(snapshot.stats.social_credit, 150);
    assert!(log_contains(&snapshot, "PREMIUM AD SKIP ACTIVATED."));
}

#[tokio::test(start_paused = true)]
async fn test_paid_skip_rejected_when_credit_is_short() {
    let handle = start_with_rolls(vec![0.0]).await;
    begin_task(&handle, "ai_is_slop").await;
    apply_modifier(&handle, "add_filler").await;
    assert!(handle.snapshot().ad.is_some());

    handle.apply(PlayerInput::SkipAdPaid).await.unwrap();

    let snapshot = handle.snapshot();
    assert!(snapshot.ad.is_some());
    assert_eq!(snapshot.stats.social_credit, 0);
}

#[tokio::test(start_paused = true)]
async fn test_open_ad_suspends_the_deadline_and_close_resumes_the_remainder() {
    // Rolls: two quiet applications to reach critical sanity, then one
    // that opens the ad.
    let handle = start_with_rolls(vec![1.0, 1.0, 0.0]).await;
    begin_task(&handle, "ai_is_slop").await;
    apply_modifier(&handle, "add_brainrot").await;
    apply_modifier(&handle, "add_brainrot").await;
    assert_eq!(handle.snapshot().stats.sanity, 10);

    // Burn 3s of the 8s window, then trigger the interruption.
    advance_ms(3_000).await;
    apply_modifier(&handle, "add_filler").await;
    assert!(handle.snapshot().ad.is_some());

    // The countdown is frozen: far more than the window elapses with no
    // game over, and breathing is blocked the whole time.
    handle.apply(PlayerInput::Breathe).await.unwrap();
    advance_ms(60_000).await;
    let snapshot = handle.snapshot();
    assert_eq!(snapshot.state, GameState::SceneTask);
    assert_eq!(snapshot.breath.as_ref().unwrap().remaining_ms, 5_000);

    // Closing resumes from the frozen remainder, not a fresh interval.
    handle.apply(PlayerInput::SkipAdFree).await.unwrap();
    advance_ms(4_900).await;
    assert_eq!(handle.snapshot().state, GameState::SceneTask);

    advance_ms(100).await;
    assert_eq!(handle.snapshot().state, GameState::GameOverSanity);
}
