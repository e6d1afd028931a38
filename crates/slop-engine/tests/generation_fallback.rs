//! Collaborator failure: the engine recovers with deterministic
//! templates and the session never blocks or errors.

mod common;

use std::sync::Arc;

use common::{apply_modifier, begin_task, log_contains, start_engine, submit};
use slop_engine::GameState;
use slop_test_support::{FailingGenerator, MemoryUnlockStore, NoAdRng};

async fn start_failing() -> slop_engine::EngineHandle {
    start_engine(
        Box::new(NoAdRng),
        Arc::new(FailingGenerator),
        Arc::new(MemoryUnlockStore::default()),
    )
    .await
}

#[tokio::test(start_paused = true)]
async fn test_degrade_failure_falls_back_to_the_category_template() {
    let handle = start_failing().await;
    begin_task(&handle, "ai_is_slop").await;
    let base = handle.snapshot().task.as_ref().unwrap().text.clone();

    apply_modifier(&handle, "add_emotion").await;

    let snapshot = handle.snapshot();
    assert!(!snapshot.processing);
    let text = &snapshot.task.as_ref().unwrap().text;
    assert!(text.starts_with("I'm literally shaking rn but..."));
    assert!(text.contains(&base));
    // The failure is recovered, not surfaced: stats were still charged.
    assert_eq!(snapshot.stats.slop_integrity, 25);
    assert_eq!(snapshot.stats.sanity, 85);
}

#[tokio::test(start_paused = true)]
async fn test_react_failure_uses_the_score_keyed_template() {
    let handle = start_failing().await;
    begin_task(&handle, "ai_is_slop").await;
    apply_modifier(&handle, "add_brainrot").await;

    submit(&handle).await;

    let snapshot = handle.snapshot();
    assert_eq!(snapshot.state, GameState::SceneResult);
    assert!(log_contains(
        &snapshot,
        "High Inquisitor Kyle: \"Hmm... Valid vibes.\""
    ));
}

#[tokio::test(start_paused = true)]
async fn test_react_failure_on_a_failing_submission_still_fails_cleanly() {
    let handle = start_failing().await;
    begin_task(&handle, "ai_is_slop").await;

    submit(&handle).await;

    let snapshot = handle.snapshot();
    assert_eq!(snapshot.state, GameState::GameOverCaught);
    assert!(log_contains(&snapshot, "High Inquisitor Kyle: \"Hmm... Sus.\""));
}
