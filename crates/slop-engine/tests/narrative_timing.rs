//! Reveal batches: prologue pacing, scene-opening offsets, cancellation
//! on skip, and the non-cancellable title drop.

mod common;

use common::{advance_ms, begin_task, log_contains, log_texts, settle, start_default};
use slop_engine::{GameState, PlayerInput};

#[tokio::test(start_paused = true)]
async fn test_prologue_reveals_follow_the_script_delays() {
    let handle = start_default().await;
    settle().await;

    // The first line lands at +0ms.
    assert_eq!(handle.snapshot().logs.len(), 1);
    assert!(log_contains(&handle.snapshot(), "Initializing Neural Link"));

    advance_ms(1000).await;
    assert_eq!(handle.snapshot().logs.len(), 2);

    advance_ms(1500).await; // t = 2500
    assert_eq!(handle.snapshot().logs.len(), 3);

    advance_ms(18500).await; // t = 21000, the final line
    let snapshot = handle.snapshot();
    assert_eq!(snapshot.logs.len(), 11);
    assert!(!snapshot.narrating);
    assert!(log_contains(&snapshot, "OBJECTIVE: Survive the day"));
}

#[tokio::test(start_paused = true)]
async fn test_scene_opening_plays_at_documented_offsets() {
    let handle = start_default().await;
    handle.apply(PlayerInput::Advance).await.unwrap();
    handle
        .apply(PlayerInput::SelectThesis("ai_is_slop".to_owned()))
        .await
        .unwrap();
    advance_ms(4500).await;
    assert_eq!(handle.snapshot().state, GameState::SceneIntro);
    let baseline = handle.snapshot().logs.len();

    advance_ms(500).await;
    let snapshot = handle.snapshot();
    assert_eq!(snapshot.logs.len(), baseline + 1);
    assert!(log_contains(&snapshot, "You stand before the Academic High Council"));
    assert!(snapshot.narrating);

    advance_ms(1500).await; // t = 2000: first dialogue line
    assert_eq!(handle.snapshot().logs.len(), baseline + 2);

    advance_ms(4500).await; // t = 6500: the fourth and last dialogue line
    let snapshot = handle.snapshot();
    assert_eq!(snapshot.logs.len(), baseline + 5);
    assert!(!snapshot.narrating);

    let texts = log_texts(&snapshot);
    let kyle = texts.iter().position(|t| t.contains("KYLE:")).unwrap();
    let fact_check = texts.iter().position(|t| t.contains("Fact Check:")).unwrap();
    assert!(kyle < fact_check, "dialogue must deliver in list order");
}

#[tokio::test(start_paused = true)]
async fn test_starting_the_task_cancels_the_remaining_reveals() {
    let handle = start_default().await;
    begin_task(&handle, "ai_is_slop").await;
    let baseline = handle.snapshot().logs.len();

    // Long after every reveal offset has passed, none of the cancelled
    // batch's entries may have landed.
    advance_ms(60_000).await;

    let snapshot = handle.snapshot();
    assert_eq!(snapshot.state, GameState::SceneTask);
    assert_eq!(snapshot.logs.len(), baseline);
    assert!(!log_contains(&snapshot, "You stand before the Academic High Council"));
}

#[tokio::test(start_paused = true)]
async fn test_prologue_reveal_never_lands_after_thesis_selection() {
    let handle = start_default().await;
    settle().await;
    handle.apply(PlayerInput::Advance).await.unwrap();
    let baseline = handle.snapshot().logs.len();

    advance_ms(30_000).await;

    // The cancelled prologue batch stays cancelled.
    assert_eq!(handle.snapshot().logs.len(), baseline);
}

#[tokio::test(start_paused = true)]
async fn test_title_drop_ignores_advance_and_completes_on_its_timer() {
    let handle = start_default().await;
    handle.apply(PlayerInput::Advance).await.unwrap();
    handle
        .apply(PlayerInput::SelectThesis("ai_is_slop".to_owned()))
        .await
        .unwrap();
    assert_eq!(handle.snapshot().state, GameState::TitleDrop);

    handle.apply(PlayerInput::Advance).await.unwrap();
    assert_eq!(handle.snapshot().state, GameState::TitleDrop);

    advance_ms(4500).await;
    let snapshot = handle.snapshot();
    assert_eq!(snapshot.state, GameState::SceneIntro);
    assert!(log_contains(&snapshot, "> THESIS SELECTED: THE 'AI IS SLOP' DEFENSE"));
    assert!(log_contains(&snapshot, "EASY MODE ACTIVE. CLOUT MULTIPLIER x2."));
    assert!(log_contains(&snapshot, "LOADING SCENE: THE THESIS DEFENSE"));
}
