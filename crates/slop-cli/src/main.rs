//! Everything Is Slop — terminal session driver.
//!
//! A thin line-oriented shell over the engine: stdin lines become player
//! inputs, snapshot changes become printed transcript lines. All game
//! logic lives in `slop-engine`.

use std::error::Error;
use std::sync::Arc;

use slop_content::{ContentRegistry, Speaker};
use slop_core::clock::SystemClock;
use slop_core::rng::ThreadRngSource;
use slop_engine::{EngineConfig, EngineHandle, GameState, PlayerInput, SessionEngine, SessionSnapshot};
use slop_generation::OfflineGenerator;
use slop_store::FileUnlockStore;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Content: the shipped campaign, or a YAML file via SLOP_CONTENT.
    let registry = match std::env::var("SLOP_CONTENT") {
        Ok(path) => {
            let yaml = tokio::fs::read_to_string(&path).await?;
            Arc::new(ContentRegistry::from_yaml_str(&yaml)?)
        }
        Err(_) => Arc::new(ContentRegistry::builtin()),
    };
    tracing::info!(
        fingerprint = %registry.fingerprint(),
        scenes = registry.scene_count(),
        "content loaded"
    );

    let unlock_path =
        std::env::var("SLOP_UNLOCK_PATH").unwrap_or_else(|_| "slop_unlock.json".to_owned());

    let handle = SessionEngine::spawn(
        Arc::clone(&registry),
        Arc::new(OfflineGenerator),
        Arc::new(FileUnlockStore::new(unlock_path)),
        Arc::new(SystemClock),
        Box::new(ThreadRngSource),
        EngineConfig::default(),
    )
    .await?;

    println!("EVERYTHING IS SLOP // BUILD_2060.05.12 // DEPT_OF_AUTHENTICITY");
    print_help();

    let printer = tokio::spawn(print_updates(handle.watch()));
    run_input_loop(&handle, &registry).await;
    printer.abort();
    Ok(())
}

fn print_help() {
    println!("commands: next | thesis <id> | theses | mod <id> | mods | text | submit | reset");
    println!("          breathe | skip | payskip | confess <n> | restart | status | help | quit");
}

fn speaker_tag(speaker: Speaker) -> &'static str {
    match speaker {
        Speaker::System => "SYSTEM",
        Speaker::Daemon => "DAEMON",
        Speaker::World => " WORLD",
        Speaker::Player => "PLAYER",
    }
}

/// Prints new transcript lines and state banners as snapshots arrive.
async fn print_updates(mut rx: tokio::sync::watch::Receiver<SessionSnapshot>) {
    let mut printed = 0usize;
    let mut last_state: Option<GameState> = None;
    let mut ad_shown = false;
    loop {
        {
            let snapshot = rx.borrow_and_update().clone();
            if snapshot.logs.len() < printed {
                // Restart cleared the transcript.
                printed = 0;
            }
            for entry in &snapshot.logs[printed..] {
                println!(
                    "{} [{}] {}",
                    entry.at.format("%H:%M:%S"),
                    speaker_tag(entry.speaker),
                    entry.text
                );
            }
            printed = snapshot.logs.len();
            if last_state != Some(snapshot.state) {
                last_state = Some(snapshot.state);
                print_state_banner(&snapshot);
            }
            match &snapshot.ad {
                Some(ad) if !ad_shown => {
                    ad_shown = true;
                    println!(
                        "*** SPONSORED CONTENT: {} {} (skip unlocks in 5s, payskip costs {})",
                        ad.title, ad.body, ad.skip_cost
                    );
                }
                Some(_) => {}
                None => ad_shown = false,
            }
        }
        if rx.changed().await.is_err() {
            return;
        }
    }
}

fn print_state_banner(snapshot: &SessionSnapshot) {
    match snapshot.state {
        GameState::ThesisSelection => {
            println!("-- choose a thesis (`thesis <id>`):");
            for option in &snapshot.thesis_options {
                if option.locked {
                    println!("   [LOCKED] ????????");
                } else {
                    println!("   {} — {} ({:?})", option.id, option.label, option.difficulty);
                }
            }
        }
        GameState::TitleDrop => println!("-- EVERYTHING IS SLOP --"),
        GameState::SceneTask => {
            if let Some(task) = &snapshot.task {
                println!("-- DIRECTIVE: {}", task.prompt);
                println!("-- DRAFT: {}", task.text);
                println!(
                    "-- vibe bar: {} | sanity {} | slop {} | clout {}",
                    snapshot.scene.required_slop_score,
                    snapshot.stats.sanity,
                    snapshot.stats.slop_integrity,
                    snapshot.stats.social_credit
                );
            }
        }
        GameState::TherapySession => {
            if let Some(therapy) = &snapshot.therapy {
                println!("-- DR. ARIS: {}", therapy.greeting);
                println!("-- {}", therapy.prompt);
                for (i, choice) in therapy.choices.iter().enumerate() {
                    println!("   confess {i}: {choice}");
                }
            }
        }
        GameState::GameOverSanity => println!("== BRAINROT FATAL == (`restart` to try again)"),
        GameState::GameOverCaught => println!("== CANCELLED == (`restart` to try again)"),
        GameState::Victory => println!("== TOTAL VIRALITY == (`restart` to prestige)"),
        GameState::Intro | GameState::SceneIntro | GameState::SceneResult => {}
    }
}

async fn run_input_loop(handle: &EngineHandle, registry: &ContentRegistry) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let mut parts = line.split_whitespace();
        let input = match (parts.next(), parts.next()) {
            (Some("next" | "n"), _) => Some(PlayerInput::Advance),
            (Some("thesis"), Some(id)) => Some(PlayerInput::SelectThesis(id.to_owned())),
            (Some("mod"), Some(id)) => Some(PlayerInput::ApplyModifier(id.to_owned())),
            (Some("submit"), _) => Some(PlayerInput::Submit),
            (Some("reset"), _) => Some(PlayerInput::ResetText),
            (Some("breathe" | "b"), _) => Some(PlayerInput::Breathe),
            (Some("skip"), _) => Some(PlayerInput::SkipAdFree),
            (Some("payskip"), _) => Some(PlayerInput::SkipAdPaid),
            (Some("confess"), Some(n)) => n
                .parse()
                .ok()
                .map(|choice| PlayerInput::CompleteTherapy { choice }),
            (Some("restart"), _) => Some(PlayerInput::Restart),
            (Some("theses"), _) => {
                for option in &handle.snapshot().thesis_options {
                    if !option.locked {
                        println!("   {} — {}", option.id, option.description);
                    }
                }
                None
            }
            (Some("mods"), _) => {
                for modifier in registry.modifiers() {
                    println!(
                        "   {} — {} (+{} slop, -{} sanity)",
                        modifier.id, modifier.label, modifier.slop_impact, modifier.sanity_cost
                    );
                }
                None
            }
            (Some("text"), _) => {
                if let Some(task) = &handle.snapshot().task {
                    println!("-- DRAFT: {}", task.text);
                }
                None
            }
            (Some("status"), _) => {
                let snapshot = handle.snapshot();
                println!(
                    "-- {:?} | scene {} | sanity {} | slop {} | clout {}{}",
                    snapshot.state,
                    snapshot.scene_index + 1,
                    snapshot.stats.sanity,
                    snapshot.stats.slop_integrity,
                    snapshot.stats.social_credit,
                    snapshot
                        .breath
                        .as_ref()
                        .map(|b| format!(" | BREATHE within {}ms", b.remaining_ms))
                        .unwrap_or_default()
                );
                None
            }
            (Some("help"), _) => {
                print_help();
                None
            }
            (Some("quit" | "q"), _) => break,
            (Some(other), _) => {
                println!("unknown command: {other} (try `help`)");
                None
            }
            (None, _) => None,
        };
        if let Some(input) = input {
            if handle.apply(input).await.is_err() {
                break;
            }
        }
    }
}
