//! The session aggregate.

use chrono::{DateTime, Utc};
use serde::Serialize;
use slop_content::{Speaker, ThesisOption};
use uuid::Uuid;

use crate::domain::log::LogEntry;
use crate::domain::stats::Stats;

/// The session state machine's states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    /// The prologue script is playing (or has played).
    Intro,
    /// Waiting for the player to bind a thesis.
    ThesisSelection,
    /// The fixed, non-cancellable title interstitial.
    TitleDrop,
    /// A scene's reveal batch is playing (or has played).
    SceneIntro,
    /// The player is degrading and submitting text.
    SceneTask,
    /// The vibe check passed; waiting to move on.
    SceneResult,
    /// The mandatory wellness break.
    TherapySession,
    /// Terminal: the player forgot to breathe.
    GameOverSanity,
    /// Terminal: the vibe check failed.
    GameOverCaught,
    /// Terminal: every scene passed.
    Victory,
}

impl GameState {
    /// Whether this state is terminal (exited only via restart).
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::GameOverSanity | Self::GameOverCaught | Self::Victory
        )
    }
}

/// The aggregate root for one playthrough.
///
/// Owned exclusively by the engine task; every field mutation happens
/// there. A restart replaces the whole value except `has_won_before`.
#[derive(Debug)]
pub struct Session {
    /// Identifier for this playthrough (changes on restart).
    pub run_id: Uuid,
    /// Current state machine state.
    pub state: GameState,
    /// Index into the campaign's scene sequence. Monotonically
    /// non-decreasing except on restart.
    pub scene_index: usize,
    /// The bound thesis. `None` until chosen, then immutable for the
    /// playthrough.
    pub thesis: Option<ThesisOption>,
    /// The resource ledger.
    pub stats: Stats,
    /// The transcript.
    pub logs: Vec<LogEntry>,
    /// Whether any playthrough has ever reached victory.
    pub has_won_before: bool,
    /// A reveal batch (prologue or scene opening) is mid-flight.
    pub narrating: bool,
    /// A generation call (degrade or react) is mid-flight; submit,
    /// modifier, and breathe input is rejected while set.
    pub processing: bool,
    /// The working text of the current task.
    pub task_text: String,
    /// Slop integrity captured at submit time, consumed when the
    /// reaction resolves.
    pub pending_submit_score: Option<u8>,
}

impl Session {
    /// A fresh session in `Intro`.
    #[must_use]
    pub fn new(initial_sanity: i32, has_won_before: bool) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            state: GameState::Intro,
            scene_index: 0,
            thesis: None,
            stats: Stats::new(initial_sanity),
            logs: Vec::new(),
            has_won_before,
            narrating: false,
            processing: false,
            task_text: String::new(),
            pending_submit_score: None,
        }
    }

    /// Whether the manual-breathing deadline should be running: sanity
    /// below the critical threshold, in a live state, and not during the
    /// title drop.
    #[must_use]
    pub fn breathing_required(&self, critical_sanity: i32) -> bool {
        self.stats.sanity < critical_sanity
            && !self.state.is_terminal()
            && self.state != GameState::TitleDrop
    }

    /// Appends a transcript line.
    pub fn push_log(&mut self, speaker: Speaker, text: impl Into<String>, at: DateTime<Utc>) {
        self.logs.push(LogEntry {
            speaker,
            text: text.into(),
            at,
        });
    }

    /// The bound thesis' sanity penalty, 1.0 before binding.
    #[must_use]
    pub fn sanity_penalty(&self) -> f64 {
        self.thesis.as_ref().map_or(1.0, |t| t.sanity_penalty)
    }

    /// The bound thesis' clout multiplier, 1.0 before binding.
    #[must_use]
    pub fn clout_multiplier(&self) -> f64 {
        self.thesis.as_ref().map_or(1.0, |t| t.clout_multiplier)
    }
}
