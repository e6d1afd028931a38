//! Read-only view of the session, published after every processed
//! message.

use serde::Serialize;
use slop_content::Difficulty;
use uuid::Uuid;

use crate::domain::log::LogEntry;
use crate::domain::session::GameState;
use crate::domain::stats::Stats;

/// What a front end needs to render one frame. Cloned out of the watch
/// channel; holds no references into the engine.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    /// Identifier of the current playthrough.
    pub run_id: Uuid,
    /// Current state machine state.
    pub state: GameState,
    /// Index of the current scene.
    pub scene_index: usize,
    /// The current scene's display data.
    pub scene: SceneView,
    /// Id of the bound thesis, if any.
    pub thesis_id: Option<String>,
    /// The resource ledger.
    pub stats: Stats,
    /// The full transcript.
    pub logs: Vec<LogEntry>,
    /// A reveal batch is mid-flight; the advance affordance should be
    /// hidden.
    pub narrating: bool,
    /// A generation call is mid-flight; show a busy indicator.
    pub processing: bool,
    /// The current task, while in [`GameState::SceneTask`].
    pub task: Option<TaskView>,
    /// The breathing widget, while the deadline guard holds.
    pub breath: Option<BreathView>,
    /// The interruption overlay, while visible.
    pub ad: Option<AdView>,
    /// The therapy interstitial, while in
    /// [`GameState::TherapySession`].
    pub therapy: Option<TherapyView>,
    /// Selectable thesis options with lock state resolved.
    pub thesis_options: Vec<ThesisListing>,
}

/// Display data for a scene.
#[derive(Debug, Clone, Serialize)]
pub struct SceneView {
    /// Scene id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Opponent name.
    pub opponent_name: String,
    /// Opponent title.
    pub opponent_title: String,
    /// The vibe check bar.
    pub required_slop_score: u8,
}

/// The active task.
#[derive(Debug, Clone, Serialize)]
pub struct TaskView {
    /// The thesis' directive for this scene.
    pub prompt: String,
    /// The working text.
    pub text: String,
}

/// The manual-breathing widget.
#[derive(Debug, Clone, Serialize)]
pub struct BreathView {
    /// Remaining active time, as of the last processed message. Frozen
    /// while an interruption is visible.
    pub remaining_ms: u64,
}

/// The interruption overlay.
#[derive(Debug, Clone, Serialize)]
pub struct AdView {
    /// Headline.
    pub title: String,
    /// Body copy.
    pub body: String,
    /// Whether the timed free skip has unlocked.
    pub free_skip_ready: bool,
    /// Social credit cost of the paid skip.
    pub skip_cost: u32,
}

/// The therapy interstitial.
#[derive(Debug, Clone, Serialize)]
pub struct TherapyView {
    /// The therapist's opening line.
    pub greeting: String,
    /// The prompt before the choices.
    pub prompt: String,
    /// Confession labels, in choice order.
    pub choices: Vec<String>,
}

/// One row of the thesis selection screen.
#[derive(Debug, Clone, Serialize)]
pub struct ThesisListing {
    /// Thesis id.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Flavor description.
    pub description: String,
    /// Difficulty tier.
    pub difficulty: Difficulty,
    /// Hidden until a prior victory unlocks it.
    pub locked: bool,
}
