//! Content record types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Who a log line is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Speaker {
    /// The terminal shell itself.
    System,
    /// The player's hidden assistant.
    Daemon,
    /// The outside world: broadcasts, opponents, the crowd.
    World,
    /// The player.
    Player,
}

/// One line of the prologue script, delivered `delay_ms` after the script
/// starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptLine {
    /// Attributed speaker.
    pub speaker: Speaker,
    /// Line text.
    pub text: String,
    /// Offset from script start, in milliseconds.
    pub delay_ms: u64,
}

/// A scripted line revealed while a scene opens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneLog {
    /// Attributed speaker.
    pub speaker: Speaker,
    /// Line text.
    pub text: String,
}

/// An immutable scene record. Scenes form an ordered sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Stable identifier, referenced by thesis per-scene content.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Leading narrative line, revealed first when the scene opens.
    pub narrative: String,
    /// Dialogue lines revealed after the narrative, in order.
    #[serde(default)]
    pub opening_logs: Vec<SceneLog>,
    /// Name of the opponent evaluating the submission.
    pub opponent_name: String,
    /// Opponent's title, for display.
    pub opponent_title: String,
    /// Minimum slop integrity required to pass the scene's vibe check.
    pub required_slop_score: u8,
}

/// Difficulty tier of a thesis option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    /// Reduced pressure, boosted rewards.
    Easy,
    /// The baseline experience.
    Normal,
    /// Increased sanity drain or reduced rewards.
    Hard,
}

/// Thesis-specific task content for one scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThesisSceneContent {
    /// The directive shown to the player.
    pub task_prompt: String,
    /// The clean text the player must degrade.
    pub base_text: String,
}

/// A selectable thesis: the difficulty/content profile bound for the
/// lifetime of a playthrough.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThesisOption {
    /// Stable identifier.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Flavor description shown during selection.
    pub description: String,
    /// Difficulty tier.
    pub difficulty: Difficulty,
    /// Multiplier applied to the credit granted on a passed vibe check.
    pub clout_multiplier: f64,
    /// Multiplier applied to every modifier's sanity cost. At least 1.0.
    pub sanity_penalty: f64,
    /// Hidden until a playthrough has been completed.
    #[serde(default)]
    pub requires_prior_victory: bool,
    /// Per-scene task content, keyed by scene id. Must cover every scene.
    pub scenes: BTreeMap<String, ThesisSceneContent>,
}

/// Category of a content-degrading modifier, used to pick the fallback
/// template when the generation collaborator is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModifierCategory {
    /// Unrelated emotional backstory.
    Emotion,
    /// Scapegoating a rival faction.
    Tribalism,
    /// Filler, hedging, clickbait.
    Inefficiency,
    /// Slang so dense the text stops parsing.
    Brainrot,
}

/// An immutable content-degrading modifier. Applying one is a lookup, not
/// a mutation of the modifier itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Modifier {
    /// Stable identifier.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Flavor description.
    pub description: String,
    /// Points added to slop integrity per application.
    pub slop_impact: u8,
    /// Base sanity cost per application, before the thesis penalty.
    pub sanity_cost: u8,
    /// Fallback-template category.
    pub category: ModifierCategory,
    /// Instruction handed to the text-generation collaborator.
    pub transform_instruction: String,
}

/// One interruption overlay's content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdSpot {
    /// Headline.
    pub title: String,
    /// Body copy.
    pub body: String,
}

/// One selectable confession during the therapy interstitial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TherapyChoice {
    /// What the player admits to.
    pub label: String,
    /// The therapist's revelation in response.
    pub response: String,
}

/// The mandatory wellness-break script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TherapyScript {
    /// The therapist's opening line.
    pub greeting: String,
    /// The prompt before the choices.
    pub prompt: String,
    /// Available confessions.
    pub choices: Vec<TherapyChoice>,
}
