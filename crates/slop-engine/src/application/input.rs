//! Inputs processed by the engine task.

use slop_content::Speaker;

/// A player action. Guard-violating inputs are silent no-ops: the engine
/// never errors on them, it ignores them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    /// Move the narrative forward (skip the prologue, start the task,
    /// leave the result screen).
    Advance,
    /// Bind a thesis by id. Rejected once one is bound or if the option
    /// is still locked.
    SelectThesis(String),
    /// Apply a content-degrading modifier by id.
    ApplyModifier(String),
    /// Restore the task text to the thesis' clean base text. Spent
    /// stats are not refunded.
    ResetText,
    /// Submit the task text for the scene's vibe check.
    Submit,
    /// Manually breathe, restarting the deadline countdown.
    Breathe,
    /// Close the interruption via the timed free skip.
    SkipAdFree,
    /// Close the interruption by spending social credit.
    SkipAdPaid,
    /// Finish the therapy interstitial with the chosen confession.
    CompleteTherapy {
        /// Index into the therapy script's choices.
        choice: usize,
    },
    /// Restart from a terminal state. Everything resets except the
    /// persisted win flag.
    Restart,
}

/// A message posted back to the engine by one of its spawned tasks.
///
/// Every variant carries the generation current when the task was
/// spawned; the engine discards messages whose generation has been
/// superseded, which is how phase exits cancel stale timers.
#[derive(Debug)]
pub(crate) enum InternalEvent {
    /// A reveal batch entry is due.
    Reveal {
        generation: u64,
        speaker: Speaker,
        text: String,
        last: bool,
    },
    /// The title-drop interstitial finished.
    TitleDropElapsed { generation: u64 },
    /// The manual-breathing countdown ran out.
    DeadlineExpired { generation: u64 },
    /// The interruption's free skip became available.
    AdSkipUnlocked { generation: u64 },
    /// A degrade call resolved (fallback already applied on failure).
    TextDegraded { generation: u64, text: String },
    /// A react call resolved (fallback already applied on failure).
    ReactionReady { generation: u64, text: String },
}
