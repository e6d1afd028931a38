//! Everything Is Slop — session orchestration engine.
//!
//! A playthrough is a fixed sequence of scenes. In each one the player
//! degrades a clean text with content-degrading modifiers while managing
//! sanity and social credit, then submits it against the scene's vibe
//! check. The orchestration lives here: the session state machine, the
//! timed narrative reveals, the manual-breathing deadline, and the ad
//! interruption that suspends it.
//!
//! `domain` holds pure session state; `application` holds the actor-style
//! runtime that owns it. All transitions happen on one task; timers and
//! generation calls run as spawned tasks that post generation-tagged
//! messages back into it.

pub mod application;
pub mod config;
pub mod domain;

pub use application::engine::{EngineHandle, EngineStopped, SessionEngine};
pub use application::input::PlayerInput;
pub use application::snapshot::{
    AdView, BreathView, SceneView, SessionSnapshot, TaskView, TherapyView, ThesisListing,
};
pub use config::EngineConfig;
pub use domain::log::LogEntry;
pub use domain::session::{GameState, Session};
pub use domain::stats::Stats;
