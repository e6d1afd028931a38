//! Everything Is Slop — static content registry.
//!
//! Scenes, modifiers, thesis options, the prologue script, ad spots, and
//! the therapy interstitial are immutable configuration consumed by the
//! session engine. This crate owns their types, the shipped campaign,
//! YAML ingestion, structural validation, and a content fingerprint.

mod builtin;
mod registry;
mod types;

pub use registry::ContentRegistry;
pub use types::{
    AdSpot, Difficulty, Modifier, ModifierCategory, Scene, SceneLog, ScriptLine, Speaker,
    TherapyChoice, TherapyScript, ThesisOption, ThesisSceneContent,
};
