//! Everything Is Slop — text-generation collaborator seam.
//!
//! The session engine treats text generation as an opaque, fallible async
//! collaborator. This crate owns the trait, the deterministic fallback
//! templates used when the collaborator is unreachable, and an offline
//! implementation built entirely from those templates.

pub mod fallback;
mod generator;

pub use generator::{OfflineGenerator, TextGenerator};
