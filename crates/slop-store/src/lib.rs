//! Everything Is Slop — unlock-flag persistence.
//!
//! The engine persists exactly one value across process lifetimes: the
//! `has_won_before` flag. This crate stores it as a small JSON document.

mod file_unlock_store;

pub use file_unlock_store::FileUnlockStore;
