//! Unlock-flag persistence abstraction.
//!
//! The only state that outlives a session is a single boolean: whether a
//! playthrough has ever been completed. Thesis options flagged as
//! requiring a prior victory stay hidden until it reads `true`.

use async_trait::async_trait;

use crate::error::DomainError;

/// Repository trait for the persisted win flag.
///
/// The engine reads the flag once at startup and writes it once on
/// victory; the flag is never cleared.
#[async_trait]
pub trait UnlockStore: Send + Sync {
    /// Returns whether any session has ever reached victory.
    async fn has_won_before(&self) -> Result<bool, DomainError>;

    /// Records that a session reached victory.
    async fn record_victory(&self) -> Result<(), DomainError>;
}
