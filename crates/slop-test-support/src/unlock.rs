//! Test unlock store — in-memory `UnlockStore` implementation.

use std::sync::Mutex;

use async_trait::async_trait;
use slop_core::error::DomainError;
use slop_core::unlock::UnlockStore;

/// An in-memory unlock store that counts victory writes.
#[derive(Debug, Default)]
pub struct MemoryUnlockStore {
    has_won: Mutex<bool>,
    writes: Mutex<u32>,
}

impl MemoryUnlockStore {
    /// Creates a store with the flag preset.
    #[must_use]
    pub fn with_flag(has_won: bool) -> Self {
        Self {
            has_won: Mutex::new(has_won),
            writes: Mutex::new(0),
        }
    }

    /// Number of `record_victory` calls observed.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn victory_writes(&self) -> u32 {
        *self.writes.lock().unwrap()
    }
}

#[async_trait]
impl UnlockStore for MemoryUnlockStore {
    async fn has_won_before(&self) -> Result<bool, DomainError> {
        Ok(*self.has_won.lock().unwrap())
    }

    async fn record_victory(&self) -> Result<(), DomainError> {
        *self.has_won.lock().unwrap() = true;
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}
