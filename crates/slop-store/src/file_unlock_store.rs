//! JSON-file-backed `UnlockStore`.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use slop_core::error::DomainError;
use slop_core::unlock::UnlockStore;

#[derive(Debug, Default, Serialize, Deserialize)]
struct UnlockDocument {
    has_won: bool,
}

/// Persists the win flag as a JSON document at a fixed path.
///
/// A missing file reads as "never won". Writes are whole-document
/// replacements; the flag is never cleared once set.
#[derive(Debug, Clone)]
pub struct FileUnlockStore {
    path: PathBuf,
}

impl FileUnlockStore {
    /// Creates a store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl UnlockStore for FileUnlockStore {
    async fn has_won_before(&self) -> Result<bool, DomainError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => {
                return Err(DomainError::Persistence(format!(
                    "reading {}: {e}",
                    self.path.display()
                )));
            }
        };
        let doc: UnlockDocument = serde_json::from_slice(&raw).map_err(|e| {
            DomainError::Persistence(format!("parsing {}: {e}", self.path.display()))
        })?;
        Ok(doc.has_won)
    }

    async fn record_victory(&self) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::Persistence(format!("creating {}: {e}", parent.display()))
            })?;
        }
        let raw = serde_json::to_vec_pretty(&UnlockDocument { has_won: true })
            .map_err(|e| DomainError::Persistence(format!("encoding unlock document: {e}")))?;
        tokio::fs::write(&self.path, raw).await.map_err(|e| {
            DomainError::Persistence(format!("writing {}: {e}", self.path.display()))
        })
    }
}
