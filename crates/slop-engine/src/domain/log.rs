//! The append-only session log.

use chrono::{DateTime, Utc};
use serde::Serialize;
use slop_content::Speaker;

/// One line of the session transcript.
///
/// Entries are never edited or removed; the whole log is cleared only on
/// restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Attributed speaker.
    pub speaker: Speaker,
    /// Line text.
    pub text: String,
    /// When the line was appended, from the injected clock.
    pub at: DateTime<Utc>,
}
