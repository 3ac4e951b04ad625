use serde::{Deserialize, Serialize};

use crate::message::Message;

/// A saved conversation snapshot.
///
/// Entries are immutable once created: `messages` is a by-value copy of
/// the session at save time, so later edits to the live session never
/// reach back into an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub title: String,
    pub messages: Vec<Message>,
    /// Millisecond timestamp of the save.
    pub created: i64,
}

impl HistoryEntry {
    pub fn new(title: impl Into<String>, messages: Vec<Message>, created: i64) -> Self {
        Self {
            title: title.into(),
            messages,
            created,
        }
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}
