use serde::{Deserialize, Serialize};

use crate::history::HistoryEntry;

/// The closed set of signals carried by the event bus.
///
/// Independent UI surfaces (sidebar, conversation view) coordinate through
/// these instead of calling each other: the sidebar publishes, the
/// conversation controller consumes, and `HistoryChanged` tells anyone
/// rendering history to re-read the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    /// Start a fresh conversation; the active session is discarded.
    NewChat,

    /// Clear the active conversation. Behaviorally identical to
    /// `NewChat` at the session layer.
    ClearMessages,

    /// Replace the active session wholesale with a saved snapshot.
    LoadConversation(HistoryEntry),

    /// A document was uploaded; the extracted text (when the backend
    /// returned any) is appended to the conversation.
    DocumentIngested { text: Option<String> },

    /// Generic refresh: history was written, re-read it from the store.
    /// Carries no payload.
    HistoryChanged,
}
