//! UI-level state that drives rendering.
//!
//! A projection around the controllers: input buffers, the cached
//! history render list, and the pending-request counter. The message
//! list itself is rendered straight from the conversation controller,
//! not copied here.

use lawease_types::config::{Language, Theme};
use lawease_types::history::HistoryEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Chat,
    Translate,
}

pub struct UiState {
    pub active_tab: Tab,
    /// Chat input field content
    pub input_text: String,
    /// Translate tab input
    pub translate_input: String,
    pub from_lang: Language,
    pub to_lang: Language,
    /// Rendered copy of history; re-read from the store when stale.
    pub history_entries: Vec<HistoryEntry>,
    /// Set by the refresh signal; cleared by the next read.
    pub history_stale: bool,
    /// Name of the last uploaded document, for the sidebar receipt.
    pub uploaded_file: Option<String>,
    pub theme: Theme,
    /// Outstanding network-bound requests.
    pub pending: usize,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            active_tab: Tab::Chat,
            input_text: String::new(),
            translate_input: String::new(),
            from_lang: Language::English,
            to_lang: Language::Tamil,
            history_entries: Vec::new(),
            history_stale: true, // read on mount
            uploaded_file: None,
            theme,
            pending: 0,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending > 0
    }

    /// Apply a fresh history read.
    pub fn set_history(&mut self, entries: Vec<HistoryEntry>) {
        self.history_entries = entries;
        self.history_stale = false;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Theme::Dark)
    }
}
