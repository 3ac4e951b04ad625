#[cfg(test)]
mod tests {
    use lawease_types::config::{Language, Theme};
    use lawease_types::history::HistoryEntry;

    use crate::state::{Tab, UiState};
    use crate::theme::palette;

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new(Theme::Dark);
        assert_eq!(state.active_tab, Tab::Chat);
        assert!(state.input_text.is_empty());
        assert!(state.translate_input.is_empty());
        assert_eq!(state.from_lang, Language::English);
        assert_eq!(state.to_lang, Language::Tamil);
        assert!(state.history_entries.is_empty());
        assert!(state.history_stale, "history is read on mount");
        assert!(state.uploaded_file.is_none());
        assert_eq!(state.pending, 0);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_ui_state_set_history_clears_stale_flag() {
        let mut state = UiState::new(Theme::Dark);
        state.set_history(vec![HistoryEntry::new("t", Vec::new(), 1)]);
        assert_eq!(state.history_entries.len(), 1);
        assert!(!state.history_stale);
    }

    #[test]
    fn test_ui_state_busy_tracks_pending() {
        let mut state = UiState::new(Theme::Dark);
        state.pending = 1;
        assert!(state.is_busy());
        state.pending = 0;
        assert!(!state.is_busy());
    }

    #[test]
    fn test_ui_state_default_is_dark() {
        let state = UiState::default();
        assert_eq!(state.theme, Theme::Dark);
    }

    // ─── Theme Tests ─────────────────────────────────────────

    #[test]
    fn test_palettes_differ() {
        let dark = palette(Theme::Dark);
        let light = palette(Theme::Light);
        assert_ne!(dark.bg_primary, light.bg_primary);
        assert_ne!(dark.text_primary, light.text_primary);
    }
}
