//! Sidebar — branding, document upload, session controls, and the saved
//! conversation list. Publishes intent through the returned action; it
//! never calls the conversation controller directly.

use chrono::DateTime;
use egui::{self, RichText, ScrollArea};

use lawease_types::config::Theme;

use crate::state::UiState;
use crate::theme::{palette, PANEL_PADDING, PANEL_ROUNDING};

/// What the user asked for this frame.
pub enum SidebarAction {
    NewChat,
    ClearChat,
    ClearHistory,
    UploadClicked,
    /// Index into the rendered, newest-first history list.
    LoadConversation(usize),
    ToggleTheme,
}

/// Render the sidebar. Returns the submitted action, if any.
pub fn sidebar_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<SidebarAction> {
    let mut action = None;
    let p = palette(state.theme);

    egui::Frame::default()
        .fill(p.bg_secondary)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("LawEase").color(p.accent).strong());
            ui.label(
                RichText::new("Legal Assistant")
                    .color(p.text_secondary)
                    .small(),
            );

            ui.add_space(8.0);
            ui.separator();

            // Upload section
            if ui.button("Upload Document").clicked() {
                action = Some(SidebarAction::UploadClicked);
            }
            ui.label(
                RichText::new("PDF, DOCX")
                    .color(p.text_secondary)
                    .small(),
            );
            if let Some(name) = state.uploaded_file.clone() {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("Uploaded: {}", name))
                            .color(p.text_primary)
                            .small(),
                    );
                    if ui.small_button("✕").clicked() {
                        state.uploaded_file = None;
                    }
                });
            }

            ui.add_space(8.0);
            ui.separator();

            if ui.button("+ New Chat").clicked() {
                action = Some(SidebarAction::NewChat);
            }
            if ui.button("Clear Chat").clicked() {
                action = Some(SidebarAction::ClearChat);
            }
            if ui.button("Clear Conversation History").clicked() {
                action = Some(SidebarAction::ClearHistory);
            }

            let theme_label = match state.theme {
                Theme::Dark => "Light Mode",
                Theme::Light => "Dark Mode",
            };
            if ui.button(theme_label).clicked() {
                action = Some(SidebarAction::ToggleTheme);
            }

            ui.add_space(8.0);
            ui.label(RichText::new("Conversation History").color(p.text_primary).strong());

            ScrollArea::vertical()
                .max_height(ui.available_height())
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if state.history_entries.is_empty() {
                        ui.label(
                            RichText::new("No conversations yet")
                                .color(p.text_secondary)
                                .small(),
                        );
                    }
                    for (idx, entry) in state.history_entries.iter().enumerate() {
                        let response = egui::Frame::default()
                            .fill(p.bg_surface)
                            .corner_radius(PANEL_ROUNDING)
                            .inner_margin(6.0)
                            .show(ui, |ui| {
                                ui.label(
                                    RichText::new(&entry.title).color(p.text_primary).strong(),
                                );
                                ui.label(
                                    RichText::new(format_created(entry.created))
                                        .color(p.text_secondary)
                                        .small(),
                                );
                            })
                            .response;
                        if response.interact(egui::Sense::click()).clicked() {
                            action = Some(SidebarAction::LoadConversation(idx));
                        }
                        ui.add_space(4.0);
                    }
                });
        });

    action
}

fn format_created(ms: i64) -> String {
    DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
