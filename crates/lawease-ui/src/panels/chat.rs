//! Conversation view — message list, chat/translate tabs, and the action
//! bar. Mutations go through the returned action; the panel never touches
//! the session or the store itself.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use lawease_types::config::Language;
use lawease_types::message::{Message, Sender};

use crate::state::{Tab, UiState};
use crate::theme::{palette, Palette, PANEL_PADDING, PANEL_ROUNDING};

const GREETING: &str = "Hello! I'm LawEase — how can I assist you today?";

/// What the user asked for this frame.
pub enum ChatAction {
    Send(String),
    Translate {
        text: String,
        from: Language,
        to: Language,
    },
    Summarize,
    Save,
    ExportPdf,
}

/// Render the conversation view. Returns the submitted action, if any.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState, messages: &[Message]) -> Option<ChatAction> {
    let mut action = None;
    let p = palette(state.theme);

    egui::Frame::default()
        .fill(p.bg_primary)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header with tab switcher
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new("LawEase - AI Legal Assistant")
                            .color(p.text_primary)
                            .strong(),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui
                            .selectable_label(state.active_tab == Tab::Translate, "Translate")
                            .clicked()
                        {
                            state.active_tab = Tab::Translate;
                        }
                        if ui
                            .selectable_label(state.active_tab == Tab::Chat, "Chat")
                            .clicked()
                        {
                            state.active_tab = Tab::Chat;
                        }
                        if state.is_busy() {
                            ui.label(RichText::new("Working...").color(p.warning).small());
                        }
                    });
                });

                ui.separator();

                // Messages area
                let reserved = if state.active_tab == Tab::Translate {
                    180.0
                } else {
                    60.0
                };
                let available_height = ui.available_height() - reserved;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if messages.is_empty() {
                            render_bubble(ui, p, "LawEase", GREETING, false);
                        }
                        for msg in messages {
                            render_message(ui, p, msg);
                            ui.add_space(4.0);
                        }
                    });

                ui.add_space(8.0);

                match state.active_tab {
                    Tab::Chat => {
                        if let Some(a) = input_bar(ui, state, p) {
                            action = Some(a);
                        }
                    }
                    Tab::Translate => {
                        if let Some(a) = translate_bar(ui, state, p) {
                            action = Some(a);
                        }
                    }
                }
            });
        });

    action
}

fn input_bar(ui: &mut egui::Ui, state: &mut UiState, p: &Palette) -> Option<ChatAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        let input = egui::TextEdit::singleline(&mut state.input_text)
            .hint_text("Ask a legal question...")
            .desired_width(ui.available_width() - 280.0)
            .font(egui::FontId::proportional(14.0));

        let response = ui.add(input);

        let send_enabled = !state.input_text.trim().is_empty();
        let send_btn = ui.add_enabled(
            send_enabled,
            egui::Button::new(RichText::new("Send").color(p.text_primary))
                .fill(if send_enabled { p.accent } else { p.bg_surface })
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(52.0, 0.0)),
        );

        if (response.lost_focus()
            && ui.input(|i| i.key_pressed(egui::Key::Enter))
            && send_enabled)
            || send_btn.clicked()
        {
            let text = state.input_text.trim().to_string();
            state.input_text.clear();
            response.request_focus();
            action = Some(ChatAction::Send(text));
        }

        if ui.button("Summarize").clicked() {
            action = Some(ChatAction::Summarize);
        }
        if ui.button("Save").clicked() {
            action = Some(ChatAction::Save);
        }
        if ui.button("Export PDF").clicked() {
            action = Some(ChatAction::ExportPdf);
        }
    });

    action
}

fn translate_bar(ui: &mut egui::Ui, state: &mut UiState, p: &Palette) -> Option<ChatAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(p.bg_secondary)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                egui::ComboBox::from_id_salt("from_lang")
                    .selected_text(state.from_lang.label())
                    .show_ui(ui, |ui| {
                        for lang in Language::all() {
                            ui.selectable_value(&mut state.from_lang, *lang, lang.label());
                        }
                    });
                ui.label(RichText::new("to").color(p.text_secondary));
                egui::ComboBox::from_id_salt("to_lang")
                    .selected_text(state.to_lang.label())
                    .show_ui(ui, |ui| {
                        for lang in Language::all() {
                            ui.selectable_value(&mut state.to_lang, *lang, lang.label());
                        }
                    });
            });

            ui.add(
                egui::TextEdit::multiline(&mut state.translate_input)
                    .hint_text("Enter text to translate...")
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );

            ui.horizontal(|ui| {
                let can_translate = !state.translate_input.trim().is_empty();
                let translate_btn = ui.add_enabled(
                    can_translate,
                    egui::Button::new(RichText::new("Translate").color(p.text_primary))
                        .fill(if can_translate { p.accent } else { p.bg_surface })
                        .corner_radius(PANEL_ROUNDING),
                );
                if translate_btn.clicked() {
                    let text = state.translate_input.trim().to_string();
                    action = Some(ChatAction::Translate {
                        text,
                        from: state.from_lang,
                        to: state.to_lang,
                    });
                }
                if ui.button("Clear").clicked() {
                    state.translate_input.clear();
                }
            });
        });

    action
}

fn render_message(ui: &mut egui::Ui, p: &Palette, msg: &Message) {
    let (label, from_user) = match msg.from {
        Sender::User => ("You", true),
        Sender::Bot => ("LawEase", false),
    };
    render_bubble(ui, p, label, &msg.text, from_user);
}

fn render_bubble(ui: &mut egui::Ui, p: &Palette, label: &str, text: &str, from_user: bool) {
    let (label_color, bg) = if from_user {
        (p.accent, p.bg_secondary)
    } else {
        (p.success, p.bg_surface)
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(label_color).strong().small());
            ui.label(RichText::new(text).color(p.text_primary));
        });
}
