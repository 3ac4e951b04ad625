//! Main egui application — composes the sidebar and conversation view
//! and wires their actions onto the controllers.
//!
//! The panels never talk to each other: the sidebar publishes on the
//! bus, the conversation controller's subscription reacts, and history
//! refreshes ride the generic refresh signal.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use egui::{self, CentralPanel, SidePanel};

use lawease_core::bus::{EventBus, Subscription};
use lawease_core::export::paginate;
use lawease_core::history::HistoryLog;
use lawease_core::ports::{BackendPort, StorePort};
use lawease_core::schema::{mark_schema, THEME_KEY};
use lawease_core::session::ChatSession;
use lawease_platform::backend::HttpBackend;
use lawease_platform::download;
use lawease_platform::pdf::render_pdf;
use lawease_platform::store::auto_detect_store;
use lawease_types::config::{AppConfig, SummaryKind, Theme};
use lawease_types::event::AppEvent;
use lawease_types::message::Sender;
use lawease_ui::panels::chat::{chat_panel, ChatAction};
use lawease_ui::panels::sidebar::{sidebar_panel, SidebarAction};
use lawease_ui::state::UiState;
use lawease_ui::theme;

pub struct LawEaseApp {
    ui_state: UiState,
    config: AppConfig,
    bus: EventBus,
    store: Rc<dyn StorePort>,
    backend: Rc<dyn BackendPort>,
    session: Rc<RefCell<ChatSession>>,
    history: Rc<HistoryLog>,
    /// Outstanding network requests, shared with their futures.
    pending: Rc<Cell<usize>>,
    /// Set by the refresh signal; consumed at the top of each frame.
    history_dirty: Rc<Cell<bool>>,
    /// Filename slot filled by the upload flow.
    picked_file: Rc<RefCell<Option<String>>>,
    /// Held for the life of the page; the panels live as long as the app.
    _session_sub: Subscription,
    first_frame: bool,
}

impl LawEaseApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::default();
        let bus = EventBus::new();

        let store = auto_detect_store();
        mark_schema(store.as_ref());

        let theme = store
            .get(THEME_KEY)
            .ok()
            .flatten()
            .map(|raw| Theme::from_str(&raw))
            .unwrap_or_default();

        let session = Rc::new(RefCell::new(ChatSession::new(store.clone())));
        let session_sub = ChatSession::attach(session.clone(), &bus);
        let history = Rc::new(HistoryLog::new(store.clone(), bus.clone()));

        let history_dirty = Rc::new(Cell::new(true));
        {
            let dirty = history_dirty.clone();
            bus.subscribe(move |event| {
                if matches!(event, AppEvent::HistoryChanged) {
                    dirty.set(true);
                }
            });
        }

        let backend: Rc<dyn BackendPort> = Rc::new(HttpBackend::new(config.api_base.clone()));

        Self {
            ui_state: UiState::new(theme),
            config,
            bus,
            store,
            backend,
            session,
            history,
            pending: Rc::new(Cell::new(0)),
            history_dirty,
            picked_file: Rc::new(RefCell::new(None)),
            _session_sub: session_sub,
            first_frame: true,
        }
    }

    /// Append the user turn plus a placeholder, fire the request, and
    /// resolve the placeholder when the reply lands. A placeholder that
    /// vanished in the meantime (new chat, loaded conversation) drops
    /// the reply.
    fn spawn_request<F>(&self, ctx: &egui::Context, user_text: String, placeholder: &str, error_text: &'static str, request: F)
    where
        F: FnOnce(Rc<dyn BackendPort>) -> std::pin::Pin<Box<dyn std::future::Future<Output = lawease_types::Result<String>>>> + 'static,
    {
        let ticket = {
            let mut session = self.session.borrow_mut();
            session.append(Sender::User, user_text);
            session.append_placeholder(placeholder)
        };

        let session = self.session.clone();
        let backend = self.backend.clone();
        let pending = self.pending.clone();
        let ctx = ctx.clone();
        pending.set(pending.get() + 1);

        wasm_bindgen_futures::spawn_local(async move {
            let reply = match request(backend).await {
                Ok(text) => text,
                Err(e) => {
                    log::error!("backend request failed: {}", e);
                    error_text.to_string()
                }
            };
            session.borrow_mut().resolve(ticket, reply);
            pending.set(pending.get() - 1);
            ctx.request_repaint();
        });
    }

    fn dispatch_chat(&mut self, action: ChatAction, ctx: &egui::Context) {
        match action {
            ChatAction::Send(text) => {
                let prompt = text.clone();
                self.spawn_request(
                    ctx,
                    text,
                    "Thinking...",
                    "[Error] Chat failed.",
                    move |backend| Box::pin(async move { backend.chat(&prompt).await }),
                );
            }
            ChatAction::Translate { text, from, to } => {
                let source = text.clone();
                self.spawn_request(
                    ctx,
                    format!("(Translate) {}", text),
                    "Translating...",
                    "[Error] Translation failed.",
                    move |backend| {
                        Box::pin(async move { backend.translate(&source, from, to).await })
                    },
                );
            }
            ChatAction::Summarize => {
                self.spawn_request(
                    ctx,
                    "Please provide a short summary of my uploaded document.".to_string(),
                    "Summarizing...",
                    "[Error] Summarization failed.",
                    move |backend| {
                        Box::pin(async move { backend.summarize(SummaryKind::Short).await })
                    },
                );
            }
            ChatAction::Save => {
                // Listeners of the refresh signal never touch the
                // session, so the shared borrow may span the publish.
                self.session.borrow().save(&self.history);
            }
            ChatAction::ExportPdf => {
                let doc = paginate(self.session.borrow().messages());
                let bytes = render_pdf(&doc);
                if let Err(e) = download::save_bytes("conversation.pdf", &bytes, "application/pdf")
                {
                    log::error!("export failed: {}", e);
                }
            }
        }
    }

    fn dispatch_sidebar(&mut self, action: SidebarAction, ctx: &egui::Context) {
        match action {
            SidebarAction::NewChat => {
                self.ui_state.input_text.clear();
                self.bus.publish(&AppEvent::NewChat);
            }
            SidebarAction::ClearChat => {
                self.ui_state.input_text.clear();
                self.bus.publish(&AppEvent::ClearMessages);
            }
            SidebarAction::ClearHistory => self.history.clear(),
            SidebarAction::LoadConversation(idx) => {
                // Re-read fresh from the store; the rendered copy may be
                // stale by the time the click lands.
                if let Some(entry) = self.history.entry_at(idx) {
                    self.bus.publish(&AppEvent::LoadConversation(entry));
                }
            }
            SidebarAction::UploadClicked => self.start_upload(ctx),
            SidebarAction::ToggleTheme => {
                self.ui_state.theme = self.ui_state.theme.toggled();
                if let Err(e) = self.store.set(THEME_KEY, self.ui_state.theme.as_str()) {
                    log::warn!("theme write dropped: {}", e);
                }
                theme::apply_theme(ctx, self.ui_state.theme);
            }
        }
    }

    fn start_upload(&self, ctx: &egui::Context) {
        crate::upload::pick_and_upload(
            self.backend.clone(),
            self.bus.clone(),
            self.session.clone(),
            self.config.report_upload_errors,
            self.picked_file.clone(),
            ctx.clone(),
        );
    }
}

impl eframe::App for LawEaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx, self.ui_state.theme);
            self.first_frame = false;
        }

        // Re-read history when the refresh signal fired since last frame.
        if self.history_dirty.get() {
            self.ui_state.set_history(self.history.load());
            self.history_dirty.set(false);
        }

        if let Some(name) = self.picked_file.borrow_mut().take() {
            self.ui_state.uploaded_file = Some(name);
        }

        self.ui_state.pending = self.pending.get();
        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        let mut sidebar_action = None;
        SidePanel::left("sidebar")
            .min_width(220.0)
            .max_width(300.0)
            .show(ctx, |ui| {
                sidebar_action = sidebar_panel(ui, &mut self.ui_state);
            });

        let mut chat_action = None;
        CentralPanel::default().show(ctx, |ui| {
            let session = self.session.borrow();
            chat_action = chat_panel(ui, &mut self.ui_state, session.messages());
        });

        // Dispatch after rendering so no controller borrow is live.
        if let Some(action) = sidebar_action {
            self.dispatch_sidebar(action, ctx);
        }
        if let Some(action) = chat_action {
            self.dispatch_chat(action, ctx);
        }
    }
}
