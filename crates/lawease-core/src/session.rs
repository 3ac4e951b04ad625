//! Conversation controller — the sole writer of the active session.
//!
//! Owns the ordered message list and mirrors it into the persistent store
//! on every mutation (mutate, then persist). Persistence is best-effort:
//! a failed write is logged and dropped, and the session keeps working
//! from memory.

use std::cell::RefCell;
use std::rc::Rc;

use lawease_types::event::AppEvent;
use lawease_types::history::HistoryEntry;
use lawease_types::message::{Message, Sender};

use crate::bus::{EventBus, Subscription};
use crate::history::HistoryLog;
use crate::ports::StorePort;
use crate::schema::{decode_or_empty, SESSION_KEY};

/// Longest derived title before ellipsizing.
const TITLE_MAX: usize = 45;

/// Fallback title when the user has not written anything.
const UNTITLED: &str = "New Chat";

/// Identifies a pending placeholder so a late reply resolves into the
/// message it was issued for, not whatever is currently last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyTicket {
    id: i64,
}

pub struct ChatSession {
    store: Rc<dyn StorePort>,
    messages: Vec<Message>,
    last_id: i64,
}

impl ChatSession {
    /// Restores the persisted session, if any.
    pub fn new(store: Rc<dyn StorePort>) -> Self {
        let messages: Vec<Message> = decode_or_empty(store.as_ref(), SESSION_KEY);
        let last_id = messages.last().map(|m| m.id).unwrap_or(0);
        Self {
            store,
            messages,
            last_id,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Fresh message id. Strictly increasing within a session, even when
    /// the wall clock stalls or steps backwards, so a reply ticket names
    /// exactly one message.
    fn next_id(&mut self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }

    pub fn append(&mut self, from: Sender, text: impl Into<String>) {
        let id = self.next_id();
        self.messages.push(Message::new(id, from, text));
        self.persist();
    }

    /// Append a pending-reply placeholder ("Thinking..." and friends) and
    /// return the ticket its reply will resolve against.
    pub fn append_placeholder(&mut self, text: impl Into<String>) -> ReplyTicket {
        let id = self.next_id();
        self.messages.push(Message::bot(id, text));
        self.persist();
        ReplyTicket { id }
    }

    /// Position-based finalization: overwrite whatever is currently last.
    ///
    /// On an empty session the reply is appended instead. That is the
    /// documented outcome of a reset racing a pending reply; callers who
    /// want the reply dropped in that case use [`ChatSession::resolve`].
    pub fn replace_last(&mut self, text: impl Into<String>) {
        let id = self.next_id();
        let msg = Message::bot(id, text);
        match self.messages.last_mut() {
            Some(last) => *last = msg,
            None => self.messages.push(msg),
        }
        self.persist();
    }

    /// Ticket-based finalization: replace the placeholder the ticket was
    /// issued for, keeping its id so ordering stays monotone. Returns
    /// false (and drops the reply) when the placeholder is gone, e.g.
    /// after a reset or a loaded conversation.
    pub fn resolve(&mut self, ticket: ReplyTicket, text: impl Into<String>) -> bool {
        // Placeholders live near the tail; loaded snapshots may carry
        // duplicate ids, so match bot messages from the back.
        let found = self
            .messages
            .iter()
            .rposition(|m| m.id == ticket.id && m.from == Sender::Bot);
        let Some(pos) = found else {
            log::info!("dropping reply for vanished placeholder {}", ticket.id);
            return false;
        };
        self.messages[pos] = Message::bot(ticket.id, text);
        self.persist();
        true
    }

    /// Empty the session and drop its persisted key.
    pub fn reset(&mut self) {
        self.messages.clear();
        if let Err(e) = self.store.remove(SESSION_KEY) {
            log::warn!("could not remove session key: {}", e);
        }
    }

    /// Replace the session wholesale with a saved snapshot. The snapshot
    /// stays untouched; the session works on its own copy.
    pub fn load_into(&mut self, snapshot: &[Message]) {
        self.messages = snapshot.to_vec();
        if let Some(last) = self.messages.last() {
            self.last_id = self.last_id.max(last.id);
        }
        self.persist();
    }

    /// Promote the current session into the saved-conversation log. The
    /// entry holds a by-value snapshot; later session edits never reach
    /// it.
    pub fn save(&self, history: &HistoryLog) {
        let entry = HistoryEntry::new(
            derive_title(&self.messages),
            self.messages.clone(),
            chrono::Utc::now().timestamp_millis(),
        );
        history.push(entry);
    }

    /// Upload-failure policy seam: report into the conversation, or log
    /// and stay silent (the default product behavior).
    pub fn note_upload_failure(&mut self, context: &str, report: bool) {
        if report {
            self.append(Sender::Bot, format!("[Error] {} failed.", context));
        } else {
            log::error!("{} failed; continuing without interruption", context);
        }
    }

    /// Route bus signals onto session operations. Other surfaces never
    /// call the controller directly; they publish, and this subscription
    /// reacts. Returns the handle to unsubscribe on unmount.
    pub fn attach(session: Rc<RefCell<ChatSession>>, bus: &EventBus) -> Subscription {
        bus.subscribe(move |event| match event {
            AppEvent::NewChat | AppEvent::ClearMessages => session.borrow_mut().reset(),
            AppEvent::LoadConversation(entry) => {
                session.borrow_mut().load_into(&entry.messages);
            }
            AppEvent::DocumentIngested { text } => {
                if let Some(text) = text.as_deref().filter(|t| !t.is_empty()) {
                    session
                        .borrow_mut()
                        .append(Sender::Bot, format!("Extracted document text:\n{}", text));
                }
            }
            AppEvent::HistoryChanged => {}
        })
    }

    /// Mirror the full session into the store. Best-effort: quota and
    /// serialization failures drop the write.
    fn persist(&self) {
        let json = match serde_json::to_string(&self.messages) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("session serialization failed: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(SESSION_KEY, &json) {
            log::warn!("session write dropped: {}", e);
        }
    }
}

/// Title for a saved conversation: the first user-authored message,
/// trimmed and whitespace-collapsed, cut to 45 characters with a trailing
/// ellipsis when longer.
pub fn derive_title(messages: &[Message]) -> String {
    let Some(first_user) = messages.iter().find(|m| m.is_user()) else {
        return UNTITLED.to_string();
    };
    let collapsed = first_user
        .text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if collapsed.is_empty() {
        return UNTITLED.to_string();
    }
    if collapsed.chars().count() > TITLE_MAX {
        let cut: String = collapsed.chars().take(TITLE_MAX).collect();
        format!("{}...", cut)
    } else {
        collapsed
    }
}
