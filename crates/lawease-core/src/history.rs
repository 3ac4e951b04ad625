//! Bounded saved-conversation log — the sole writer of the history key.
//!
//! Entries are kept newest first and capped; pushing past the cap evicts
//! the oldest entries silently. Reads always go back to the store, so a
//! selection made against a stale render still resolves against current
//! data.

use std::rc::Rc;

use lawease_types::event::AppEvent;
use lawease_types::history::HistoryEntry;

use crate::bus::EventBus;
use crate::ports::StorePort;
use crate::schema::{decode_or_empty, HISTORY_KEY, MAX_HISTORY};

pub struct HistoryLog {
    store: Rc<dyn StorePort>,
    bus: EventBus,
}

impl HistoryLog {
    pub fn new(store: Rc<dyn StorePort>, bus: EventBus) -> Self {
        Self { store, bus }
    }

    /// All saved entries, newest first. Absent or unreadable data reads
    /// as empty.
    pub fn load(&self) -> Vec<HistoryEntry> {
        decode_or_empty(self.store.as_ref(), HISTORY_KEY)
    }

    /// Prepend an entry, evict past the cap, persist, and tell other
    /// surfaces to re-read.
    pub fn push(&self, entry: HistoryEntry) {
        let mut entries = self.load();
        entries.insert(0, entry);
        entries.truncate(MAX_HISTORY);
        self.persist(&entries);
        self.bus.publish(&AppEvent::HistoryChanged);
    }

    /// Fresh read of the entry at `idx`, straight from the store rather
    /// than any previously rendered copy.
    pub fn entry_at(&self, idx: usize) -> Option<HistoryEntry> {
        self.load().into_iter().nth(idx)
    }

    /// Truncate the log to empty and drop the persisted key.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(HISTORY_KEY) {
            log::warn!("could not clear history: {}", e);
        }
        self.bus.publish(&AppEvent::HistoryChanged);
    }

    fn persist(&self, entries: &[HistoryEntry]) {
        match serde_json::to_string(entries) {
            Ok(json) => {
                if let Err(e) = self.store.set(HISTORY_KEY, &json) {
                    log::warn!("history write dropped: {}", e);
                }
            }
            Err(e) => log::warn!("history serialization failed: {}", e),
        }
    }
}
