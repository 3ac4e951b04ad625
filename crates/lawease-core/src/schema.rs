//! Persistent store schema: key names, version, and the tolerant read
//! path.
//!
//! The store lives for the life of the browser profile; there is no
//! explicit init or teardown. All values are JSON text except the theme
//! preference, which is stored raw. History is bounded: at most
//! [`MAX_HISTORY`] entries, newest first; pushing past the cap evicts the
//! oldest entries silently.

use serde::de::DeserializeOwned;

use crate::ports::StorePort;

pub const SCHEMA_VERSION: u32 = 1;

/// Marker key recording which schema version last wrote the store.
pub const SCHEMA_KEY: &str = "lawease_schema";

/// The in-progress conversation, mirrored on every mutation.
pub const SESSION_KEY: &str = "lawease_current";

/// Saved conversation snapshots, newest first.
pub const HISTORY_KEY: &str = "lawease_history";

/// Theme preference, stored as plain text ("dark" / "light").
pub const THEME_KEY: &str = "lawease_theme";

/// Upper bound on saved conversations.
pub const MAX_HISTORY: usize = 50;

/// Read and decode a persisted collection.
///
/// Absent keys, unreadable storage, and payloads left behind by an older
/// schema or a partial write all decode to the default (empty) value,
/// never a fault.
pub fn decode_or_empty<T: DeserializeOwned + Default>(store: &dyn StorePort, key: &str) -> T {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            log::warn!("read of {} failed: {}", key, e);
            return T::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("discarding unreadable data under {}: {}", key, e);
            T::default()
        }
    }
}

/// Record the current schema version.
///
/// There is no migration for older data: each read site falls back to
/// empty on anything it cannot decode.
pub fn mark_schema(store: &dyn StorePort) {
    let version = SCHEMA_VERSION.to_string();
    match store.get(SCHEMA_KEY) {
        Ok(Some(v)) if v == version => return,
        Ok(Some(v)) => log::info!("store written by schema {}, now at {}", v, version),
        _ => {}
    }
    if let Err(e) = store.set(SCHEMA_KEY, &version) {
        log::warn!("could not record schema version: {}", e);
    }
}
