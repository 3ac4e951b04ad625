//! Pick the best available store backend.
//!
//! Priority: localStorage (persistent) → memory (fallback).

use std::rc::Rc;

use lawease_core::ports::StorePort;

use super::{LocalStorage, MemoryStore};

/// Returns a trait object so callers are backend-agnostic.
pub fn auto_detect_store() -> Rc<dyn StorePort> {
    match LocalStorage::open() {
        Ok(local) => {
            log::info!("Store backend: localStorage");
            Rc::new(local)
        }
        Err(e) => {
            log::warn!("localStorage unavailable ({}), falling back to memory", e);
            Rc::new(MemoryStore::new())
        }
    }
}
