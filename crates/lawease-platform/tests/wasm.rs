//! WASM-target tests for lawease-platform (Node.js runtime).
//!
//! Exercises the store adapters under wasm32-unknown-unknown via
//! `wasm-pack test --node`.
//!
//! LocalStorage needs a browser window and is covered by running the
//! same suite with `--chrome`.

use std::rc::Rc;

use wasm_bindgen_test::*;

use lawease_core::ports::StorePort;
use lawease_core::session::ChatSession;
use lawease_platform::store::MemoryStore;
use lawease_types::message::Sender;

// ─── MemoryStore Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn memory_store_backend_name() {
    let store = MemoryStore::new();
    assert_eq!(store.backend_name(), "memory");
}

#[wasm_bindgen_test]
fn memory_store_get_missing() {
    let store = MemoryStore::new();
    assert!(store.get("nonexistent").unwrap().is_none());
}

#[wasm_bindgen_test]
fn memory_store_set_and_get() {
    let store = MemoryStore::new();
    store.set("key1", "value1").unwrap();
    assert_eq!(store.get("key1").unwrap().as_deref(), Some("value1"));
}

#[wasm_bindgen_test]
fn memory_store_overwrite() {
    let store = MemoryStore::new();
    store.set("key", "v1").unwrap();
    store.set("key", "v2").unwrap();
    assert_eq!(store.get("key").unwrap().as_deref(), Some("v2"));
}

#[wasm_bindgen_test]
fn memory_store_remove() {
    let store = MemoryStore::new();
    store.set("key", "val").unwrap();
    store.remove("key").unwrap();
    assert!(store.get("key").unwrap().is_none());
}

#[wasm_bindgen_test]
fn memory_store_remove_nonexistent() {
    let store = MemoryStore::new();
    store.remove("nonexistent").unwrap();
}

// ─── Session over the adapter ────────────────────────────────

#[wasm_bindgen_test]
fn session_persists_through_memory_store() {
    let store = Rc::new(MemoryStore::new());

    {
        let mut session = ChatSession::new(store.clone());
        session.append(Sender::User, "what is a lease deed?");
        session.append_placeholder("Thinking...");
        session.replace_last("A lease deed is a rental contract.");
    }

    let restored = ChatSession::new(store);
    assert_eq!(restored.len(), 2);
    assert_eq!(
        restored.messages()[1].text,
        "A lease deed is a rental contract."
    );
}
