//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `lawease-core` (pure Rust).
//! Implementations live in `lawease-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;

use lawease_types::config::{Language, SummaryKind};
use lawease_types::Result;

// ─── Store Port ──────────────────────────────────────────────

/// Durable key/value storage, synchronous from the caller's perspective
/// (the localStorage contract). Absent keys read as `None`; writes past
/// the host's storage ceiling fail with an error rather than a crash.
pub trait StorePort {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Backend Port ────────────────────────────────────────────

/// The remote chat/translate/summarize/document collaborator, reached
/// over HTTP. Each call resolves to the single response field the client
/// consumes.
#[async_trait(?Send)]
pub trait BackendPort {
    async fn chat(&self, prompt: &str) -> Result<String>;

    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String>;

    async fn summarize(&self, kind: SummaryKind) -> Result<String>;

    /// Upload a reference document. The backend's receipt is returned
    /// verbatim; only a `text` field, when present, is consumed
    /// downstream.
    async fn upload_document(&self, file_name: &str, bytes: &[u8]) -> Result<serde_json::Value>;
}
