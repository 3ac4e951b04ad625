//! HTTP adapter for the LawEase backend collaborator.
//!
//! Speaks the backend's four endpoints over browser `fetch()` via
//! gloo-net. Each reply struct names the single field the client
//! consumes; everything else the backend sends is ignored.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::{json, Value};

use lawease_core::ports::BackendPort;
use lawease_types::config::{Language, SummaryKind};
use lawease_types::{ChatError, Result};

pub struct HttpBackend {
    api_base: String,
}

impl HttpBackend {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    async fn post_json<T: for<'de> Deserialize<'de>>(&self, path: &str, body: &Value) -> Result<T> {
        let url = format!("{}{}", self.api_base, path);

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ChatError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ChatError::Backend(format!("HTTP {}", response.status())));
        }

        response
            .json()
            .await
            .map_err(|e| ChatError::Backend(e.to_string()))
    }
}

// ─── Reply types ─────────────────────────────────────────────

#[derive(Deserialize)]
struct ChatReply {
    response: String,
}

#[derive(Deserialize)]
struct TranslateReply {
    translation: String,
}

#[derive(Deserialize)]
struct SummaryReply {
    summary: String,
}

#[async_trait(?Send)]
impl BackendPort for HttpBackend {
    async fn chat(&self, prompt: &str) -> Result<String> {
        let reply: ChatReply = self.post_json("/chat", &json!({ "prompt": prompt })).await?;
        Ok(reply.response)
    }

    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String> {
        let body = json!({
            "text": text,
            "from_lang": from.label(),
            "to_lang": to.label(),
        });
        let reply: TranslateReply = self.post_json("/translate", &body).await?;
        Ok(reply.translation)
    }

    async fn summarize(&self, kind: SummaryKind) -> Result<String> {
        let body = json!({ "type": kind.as_str() });
        let reply: SummaryReply = self.post_json("/summarize", &body).await?;
        Ok(reply.summary)
    }

    async fn upload_document(&self, file_name: &str, bytes: &[u8]) -> Result<Value> {
        let url = format!("{}/upload-document", self.api_base);

        let form = web_sys::FormData::new()
            .map_err(|e| ChatError::JsInterop(format!("{:?}", e)))?;
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)
            .map_err(|e| ChatError::JsInterop(format!("{:?}", e)))?;
        form.append_with_blob_and_filename("file", &blob, file_name)
            .map_err(|e| ChatError::JsInterop(format!("{:?}", e)))?;

        let response = Request::post(&url)
            .body(form)
            .map_err(|e| ChatError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ChatError::Backend(format!("HTTP {}", response.status())));
        }

        // The receipt is passed through verbatim; downstream only ever
        // reads a `text` field.
        response
            .json()
            .await
            .map_err(|e| ChatError::Backend(e.to_string()))
    }
}
