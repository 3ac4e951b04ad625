//! Browser download trigger.
//!
//! Wraps bytes in a Blob, mints an object URL, and clicks a synthetic
//! anchor — the way a browser app hands a generated file to the user.

use wasm_bindgen::JsCast;

use lawease_types::{ChatError, Result};

/// Offer `bytes` to the user as a download named `file_name`.
pub fn save_bytes(file_name: &str, bytes: &[u8], mime: &str) -> Result<()> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| ChatError::JsInterop(format!("{:?}", e)))?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| ChatError::JsInterop(format!("{:?}", e)))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ChatError::JsInterop("No document".to_string()))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| ChatError::JsInterop(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|_| ChatError::JsInterop("Not an anchor element".to_string()))?;

    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    // The blob stays alive for the in-flight download; the URL handle
    // can go immediately.
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
