//! Document upload flow.
//!
//! Opens the browser file picker through a synthetic input element,
//! reads the picked file, posts it to the backend, and broadcasts the
//! extracted text. Failures follow the configured policy: logged only,
//! or reported into the conversation.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use lawease_core::bus::EventBus;
use lawease_core::ports::BackendPort;
use lawease_core::session::ChatSession;
use lawease_types::event::AppEvent;

pub fn pick_and_upload(
    backend: Rc<dyn BackendPort>,
    bus: EventBus,
    session: Rc<RefCell<ChatSession>>,
    report_errors: bool,
    picked_name: Rc<RefCell<Option<String>>>,
    ctx: egui::Context,
) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => {
            log::error!("No document for file picker");
            return;
        }
    };

    let input: web_sys::HtmlInputElement = match document
        .create_element("input")
        .ok()
        .and_then(|e| e.dyn_into().ok())
    {
        Some(i) => i,
        None => {
            log::error!("Could not create file input");
            return;
        }
    };
    input.set_type("file");
    input.set_accept(".pdf,.docx");

    let input_for_change = input.clone();
    let onchange = Closure::once(move |_event: web_sys::Event| {
        let Some(file) = input_for_change.files().and_then(|files| files.get(0)) else {
            return;
        };
        let name = file.name();
        *picked_name.borrow_mut() = Some(name.clone());

        wasm_bindgen_futures::spawn_local(async move {
            let buffer = match wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await {
                Ok(buf) => buf,
                Err(e) => {
                    log::error!("Could not read picked file: {:?}", e);
                    return;
                }
            };
            let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

            match backend.upload_document(&name, &bytes).await {
                Ok(receipt) => {
                    log::info!("Document uploaded: {}", name);
                    let text = receipt
                        .get("text")
                        .and_then(|t| t.as_str())
                        .map(String::from);
                    bus.publish(&AppEvent::DocumentIngested { text });
                }
                Err(e) => {
                    log::error!("Upload failed: {}", e);
                    session
                        .borrow_mut()
                        .note_upload_failure("Document upload", report_errors);
                }
            }
            ctx.request_repaint();
        });
    });
    input.set_onchange(Some(onchange.as_ref().unchecked_ref()));
    onchange.forget();

    input.click();
}
