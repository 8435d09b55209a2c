//! Height reporting to the host page when the widget runs inside an iframe

use contracts::shared::embed::EmbedMessage;
use serde::Serialize;

/// Parent window, if this document is framed
fn parent_frame() -> Option<web_sys::Window> {
    let window = web_sys::window()?;
    let parent = window.parent().ok().flatten()?;
    // A top-level page is its own parent
    if parent == window {
        None
    } else {
        Some(parent)
    }
}

fn document_height() -> Option<u32> {
    let element = web_sys::window()?.document()?.document_element()?;
    u32::try_from(element.scroll_height()).ok()
}

/// Posts `{type: "gdp-widget-height", height}` to the host. One-way; the host
/// may ignore it.
pub fn post_height() {
    let Some(parent) = parent_frame() else {
        return;
    };
    let Some(height) = document_height() else {
        return;
    };

    let message = EmbedMessage::Height { height };
    let value = match message.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("height message not serialized: {}", e);
            return;
        }
    };
    if let Err(e) = parent.post_message(&value, "*") {
        log::warn!("height message not delivered: {:?}", e);
    }
}
