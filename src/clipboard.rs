//! Copying text to the system clipboard.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::Reflect;
use web_sys::{Document, HtmlDocument, HtmlTextAreaElement, Window};

/// Copy `text` to the clipboard, preferring the async clipboard API and
/// falling back to a hidden textarea plus the legacy copy command.
/// Resolves to whether the copy succeeded; it never rejects.
pub async fn copy_text(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    if let Some(clipboard) = clipboard_api(&window) {
        return JsFuture::from(clipboard.write_text(text)).await.is_ok();
    }

    let Some(document) = window.document() else {
        return false;
    };
    exec_command_fallback(&document, text)
}

/// The async clipboard API is absent on insecure origins and in older
/// browsers, so its presence is checked by reflection rather than assumed.
fn clipboard_api(window: &Window) -> Option<web_sys::Clipboard> {
    let navigator = window.navigator();
    let value = Reflect::get(navigator.as_ref(), &"clipboard".into()).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    value.dyn_into::<web_sys::Clipboard>().ok()
}

fn exec_command_fallback(document: &Document, text: &str) -> bool {
    let Some(body) = document.body() else {
        return false;
    };
    let textarea = match document
        .create_element("textarea")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
    {
        Some(el) => el,
        None => return false,
    };
    textarea.set_value(text);

    // Keep the helper node out of view without scrolling the page.
    let style = textarea.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("opacity", "0");

    if body.append_child(&textarea).is_err() {
        return false;
    }
    textarea.select();
    let copied = document
        .dyn_ref::<HtmlDocument>()
        .map(|doc| doc.exec_command("copy").unwrap_or(false))
        .unwrap_or(false);
    let _ = body.remove_child(&textarea);
    copied
}
