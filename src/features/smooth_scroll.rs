//! In-page anchor links scroll smoothly and keep history in sync.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

pub struct SmoothScroll {
    _click_handlers: Vec<Closure<dyn FnMut(Event)>>,
}

pub fn init(document: &Document) -> Option<SmoothScroll> {
    let anchors = document.query_selector_all("a[href^=\"#\"]").ok()?;
    if anchors.length() == 0 {
        return None;
    }

    let mut click_handlers = Vec::with_capacity(anchors.length() as usize);
    for i in 0..anchors.length() {
        let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let handler = {
            let anchor = anchor.clone();
            let document = document.clone();
            Closure::wrap(Box::new(move |event: Event| {
                let Some(href) = anchor.get_attribute("href") else {
                    return;
                };
                // A bare "#" keeps the browser default.
                if href == "#" {
                    return;
                }
                let Some(target) = document.query_selector(&href).ok().flatten() else {
                    return;
                };
                event.prevent_default();

                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);

                // Keep back/forward working without a full navigation.
                if let Some(window) = web_sys::window() {
                    if let Ok(history) = window.history() {
                        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
                    }
                }
            }) as Box<dyn FnMut(Event)>)
        };
        let _ = anchor.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        click_handlers.push(handler);
    }

    Some(SmoothScroll {
        _click_handlers: click_handlers,
    })
}
