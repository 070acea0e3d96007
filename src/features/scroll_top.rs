//! Floating scroll-to-top control, synthesized at init.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

const VISIBILITY_THRESHOLD_PX: f64 = 300.0;

pub struct ScrollTop {
    _scroll_handler: Closure<dyn FnMut()>,
    _click_handler: Closure<dyn FnMut()>,
}

/// Whether the control shows at the given vertical offset.
fn visible_at(offset: f64) -> bool {
    offset > VISIBILITY_THRESHOLD_PX
}

pub fn init(window: &Window, document: &Document) -> Option<ScrollTop> {
    let body = document.body()?;
    let button = document
        .create_element("button")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    button.set_inner_html("\u{2191}");
    button.set_class_name("scroll-to-top");
    let _ = button.set_attribute("aria-label", "Scroll to top");
    button.style().set_css_text(
        "position: fixed; bottom: 2rem; right: 2rem; width: 3rem; height: 3rem; \
         border-radius: 50%; background: #10b981; color: white; border: none; \
         font-size: 1.5rem; cursor: pointer; opacity: 0; visibility: hidden; \
         transition: opacity 0.3s, visibility 0.3s; \
         box-shadow: 0 4px 6px rgba(0,0,0,0.1); z-index: 1000;",
    );
    body.append_child(&button).ok()?;

    // Visibility is recomputed on every scroll event, no debouncing.
    let scroll_handler = {
        let window = window.clone();
        let button = button.clone();
        Closure::wrap(Box::new(move || {
            let offset = window.page_y_offset().unwrap_or(0.0);
            let style = button.style();
            if visible_at(offset) {
                let _ = style.set_property("opacity", "1");
                let _ = style.set_property("visibility", "visible");
            } else {
                let _ = style.set_property("opacity", "0");
                let _ = style.set_property("visibility", "hidden");
            }
        }) as Box<dyn FnMut()>)
    };
    let _ = window
        .add_event_listener_with_callback("scroll", scroll_handler.as_ref().unchecked_ref());

    let click_handler = {
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }) as Box<dyn FnMut()>)
    };
    let _ = button.add_event_listener_with_callback("click", click_handler.as_ref().unchecked_ref());

    Some(ScrollTop {
        _scroll_handler: scroll_handler,
        _click_handler: click_handler,
    })
}

#[cfg(test)]
mod tests {
    use super::visible_at;

    #[test]
    fn hidden_at_or_below_the_threshold() {
        assert!(!visible_at(0.0));
        assert!(!visible_at(299.9));
        assert!(!visible_at(300.0));
    }

    #[test]
    fn visible_past_the_threshold() {
        assert!(visible_at(300.5));
        assert!(visible_at(4_000.0));
    }
}
