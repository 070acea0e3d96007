//! Transient top-right banners for user-visible outcomes.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

const STYLE_ID: &str = "notification-styles";
const DISPLAY_MS: u32 = 3_000;
const EXIT_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
}

impl Kind {
    fn background(self) -> &'static str {
        match self {
            Kind::Success => "#10b981",
            Kind::Error => "#ef4444",
        }
    }
}

/// Show a transient banner. Each call owns its own dismissal timers, so
/// concurrent banners stack as independent nodes.
pub fn notify(message: &str, kind: Kind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    ensure_animation_styles(&document);

    let Some(banner) = document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    banner.set_text_content(Some(message));
    banner.style().set_css_text(&format!(
        "position: fixed; top: 20px; right: 20px; padding: 1rem 1.5rem; \
         background: {}; color: white; border-radius: 0.5rem; \
         box-shadow: 0 4px 6px rgba(0,0,0,0.1); z-index: 9999; \
         animation: slideIn 0.3s ease-out;",
        kind.background()
    ));
    if body.append_child(&banner).is_err() {
        return;
    }

    Timeout::new(DISPLAY_MS, move || {
        let _ = banner
            .style()
            .set_property("animation", "slideOut 0.3s ease-out");
        Timeout::new(EXIT_MS, move || banner.remove()).forget();
    })
    .forget();
}

/// The slide keyframes are injected once per document; later calls find
/// the marker element and skip the insert.
fn ensure_animation_styles(document: &Document) {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else { return };
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id(STYLE_ID);
    style.set_text_content(Some(
        "@keyframes slideIn { \
           from { transform: translateX(400px); opacity: 0; } \
           to { transform: translateX(0); opacity: 1; } } \
         @keyframes slideOut { \
           from { transform: translateX(0); opacity: 1; } \
           to { transform: translateX(400px); opacity: 0; } }",
    ));
    let _ = head.append_child(&style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_banners_are_green_and_error_banners_red() {
        assert_eq!(Kind::Success.background(), "#10b981");
        assert_eq!(Kind::Error.background(), "#ef4444");
    }

    #[test]
    fn style_block_id_matches_the_idempotence_guard() {
        assert_eq!(STYLE_ID, "notification-styles");
    }
}
