//! Analytics opt-out: one cookie plus the GA kill switch.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Reflect;
use web_sys::{Document, Event, HtmlDocument, Window};

use crate::config;
use crate::notification::{self, Kind};

pub struct OptOut {
    _click_handler: Closure<dyn FnMut(Event)>,
}

pub fn init(window: &Window, document: &Document) -> Option<OptOut> {
    let control = document.get_element_by_id("optOutAnalytics")?;

    let handler = {
        let window = window.clone();
        let document = document.clone();
        Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();

            if let Some(doc) = document.dyn_ref::<HtmlDocument>() {
                let _ = doc.set_cookie(config::OPT_OUT_COOKIE);
            }

            // Flip GA's kill switch when the library is present.
            if Reflect::has(window.as_ref(), &"gtag".into()).unwrap_or(false) {
                let _ = Reflect::set(
                    window.as_ref(),
                    &config::GA_DISABLE_FLAG.into(),
                    &JsValue::TRUE,
                );
            }

            notification::notify("You have opted out of analytics tracking.", Kind::Success);
        }) as Box<dyn FnMut(Event)>)
    };
    let _ = control.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());

    Some(OptOut {
        _click_handler: handler,
    })
}

#[cfg(test)]
mod tests {
    use crate::config;

    #[test]
    fn cookie_literal_matches_the_page_contract() {
        assert_eq!(
            config::OPT_OUT_COOKIE,
            "ga-disable=true; path=/; max-age=31536000; SameSite=Lax"
        );
    }

    #[test]
    fn cookie_carries_scope_expiry_and_same_site_policy() {
        assert!(config::OPT_OUT_COOKIE.contains("path=/"));
        assert!(config::OPT_OUT_COOKIE.contains("max-age=31536000"));
        assert!(config::OPT_OUT_COOKIE.contains("SameSite=Lax"));
    }
}
