//! FAQ entries read as interactive for keyboard and pointer users.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub struct FaqAffordances {
    _prepared: usize,
}

pub fn init(document: &Document) -> Option<FaqAffordances> {
    let items = document.query_selector_all(".faq-item").ok()?;
    if items.length() == 0 {
        return None;
    }

    let mut prepared = 0;
    for i in 0..items.length() {
        let Some(item) = items.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(question) = item
            .query_selector(".faq-question")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        if item.query_selector(".faq-answer").ok().flatten().is_none() {
            continue;
        }

        let _ = question.style().set_property("cursor", "pointer");
        let _ = question.set_attribute("tabindex", "0");
        let _ = question.set_attribute("role", "button");
        // Answers are rendered expanded; the attribute reflects that.
        let _ = question.set_attribute("aria-expanded", "true");
        prepared += 1;
    }

    Some(FaqAffordances {
        _prepared: prepared,
    })
}
