//! Deferred image reveal driven by viewport intersection.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, Window};

pub struct LazyLoader {
    _observer: Option<IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
}

pub fn init(window: &Window, document: &Document) -> Option<LazyLoader> {
    let images = document.query_selector_all("img[loading=\"lazy\"]").ok()?;
    if images.length() == 0 {
        return None;
    }

    if !observer_supported(window) {
        // No observer support: reveal everything up front rather than never.
        for i in 0..images.length() {
            if let Some(img) = images.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                let _ = img.class_list().add_1("loaded");
            }
        }
        return Some(LazyLoader {
            _observer: None,
            _callback: None,
        });
    }

    let callback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1("loaded");
                // One-shot: a revealed image is never re-observed.
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;
    for i in 0..images.length() {
        if let Some(img) = images.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&img);
        }
    }

    Some(LazyLoader {
        _observer: Some(observer),
        _callback: Some(callback),
    })
}

fn observer_supported(window: &Window) -> bool {
    Reflect::has(window.as_ref(), &"IntersectionObserver".into()).unwrap_or(false)
}
