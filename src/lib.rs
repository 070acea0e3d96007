//! Client-side interactivity for the pre-rendered landing page.
//!
//! Every feature is an independent progressive enhancement: its `init`
//! looks up the DOM anchors it needs and returns `None` when they are
//! absent, leaving the rest of the page untouched. The page itself works
//! without this module.

use std::cell::RefCell;

use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod clipboard;
mod config;
mod notification;

mod features {
    pub mod analytics_opt_out;
    pub mod comparison;
    pub mod faq;
    pub mod lazy_load;
    pub mod lightbox;
    pub mod mirrors;
    pub mod scroll_top;
    pub mod smooth_scroll;
}

/// Handles for the features wired against the current document. The set
/// lives for the page; dropping it would detach component-owned timers.
struct App {
    _mirrors: Option<features::mirrors::MirrorSelector>,
    _comparisons: Option<features::comparison::ComparisonSliders>,
    _lightbox: Option<features::lightbox::Lightbox>,
    _smooth_scroll: Option<features::smooth_scroll::SmoothScroll>,
    _lazy_images: Option<features::lazy_load::LazyLoader>,
    _opt_out: Option<features::analytics_opt_out::OptOut>,
    _scroll_top: Option<features::scroll_top::ScrollTop>,
    _faq: Option<features::faq::FaqAffordances>,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

fn init_features() {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };

    // Each initializer guards its own anchors; one inert feature never
    // blocks another.
    let app = App {
        _mirrors: features::mirrors::init(&document),
        _comparisons: features::comparison::init(&document),
        _lightbox: features::lightbox::init(&document),
        _smooth_scroll: features::smooth_scroll::init(&document),
        _lazy_images: features::lazy_load::init(&window, &document),
        _opt_out: features::analytics_opt_out::init(&window, &document),
        _scroll_top: features::scroll_top::init(&window, &document),
        _faq: features::faq::init(&document),
    };
    APP.with(|slot| *slot.borrow_mut() = Some(app));

    info!("Landing page interactivity initialized");
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };

    if document.ready_state() == "loading" {
        let once = Closure::wrap(Box::new(init_features) as Box<dyn FnMut()>);
        let attached = document
            .add_event_listener_with_callback("DOMContentLoaded", once.as_ref().unchecked_ref());
        if attached.is_ok() {
            once.forget();
        }
    } else {
        init_features();
    }
}
