//! Download mirror picker: one button per injected mirror descriptor,
//! with the download panel kept in sync with the selection.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use serde::Deserialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::Reflect;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

use crate::clipboard;
use crate::config;
use crate::notification::{self, Kind};

const COPY_LABEL_REVERT_MS: u32 = 2_000;
const COPY_ICON_LABEL: &str = "<svg width=\"16\" height=\"16\" fill=\"currentColor\" viewBox=\"0 0 20 20\"><path d=\"M8 3a1 1 0 011-1h2a1 1 0 110 2H9a1 1 0 01-1-1z\"/><path d=\"M6 3a2 2 0 00-2 2v11a2 2 0 002 2h8a2 2 0 002-2V5a2 2 0 00-2-2 3 3 0 01-3 3H9a3 3 0 01-3-3z\"/></svg> Copy";

/// One download source, as injected by the page before this module runs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Mirror {
    pub name: String,
    pub url: String,
    pub size: String,
    pub updated: String,
    pub checksum: String,
}

/// DOM anchor points the selector writes into.
struct Panel {
    buttons: Element,
    info: HtmlElement,
    download: Element,
    size: Element,
    updated: Element,
    checksum: Element,
}

pub struct MirrorSelector {
    _select_handlers: Vec<Closure<dyn FnMut()>>,
    _copy_handler: Option<Closure<dyn FnMut()>>,
    _revert_timer: Rc<RefCell<Option<Timeout>>>,
}

/// Reads the injected mirror list; `None` when the page provided nothing
/// usable.
fn injected_mirrors(window: &Window) -> Option<Vec<Mirror>> {
    let value = Reflect::get(window.as_ref(), &config::MIRRORS_GLOBAL.into()).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    serde_wasm_bindgen::from_value(value).ok()
}

pub fn init(document: &Document) -> Option<MirrorSelector> {
    let window = web_sys::window()?;
    let mirrors = Rc::new(injected_mirrors(&window)?);

    let panel = Rc::new(Panel {
        buttons: document.get_element_by_id("mirrorButtons")?,
        info: document
            .get_element_by_id("downloadInfo")?
            .dyn_into::<HtmlElement>()
            .ok()?,
        download: document.get_element_by_id("downloadButton")?,
        size: document.get_element_by_id("fileSize")?,
        updated: document.get_element_by_id("lastUpdated")?,
        checksum: document.get_element_by_id("checksumValue")?,
    });

    let selected: Rc<RefCell<Option<usize>>> = Rc::new(RefCell::new(None));

    let mut select_handlers = Vec::with_capacity(mirrors.len());
    for (index, mirror) in mirrors.iter().enumerate() {
        let Ok(button) = document.create_element("button") else {
            continue;
        };
        button.set_class_name("btn-mirror");
        button.set_text_content(Some(&mirror.name));
        let _ = button.set_attribute("data-mirror-index", &index.to_string());

        let handler = {
            let panel = Rc::clone(&panel);
            let mirrors = Rc::clone(&mirrors);
            let selected = Rc::clone(&selected);
            Closure::wrap(Box::new(move || {
                select_mirror(&panel, &mirrors, &selected, index);
            }) as Box<dyn FnMut()>)
        };
        let _ = button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        select_handlers.push(handler);
        let _ = panel.buttons.append_child(&button);
    }

    let revert_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let copy_handler = document.get_element_by_id("copyChecksum").map(|control| {
        let handler = {
            let control = control.clone();
            let mirrors = Rc::clone(&mirrors);
            let selected = Rc::clone(&selected);
            let revert_timer = Rc::clone(&revert_timer);
            Closure::wrap(Box::new(move || {
                let current = *selected.borrow();
                let Some(mirror) = current.and_then(|i| mirrors.get(i).cloned()) else {
                    return;
                };
                let control = control.clone();
                let revert_timer = Rc::clone(&revert_timer);
                spawn_local(async move {
                    if clipboard::copy_text(&mirror.checksum).await {
                        notification::notify("Checksum copied to clipboard!", Kind::Success);
                        control.set_text_content(Some("\u{2713} Copied"));
                        let label_target = control.clone();
                        // Replacing the cell drops any pending revert, so
                        // rapid copies keep a single label timeline.
                        *revert_timer.borrow_mut() =
                            Some(Timeout::new(COPY_LABEL_REVERT_MS, move || {
                                label_target.set_inner_html(COPY_ICON_LABEL);
                            }));
                    } else {
                        notification::notify("Failed to copy checksum", Kind::Error);
                    }
                });
            }) as Box<dyn FnMut()>)
        };
        let _ = control.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        handler
    });

    if !mirrors.is_empty() {
        select_mirror(&panel, &mirrors, &selected, 0);
    }

    Some(MirrorSelector {
        _select_handlers: select_handlers,
        _copy_handler: copy_handler,
        _revert_timer: revert_timer,
    })
}

fn select_mirror(panel: &Panel, mirrors: &[Mirror], selected: &RefCell<Option<usize>>, index: usize) {
    let Some(mirror) = mirrors.get(index) else {
        return;
    };
    *selected.borrow_mut() = Some(index);

    // Exactly one active button among the siblings.
    if let Ok(buttons) = panel.buttons.query_selector_all(".btn-mirror") {
        for i in 0..buttons.length() {
            let Some(button) = buttons
                .item(i)
                .and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            let _ = button
                .class_list()
                .toggle_with_force("active", i as usize == index);
        }
    }

    panel.size.set_text_content(Some(&mirror.size));
    panel.updated.set_text_content(Some(&mirror.updated));
    panel.checksum.set_text_content(Some(&mirror.checksum));
    let _ = panel.download.set_attribute("href", &mirror.url);

    let _ = panel.info.style().set_property("display", "block");
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Nearest);
    panel
        .info
        .scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::Mirror;

    #[test]
    fn deserializes_the_injected_shape() {
        let mirrors: Vec<Mirror> = serde_json::from_str(
            r#"[
                {
                    "name": "Europe (Frankfurt)",
                    "url": "https://mirror.example.eu/release.zip",
                    "size": "4.2 GB",
                    "updated": "2025-11-02",
                    "checksum": "sha256:1f2e3d4c5b6a"
                },
                {
                    "name": "US East",
                    "url": "https://mirror.example.us/release.zip",
                    "size": "4.2 GB",
                    "updated": "2025-11-02",
                    "checksum": "sha256:1f2e3d4c5b6a"
                }
            ]"#,
        )
        .expect("mirror list should deserialize");

        assert_eq!(mirrors.len(), 2);
        assert_eq!(mirrors[0].name, "Europe (Frankfurt)");
        assert_eq!(mirrors[1].checksum, "sha256:1f2e3d4c5b6a");
    }

    #[test]
    fn an_empty_list_is_valid_and_yields_no_descriptors() {
        let mirrors: Vec<Mirror> = serde_json::from_str("[]").expect("empty list is valid");
        assert!(mirrors.is_empty());
    }

    #[test]
    fn a_descriptor_missing_a_field_is_rejected() {
        let result: Result<Vec<Mirror>, _> =
            serde_json::from_str(r#"[{"name": "EU", "url": "https://mirror.example.eu"}]"#);
        assert!(result.is_err());
    }
}
