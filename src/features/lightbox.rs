//! Modal gallery viewer over the page's screenshot thumbnails.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlElement, HtmlImageElement, KeyboardEvent};

struct GalleryImage {
    src: String,
    alt: String,
}

fn wrap_next(index: usize, len: usize) -> usize {
    (index + 1) % len
}

fn wrap_prev(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

struct State {
    modal: HtmlElement,
    image: HtmlImageElement,
    images: Vec<GalleryImage>,
    current: Cell<usize>,
}

impl State {
    fn show(&self, index: usize) {
        let Some(entry) = self.images.get(index) else {
            return;
        };
        self.current.set(index);
        self.image.set_src(&entry.src);
        self.image.set_alt(&entry.alt);
    }

    fn open(&self, index: usize) {
        self.show(index);
        let _ = self.modal.style().set_property("display", "flex");
        if let Some(body) = page_body() {
            let _ = body.style().set_property("overflow", "hidden");
        }
    }

    fn close(&self) {
        let _ = self.modal.style().set_property("display", "none");
        if let Some(body) = page_body() {
            let _ = body.style().remove_property("overflow");
        }
    }

    fn is_open(&self) -> bool {
        self.modal
            .style()
            .get_property_value("display")
            .map(|display| display == "flex")
            .unwrap_or(false)
    }

    fn step_next(&self) {
        self.show(wrap_next(self.current.get(), self.images.len()));
    }

    fn step_prev(&self) {
        self.show(wrap_prev(self.current.get(), self.images.len()));
    }
}

fn page_body() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}

pub struct Lightbox {
    _thumbnail_handlers: Vec<Closure<dyn FnMut()>>,
    _thumbnail_key_handlers: Vec<Closure<dyn FnMut(KeyboardEvent)>>,
    _control_handlers: Vec<Closure<dyn FnMut(Event)>>,
    _document_keys: Closure<dyn FnMut(KeyboardEvent)>,
}

pub fn init(document: &Document) -> Option<Lightbox> {
    let modal = document
        .get_element_by_id("lightbox")?
        .dyn_into::<HtmlElement>()
        .ok()?;
    let image = document
        .get_element_by_id("lightboxImage")?
        .dyn_into::<HtmlImageElement>()
        .ok()?;
    let thumbnails = document.query_selector_all(".screenshot-item").ok()?;
    if thumbnails.length() == 0 {
        return None;
    }

    let mut images = Vec::with_capacity(thumbnails.length() as usize);
    let mut items = Vec::with_capacity(thumbnails.length() as usize);
    for i in 0..thumbnails.length() {
        let Some(item) = thumbnails
            .item(i)
            .and_then(|n| n.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let thumb = item
            .query_selector("img")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok());
        let (src, alt) = thumb.map(|img| (img.src(), img.alt())).unwrap_or_default();
        images.push(GalleryImage { src, alt });
        items.push(item);
    }

    let state = Rc::new(State {
        modal: modal.clone(),
        image,
        images,
        current: Cell::new(0),
    });

    let mut thumbnail_handlers = Vec::with_capacity(items.len());
    let mut thumbnail_key_handlers = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let open = {
            let state = Rc::clone(&state);
            Closure::wrap(Box::new(move || state.open(index)) as Box<dyn FnMut()>)
        };
        let _ = item.add_event_listener_with_callback("click", open.as_ref().unchecked_ref());
        thumbnail_handlers.push(open);

        // Thumbnails act as buttons for keyboard users.
        let _ = item.set_attribute("tabindex", "0");
        let _ = item.set_attribute("role", "button");
        let keys = {
            let item = item.clone();
            Closure::wrap(Box::new(move |event: KeyboardEvent| {
                let key = event.key();
                if key == "Enter" || key == " " {
                    event.prevent_default();
                    item.click();
                }
            }) as Box<dyn FnMut(KeyboardEvent)>)
        };
        let _ = item.add_event_listener_with_callback("keydown", keys.as_ref().unchecked_ref());
        thumbnail_key_handlers.push(keys);
    }

    let mut control_handlers = Vec::new();
    if let Some(close) = modal.query_selector(".lightbox-close").ok().flatten() {
        let handler = {
            let state = Rc::clone(&state);
            Closure::wrap(Box::new(move |_: Event| state.close()) as Box<dyn FnMut(Event)>)
        };
        let _ = close.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        control_handlers.push(handler);
    }
    if let Some(prev) = modal.query_selector(".lightbox-prev").ok().flatten() {
        let handler = {
            let state = Rc::clone(&state);
            Closure::wrap(Box::new(move |_: Event| state.step_prev()) as Box<dyn FnMut(Event)>)
        };
        let _ = prev.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        control_handlers.push(handler);
    }
    if let Some(next) = modal.query_selector(".lightbox-next").ok().flatten() {
        let handler = {
            let state = Rc::clone(&state);
            Closure::wrap(Box::new(move |_: Event| state.step_next()) as Box<dyn FnMut(Event)>)
        };
        let _ = next.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        control_handlers.push(handler);
    }

    // Backdrop clicks close the modal; clicks on the image itself do not.
    {
        let handler = {
            let state = Rc::clone(&state);
            let modal = modal.clone();
            Closure::wrap(Box::new(move |event: Event| {
                if event.target().as_ref() == Some(modal.unchecked_ref::<EventTarget>()) {
                    state.close();
                }
            }) as Box<dyn FnMut(Event)>)
        };
        let _ = modal.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        control_handlers.push(handler);
    }

    // Document-level keys are ignored entirely while the modal is closed.
    let document_keys = {
        let state = Rc::clone(&state);
        Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if !state.is_open() {
                return;
            }
            match event.key().as_str() {
                "Escape" => state.close(),
                "ArrowLeft" => state.step_prev(),
                "ArrowRight" => state.step_next(),
                _ => {}
            }
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };
    let _ = document
        .add_event_listener_with_callback("keydown", document_keys.as_ref().unchecked_ref());

    Some(Lightbox {
        _thumbnail_handlers: thumbnail_handlers,
        _thumbnail_key_handlers: thumbnail_key_handlers,
        _control_handlers: control_handlers,
        _document_keys: document_keys,
    })
}

#[cfg(test)]
mod tests {
    use super::{wrap_next, wrap_prev};

    #[test]
    fn next_wraps_from_last_to_first() {
        assert_eq!(wrap_next(3, 4), 0);
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        assert_eq!(wrap_prev(0, 4), 3);
    }

    #[test]
    fn stepping_forward_twice_from_index_two_of_four_lands_on_zero() {
        let next = wrap_next(2, 4);
        assert_eq!(next, 3);
        assert_eq!(wrap_next(next, 4), 0);
    }

    #[test]
    fn a_single_image_gallery_stays_at_zero_in_both_directions() {
        assert_eq!(wrap_next(0, 1), 0);
        assert_eq!(wrap_prev(0, 1), 0);
    }

    #[test]
    fn interior_indices_step_without_wrapping() {
        assert_eq!(wrap_next(1, 4), 2);
        assert_eq!(wrap_prev(2, 4), 1);
    }
}
