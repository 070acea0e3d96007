//! Before/after image comparison: the range control clips the "after"
//! layer from the right edge.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

pub struct ComparisonSliders {
    _input_handlers: Vec<Closure<dyn FnMut(Event)>>,
}

/// Inset hiding `100 - value` percent of the after layer from the right.
fn clip_inset(value: f64) -> String {
    format!("inset(0 {}% 0 0)", 100.0 - value)
}

pub fn init(document: &Document) -> Option<ComparisonSliders> {
    let containers = document.query_selector_all(".before-after-container").ok()?;
    if containers.length() == 0 {
        return None;
    }

    let mut input_handlers = Vec::new();
    for i in 0..containers.length() {
        // A malformed container is skipped; the rest keep working.
        let Some(container) = containers.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(slider) = container.query_selector(".slider-control").ok().flatten() else {
            continue;
        };
        let Some(after) = container
            .query_selector(".before-after-image.after")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };

        let handler = {
            let after = after.clone();
            Closure::wrap(Box::new(move |event: Event| {
                let Some(input) = event
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                else {
                    return;
                };
                if let Ok(value) = input.value().parse::<f64>() {
                    let _ = after.style().set_property("clip-path", &clip_inset(value));
                }
            }) as Box<dyn FnMut(Event)>)
        };
        let _ = slider.add_event_listener_with_callback("input", handler.as_ref().unchecked_ref());
        input_handlers.push(handler);

        // Midpoint before any interaction, whatever the control's default.
        let _ = after.style().set_property("clip-path", &clip_inset(50.0));
    }

    Some(ComparisonSliders {
        _input_handlers: input_handlers,
    })
}

#[cfg(test)]
mod tests {
    use super::clip_inset;

    #[test]
    fn control_value_maps_to_the_right_edge_inset() {
        assert_eq!(clip_inset(0.0), "inset(0 100% 0 0)");
        assert_eq!(clip_inset(30.0), "inset(0 70% 0 0)");
        assert_eq!(clip_inset(100.0), "inset(0 0% 0 0)");
    }

    #[test]
    fn fractional_values_keep_their_precision() {
        assert_eq!(clip_inset(33.5), "inset(0 66.5% 0 0)");
    }

    #[test]
    fn initial_render_is_the_midpoint() {
        assert_eq!(clip_inset(50.0), "inset(0 50% 0 0)");
    }
}
