use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::config;

fn is_touch_device() -> bool {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return false,
    };
    if js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("ontouchstart")).unwrap_or(false) {
        return true;
    }
    window.navigator().max_touch_points() > 0
}

/// Hover effects mean nothing on a touch screen; drop the pointer cursor.
pub fn apply_touch_adjustments() {
    if !is_touch_device() {
        return;
    }
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    if let Ok(nodes) = document.query_selector_all(config::INTERACTIVE_SELECTOR) {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                let _ = el.style().set_property("cursor", "default");
            }
        }
    }
}

/// Stops every animation on the page when the user prefers reduced motion.
pub fn apply_reduced_motion() {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let reduced = window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    if !reduced {
        return;
    }
    if let Some(document) = window.document() {
        if let Ok(nodes) = document.query_selector_all("*") {
            for i in 0..nodes.length() {
                if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                    let _ = el.style().set_property("animation", "none");
                }
            }
        }
    }
}
