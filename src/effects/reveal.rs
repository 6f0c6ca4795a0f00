use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry};

use crate::config;

/// Reveal-on-scroll for the glass buttons: the entrance animation stays
/// paused until the element first intersects the viewport. One-shot; an
/// element scrolled back out stays revealed.
pub struct Reveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Reveal {
    pub fn attach() -> Option<Self> {
        let document = web_sys::window()?.document()?;

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                        Ok(entry) => entry,
                        Err(_) => continue,
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    run_animation(&target);
                    observer.unobserve(&target);
                }
            },
        );

        let observer = match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(_) => {
                // No observer support: show everything rather than leaving
                // the buttons stuck on the paused first frame.
                reveal_all(&document);
                return None;
            }
        };

        let nodes = document.query_selector_all(config::REVEAL_SELECTOR).ok()?;
        for i in 0..nodes.length() {
            if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                observer.observe(&el);
            }
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Reveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn run_animation(target: &web_sys::Element) {
    if let Some(el) = target.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property("animation-play-state", "running");
    }
}

fn reveal_all(document: &Document) {
    if let Ok(nodes) = document.query_selector_all(config::REVEAL_SELECTOR) {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                run_animation(&el);
            }
        }
    }
}
