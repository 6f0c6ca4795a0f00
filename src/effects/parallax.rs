use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::config;

const RANGE_PX: f64 = 5.0;

/// Maps a pointer position inside a `width` x `height` viewport to a
/// container offset of -RANGE_PX..=RANGE_PX per axis, zero at the center.
pub fn offset_for(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    (
        (x / width - 0.5) * RANGE_PX * 2.0,
        (y / height - 0.5) * RANGE_PX * 2.0,
    )
}

/// Pointer-driven background drift on the main container. Mouse moves are
/// coalesced to one style write per animation frame; only the latest
/// sample within a frame is applied.
pub struct Parallax {
    _listener: EventListener,
}

impl Parallax {
    pub fn attach() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let container = document
            .query_selector(config::PARALLAX_TARGET_SELECTOR)
            .ok()??
            .dyn_into::<HtmlElement>()
            .ok()?;

        let latest = Rc::new(Cell::new((0.0f64, 0.0f64)));
        let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

        let listener = EventListener::new(&document, "mousemove", {
            let latest = latest.clone();
            let frame = frame.clone();
            move |event| {
                let pointer = match event.dyn_ref::<MouseEvent>() {
                    Some(e) => (e.client_x() as f64, e.client_y() as f64),
                    None => return,
                };
                latest.set(pointer);

                let mut pending = frame.borrow_mut();
                if pending.is_some() {
                    // A frame is already queued; it will pick up the new sample.
                    return;
                }
                let latest = latest.clone();
                let slot = frame.clone();
                let container = container.clone();
                *pending = Some(request_animation_frame(move |_| {
                    slot.borrow_mut().take();
                    let (x, y) = latest.get();
                    let (width, height) = viewport_size();
                    let (dx, dy) = offset_for(x, y, width, height);
                    let _ = container
                        .style()
                        .set_property("transform", &format!("translate({}px, {}px)", dx, dy));
                }));
            }
        });

        Some(Self {
            _listener: listener,
        })
    }
}

fn viewport_size() -> (f64, f64) {
    match web_sys::window() {
        Some(window) => (
            window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
            window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
        ),
        None => (0.0, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_viewport_is_neutral() {
        assert_eq!(offset_for(960.0, 540.0, 1920.0, 1080.0), (0.0, 0.0));
    }

    #[test]
    fn corners_reach_full_range() {
        assert_eq!(offset_for(0.0, 0.0, 1920.0, 1080.0), (-RANGE_PX, -RANGE_PX));
        assert_eq!(
            offset_for(1920.0, 1080.0, 1920.0, 1080.0),
            (RANGE_PX, RANGE_PX)
        );
    }

    #[test]
    fn empty_viewport_stays_still() {
        assert_eq!(offset_for(10.0, 10.0, 0.0, 0.0), (0.0, 0.0));
    }
}
