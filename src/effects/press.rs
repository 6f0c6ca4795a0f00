use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config;

const PRESSED_TRANSFORM: &str = "translateY(-1px) scale(0.98)";
const RELEASED_TRANSFORM: &str = "translateY(-3px) scale(1)";
const RELEASE_DELAY_MS: u32 = 100;

/// Two-phase click feedback: depress immediately, release after a beat.
/// Every click schedules its own release, so rapid clicks interleave
/// rather than queue.
pub struct PressFeedback {
    _listeners: Vec<EventListener>,
}

impl PressFeedback {
    pub fn attach() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let nodes = document.query_selector_all(config::INTERACTIVE_SELECTOR).ok()?;
        let mut listeners = Vec::new();
        for i in 0..nodes.length() {
            let el = match nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                Some(el) => el,
                None => continue,
            };
            let button = el.clone();
            listeners.push(EventListener::new(&el, "click", move |_| {
                let style = button.style();
                let _ = style.set_property("transition", "transform 0.1s ease");
                let _ = style.set_property("transform", PRESSED_TRANSFORM);

                let button = button.clone();
                Timeout::new(RELEASE_DELAY_MS, move || {
                    let _ = button.style().set_property("transform", RELEASED_TRANSFORM);
                })
                .forget();
            }));
        }
        if listeners.is_empty() {
            return None;
        }
        Some(Self {
            _listeners: listeners,
        })
    }
}
