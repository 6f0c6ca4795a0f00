use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

use crate::config;

/// Loads the page background off the critical path: fetch the image first,
/// apply it to the body only once it has arrived.
pub fn load_deferred() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    let image = match HtmlImageElement::new() {
        Ok(image) => image,
        Err(_) => return,
    };

    let onload = Closure::<dyn FnMut()>::new(move || {
        if let Some(body) = document.body() {
            let _ = body.style().set_property(
                "background-image",
                &format!("url('{}')", config::BACKGROUND_IMAGE_URL),
            );
        }
    });
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    // The image element and its handler live until the load fires.
    onload.forget();
    image.set_src(config::BACKGROUND_IMAGE_URL);
}
