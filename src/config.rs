// Elements the hover/press effects attach to.
pub const INTERACTIVE_SELECTOR: &str = ".glass-btn, .contact-btn";
// Buttons whose entrance animation waits for the viewport.
pub const REVEAL_SELECTOR: &str = ".glass-btn";
// Container the parallax effect translates.
pub const PARALLAX_TARGET_SELECTOR: &str = ".main-container";

pub const BACKGROUND_IMAGE_URL: &str = "/assets/background.jpg";

#[cfg(debug_assertions)]
pub fn parallax_enabled() -> bool {
    false  // Flip locally to try the effect when running a dev build
}

#[cfg(not(debug_assertions))]
pub fn parallax_enabled() -> bool {
    false  // Off in this deployment
}
