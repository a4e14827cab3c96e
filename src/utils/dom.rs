//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{AddEventListenerOptions, Storage, TouchEvent, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// Milliseconds since the epoch, from the JS clock.
#[inline]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Current viewport width in CSS pixels.
pub fn viewport_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

/// Set `document.title`.
pub fn set_document_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// Scroll the window back to the top.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Replace the URL hash without adding to browser history.
///
/// The hash should include the '#' prefix.
pub fn replace_hash(hash: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(hash));
    }
}

// =============================================================================
// Scroll Lock
// =============================================================================

/// Blocks touch scrolling of the page while the menu is open.
///
/// iOS Safari scrolls the document underneath a fixed overlay even with
/// `overflow: hidden` on the body; a non-passive `touchmove` listener that
/// cancels the event is the only reliable fix. Elements marked with
/// `data-scroll-lock-allow` (the menu itself) keep scrolling.
///
/// The listener is removed when the lock is dropped.
pub struct ScrollLock {
    listener: Closure<dyn FnMut(TouchEvent)>,
}

impl ScrollLock {
    /// Attribute that exempts an element subtree from the lock.
    pub const ALLOW_ATTR: &'static str = "data-scroll-lock-allow";

    pub fn install() -> Option<Self> {
        let document = window()?.document()?;
        let listener = Closure::wrap(Box::new(move |event: TouchEvent| {
            let allowed = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest(&format!("[{}]", Self::ALLOW_ATTR)).ok().flatten())
                .is_some();
            if !allowed {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(TouchEvent)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        document
            .add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                listener.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

        Some(Self { listener })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        if let Some(document) = window().and_then(|w| w.document()) {
            let _ = document.remove_event_listener_with_callback(
                "touchmove",
                self.listener.as_ref().unchecked_ref(),
            );
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_viewport_width_is_measured() {
        assert!(viewport_width().is_some_and(|w| w > 0.0));
    }

    #[wasm_bindgen_test]
    fn test_document_title() {
        set_document_title("Folio test");
        let title = window().unwrap().document().unwrap().title();
        assert_eq!(title, "Folio test");
    }

    #[wasm_bindgen_test]
    fn test_scroll_lock_installs_and_drops() {
        let lock = ScrollLock::install();
        assert!(lock.is_some());
        drop(lock);
    }
}
