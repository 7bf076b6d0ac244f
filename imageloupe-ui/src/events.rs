//! Conversions from browser events and window state into core types.

use imageloupe_core::{Contact, ContactList, ViewportSize};
use wasm_bindgen::JsValue;
use web_sys::{AddEventListenerOptions, TouchEvent};

/// Snapshot every finger currently on the screen, in page coordinates.
pub fn contacts_from_event(event: &TouchEvent) -> ContactList {
    let touches = event.touches();
    (0..touches.length())
        .filter_map(|i| touches.get(i))
        .map(|touch| Contact::new(touch.page_x() as f64, touch.page_y() as f64))
        .collect()
}

/// Current `innerWidth` x `innerHeight` of the window.
pub fn viewport_size() -> Result<ViewportSize, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(ViewportSize::new(width, height))
}

/// Listener options that allow `preventDefault` on touch events.
pub fn non_passive() -> AddEventListenerOptions {
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    options
}
