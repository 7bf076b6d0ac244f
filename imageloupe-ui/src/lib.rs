mod app;
mod binding;
mod components;
mod dispatch_loop;
mod events;
mod page;
mod surface;

pub use binding::attach_image;
pub use components::LoupeImage;
pub use page::shared_context;
pub use surface::ImageSurface;

use imageloupe_core::LoupeOptions;
use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

fn init_logging() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}

/// Mount the demo gallery.
#[wasm_bindgen]
pub fn hydrate() {
    init_logging();
    leptos::mount_to_body(app::App);
}

/// Attach a magnifier to every `<img>` matching `selector`.
///
/// `options` is any JS object (or `undefined`); its keys are kept on each
/// instance but do not change behavior. Returns how many images were attached.
#[wasm_bindgen]
pub fn attach(selector: &str, options: JsValue) -> Result<usize, JsValue> {
    init_logging();

    let context = shared_context()?;
    let options = options_from_js(&options);
    let document = web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let nodes = document.query_selector_all(selector)?;
    let mut attached = 0;
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else {
            continue;
        };
        match node.dyn_into::<HtmlImageElement>() {
            Ok(image) => {
                attach_image(&context, image, options.clone())?;
                attached += 1;
            }
            Err(_) => log::warn!("Skipping non-image element matched by '{}'", selector),
        }
    }

    log::info!("Attached {} loupe(s) for '{}'", attached, selector);
    Ok(attached)
}

fn options_from_js(options: &JsValue) -> LoupeOptions {
    if options.is_undefined() || options.is_null() {
        return LoupeOptions::default();
    }
    let json = match js_sys::JSON::stringify(options) {
        Ok(json) => String::from(json),
        Err(e) => {
            log::warn!("Ignoring unserializable loupe options: {:?}", e);
            return LoupeOptions::default();
        }
    };
    LoupeOptions::from_json(&json).unwrap_or_else(|e| {
        log::warn!("{}; using defaults", e);
        LoupeOptions::default()
    })
}
