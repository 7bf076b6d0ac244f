//! Wires one `<img>` element to a registered magnifier.

use crate::dispatch_loop::run_dispatch_loop;
use crate::events::{contacts_from_event, non_passive};
use crate::surface::ImageSurface;
use imageloupe_core::{LoupeContext, LoupeOptions, MagnifierHandle};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlImageElement, TouchEvent};

/// Register `image` with `context`, listen for touches and preload its source.
///
/// The returned handle may be dropped: the touch listener keeps the instance
/// alive for the lifetime of the page.
pub fn attach_image(
    context: &LoupeContext,
    image: HtmlImageElement,
    options: LoupeOptions,
) -> Result<MagnifierHandle, JsValue> {
    let handle = context.register(options, Box::new(ImageSurface::new(image.clone())));
    listen_touch_start(&image, &handle)?;
    preload(&image, &handle)?;
    Ok(handle)
}

fn listen_touch_start(image: &HtmlImageElement, handle: &MagnifierHandle) -> Result<(), JsValue> {
    let handle = handle.clone();
    let handler = Closure::wrap(Box::new(move |e: TouchEvent| {
        e.prevent_default();
        let contacts = contacts_from_event(&e);
        if let Some(token) = handle.context().touch_start(&handle, contacts) {
            run_dispatch_loop(handle.clone(), token);
        }
    }) as Box<dyn FnMut(_)>);

    image.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        handler.as_ref().unchecked_ref(),
        &non_passive(),
    )?;
    handler.forget();
    Ok(())
}

/// Load the image source through a detached element and report decode
/// completion to the context, which then lays out every instance.
fn preload(image: &HtmlImageElement, handle: &MagnifierHandle) -> Result<(), JsValue> {
    if image.complete() && image.natural_width() > 0 {
        handle.context().asset_loaded(handle);
        return Ok(());
    }

    let loader = HtmlImageElement::new()?;

    let loaded = handle.clone();
    let on_load = Closure::once_into_js(move || {
        loaded.context().asset_loaded(&loaded);
    });
    loader.set_onload(Some(on_load.unchecked_ref()));

    let src = image.src();
    let on_error = Closure::once_into_js(move || {
        log::warn!("Failed to load image: {}", src);
    });
    loader.set_onerror(Some(on_error.unchecked_ref()));

    loader.set_src(&image.src());
    Ok(())
}
