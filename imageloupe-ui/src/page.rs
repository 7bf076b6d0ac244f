//! Page-wide magnifier context.
//!
//! Created on first use and kept for the lifetime of the page. The first
//! creation also installs the window listeners shared by every magnifier.

use crate::events::{contacts_from_event, non_passive, viewport_size};
use imageloupe_core::LoupeContext;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::{Event, TouchEvent};

thread_local! {
    /// None until the first magnifier is attached.
    static CONTEXT: RefCell<Option<LoupeContext>> = const { RefCell::new(None) };
}

/// Get the page context, creating it and its window listeners on first call.
pub fn shared_context() -> Result<LoupeContext, JsValue> {
    let existing = CONTEXT.with(|cell| cell.borrow().clone());
    if let Some(context) = existing {
        return Ok(context);
    }

    let context = LoupeContext::new(viewport_size()?);
    install_window_listeners(&context)?;
    CONTEXT.with(|cell| *cell.borrow_mut() = Some(context.clone()));
    Ok(context)
}

fn install_window_listeners(context: &LoupeContext) -> Result<(), JsValue> {
    if !context.claim_resize_listener() {
        return Ok(());
    }
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;

    let resize_context = context.clone();
    let resize_handler = Closure::wrap(Box::new(move |_e: Event| match viewport_size() {
        Ok(size) => resize_context.resize(size),
        Err(e) => log::warn!("Failed to read viewport size: {:?}", e),
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("resize", resize_handler.as_ref().unchecked_ref())?;
    resize_handler.forget();

    // Touch move and end only matter while a magnifier gesture holds contacts;
    // other touches on the page keep their default scrolling.
    let move_context = context.clone();
    let move_handler = Closure::wrap(Box::new(move |e: TouchEvent| {
        if move_context.contacts().is_none() {
            return;
        }
        e.prevent_default();
        move_context.touch_move(contacts_from_event(&e));
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        move_handler.as_ref().unchecked_ref(),
        &non_passive(),
    )?;
    move_handler.forget();

    let end_context = context.clone();
    let end_handler = Closure::wrap(Box::new(move |e: TouchEvent| {
        if end_context.contacts().is_none() {
            return;
        }
        e.prevent_default();
        end_context.touch_end();
    }) as Box<dyn FnMut(_)>);
    for event_type in ["touchend", "touchcancel"] {
        window.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            end_handler.as_ref().unchecked_ref(),
            &non_passive(),
        )?;
    }
    end_handler.forget();

    log::debug!("Window listeners installed");
    Ok(())
}
