use crate::binding::attach_image;
use crate::page::shared_context;
use imageloupe_core::LoupeOptions;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

/// An image inside a viewport-sized frame that can be panned and pinch-zoomed.
#[component]
pub fn LoupeImage(
    /// Image source URL
    #[prop(into)]
    src: String,
    /// Alternative text
    #[prop(optional, into)]
    alt: String,
) -> impl IntoView {
    let image_ref = create_node_ref::<leptos::html::Img>();

    // Attach once the element is in the DOM so it can be measured
    image_ref.on_load(move |image_el| {
        let image = image_el.unchecked_ref::<HtmlImageElement>().clone();
        let attached = shared_context()
            .and_then(|context| attach_image(&context, image, LoupeOptions::default()));
        if let Err(e) = attached {
            log::error!("Failed to attach loupe: {:?}", e);
        }
    });

    view! {
        <div class="loupe-frame">
            <img node_ref=image_ref src=src alt=alt class="loupe-image" />
        </div>
    }
}
