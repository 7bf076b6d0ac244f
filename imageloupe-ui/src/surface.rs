//! `Surface` implementation over a real `<img>` element.
//! The image's parent element acts as the container sized to the viewport.

use imageloupe_core::{ContentSize, Layout, Surface, Transform, DEFAULT_CONFIG};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, HtmlImageElement};

pub struct ImageSurface {
    image: HtmlImageElement,
}

impl ImageSurface {
    pub fn new(image: HtmlImageElement) -> Self {
        Self { image }
    }

    fn container(&self) -> Option<HtmlElement> {
        self.image
            .parent_element()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
    }

    /// Horizontal and vertical padding plus border, in px.
    fn box_insets(&self) -> Result<(f64, f64), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let Some(style) = window.get_computed_style(&self.image)? else {
            return Ok((0.0, 0.0));
        };
        let sum = |sides: [&str; 4]| -> Result<f64, JsValue> {
            let mut total = 0.0;
            for side in sides {
                total += parse_px(&style.get_property_value(side)?);
            }
            Ok(total)
        };
        Ok((
            sum([
                "padding-left",
                "padding-right",
                "border-left-width",
                "border-right-width",
            ])?,
            sum([
                "padding-top",
                "padding-bottom",
                "border-top-width",
                "border-bottom-width",
            ])?,
        ))
    }

    fn write_layout(&self, layout: &Layout) -> Result<(), JsValue> {
        if let Some(container) = self.container() {
            let style = container.style();
            style.set_property("width", &format!("{}px", layout.container_width))?;
            style.set_property("height", &format!("{}px", layout.container_height))?;
        }
        self.image
            .style()
            .set_property("margin", &layout.margin_css())
    }
}

fn parse_px(value: &str) -> f64 {
    value.trim().trim_end_matches("px").parse().unwrap_or(0.0)
}

impl Surface for ImageSurface {
    fn content_size(&self) -> ContentSize {
        // offsetWidth ignores CSS transforms, so the current scale does not leak in.
        // Padding and border are taken off to leave the content box.
        let (horizontal, vertical) = self.box_insets().unwrap_or_else(|e| {
            log::warn!("Failed to read image insets: {:?}", e);
            (0.0, 0.0)
        });
        ContentSize::new(
            self.image.offset_width() as f64 - horizontal,
            self.image.offset_height() as f64 - vertical,
        )
    }

    fn activate(&self) {
        if let Err(e) = self.image.class_list().add_1(DEFAULT_CONFIG.active_class) {
            log::warn!("Failed to activate image: {:?}", e);
        }
    }

    fn apply_layout(&self, layout: &Layout) {
        if let Err(e) = self.write_layout(layout) {
            log::warn!("Failed to apply layout: {:?}", e);
        }
    }

    fn apply_transform(&self, transform: &Transform) {
        if let Err(e) = self
            .image
            .style()
            .set_property("transform", &transform.to_css())
        {
            log::warn!("Failed to apply transform: {:?}", e);
        }
    }
}
