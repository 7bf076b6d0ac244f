use crate::components::LoupeImage;
use leptos::*;

/// Images shown by the demo gallery, relative to the served `dist/` root.
const GALLERY: &[(&str, &str)] = &[
    ("images/harbour.jpg", "Harbour at dusk"),
    ("images/market.jpg", "Covered market"),
];

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="loupe-gallery">
            {GALLERY
                .iter()
                .map(|&(src, alt)| view! { <LoupeImage src=src alt=alt /> })
                .collect_view()}
        </main>
    }
}
