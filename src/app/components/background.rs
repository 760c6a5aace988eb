//! Fixed, blurred background blobs behind every section.

use dioxus::prelude::*;

use crate::app::motion::BACKGROUND_BLOBS;

#[component]
pub fn AnimatedBackground() -> Element {
    rsx! {
        div { class: "background", "aria-hidden": "true",
            for blob in BACKGROUND_BLOBS {
                div { key: "{blob.class}", class: blob.class, style: blob.style() }
            }
        }
    }
}
