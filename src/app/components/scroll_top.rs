//! Floating "back to top" button.

use dioxus::prelude::*;

use crate::app::components::icon::{Icon, IconKind};
use crate::app::nav_context::use_nav;

/// Shown only once the page is scrolled past the scroll-to-top threshold.
#[component]
pub fn ScrollTopButton() -> Element {
    let nav = use_nav();
    let visible = nav.state().show_scroll_top;

    rsx! {
        if visible {
            button {
                class: "scroll-top pop-in",
                "aria-label": "Scroll to top",
                onclick: move |_| nav.scroll_to_top(),
                Icon { icon: IconKind::ArrowUp, size: 24 }
            }
        }
    }
}
