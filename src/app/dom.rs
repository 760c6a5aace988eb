//! Browser-backed viewport and document index (wasm32 only).

use wasm_bindgen::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::nav::{AnchorRef, DocumentIndex, ScrollSubscription, ScrollTarget, SectionId, Viewport};

/// The browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowViewport;

fn to_offset(y: f64) -> i64 {
    y.round() as i64
}

impl Viewport for WindowViewport {
    fn current_scroll_offset(&self) -> i64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .map(to_offset)
            .unwrap_or(0)
    }

    fn smooth_scroll_to(&self, target: ScrollTarget) {
        let Some(window) = web_sys::window() else {
            return;
        };

        match target {
            ScrollTarget::Offset(top) => {
                let options = ScrollToOptions::new();
                options.set_top(top as f64);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
            ScrollTarget::Anchor(anchor) => {
                let element = window
                    .document()
                    .and_then(|d| d.get_element_by_id(anchor.id()));
                // Element may have been unmounted since it was resolved
                if let Some(element) = element {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    element.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
        }
    }

    fn subscribe_scroll(&self, mut callback: Box<dyn FnMut(i64)>) -> ScrollSubscription {
        let Some(window) = web_sys::window() else {
            return ScrollSubscription::detached();
        };

        let reader = window.clone();
        let listener = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let offset = reader.scroll_y().map(to_offset).unwrap_or(0);
            callback(offset);
        }) as Box<dyn FnMut(_)>);

        if let Err(e) =
            window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
        {
            web_sys::console::error_1(&format!("Scroll: failed to add listener: {:?}", e).into());
            return ScrollSubscription::detached();
        }
        web_sys::console::log_1(&"Scroll: listener attached".into());

        ScrollSubscription::new(move || {
            let _ = window
                .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            web_sys::console::log_1(&"Scroll: listener removed".into());
            drop(listener);
        })
    }
}

/// Resolves sections to elements present in the live DOM.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomDocumentIndex;

impl DocumentIndex for DomDocumentIndex {
    fn resolve(&self, id: SectionId) -> Option<AnchorRef> {
        web_sys::window()?
            .document()?
            .get_element_by_id(id.as_str())
            .map(|_| AnchorRef::from(id))
    }
}
