//! Navigation context binding `NavigationController` to Dioxus signals.
//!
//! The controller lives in a signal that no component reads reactively;
//! its observer mirrors every state change into `state`, which is what the
//! nav bar and the scroll-to-top button subscribe to.

use dioxus::prelude::*;

use crate::nav::{DocumentIndex, NavState, NavigationController, SectionId, Viewport};

#[cfg(target_arch = "wasm32")]
use crate::nav::ScrollSubscription;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

/// Controller with the page's viewport and document index erased.
pub type PageNavigation = NavigationController<Box<dyn Viewport>, Box<dyn DocumentIndex>>;

/// Global navigation state shared via context
#[derive(Clone, Copy)]
pub struct NavContext {
    state: Signal<NavState>,
    controller: Signal<PageNavigation>,
}

impl NavContext {
    /// Current flags (subscribes the calling component)
    pub fn state(&self) -> NavState {
        (self.state)()
    }

    pub fn toggle_menu(&self) {
        let mut controller = self.controller;
        controller.write().toggle_menu();
    }

    pub fn navigate(&self, id: SectionId) {
        let mut controller = self.controller;
        controller.write().navigate_to_section(id);
    }

    pub fn scroll_to_top(&self) {
        self.controller.peek().scroll_to_top();
    }
}

#[cfg(target_arch = "wasm32")]
fn page_navigation() -> PageNavigation {
    use super::dom::{DomDocumentIndex, WindowViewport};

    let viewport: Box<dyn Viewport> = Box::new(WindowViewport);
    let index: Box<dyn DocumentIndex> = Box::new(DomDocumentIndex);
    NavigationController::new(viewport, index)
}

#[cfg(not(target_arch = "wasm32"))]
fn page_navigation() -> PageNavigation {
    use crate::nav::{DetachedViewport, StaticDocumentIndex};

    let viewport: Box<dyn Viewport> = Box::new(DetachedViewport);
    let index: Box<dyn DocumentIndex> = Box::new(StaticDocumentIndex::all_sections());
    NavigationController::new(viewport, index)
}

/// Initialize navigation context provider - call once at app root
pub fn use_nav_provider() -> NavContext {
    let state = use_signal(NavState::default);
    let controller = use_signal(move || {
        let mut controller = page_navigation();
        let mut state = state;
        controller.subscribe(move |next| state.set(*next));
        controller
    });

    let ctx = NavContext { state, controller };
    use_context_provider(|| ctx);

    // Client-side only: follow the window's scroll position
    #[cfg(target_arch = "wasm32")]
    {
        // Hook-owned guard: removes the listener when the root unmounts
        let subscription: Rc<RefCell<Option<ScrollSubscription>>> =
            use_hook(|| Rc::new(RefCell::new(None)));

        let slot = subscription.clone();
        use_effect(move || {
            if slot.borrow().is_some() {
                return;
            }

            let mut controller = controller;
            // A reload may restore a scrolled position before any event fires
            controller.write().sync_with_viewport();

            let guard = controller
                .peek()
                .viewport()
                .subscribe_scroll(Box::new(move |offset| {
                    let mut controller = controller;
                    controller.write().on_scroll(offset);
                }));
            *slot.borrow_mut() = Some(guard);
        });

        use_drop(move || {
            subscription.borrow_mut().take();
        });
    }

    ctx
}

/// Get navigation context - use in any component
pub fn use_nav() -> NavContext {
    use_context::<NavContext>()
}
