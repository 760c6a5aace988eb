//! Section navigation and scroll tracking.
//!
//! Framework-agnostic: the Dioxus layer in `app::nav_context` binds the
//! controller to signals, and `app::dom` supplies the browser-backed
//! `Viewport` and `DocumentIndex`.

pub mod controller;
pub mod section;
pub mod state;
pub mod viewport;

pub use controller::{NavigationController, ObserverId};
pub use section::SectionId;
pub use state::{NavState, SCROLLED_THRESHOLD, SCROLL_TOP_THRESHOLD};
pub use viewport::{
    AnchorRef, DetachedViewport, DocumentIndex, ScrollSubscription, ScrollTarget,
    StaticDocumentIndex, Viewport,
};
