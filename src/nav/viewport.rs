//! Seams between the controller and the page it drives.
//!
//! The browser implementations live in `app::dom`; everything here is
//! plain Rust so the controller can be exercised without a DOM.

use std::collections::HashMap;

use super::section::SectionId;

/// Opaque handle to an on-page location a viewport can scroll to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnchorRef(String);

impl AnchorRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Element id the anchor points at.
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl From<SectionId> for AnchorRef {
    fn from(id: SectionId) -> Self {
        Self::new(id.as_str())
    }
}

/// Destination of a smooth-scroll command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    Anchor(AnchorRef),
    Offset(i64),
}

/// Scrollable window abstraction.
///
/// `smooth_scroll_to` is fire-and-forget: a later command supersedes an
/// in-flight animation.
pub trait Viewport {
    fn current_scroll_offset(&self) -> i64;

    fn smooth_scroll_to(&self, target: ScrollTarget);

    /// Register `callback` for every scroll event. The listener stays
    /// registered until the returned guard is dropped.
    fn subscribe_scroll(&self, callback: Box<dyn FnMut(i64)>) -> ScrollSubscription;
}

/// Lookup from section to on-page anchor.
pub trait DocumentIndex {
    fn resolve(&self, id: SectionId) -> Option<AnchorRef>;
}

impl<T: Viewport + ?Sized> Viewport for Box<T> {
    fn current_scroll_offset(&self) -> i64 {
        (**self).current_scroll_offset()
    }

    fn smooth_scroll_to(&self, target: ScrollTarget) {
        (**self).smooth_scroll_to(target)
    }

    fn subscribe_scroll(&self, callback: Box<dyn FnMut(i64)>) -> ScrollSubscription {
        (**self).subscribe_scroll(callback)
    }
}

impl<T: DocumentIndex + ?Sized> DocumentIndex for Box<T> {
    fn resolve(&self, id: SectionId) -> Option<AnchorRef> {
        (**self).resolve(id)
    }
}

/// RAII guard for a scroll listener. Dropping it releases the listener.
#[must_use = "dropping the subscription removes the scroll listener"]
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Guard with nothing to release (no listener was attached).
    pub fn detached() -> Self {
        Self { release: None }
    }

    pub fn is_attached(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// Viewport used during server-side rendering: pinned at the top, ignores
/// scroll commands, never emits events.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedViewport;

impl Viewport for DetachedViewport {
    fn current_scroll_offset(&self) -> i64 {
        0
    }

    fn smooth_scroll_to(&self, target: ScrollTarget) {
        tracing::trace!("Ignoring scroll to {:?} on detached viewport", target);
    }

    fn subscribe_scroll(&self, _callback: Box<dyn FnMut(i64)>) -> ScrollSubscription {
        ScrollSubscription::detached()
    }
}

/// Document index backed by a fixed map.
#[derive(Debug, Clone, Default)]
pub struct StaticDocumentIndex {
    anchors: HashMap<SectionId, AnchorRef>,
}

impl StaticDocumentIndex {
    /// Index resolving every section to the anchor of the same id.
    pub fn all_sections() -> Self {
        SectionId::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, id: SectionId, anchor: AnchorRef) {
        self.anchors.insert(id, anchor);
    }

    pub fn remove(&mut self, id: SectionId) -> Option<AnchorRef> {
        self.anchors.remove(&id)
    }
}

impl FromIterator<SectionId> for StaticDocumentIndex {
    fn from_iter<I: IntoIterator<Item = SectionId>>(iter: I) -> Self {
        Self {
            anchors: iter.into_iter().map(|id| (id, AnchorRef::from(id))).collect(),
        }
    }
}

impl DocumentIndex for StaticDocumentIndex {
    fn resolve(&self, id: SectionId) -> Option<AnchorRef> {
        self.anchors.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn subscription_releases_once_on_drop() {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let sub = ScrollSubscription::new(move || counter.set(counter.get() + 1));
        assert!(sub.is_attached());
        drop(sub);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn detached_subscription_is_inert() {
        let sub = ScrollSubscription::detached();
        assert!(!sub.is_attached());
    }

    #[test]
    fn static_index_resolves_known_sections() {
        let mut index = StaticDocumentIndex::all_sections();
        assert_eq!(
            index.resolve(SectionId::Skills),
            Some(AnchorRef::new("skills"))
        );
        index.remove(SectionId::Skills);
        assert_eq!(index.resolve(SectionId::Skills), None);
        assert!(StaticDocumentIndex::default()
            .resolve(SectionId::About)
            .is_none());
    }

    #[test]
    fn detached_viewport_never_subscribes() {
        let vp = DetachedViewport;
        assert_eq!(vp.current_scroll_offset(), 0);
        let sub = vp.subscribe_scroll(Box::new(|_| {}));
        assert!(!sub.is_attached());
    }
}
