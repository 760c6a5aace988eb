//! Navigation controller: scroll flags, mobile menu and section jumps.

use super::section::SectionId;
use super::state::NavState;
use super::viewport::{DocumentIndex, ScrollTarget, Viewport};

/// Handle returned by [`NavigationController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&NavState)>;

/// Translates scroll offsets and user intents into `NavState` updates and
/// viewport commands.
///
/// Runs on the UI thread only. Observers are called synchronously after each
/// state change, never for a no-op update.
pub struct NavigationController<V, D> {
    viewport: V,
    index: D,
    state: NavState,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
}

impl<V: Viewport, D: DocumentIndex> NavigationController<V, D> {
    pub fn new(viewport: V, index: D) -> Self {
        Self {
            viewport,
            index,
            state: NavState::default(),
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Apply a scroll event. Returns true if any flag changed.
    pub fn on_scroll(&mut self, offset_y: i64) -> bool {
        self.apply(self.state.with_offset(offset_y))
    }

    /// Re-derive the scroll flags from the viewport's current position.
    pub fn sync_with_viewport(&mut self) -> bool {
        let offset = self.viewport.current_scroll_offset();
        self.on_scroll(offset)
    }

    pub fn toggle_menu(&mut self) {
        let next = NavState {
            menu_open: !self.state.menu_open,
            ..self.state
        };
        self.apply(next);
    }

    /// Smooth-scroll to `id` and close the menu.
    ///
    /// An id the document index cannot resolve is ignored: no command is
    /// issued and the state is left untouched. Returns whether the jump
    /// happened.
    pub fn navigate_to_section(&mut self, id: SectionId) -> bool {
        let Some(anchor) = self.index.resolve(id) else {
            tracing::debug!("No anchor for section '{}', ignoring navigation", id);
            return false;
        };

        // Scroll is issued first so observers of the menu close see it in flight
        self.viewport.smooth_scroll_to(ScrollTarget::Anchor(anchor));
        let next = NavState {
            menu_open: false,
            ..self.state
        };
        self.apply(next);
        true
    }

    pub fn scroll_to_top(&self) {
        self.viewport.smooth_scroll_to(ScrollTarget::Offset(0));
    }

    /// Register a callback invoked with the new state after each change.
    pub fn subscribe(&mut self, observer: impl FnMut(&NavState) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    fn apply(&mut self, next: NavState) -> bool {
        if next == self.state {
            return false;
        }
        self.state = next;
        for (_, observer) in self.observers.iter_mut() {
            observer(&next);
        }
        true
    }
}

impl<V, D> std::fmt::Debug for NavigationController<V, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationController")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
