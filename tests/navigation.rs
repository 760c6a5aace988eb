//! Navigation controller behavior tests
//!
//! Drives `NavigationController` through a fake viewport that records every
//! scroll command and lets the test fire scroll events, the way the browser
//! window does on the client.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use portfolio_site::nav::{
    AnchorRef, DocumentIndex, NavState, NavigationController, ScrollSubscription, ScrollTarget,
    SectionId, StaticDocumentIndex, Viewport,
};

// =============================================================================
// Test viewport
// =============================================================================

type Listener = Rc<RefCell<Option<Box<dyn FnMut(i64)>>>>;

#[derive(Clone, Default)]
struct FakeViewport {
    offset: Rc<Cell<i64>>,
    commands: Rc<RefCell<Vec<ScrollTarget>>>,
    listener: Listener,
    released: Rc<Cell<u32>>,
}

impl FakeViewport {
    /// Simulate the user scrolling to `offset`.
    fn scroll(&self, offset: i64) {
        self.offset.set(offset);
        if let Some(listener) = self.listener.borrow_mut().as_mut() {
            listener(offset);
        }
    }

    fn commands(&self) -> Vec<ScrollTarget> {
        self.commands.borrow().clone()
    }
}

impl Viewport for FakeViewport {
    fn current_scroll_offset(&self) -> i64 {
        self.offset.get()
    }

    fn smooth_scroll_to(&self, target: ScrollTarget) {
        self.commands.borrow_mut().push(target);
    }

    fn subscribe_scroll(&self, callback: Box<dyn FnMut(i64)>) -> ScrollSubscription {
        *self.listener.borrow_mut() = Some(callback);
        let listener = self.listener.clone();
        let released = self.released.clone();
        ScrollSubscription::new(move || {
            listener.borrow_mut().take();
            released.set(released.get() + 1);
        })
    }
}

fn controller_with(
    index: StaticDocumentIndex,
) -> (NavigationController<FakeViewport, StaticDocumentIndex>, FakeViewport) {
    let viewport = FakeViewport::default();
    (NavigationController::new(viewport.clone(), index), viewport)
}

fn controller() -> (NavigationController<FakeViewport, StaticDocumentIndex>, FakeViewport) {
    controller_with(StaticDocumentIndex::all_sections())
}

// =============================================================================
// Scroll flags
// =============================================================================

/// Flags are a pure function of the latest offset, whatever came before.
#[test]
fn scroll_flags_follow_offset_without_hysteresis() {
    let offsets: Vec<i64> = (-20..=20)
        .chain(490..=510)
        .chain([0, 10, 11, 500, 501, 10_000, -1, i64::MAX, i64::MIN])
        .collect();

    for &prior in &[0_i64, 11, 501, -5] {
        for &offset in &offsets {
            let (mut nav, _) = controller();
            nav.on_scroll(prior);
            nav.on_scroll(offset);
            let state = nav.state();
            assert_eq!(state.scrolled, offset > 10, "offset {offset} after {prior}");
            assert_eq!(
                state.show_scroll_top,
                offset > 500,
                "offset {offset} after {prior}"
            );
        }
    }
}

#[test]
fn scroll_sequence_produces_expected_flags() {
    let (mut nav, _) = controller();
    let mut scrolled = Vec::new();
    let mut show_top = Vec::new();

    for offset in [0, 5, 15, 600, 3] {
        nav.on_scroll(offset);
        scrolled.push(nav.state().scrolled);
        show_top.push(nav.state().show_scroll_top);
    }

    assert_eq!(scrolled, [false, false, true, true, false]);
    assert_eq!(show_top, [false, false, false, true, false]);
}

#[test]
fn replaying_an_offset_is_idempotent() {
    let (mut nav, _) = controller();
    let notified = Rc::new(Cell::new(0));
    let counter = notified.clone();
    nav.subscribe(move |_| counter.set(counter.get() + 1));

    assert!(nav.on_scroll(700));
    let after_first = nav.state();
    for _ in 0..100 {
        assert!(!nav.on_scroll(700));
    }
    assert_eq!(nav.state(), after_first);
    assert_eq!(notified.get(), 1);
}

#[test]
fn scroll_does_not_touch_menu() {
    let (mut nav, _) = controller();
    nav.toggle_menu();
    nav.on_scroll(900);
    nav.on_scroll(0);
    assert!(nav.state().menu_open);
}

// =============================================================================
// Menu and navigation
// =============================================================================

#[test]
fn double_toggle_returns_to_closed() {
    let (mut nav, _) = controller();
    nav.toggle_menu();
    nav.toggle_menu();
    assert!(!nav.state().menu_open);
}

#[test]
fn navigation_closes_menu_for_every_section() {
    for id in SectionId::ALL {
        for start_open in [false, true] {
            let (mut nav, viewport) = controller();
            if start_open {
                nav.toggle_menu();
            }

            assert!(nav.navigate_to_section(id));
            assert!(!nav.state().menu_open, "{id} left the menu open");
            assert_eq!(
                viewport.commands(),
                [ScrollTarget::Anchor(AnchorRef::new(id.as_str()))]
            );
        }
    }
}

#[test]
fn scroll_command_precedes_menu_close() {
    let (mut nav, viewport) = controller();
    nav.toggle_menu();

    let commands_at_close = Rc::new(Cell::new(None));
    let seen = commands_at_close.clone();
    let log = viewport.commands.clone();
    nav.subscribe(move |state| {
        if !state.menu_open {
            seen.set(Some(log.borrow().len()));
        }
    });

    nav.navigate_to_section(SectionId::Education);
    assert_eq!(commands_at_close.get(), Some(1));
}

#[test]
fn unresolvable_section_changes_nothing() {
    let mut index = StaticDocumentIndex::all_sections();
    index.remove(SectionId::Skills);
    let (mut nav, viewport) = controller_with(index);

    nav.toggle_menu();
    nav.on_scroll(650);
    let before = nav.state();

    assert!(!nav.navigate_to_section(SectionId::Skills));
    assert_eq!(nav.state(), before);
    assert!(viewport.commands().is_empty());

    // Other sections still resolve
    assert!(nav.navigate_to_section(SectionId::Contact));
    assert!(!nav.state().menu_open);
}

#[test]
fn last_navigation_command_wins() {
    let (mut nav, viewport) = controller();
    nav.navigate_to_section(SectionId::About);
    nav.navigate_to_section(SectionId::Contact);
    nav.scroll_to_top();

    assert_eq!(
        viewport.commands(),
        [
            ScrollTarget::Anchor(AnchorRef::new("about")),
            ScrollTarget::Anchor(AnchorRef::new("contact")),
            ScrollTarget::Offset(0),
        ]
    );
}

#[test]
fn scroll_to_top_keeps_menu_state() {
    let (mut nav, viewport) = controller();
    nav.toggle_menu();
    nav.scroll_to_top();

    assert!(nav.state().menu_open);
    assert_eq!(viewport.commands(), [ScrollTarget::Offset(0)]);
}

// =============================================================================
// Viewport wiring
// =============================================================================

#[test]
fn sync_picks_up_restored_scroll_position() {
    let (mut nav, viewport) = controller();
    viewport.offset.set(1200);

    assert!(nav.sync_with_viewport());
    assert_eq!(
        nav.state(),
        NavState {
            menu_open: false,
            scrolled: true,
            show_scroll_top: true,
        }
    );
}

#[test]
fn scroll_subscription_feeds_controller_until_dropped() {
    let viewport = FakeViewport::default();
    let nav = Rc::new(RefCell::new(NavigationController::new(
        viewport.clone(),
        StaticDocumentIndex::all_sections(),
    )));

    let target = nav.clone();
    let subscription = viewport.subscribe_scroll(Box::new(move |offset| {
        target.borrow_mut().on_scroll(offset);
    }));

    viewport.scroll(40);
    assert!(nav.borrow().state().scrolled);

    drop(subscription);
    assert_eq!(viewport.released.get(), 1);

    // Listener is gone: further events do not reach the controller
    viewport.scroll(0);
    assert!(nav.borrow().state().scrolled);
}

#[test]
fn boxed_collaborators_behave_like_concrete_ones() {
    let viewport = FakeViewport::default();
    let boxed_viewport: Box<dyn Viewport> = Box::new(viewport.clone());
    let boxed_index: Box<dyn DocumentIndex> = Box::new(StaticDocumentIndex::all_sections());
    let mut nav = NavigationController::new(boxed_viewport, boxed_index);

    nav.toggle_menu();
    assert!(nav.navigate_to_section(SectionId::Projects));
    assert!(!nav.state().menu_open);
    assert_eq!(viewport.commands().len(), 1);
}
