//! Navigation UI state record.

use serde::Serialize;

/// Offset past which the nav bar switches to its compact, opaque style.
pub const SCROLLED_THRESHOLD: i64 = 10;

/// Offset past which the scroll-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD: i64 = 500;

/// Flags read by the renderer. Owned by `NavigationController`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavState {
    /// Mobile navigation overlay is visible
    pub menu_open: bool,
    /// Viewport is past `SCROLLED_THRESHOLD`
    pub scrolled: bool,
    /// Viewport is past `SCROLL_TOP_THRESHOLD`
    pub show_scroll_top: bool,
}

impl NavState {
    /// Copy of `self` with the scroll flags derived from `offset_y`.
    ///
    /// Plain strict comparisons; negative offsets and offsets past the end of
    /// the document are ordinary values.
    pub fn with_offset(self, offset_y: i64) -> Self {
        Self {
            scrolled: offset_y > SCROLLED_THRESHOLD,
            show_scroll_top: offset_y > SCROLL_TOP_THRESHOLD,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_false() {
        let s = NavState::default();
        assert!(!s.menu_open && !s.scrolled && !s.show_scroll_top);
    }

    #[test]
    fn thresholds_are_strict() {
        let s = NavState::default();
        assert!(!s.with_offset(10).scrolled);
        assert!(s.with_offset(11).scrolled);
        assert!(!s.with_offset(500).show_scroll_top);
        assert!(s.with_offset(501).show_scroll_top);
        assert!(!s.with_offset(-40).scrolled);
    }

    #[test]
    fn with_offset_keeps_menu_flag() {
        let open = NavState {
            menu_open: true,
            ..NavState::default()
        };
        assert!(open.with_offset(900).menu_open);
    }
}
