//! Sidebar open/closed state and the navigation destination table.

use serde::Serialize;

/// One sidebar navigation destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Destination {
    /// User-facing label.
    pub label: &'static str,
    /// Route path the destination links to.
    pub path: &'static str,
    /// Icon identifier, resolved by the stylesheet.
    pub icon: &'static str,
}

/// The navigation list, in render order.
pub const DESTINATIONS: &[Destination] = &[
    Destination {
        label: "Inicio",
        path: "/dashboard",
        icon: "home",
    },
    Destination {
        label: "Mi Plan",
        path: "/plan",
        icon: "book",
    },
    Destination {
        label: "Calendario",
        path: "/calendar",
        icon: "calendar",
    },
    Destination {
        label: "Progreso",
        path: "/progress",
        icon: "bar-chart-2",
    },
    Destination {
        label: "Chat IA",
        path: "/chat",
        icon: "message-square",
    },
    Destination {
        label: "Ajustes",
        path: "/settings",
        icon: "settings",
    },
];

/// Find the destination matching the current route path, if any.
///
/// Exact equality; an unknown path highlights nothing.
pub fn active_destination(current_path: &str) -> Option<&'static Destination> {
    DESTINATIONS.iter().find(|d| d.path == current_path)
}

/// Open/closed state for the navigation sidebar.
///
/// On a regular viewport the panel is always shown and this state is
/// inert; it only governs visibility while the viewport is compact. The
/// stored flag survives viewport changes, so switching back to compact
/// resumes from the last explicit open/closed choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub is_open: bool,
}

impl SidebarState {
    /// Flip between open and closed. Wired to the toggle control.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Close when the viewport is compact; no-op otherwise.
    ///
    /// Fired by backdrop taps and by selecting a navigation destination.
    pub fn dismiss_if_compact(&mut self, is_compact: bool) {
        if is_compact {
            self.is_open = false;
        }
    }

    /// The visibility the render layer honors.
    pub fn is_visible(self, is_compact: bool) -> bool {
        !is_compact || self.is_open
    }

    /// Whether the full-screen backdrop should be mounted.
    pub fn shows_backdrop(self, is_compact: bool) -> bool {
        is_compact && self.is_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_closed() {
        assert!(!SidebarState::default().is_open);
    }

    #[test]
    fn test_toggle_alternates() {
        let mut state = SidebarState::default();
        for round in 1..=6 {
            state.toggle();
            // Odd number of toggles leaves the sidebar open, even closes it.
            assert_eq!(state.is_open, round % 2 == 1);
        }
    }

    #[test]
    fn test_dismiss_closes_when_compact() {
        let mut state = SidebarState { is_open: true };
        state.dismiss_if_compact(true);
        assert!(!state.is_open);
    }

    #[test]
    fn test_dismiss_is_noop_when_regular() {
        let mut open = SidebarState { is_open: true };
        open.dismiss_if_compact(false);
        assert!(open.is_open);

        let mut closed = SidebarState::default();
        closed.dismiss_if_compact(false);
        assert!(!closed.is_open);
    }

    #[test]
    fn test_always_visible_on_regular_viewport() {
        assert!(SidebarState { is_open: false }.is_visible(false));
        assert!(SidebarState { is_open: true }.is_visible(false));
    }

    #[test]
    fn test_visibility_tracks_open_state_when_compact() {
        assert!(!SidebarState { is_open: false }.is_visible(true));
        assert!(SidebarState { is_open: true }.is_visible(true));
    }

    #[test]
    fn test_backdrop_only_when_compact_and_open() {
        assert!(SidebarState { is_open: true }.shows_backdrop(true));
        assert!(!SidebarState { is_open: false }.shows_backdrop(true));
        assert!(!SidebarState { is_open: true }.shows_backdrop(false));
    }

    #[test]
    fn test_state_survives_viewport_changes() {
        let mut state = SidebarState::default();
        state.toggle();
        // Regular viewport ignores the flag but does not reset it.
        assert!(state.is_visible(false));
        assert!(state.is_open);
        assert!(state.is_visible(true));
    }

    #[test]
    fn test_active_destination_exact_match() {
        let active = active_destination("/calendar").expect("known path");
        assert_eq!(active.label, "Calendario");

        assert!(active_destination("/unknown").is_none());
        // Prefix or suffix near-misses do not highlight anything.
        assert!(active_destination("/calendar/").is_none());
        assert!(active_destination("calendar").is_none());
    }

    #[test]
    fn test_destination_table_order() {
        let paths: Vec<&str> = DESTINATIONS.iter().map(|d| d.path).collect();
        assert_eq!(
            paths,
            [
                "/dashboard",
                "/plan",
                "/calendar",
                "/progress",
                "/chat",
                "/settings"
            ]
        );
    }
}
