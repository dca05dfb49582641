//! Navigation emitter and the history seam it writes through.

use serde::{Deserialize, Serialize};

use crate::location::Location;
use crate::route::RouteStyle;

/// Notification raised once per explicit navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteChanged {
    pub route: String,
}

/// Session history the emitter pushes into.
///
/// The browser adapter lives in the web crate; [`MemoryHistory`] backs tests
/// and the headless tester.
pub trait History {
    /// Current address, read back by the resolver on back/forward traversal.
    fn location(&self) -> Location;

    /// Append an entry without reloading the document.
    fn push(&mut self, href: &str);

    /// Reset the viewport after a navigation.
    fn scroll_to_top(&mut self) {}
}

/// Receiver of route-changed notifications.
pub trait RouteSink {
    fn route_changed(&mut self, event: RouteChanged);
}

impl<F> RouteSink for F
where
    F: FnMut(RouteChanged),
{
    fn route_changed(&mut self, event: RouteChanged) {
        self(event);
    }
}

/// Push `route` onto `history` in the given style, scroll to top and notify `sink` once.
pub fn navigate<H, S>(history: &mut H, style: RouteStyle, route: &str, sink: &mut S)
where
    H: History + ?Sized,
    S: RouteSink + ?Sized,
{
    let href = style.href_for(route);
    log::debug!("navigate {route} -> {href}");
    history.push(&href);
    history.scroll_to_top();
    sink.route_changed(RouteChanged {
        route: route.to_string(),
    });
}

/// In-memory session history with back/forward traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
    scroll_resets: usize,
}

impl MemoryHistory {
    #[must_use]
    pub fn new(initial_href: &str) -> Self {
        Self {
            entries: vec![initial_href.to_string()],
            index: 0,
            scroll_resets: 0,
        }
    }

    /// Step back one entry. Returns `false` at the start of the session.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward one entry. Returns `false` at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn current_href(&self) -> &str {
        &self.entries[self.index]
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub const fn scroll_resets(&self) -> usize {
        self.scroll_resets
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> Location {
        Location::from_href(self.current_href())
    }

    fn push(&mut self, href: &str) {
        // A push drops any forward entries, as the browser does.
        self.entries.truncate(self.index + 1);
        self.entries.push(href.to_string());
        self.index = self.entries.len() - 1;
    }

    fn scroll_to_top(&mut self) {
        self.scroll_resets += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_pushes_scrolls_and_notifies_once() {
        let mut history = MemoryHistory::default();
        let mut events = Vec::new();
        navigate(
            &mut history,
            RouteStyle::Query,
            "/schedule",
            &mut |event: RouteChanged| events.push(event),
        );

        assert_eq!(history.entries(), ["/", "/?page=schedule"]);
        assert_eq!(history.scroll_resets(), 1);
        assert_eq!(
            events,
            vec![RouteChanged {
                route: "/schedule".into()
            }]
        );
    }

    #[test]
    fn push_after_back_discards_forward_entries() {
        let mut history = MemoryHistory::new("/");
        history.push("/schedule");
        history.push("/join");
        assert!(history.back());
        history.push("/gallery");
        assert_eq!(history.entries(), ["/", "/schedule", "/gallery"]);
        assert!(!history.forward());
    }

    #[test]
    fn traversal_stops_at_bounds() {
        let mut history = MemoryHistory::new("/");
        assert!(!history.back());
        history.push("/join");
        assert!(history.back());
        assert_eq!(history.current_href(), "/");
        assert!(history.forward());
        assert_eq!(history.location().path, "/join");
    }
}
