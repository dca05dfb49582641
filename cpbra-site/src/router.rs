use crate::dispatch::Fragment;
use crate::navigation::{History, RouteChanged, navigate};
use crate::route::{RouteStyle, resolve};

/// Owner of the active route: the single value the view reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveRoute {
    route: String,
}

impl ActiveRoute {
    #[must_use]
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
        }
    }

    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }

    #[must_use]
    pub fn fragment(&self) -> Fragment {
        Fragment::for_route(&self.route)
    }

    pub fn apply(&mut self, event: RouteChanged) {
        self.route = event.route;
    }
}

/// Top-level router state: a history, the encoding style and the active route.
#[derive(Debug, Clone)]
pub struct SiteRouter<H> {
    history: H,
    style: RouteStyle,
    active: ActiveRoute,
}

impl<H: History> SiteRouter<H> {
    /// Resolve the initial route from whatever the history currently points at.
    pub fn new(history: H, style: RouteStyle) -> Self {
        let active = ActiveRoute::new(resolve(&history.location()));
        Self {
            history,
            style,
            active,
        }
    }

    /// Explicit navigation: one history push, one notification.
    pub fn navigate(&mut self, route: &str) -> Fragment {
        let active = &mut self.active;
        navigate(
            &mut self.history,
            self.style,
            route,
            &mut |event: RouteChanged| active.apply(event),
        );
        self.active.fragment()
    }

    /// Back/forward traversal: re-derive from the history's location.
    pub fn sync_from_history(&mut self) -> Fragment {
        let route = resolve(&self.history.location());
        if route != self.active.route() {
            log::debug!("history traversal {} -> {route}", self.active.route());
        }
        self.active = ActiveRoute::new(route);
        self.active.fragment()
    }

    #[must_use]
    pub fn active_route(&self) -> &str {
        self.active.route()
    }

    #[must_use]
    pub fn fragment(&self) -> Fragment {
        self.active.fragment()
    }

    #[must_use]
    pub const fn style(&self) -> RouteStyle {
        self.style
    }

    #[must_use]
    pub const fn history(&self) -> &H {
        &self.history
    }

    pub const fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::MemoryHistory;

    #[test]
    fn initial_route_comes_from_history() {
        let router = SiteRouter::new(MemoryHistory::new("/?page=gallery"), RouteStyle::Query);
        assert_eq!(router.active_route(), "/gallery");
        assert_eq!(router.fragment(), Fragment::Gallery);
    }

    #[test]
    fn navigate_updates_route_and_history() {
        let mut router = SiteRouter::new(MemoryHistory::default(), RouteStyle::Path);
        assert_eq!(router.navigate("/join"), Fragment::Join);
        assert_eq!(router.active_route(), "/join");
        assert_eq!(router.history().current_href(), "/join");
    }

    #[test]
    fn sync_reads_traversed_entry() {
        let mut router = SiteRouter::new(MemoryHistory::default(), RouteStyle::Query);
        router.navigate("/schedule");
        router.history_mut().back();
        assert_eq!(router.sync_from_history(), Fragment::Home);
        assert_eq!(router.active_route(), "/");
    }
}
