//! Router-owned session history behind the core [`History`] seam.

use cpbra_site::{History, Location};
use yew_router::history::{AnyHistory, BrowserHistory, History as _, Location as RouterLocation};

/// The history `yew-router` listens to, plus the deployment base path.
///
/// Pushing through it re-renders everything under the `<Router>` sharing
/// `inner`; the resolver only ever sees base-relative locations.
#[derive(Clone)]
pub struct SiteHistory {
    inner: AnyHistory,
    basename: Option<String>,
}

impl SiteHistory {
    #[must_use]
    pub fn new(inner: AnyHistory, basename: Option<String>) -> Self {
        Self { inner, basename }
    }

    /// The browser session shared with `<BrowserRouter>`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(
            AnyHistory::from(BrowserHistory::new()),
            crate::paths::base_path(),
        )
    }

    #[must_use]
    pub const fn inner(&self) -> &AnyHistory {
        &self.inner
    }

    #[must_use]
    pub fn basename(&self) -> Option<&str> {
        self.basename.as_deref()
    }
}

/// Location as the resolver should see it, with `basename` removed from the path.
#[must_use]
pub fn site_location(location: &RouterLocation, basename: Option<&str>) -> Location {
    let path = location.path();
    let relative = match basename.and_then(|base| path.strip_prefix(base)) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    };
    Location::new(relative, location.query_str())
}

impl History for SiteHistory {
    fn location(&self) -> Location {
        site_location(&self.inner.location(), self.basename.as_deref())
    }

    fn push(&mut self, href: &str) {
        let target = Location::from_href(href);
        let path = match self.basename.as_deref() {
            Some(base) => format!("{base}{}", target.path),
            None => target.path.clone(),
        };
        let pairs = target.query_pairs();
        if pairs.is_empty() {
            self.inner.push(path);
        } else if let Err(err) = self.inner.push_with_query(path, pairs) {
            log::warn!("could not encode query for {href}: {err}");
        }
    }

    fn scroll_to_top(&mut self) {
        #[cfg(target_arch = "wasm32")]
        crate::dom::scroll_to_top();
    }
}
