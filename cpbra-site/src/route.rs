//! Canonical route derivation and href encoding.

use serde::{Deserialize, Serialize};

use crate::location::Location;

pub const ROOT: &str = "/";
pub const HOME: &str = "/home";
pub const SCHEDULE: &str = "/schedule";
pub const JOIN: &str = "/join";
pub const GALLERY: &str = "/gallery";
pub const NOT_FOUND: &str = "/404";

/// Query parameter carrying the route in [`RouteStyle::Query`] URLs.
pub const PAGE_PARAM: &str = "page";

/// Derive the canonical route for a location.
///
/// A non-empty `page` query parameter wins; a bare `/` stays `/`; any other
/// path loses a single trailing slash. Resolution never fails, unknown routes
/// are left for the dispatcher to reject.
#[must_use]
pub fn resolve(location: &Location) -> String {
    if let Some(page) = location
        .query_param(PAGE_PARAM)
        .filter(|page| !page.is_empty())
    {
        return format!("/{page}");
    }
    if location.path == ROOT {
        return ROOT.to_string();
    }
    location
        .path
        .strip_suffix('/')
        .unwrap_or(&location.path)
        .to_string()
}

/// How navigation writes a route into the address bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteStyle {
    /// Clean paths: `/schedule`.
    Path,
    /// Query form: `/?page=schedule`; the root route stays `/`.
    #[default]
    Query,
}

impl RouteStyle {
    /// Href to push for `route`, which is expected to start with `/`.
    #[must_use]
    pub fn href_for(self, route: &str) -> String {
        match self {
            Self::Path => route.to_string(),
            Self::Query if route == ROOT => ROOT.to_string(),
            Self::Query => format!("/?{PAGE_PARAM}={}", route.trim_start_matches('/')),
        }
    }
}
