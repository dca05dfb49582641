//! Glue between the core router and the browser.

use cpbra_site::{Fragment, RouteChanged, RouteStyle, navigate, resolve};
use yew::prelude::*;
use yew_router::prelude::use_location;

use crate::history::{SiteHistory, site_location};

/// Href written into menu links so they work without script too.
#[must_use]
pub fn href_for(route: &str) -> String {
    href_in_style(crate::config::site_config().route_style, route)
}

fn href_in_style(style: RouteStyle, route: &str) -> String {
    crate::paths::with_base(&style.href_for(route))
}

/// Whether a menu entry for `item_route` should be highlighted.
///
/// `/` and `/home` both count as the home entry.
#[must_use]
pub fn is_active(item_route: &str, active_route: &str) -> bool {
    item_route == active_route
        || (Fragment::for_route(item_route) == Fragment::Home
            && Fragment::for_route(active_route) == Fragment::Home)
}

/// Screen-reader announcement for a newly shown fragment.
#[must_use]
pub fn announcement(fragment: Fragment) -> String {
    let view = crate::i18n::t(&format!("route.{}", fragment.id()));
    let vars = std::collections::BTreeMap::from([("view", view.as_str())]);
    crate::i18n::tr("route.announce", Some(&vars))
}

/// Active route under the enclosing `<Router>` plus the callback that navigates.
///
/// The route is re-resolved whenever the router's location changes, which
/// covers explicit navigation and back/forward traversal alike.
#[hook]
pub fn use_site_route(history: &SiteHistory) -> (AttrValue, Callback<String>) {
    let route = use_location().map_or_else(
        || cpbra_site::route::ROOT.to_string(),
        |location| resolve(&site_location(&location, history.basename())),
    );

    use_effect_with(route.clone(), |active| {
        log::debug!("route -> {active}");
        #[cfg(target_arch = "wasm32")]
        crate::a11y::set_status(&announcement(Fragment::for_route(active)));
        || ()
    });

    let on_navigate = {
        let history = history.clone();
        let style = crate::config::site_config().route_style;
        Callback::from(move |target: String| {
            let mut history = history.clone();
            navigate(&mut history, style, &target, &mut |event: RouteChanged| {
                log::info!("navigated to {}", event.route);
            });
        })
    };

    (AttrValue::from(route), on_navigate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_entry_is_active_for_both_home_routes() {
        assert!(is_active("/", "/"));
        assert!(is_active("/", "/home"));
        assert!(is_active("/home", "/"));
        assert!(is_active("/gallery", "/gallery"));
        assert!(!is_active("/gallery", "/join"));
        assert!(!is_active("/", "/nonexistent"));
    }

    #[test]
    fn menu_hrefs_follow_style() {
        assert_eq!(href_in_style(RouteStyle::Query, "/join"), "/?page=join");
        assert_eq!(href_in_style(RouteStyle::Query, "/"), "/");
        assert_eq!(href_in_style(RouteStyle::Path, "/join"), "/join");
        assert_eq!(href_for("/schedule"), "/?page=schedule");
    }

    #[test]
    fn announcements_name_the_view() {
        assert_eq!(announcement(Fragment::Schedule), "Showing Schedule");
        assert_eq!(announcement(Fragment::NotFound), "Showing Page not found");
    }
}
