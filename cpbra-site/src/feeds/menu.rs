use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::FeedError;
use crate::route;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub route: String,
    #[serde(default)]
    pub icon: String,
}

impl MenuItem {
    #[must_use]
    pub fn new(label: &str, route: &str, icon: &str) -> Self {
        Self {
            label: label.to_string(),
            route: route.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Menu entry as feeds send it: `title`/`location` are older spellings of
/// `label`/`route`, and any of them may be missing.
#[derive(Deserialize)]
struct RawMenuItem {
    label: Option<String>,
    title: Option<String>,
    route: Option<String>,
    location: Option<String>,
    icon: Option<String>,
}

impl RawMenuItem {
    /// `None` when the entry has nowhere to go.
    fn into_item(self) -> Option<MenuItem> {
        let present = |value: Option<String>| value.filter(|text| !text.is_empty());
        let Some(route) = present(self.route).or_else(|| present(self.location)) else {
            log::debug!("dropping menu entry without a route");
            return None;
        };
        let label = present(self.label)
            .or_else(|| present(self.title))
            .unwrap_or_else(|| route.clone());
        Some(MenuItem {
            label,
            route,
            icon: self.icon.unwrap_or_default(),
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MenuPayload {
    Wrapped { items: Vec<RawMenuItem> },
    Bare(Vec<RawMenuItem>),
}

static FALLBACK_MENU: Lazy<Vec<MenuItem>> = Lazy::new(|| {
    vec![
        MenuItem::new("Home", route::ROOT, "home"),
        MenuItem::new("Schedule", route::SCHEDULE, "event"),
        MenuItem::new("Gallery", route::GALLERY, "image:collections"),
        MenuItem::new("Join", route::JOIN, "add"),
    ]
});

/// Menu shown whenever the remote menu cannot be loaded.
#[must_use]
pub fn fallback_menu() -> Vec<MenuItem> {
    FALLBACK_MENU.clone()
}

/// Accepts `{"items": [...]}` or a bare array. Entries without a route are
/// skipped; the rest of the list is kept.
///
/// # Errors
///
/// Returns [`FeedError::Parse`] when the body matches neither shape.
pub fn parse_menu(body: &str) -> Result<Vec<MenuItem>, FeedError> {
    let payload: MenuPayload = serde_json::from_str(body)?;
    let (MenuPayload::Wrapped { items } | MenuPayload::Bare(items)) = payload;
    Ok(items.into_iter().filter_map(RawMenuItem::into_item).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_order_is_fixed() {
        let routes: Vec<_> = fallback_menu().into_iter().map(|item| item.route).collect();
        assert_eq!(routes, ["/", "/schedule", "/gallery", "/join"]);
    }

    #[test]
    fn accepts_title_location_aliases() {
        let items =
            parse_menu(r#"{"items":[{"title":"Teams","location":"/teams"}]}"#).expect("menu");
        assert_eq!(items, vec![MenuItem::new("Teams", "/teams", "")]);
    }

    #[test]
    fn accepts_bare_array() {
        let items = parse_menu(r#"[{"label":"Home","route":"/","icon":"home"}]"#).expect("menu");
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn label_wins_over_title_when_both_are_sent() {
        let items = parse_menu(
            r#"{"items":[{"label":"Home","title":"Home page","route":"/"},{"label":"Teams","route":"/teams"}]}"#,
        )
        .expect("menu");
        assert_eq!(
            items,
            vec![MenuItem::new("Home", "/", ""), MenuItem::new("Teams", "/teams", "")]
        );
    }

    #[test]
    fn unlabeled_entries_fall_back_to_their_route() {
        let items = parse_menu(r#"[{"route":"/rules"},{"label":"Join","location":"/join"}]"#)
            .expect("menu");
        assert_eq!(
            items,
            vec![MenuItem::new("/rules", "/rules", ""), MenuItem::new("Join", "/join", "")]
        );
    }

    #[test]
    fn entries_without_route_are_dropped() {
        let items = parse_menu(
            r#"{"items":[{"label":"Nowhere"},{"label":"Blank","route":""},{"label":"Gallery","route":"/gallery","icon":"image"}]}"#,
        )
        .expect("menu");
        assert_eq!(items, vec![MenuItem::new("Gallery", "/gallery", "image")]);
    }

    #[test]
    fn rejects_object_without_items() {
        assert!(parse_menu(r#"{"entries":[]}"#).is_err());
    }
}
