use serde::{Deserialize, Serialize};

use crate::route;

/// View fragment rendered for a canonical route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fragment {
    Home,
    Schedule,
    Join,
    Gallery,
    NotFound,
}

impl Fragment {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Schedule,
        Self::Join,
        Self::Gallery,
        Self::NotFound,
    ];

    /// Match is exact: case, trailing slashes and empty strings all land on `NotFound`.
    #[must_use]
    pub fn for_route(route: &str) -> Self {
        match route {
            route::ROOT | route::HOME => Self::Home,
            route::SCHEDULE => Self::Schedule,
            route::JOIN => Self::Join,
            route::GALLERY => Self::Gallery,
            _ => Self::NotFound,
        }
    }

    /// Canonical route that renders this fragment.
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Home => route::ROOT,
            Self::Schedule => route::SCHEDULE,
            Self::Join => route::JOIN,
            Self::Gallery => route::GALLERY,
            Self::NotFound => route::NOT_FOUND,
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Schedule => "schedule",
            Self::Join => "join",
            Self::Gallery => "gallery",
            Self::NotFound => "not-found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_routes_map_exactly() {
        assert_eq!(Fragment::for_route("/"), Fragment::Home);
        assert_eq!(Fragment::for_route("/home"), Fragment::Home);
        assert_eq!(Fragment::for_route("/schedule"), Fragment::Schedule);
        assert_eq!(Fragment::for_route("/join"), Fragment::Join);
        assert_eq!(Fragment::for_route("/gallery"), Fragment::Gallery);
        assert_eq!(Fragment::for_route("/404"), Fragment::NotFound);
    }

    #[test]
    fn everything_else_is_not_found() {
        for route in ["", "/schedule/", "/Schedule", "/JOIN", "gallery", "//", "/nonexistent"] {
            assert_eq!(Fragment::for_route(route), Fragment::NotFound, "{route:?}");
        }
    }

    #[test]
    fn fragment_routes_dispatch_to_themselves() {
        for fragment in Fragment::ALL {
            assert_eq!(Fragment::for_route(fragment.route()), fragment);
        }
    }
}
