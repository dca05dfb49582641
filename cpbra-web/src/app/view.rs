use crate::pages::gallery::GalleryPage;
use crate::pages::home::HomePage;
use crate::pages::join::JoinPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::schedule::SchedulePage;
use cpbra_site::Fragment;
use yew::prelude::*;

/// The single dispatch point from fragment to page.
#[must_use]
pub fn render_fragment(fragment: Fragment, on_navigate: &Callback<String>) -> Html {
    match fragment {
        Fragment::Home => html! { <HomePage /> },
        Fragment::Schedule => html! { <SchedulePage /> },
        Fragment::Join => html! { <JoinPage /> },
        Fragment::Gallery => html! { <GalleryPage /> },
        Fragment::NotFound => html! { <NotFoundPage on_go_home={on_navigate.clone()} /> },
    }
}
