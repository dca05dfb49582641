use crate::components::banner::Banner;
use crate::components::footer::Footer;
use crate::components::nav_menu::NavMenu;
use crate::components::scroll_button::ScrollButton;
use crate::history::SiteHistory;
use cpbra_site::{Fragment, MenuItem};
use yew::prelude::*;
use yew_router::history::AnyHistory;
#[cfg(target_arch = "wasm32")]
use yew_router::Router;

pub mod routing;
pub mod view;

#[derive(Properties, PartialEq, Clone)]
pub struct SiteShellProps {
    /// Canonical route currently active.
    pub route: AttrValue,
    pub on_navigate: Callback<String>,
    #[prop_or_default]
    pub menu: Option<Vec<MenuItem>>,
    #[prop_or_default]
    pub year: Option<i32>,
}

/// Page chrome around the routed fragment. Holds no routing state itself.
#[function_component(SiteShell)]
pub fn site_shell(props: &SiteShellProps) -> Html {
    let fragment = Fragment::for_route(&props.route);
    html! {
        <>
            <style>{ crate::a11y::visible_focus_css() }</style>
            <a href="#main" class="sr-only">{ crate::i18n::t("site.skip") }</a>
            <header role="banner">
                <Banner />
                <ScrollButton target={Some(AttrValue::from("#main"))} />
            </header>
            <NavMenu
                active_route={props.route.clone()}
                on_navigate={props.on_navigate.clone()}
                items={props.menu.clone()}
            />
            <main id="main" role="main" data-fragment={fragment.id()}>
                { view::render_fragment(fragment, &props.on_navigate) }
            </main>
            <div id={crate::a11y::STATUS_REGION_ID} class="sr-only" role="status" aria-live="polite"></div>
            <Footer year={props.year} />
        </>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct AppInnerProps {
    /// History owned by the enclosing `<Router>`.
    pub history: AnyHistory,
    /// Same base path the `<Router>` was given.
    #[prop_or_default]
    pub basename: Option<AttrValue>,
}

/// Site shell bound to the enclosing `<Router>`.
#[function_component(AppInner)]
pub fn app_inner(props: &AppInnerProps) -> Html {
    let history = use_memo(
        (props.history.clone(), props.basename.clone()),
        |(history, basename)| {
            SiteHistory::new(history.clone(), basename.as_ref().map(ToString::to_string))
        },
    );
    let (route, on_navigate) = routing::use_site_route(&history);
    html! { <SiteShell {route} {on_navigate} /> }
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let history = use_memo((), |()| SiteHistory::browser().inner().clone());
    let basename = crate::paths::base_path().map(AttrValue::from);
    html! {
        <Router history={(*history).clone()} basename={basename.clone()}>
            <AppInner history={(*history).clone()} {basename} />
        </Router>
    }
}
