use cpbra_site::{History, RouteChanged, RouteStyle, navigate};
use cpbra_web::app::AppInner;
use cpbra_web::history::SiteHistory;
use futures::executor::block_on;
use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::Router;
use yew_router::history::{AnyHistory, History as _, MemoryHistory};

#[derive(Properties, PartialEq)]
struct RoutedProps {
    history: AnyHistory,
    #[prop_or_default]
    basename: Option<AttrValue>,
}

#[function_component(Routed)]
fn routed(props: &RoutedProps) -> Html {
    html! {
        <Router history={props.history.clone()} basename={props.basename.clone()}>
            <AppInner history={props.history.clone()} basename={props.basename.clone()} />
        </Router>
    }
}

fn render(history: &AnyHistory, basename: Option<&str>) -> String {
    let props = RoutedProps {
        history: history.clone(),
        basename: basename.map(|base| AttrValue::from(base.to_string())),
    };
    block_on(LocalServerRenderer::<Routed>::with_props(props).render())
}

fn walk(basename: Option<&str>, routes: &[&str]) -> AnyHistory {
    let inner = AnyHistory::from(MemoryHistory::new());
    let mut history = SiteHistory::new(inner.clone(), basename.map(str::to_string));
    for route in routes {
        navigate(
            &mut history,
            RouteStyle::Query,
            route,
            &mut |_: RouteChanged| {},
        );
    }
    inner
}

#[test]
fn fresh_session_renders_home() {
    let html = render(&walk(None, &[]), None);
    assert!(html.contains("data-fragment=\"home\""));
}

#[test]
fn router_location_picks_the_fragment() {
    let html = render(&walk(None, &["/join"]), None);
    assert!(html.contains("data-fragment=\"join\""));
    assert!(html.contains("signup-form"));
}

#[test]
fn base_path_is_hidden_from_resolution() {
    let history = walk(Some("/cpbra"), &["/gallery"]);
    assert_eq!(history.location().path(), "/cpbra/");
    let html = render(&history, Some("/cpbra"));
    assert!(html.contains("data-fragment=\"gallery\""));
}

#[test]
fn path_style_routes_under_base_path_dispatch() {
    let inner = AnyHistory::from(MemoryHistory::new());
    let mut history = SiteHistory::new(inner.clone(), Some("/cpbra".to_string()));
    navigate(
        &mut history,
        RouteStyle::Path,
        "/schedule",
        &mut |_: RouteChanged| {},
    );
    assert_eq!(inner.location().path(), "/cpbra/schedule");
    let html = render(&inner, Some("/cpbra"));
    assert!(html.contains("data-fragment=\"schedule\""));
}

#[test]
fn back_traversal_re_resolves_previous_route() {
    let history = walk(None, &["/schedule", "/join"]);
    history.back();
    let html = render(&history, None);
    assert!(html.contains("data-fragment=\"schedule\""));

    history.forward();
    let html = render(&history, None);
    assert!(html.contains("data-fragment=\"join\""));
}

#[test]
fn unknown_page_param_renders_not_found() {
    let history = walk(None, &["/teams"]);
    let site = SiteHistory::new(history.clone(), None);
    assert_eq!(site.location().query, "page=teams");
    let html = render(&history, None);
    assert!(html.contains("data-fragment=\"not-found\""));
}
