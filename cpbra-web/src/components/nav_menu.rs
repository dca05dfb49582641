use crate::components::nav_item::NavItem;
use crate::i18n::t;
use cpbra_site::MenuItem;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NavMenuProps {
    pub active_route: AttrValue,
    pub on_navigate: Callback<String>,
    /// Preloaded entries; the remote menu is fetched only when absent.
    #[prop_or_default]
    pub items: Option<Vec<MenuItem>>,
}

#[function_component(NavMenu)]
pub fn nav_menu(props: &NavMenuProps) -> Html {
    let items = use_state(|| props.items.clone().unwrap_or_default());
    let collapsed = use_state(|| true);

    {
        let items = items.clone();
        let preloaded = props.items.is_some();
        use_effect_with((), move |()| {
            if !preloaded {
                let url = crate::config::site_config().menu_api.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let loaded = cpbra_site::load_menu(&crate::feeds::FetchClient, &url).await;
                    items.set(loaded);
                });
            }
            || ()
        });
    }

    let on_select = {
        let collapsed = collapsed.clone();
        let cb = props.on_navigate.clone();
        Callback::from(move |route: String| {
            collapsed.set(true);
            cb.emit(route);
        })
    };
    let toggle = {
        let collapsed = collapsed.clone();
        Callback::from(move |_: MouseEvent| collapsed.set(!*collapsed))
    };

    let toggle_label = if *collapsed {
        t("nav.open")
    } else {
        t("nav.close")
    };
    let entries = items.iter().map(|item| {
        let active = crate::app::routing::is_active(&item.route, &props.active_route);
        html! {
            <NavItem key={format!("{}|{}", item.route, item.label)} item={item.clone()} {active} on_select={on_select.clone()} />
        }
    });

    html! {
        <div class={classes!("nav-menu", (!*collapsed).then_some("open"))}>
            <div class="menu-header">
                <div class="menu-title">{ t("nav.title") }</div>
                <button
                    type="button"
                    class="menu-toggle"
                    aria-expanded={(!*collapsed).to_string()}
                    aria-controls="site-nav"
                    aria-label={toggle_label}
                    onclick={toggle}
                >
                    { if *collapsed { "☰" } else { "✕" } }
                </button>
                <nav id="site-nav" class="nav-wrapper" aria-label={t("nav.label")}>
                    { for entries }
                </nav>
            </div>
        </div>
    }
}
