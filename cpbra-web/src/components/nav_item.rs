use crate::components::cta::{CtaButton, CtaSize, CtaVariant};
use cpbra_site::MenuItem;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NavItemProps {
    pub item: MenuItem,
    pub active: bool,
    pub on_select: Callback<String>,
}

/// One menu entry. Activation is intercepted and reported by route.
#[function_component(NavItem)]
pub fn nav_item(props: &NavItemProps) -> Html {
    let onclick = {
        let route = props.item.route.clone();
        let cb = props.on_select.clone();
        Callback::from(move |_: MouseEvent| cb.emit(route.clone()))
    };
    let variant = if props.active {
        CtaVariant::Primary
    } else {
        CtaVariant::Outline
    };
    html! {
        <CtaButton
            label={props.item.label.clone()}
            url={crate::app::routing::href_for(&props.item.route)}
            icon={Some(AttrValue::from(props.item.icon.clone()))}
            size={CtaSize::Md}
            {variant}
            current={props.active}
            onclick={Some(onclick)}
        />
    }
}
