use crate::components::content_band::ContentBand;
use crate::components::cta::{CtaButton, CtaVariant};
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub on_go_home: Callback<String>,
}

/// Rendered for every route the dispatcher does not recognise.
#[function_component(NotFoundPage)]
pub fn not_found_page(props: &NotFoundProps) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_: MouseEvent| cb.emit(cpbra_site::route::ROOT.to_string()))
    };

    html! {
        <ContentBand id={Some(AttrValue::from("not-found"))}>
            <div class="not-found" aria-live="assertive">
                <h1>{ t("not_found.title") }</h1>
                <p>{ t("not_found.message") }</p>
                <CtaButton
                    label={t("not_found.back")}
                    url={crate::app::routing::href_for(cpbra_site::route::ROOT)}
                    variant={CtaVariant::Secondary}
                    onclick={Some(go_home)}
                />
            </div>
        </ContentBand>
    }
}
