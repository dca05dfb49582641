use crate::i18n::t;
use crate::paths::asset_path;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BannerProps {
    #[prop_or_else(|| asset_path("images/cpbra_logo.png").into())]
    pub logo_img: AttrValue,
    #[prop_or_else(|| asset_path("images/bg_img_ball_court.png").into())]
    pub bg_img: AttrValue,
    #[prop_or_else(|| t("site.tagline").into())]
    pub tagline: AttrValue,
}

/// Full-width hero with the league logo and tagline.
#[function_component(Banner)]
pub fn banner(props: &BannerProps) -> Html {
    let style = format!("background-image: url('{}')", props.bg_img);
    html! {
        <div class="hero-banner" {style}>
            <div class="side-block">
                <img src={props.logo_img.clone()} alt={t("site.logo_alt")} class="logo" />
                <h1 class="tagline">{ props.tagline.clone() }</h1>
            </div>
        </div>
    }
}
