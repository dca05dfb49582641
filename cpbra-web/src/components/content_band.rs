use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BandVariant {
    #[default]
    Light,
    Dark,
    Accent,
}

impl BandVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Light => "band-light",
            Self::Dark => "band-dark",
            Self::Accent => "band-accent",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ContentBandProps {
    #[prop_or_default]
    pub variant: BandVariant,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ContentBand)]
pub fn content_band(props: &ContentBandProps) -> Html {
    html! {
        <section id={props.id.clone()} class={classes!("content-band", props.variant.class())}>
            <div class="container">{ props.children.clone() }</div>
        </section>
    }
}
