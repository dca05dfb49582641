use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CtaVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl CtaVariant {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "cta-primary",
            Self::Secondary => "cta-secondary",
            Self::Outline => "cta-outline",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CtaSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl CtaSize {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Sm => "cta-sm",
            Self::Md => "cta-md",
            Self::Lg => "cta-lg",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CtaProps {
    pub label: AttrValue,
    pub url: AttrValue,
    #[prop_or_default]
    pub variant: CtaVariant,
    #[prop_or_default]
    pub size: CtaSize,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or_default]
    pub block: bool,
    #[prop_or_default]
    pub current: bool,
    /// Intercepts activation; the link's default action is suppressed when set.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

/// Call-to-action link styled as a button.
#[function_component(CtaButton)]
pub fn cta_button(props: &CtaProps) -> Html {
    let onclick = props.onclick.clone().map(|cb| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(e);
        })
    });
    let class = classes!(
        "cta",
        props.variant.class(),
        props.size.class(),
        props.block.then_some("cta-block"),
    );
    let icon = props.icon.as_ref().filter(|icon| !icon.is_empty()).map(|icon| {
        html! { <span class="cta-icon" data-icon={icon.clone()} aria-hidden="true"></span> }
    });

    html! {
        <a
            href={props.url.clone()}
            {class}
            {onclick}
            aria-current={props.current.then_some("page")}
        >
            { for icon }
            <span class="cta-label">{ props.label.clone() }</span>
        </a>
    }
}
