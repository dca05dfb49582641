use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScrollButtonProps {
    /// Selector to bring into view; without one the page moves down a screen.
    #[prop_or_default]
    pub target: Option<AttrValue>,
}

#[function_component(ScrollButton)]
pub fn scroll_button(props: &ScrollButtonProps) -> Html {
    let onclick = {
        let target = props.target.clone();
        Callback::from(move |_: MouseEvent| {
            let found = target
                .as_deref()
                .is_some_and(crate::dom::scroll_into_view);
            if !found {
                crate::dom::scroll_one_screen();
            }
        })
    };
    html! {
        <button type="button" class="scroll-btn" aria-label={t("scroll.label")} {onclick}>
            <span class="scroll-arrow" aria-hidden="true">{ "⌄" }</span>
        </button>
    }
}
