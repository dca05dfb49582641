use crate::components::content_band::{BandVariant, ContentBand};
use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub squad: String,
}

impl Signup {
    /// Name and a plausible email are required; the squad is optional.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let email = self.email.trim();
        !self.name.trim().is_empty()
            && email
                .split_once('@')
                .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'))
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct JoinPageProps {
    #[prop_or_default]
    pub submitted: Option<Signup>,
}

/// League signup form.
#[function_component(JoinPage)]
pub fn join_page(props: &JoinPageProps) -> Html {
    let draft = use_state(Signup::default);
    let submitted = use_state(|| props.submitted.clone());

    let bind = |field: fn(&mut Signup) -> &mut String| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            *field(&mut next) = input.value();
            draft.set(next);
        })
    };
    let on_submit = {
        let draft = draft.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if draft.is_complete() {
                log::info!("Signup received for {}", draft.email.trim());
                submitted.set(Some((*draft).clone()));
            }
        })
    };

    let body = if let Some(signup) = submitted.as_ref() {
        let vars = BTreeMap::from([("name", signup.name.trim())]);
        html! { <p class="signup-thanks" role="status">{ tr("join.thanks", Some(&vars)) }</p> }
    } else {
        html! {
            <form class="signup-form" onsubmit={on_submit}>
                <label for="signup-name">{ t("join.name") }</label>
                <input id="signup-name" name="name" type="text" required=true
                    value={draft.name.clone()} oninput={bind(|s| &mut s.name)} />
                <label for="signup-email">{ t("join.email") }</label>
                <input id="signup-email" name="email" type="email" required=true
                    value={draft.email.clone()} oninput={bind(|s| &mut s.email)} />
                <label for="signup-squad">{ t("join.squad") }</label>
                <input id="signup-squad" name="squad" type="text"
                    value={draft.squad.clone()} oninput={bind(|s| &mut s.squad)} />
                <button type="submit" class="cta cta-primary cta-lg" disabled={!draft.is_complete()}>
                    { t("join.submit") }
                </button>
            </form>
        }
    };

    html! {
        <ContentBand variant={BandVariant::Accent} id={Some(AttrValue::from("join"))}>
            <h2>{ t("join.title") }</h2>
            <p class="intro">{ t("join.intro") }</p>
            { body }
        </ContentBand>
    }
}
