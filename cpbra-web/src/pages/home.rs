use crate::components::content_band::{BandVariant, ContentBand};
use crate::components::court_card::{CourtCard, CourtStatus};
use crate::i18n::t;
use yew::prelude::*;

/// Courts shown when the page is given none.
#[must_use]
pub fn default_courts() -> Vec<CourtStatus> {
    vec![
        CourtStatus::new("Westgate Fieldhouse - Court 1", "#003B5C", 2),
        CourtStatus::new("Westgate Fieldhouse - Court 2", "#1E407C", 0),
        CourtStatus::new("Eastside Rec Center", "#5D9981", 1),
    ]
}

#[derive(Properties, PartialEq, Clone)]
pub struct HomePageProps {
    #[prop_or_else(default_courts)]
    pub courts: Vec<CourtStatus>,
    /// Base seed for the score simulation; card `n` uses `seed + n`.
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let cards = props.courts.iter().zip(0_u64..).map(|(status, n)| {
        html! {
            <CourtCard
                key={status.name.clone()}
                status={status.clone()}
                seed={props.seed.map(|seed| seed.wrapping_add(n))}
            />
        }
    });
    html! {
        <ContentBand variant={BandVariant::Dark} id={Some(AttrValue::from("live-status"))}>
            <h2>{ t("home.title") }</h2>
            <p class="intro">{ t("home.intro") }</p>
            <div class="court-grid">{ for cards }</div>
        </ContentBand>
    }
}
