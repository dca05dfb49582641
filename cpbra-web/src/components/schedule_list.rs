use crate::components::schedule_card::ScheduleCard;
use crate::i18n::t;
use cpbra_site::Game;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScheduleListProps {
    /// Preloaded games; the schedule feed is fetched only when absent.
    #[prop_or_default]
    pub games: Option<Vec<Game>>,
}

#[function_component(ScheduleList)]
pub fn schedule_list(props: &ScheduleListProps) -> Html {
    let games = use_state(|| props.games.clone());

    {
        let games = games.clone();
        use_effect_with((), move |()| {
            if games.is_none() {
                let url = crate::config::site_config().schedule_api.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let loaded = cpbra_site::load_schedule(&crate::feeds::FetchClient, &url).await;
                    games.set(Some(loaded));
                });
            }
            || ()
        });
    }

    let Some(list) = games.as_ref() else {
        return html! { <div class="loading-indicator" role="status">{ t("schedule.loading") }</div> };
    };

    html! {
        <div class="schedule-list">
            <div class="list-header">
                <h2>{ t("schedule.title") }</h2>
                <p>{ t("schedule.intro") }</p>
            </div>
            <div class="cards-container">
                if list.is_empty() {
                    <div class="empty-indicator">{ t("schedule.empty") }</div>
                } else {
                    { for list.iter().map(|game| html! { <ScheduleCard game={game.clone()} /> }) }
                }
            </div>
        </div>
    }
}
