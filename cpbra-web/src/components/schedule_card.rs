use crate::i18n::tr;
use cpbra_site::Game;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScheduleCardProps {
    #[prop_or_default]
    pub game: Game,
}

#[function_component(ScheduleCard)]
pub fn schedule_card(props: &ScheduleCardProps) -> Html {
    let game = &props.game;
    let vars = BTreeMap::from([("date", game.date.as_str()), ("time", game.time.as_str())]);
    let badge_style = format!("background-color: {};", game.status.color());
    html! {
        <article class="schedule-card">
            <div class="header">
                <div class="opponent">{ game.opponent.clone() }</div>
                <div class="status" style={badge_style}>{ game.status.label() }</div>
            </div>
            <div class="details">
                <div class="detail-item when">{ tr("schedule.when", Some(&vars)) }</div>
                <div class="detail-item where">{ game.location.clone() }</div>
            </div>
        </article>
    }
}
