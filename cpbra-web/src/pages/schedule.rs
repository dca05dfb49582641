use crate::components::content_band::ContentBand;
use crate::components::schedule_list::ScheduleList;
use cpbra_site::Game;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SchedulePageProps {
    #[prop_or_default]
    pub games: Option<Vec<Game>>,
}

#[function_component(SchedulePage)]
pub fn schedule_page(props: &SchedulePageProps) -> Html {
    html! {
        <ContentBand id={Some(AttrValue::from("schedule"))}>
            <ScheduleList games={props.games.clone()} />
        </ContentBand>
    }
}
