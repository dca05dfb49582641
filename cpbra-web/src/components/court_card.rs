//! Court status card: a live court diagram with its own clock and scoreboard.
//!
//! Each card owns two intervals (clock and score). Both are dropped, and
//! therefore cancelled, when the card unmounts.

use crate::i18n::{t, tr};
use cpbra_site::court::{CourtConfig, CourtState};
use cpbra_site::{ClockMode, TickOutcome};
use gloo::timers::callback::Interval;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

const LINE_COLOR: &str = "#ffffff";
const KEY_COLOR: &str = "rgba(255, 255, 255, 0.1)";
const GAME_LENGTHS: [u32; 5] = [8, 10, 12, 15, 20];

/// Passive per-court data supplied by the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourtStatus {
    pub name: String,
    pub floor_color: String,
    pub squads_waiting: u32,
}

impl CourtStatus {
    #[must_use]
    pub fn new(name: &str, floor_color: &str, squads_waiting: u32) -> Self {
        Self {
            name: name.to_string(),
            floor_color: floor_color.to_string(),
            squads_waiting,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CardState {
    pub court: CourtState,
    rng: ChaCha8Rng,
}

impl CardState {
    #[must_use]
    pub fn new(config: &CourtConfig, seed: u64) -> Self {
        Self {
            court: CourtState::new(config),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    TickClock,
    TickScore,
    Start,
    Toggle,
    Reset,
    ToggleSize,
    AdjustPlayers(i32),
    SetMinutes(u32),
}

impl Reducible for CardState {
    type Action = CardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CardAction::TickClock => {
                if next.court.tick_clock() == TickOutcome::Idle {
                    return self;
                }
            }
            CardAction::TickScore => {
                let Self { court, rng } = &mut next;
                if court.tick_score(rng).is_none() {
                    return self;
                }
            }
            CardAction::Start => next.court.clock.start(),
            CardAction::Toggle => next.court.clock.toggle(),
            CardAction::Reset => next.court.reset(),
            CardAction::ToggleSize => next.court.toggle_court_size(),
            CardAction::AdjustPlayers(amount) => next.court.adjust_players(amount),
            CardAction::SetMinutes(minutes) => next.court.clock.set_game_minutes(minutes),
        }
        Rc::new(next)
    }
}

fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        seed
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0x00C0_FFEE
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CourtCardProps {
    pub status: CourtStatus,
    #[prop_or_else(|| crate::config::site_config().court)]
    pub config: CourtConfig,
    /// Fixed RNG seed for the score simulation.
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[function_component(CourtCard)]
pub fn court_card(props: &CourtCardProps) -> Html {
    let state = {
        let config = props.config;
        let seed = props.seed;
        use_reducer(move || CardState::new(&config, seed.unwrap_or_else(entropy_seed)))
    };

    {
        let dispatcher = state.dispatcher();
        let config = props.config;
        use_effect_with((), move |()| {
            if config.mode == ClockMode::Looping {
                dispatcher.dispatch(CardAction::Start);
            }
            let clock = {
                let dispatcher = dispatcher.clone();
                Interval::new(1_000, move || dispatcher.dispatch(CardAction::TickClock))
            };
            let score = Interval::new(
                config.score_interval_secs.max(1).saturating_mul(1_000),
                move || dispatcher.dispatch(CardAction::TickScore),
            );
            move || {
                drop(clock);
                drop(score);
            }
        });
    }

    let send = |action: CardAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action))
    };
    let on_minutes = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(minutes) = select.value().parse() {
                dispatcher.dispatch(CardAction::SetMinutes(minutes));
            }
        })
    };

    let court = &state.court;
    let clock = &court.clock;
    let running = clock.is_running();
    let timer_text = if clock.is_game_over() {
        t("court.game_over")
    } else {
        clock.display()
    };
    let players = court.player_count.to_string();
    let waiting = props.status.squads_waiting.to_string();
    let current_minutes = clock.duration_minutes();

    html! {
        <article class={classes!("court-card", court.half.then_some("half"))}>
            <div class="monitor-header">
                <h3 class="court-name">{ props.status.name.clone() }</h3>
                <div class="timer-display" aria-live="off">{ timer_text }</div>
                <div class="meta-info">
                    <span>{ if court.half { t("court.half") } else { t("court.full") } }</span>
                    <span aria-hidden="true">{ "•" }</span>
                    <span class="player-total">{ tr("court.players", Some(&BTreeMap::from([("count", players.as_str())]))) }</span>
                    <span aria-hidden="true">{ "•" }</span>
                    <span class="squads-waiting">{ tr("court.waiting", Some(&BTreeMap::from([("count", waiting.as_str())]))) }</span>
                </div>
                <div class="scoreboard">
                    <span class="home">{ format!("{} {}", t("court.home_team"), court.score.home) }</span>
                    <span class="away">{ format!("{} {}", t("court.away_team"), court.score.away) }</span>
                </div>
            </div>
            <div class="court-container">
                { court_diagram(court.half, &props.status.floor_color) }
            </div>
            <div class="controls-bar">
                <button type="button" class="control-btn primary" onclick={send(CardAction::Toggle)} disabled={clock.is_game_over()}>
                    { if running { t("court.pause") } else { t("court.start") } }
                </button>
                <button type="button" class="control-btn" onclick={send(CardAction::Reset)}>{ t("court.reset") }</button>
                <button type="button" class="control-btn" onclick={send(CardAction::ToggleSize)}>
                    { if court.half { t("court.to_full") } else { t("court.to_half") } }
                </button>
                <div class="player-counter">
                    <button type="button" aria-label={t("court.remove_player")} onclick={send(CardAction::AdjustPlayers(-1))}>{ "−" }</button>
                    <span>{ court.player_count.to_string() }</span>
                    <button type="button" aria-label={t("court.add_player")} onclick={send(CardAction::AdjustPlayers(1))}>{ "+" }</button>
                </div>
                <label class="game-length">
                    <span class="sr-only">{ t("court.minutes") }</span>
                    <select onchange={on_minutes}>
                        { for GAME_LENGTHS.iter().map(|m| html! {
                            <option value={m.to_string()} selected={*m == current_minutes}>{ format!("{m}:00") }</option>
                        }) }
                    </select>
                </label>
            </div>
        </article>
    }
}

fn hoop_zone(class: &'static str, transform: Option<&'static str>) -> Html {
    html! {
        <g {class} {transform}>
            <rect x="5" y="220" width="190" height="160" fill={KEY_COLOR} stroke="none" />
            <rect x="5" y="220" width="190" height="160" class="court-line" stroke={LINE_COLOR} fill="none" />
            <circle cx="195" cy="300" r="60" class="court-line" stroke={LINE_COLOR} fill="none" />
            <line x1="5" y1="50" x2="140" y2="50" class="court-line" stroke={LINE_COLOR} />
            <line x1="5" y1="550" x2="140" y2="550" class="court-line" stroke={LINE_COLOR} />
            <path d="M 140,50 Q 300,300 140,550" class="court-line" stroke={LINE_COLOR} fill="none" />
            <line x1="40" y1="270" x2="40" y2="330" class="court-line" stroke={LINE_COLOR} stroke-width="3" />
            <circle cx="55" cy="300" r="10" class="court-line" stroke={LINE_COLOR} fill="none" />
        </g>
    }
}

fn court_diagram(half: bool, floor_color: &str) -> Html {
    let (width, view_box) = if half {
        (500, "0 0 500 600")
    } else {
        (1000, "0 0 1000 600")
    };
    html! {
        <svg viewBox={view_box} xmlns="http://www.w3.org/2000/svg" preserveAspectRatio="xMidYMid meet" role="img">
            <rect x="0" y="0" width={width.to_string()} height="600" fill={floor_color.to_string()} />
            <rect x="5" y="5" width={(width - 10).to_string()} height="590" class="court-line" stroke={LINE_COLOR} fill="none" />
            if half {
                <path d="M 500,240 A 60 60 0 0 0 500,360" class="court-line" stroke={LINE_COLOR} fill="none" />
                <path d="M 500,280 A 20 20 0 0 0 500,320" fill={LINE_COLOR} />
            } else {
                <line x1="500" y1="5" x2="500" y2="595" class="court-line" stroke={LINE_COLOR} />
                <circle cx="500" cy="300" r="60" class="court-line" stroke={LINE_COLOR} fill="none" />
                <circle cx="500" cy="300" r="20" fill={LINE_COLOR} />
            }
            { hoop_zone("hoop-zone-left", None) }
            if !half {
                { hoop_zone("hoop-zone-right", Some("rotate(180 500 300)")) }
            }
        </svg>
    }
}
