use cpbra_site::{Game, GameStatus, MediaItem, MenuItem, fallback_menu};
use cpbra_web::components::court_card::{CourtCard, CourtCardProps, CourtStatus};
use cpbra_web::components::cta::{CtaButton, CtaProps, CtaSize, CtaVariant};
use cpbra_web::components::footer::{Footer, FooterProps};
use cpbra_web::components::gallery::{Gallery, GalleryProps};
use cpbra_web::components::nav_menu::{NavMenu, NavMenuProps};
use cpbra_web::components::schedule_card::{ScheduleCard, ScheduleCardProps};
use cpbra_web::components::schedule_list::{ScheduleList, ScheduleListProps};
use cpbra_site::court::CourtConfig;
use futures::executor::block_on;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn media(n: usize) -> Vec<MediaItem> {
    (0..n)
        .map(|i| MediaItem {
            image: format!("/images/highlight-{i}.jpg"),
            title: format!("Highlight {i}"),
            description: format!("Game night {i}"),
        })
        .collect()
}

#[test]
fn nav_menu_highlights_active_entry() {
    let props = NavMenuProps {
        active_route: AttrValue::from("/schedule"),
        on_navigate: Callback::noop(),
        items: Some(fallback_menu()),
    };
    let html = block_on(LocalServerRenderer::<NavMenu>::with_props(props).render());
    for label in ["Home", "Schedule", "Gallery", "Join"] {
        assert!(html.contains(label), "missing {label}");
    }
    assert!(html.contains("href=\"/?page=schedule\""));
    assert_eq!(html.matches("cta-primary").count(), 1);
    assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
    let home = html.find("Home").expect("home");
    let join = html.find("Join").expect("join");
    assert!(home < join, "menu keeps display order");
}

#[test]
fn nav_menu_home_entry_active_on_home_alias() {
    let props = NavMenuProps {
        active_route: AttrValue::from("/home"),
        on_navigate: Callback::noop(),
        items: Some(vec![
            MenuItem::new("Home", "/", "home"),
            MenuItem::new("Join", "/join", "add"),
        ]),
    };
    let html = block_on(LocalServerRenderer::<NavMenu>::with_props(props).render());
    assert_eq!(html.matches("cta-primary").count(), 1);
    assert!(html.contains("cta-outline"));
}

#[test]
fn cta_renders_variant_size_and_icon() {
    let props = CtaProps {
        label: AttrValue::from("Sign Up"),
        url: AttrValue::from("/?page=join"),
        variant: CtaVariant::Secondary,
        size: CtaSize::Lg,
        icon: Some(AttrValue::from("add")),
        block: true,
        current: false,
        onclick: None,
    };
    let html = block_on(LocalServerRenderer::<CtaButton>::with_props(props).render());
    assert!(html.contains("cta-secondary"));
    assert!(html.contains("cta-lg"));
    assert!(html.contains("cta-block"));
    assert!(html.contains("data-icon=\"add\""));
    assert!(html.contains("Sign Up"));
}

#[test]
fn schedule_card_shows_status_and_time() {
    let props = ScheduleCardProps {
        game: Game {
            opponent: "Hawks".into(),
            date: "Sat, Nov 1".into(),
            time: "6:00 PM".into(),
            location: "Westgate Fieldhouse".into(),
            status: GameStatus::Live,
        },
    };
    let html = block_on(LocalServerRenderer::<ScheduleCard>::with_props(props).render());
    assert!(html.contains("Hawks"));
    assert!(html.contains("Sat, Nov 1 at 6:00 PM"));
    assert!(html.contains(GameStatus::Live.label()));
    assert!(html.contains(GameStatus::Live.color()));
}

#[test]
fn schedule_list_states() {
    let loading = block_on(
        LocalServerRenderer::<ScheduleList>::with_props(ScheduleListProps { games: None }).render(),
    );
    assert!(loading.contains("Loading schedule..."));

    let empty = block_on(
        LocalServerRenderer::<ScheduleList>::with_props(ScheduleListProps {
            games: Some(Vec::new()),
        })
        .render(),
    );
    assert!(empty.contains("No games currently scheduled."));

    let filled = block_on(
        LocalServerRenderer::<ScheduleList>::with_props(ScheduleListProps {
            games: Some(vec![Game::default(), Game::default()]),
        })
        .render(),
    );
    assert_eq!(filled.matches("schedule-card").count(), 2);
    assert!(!filled.contains("No games currently scheduled."));
}

#[test]
fn court_card_renders_full_court_defaults() {
    let props = CourtCardProps {
        status: CourtStatus::new("Court 1", "#003B5C", 3),
        config: CourtConfig::default(),
        seed: Some(1),
    };
    let html = block_on(LocalServerRenderer::<CourtCard>::with_props(props).render());
    assert!(html.contains("Court 1"));
    assert!(html.contains("12:00"));
    assert!(html.contains("Full Court"));
    assert!(html.contains("10 Players"));
    assert!(html.contains("3 squads waiting"));
    assert!(html.contains("Switch to Half"));
    assert!(html.contains("#003B5C"));
}

#[test]
fn gallery_shows_window_of_three() {
    let props = GalleryProps {
        media: Some(media(5)),
        window: 3,
    };
    let html = block_on(LocalServerRenderer::<Gallery>::with_props(props).render());
    assert_eq!(html.matches("gallery-card").count(), 3);
    assert!(html.contains("Highlight 0"));
    assert!(html.contains("Highlight 2"));
    assert!(!html.contains("Highlight 3"));
    assert!(!html.contains("Link Copied!"));
}

#[test]
fn gallery_waits_for_first_batch() {
    let props = GalleryProps {
        media: None,
        window: 3,
    };
    let html = block_on(LocalServerRenderer::<Gallery>::with_props(props).render());
    assert!(html.contains("Loading highlights..."));
    assert!(!html.contains("No images found."));
}

#[test]
fn footer_names_league_and_year() {
    let props = FooterProps {
        league_name: AttrValue::from("CPBRA"),
        year: Some(2025),
    };
    let html = block_on(LocalServerRenderer::<Footer>::with_props(props).render());
    assert!(html.contains("2025 CPBRA. All Rights Reserved."));
}

#[test]
fn footer_defaults_to_current_calendar_year() {
    use chrono::Datelike;

    let props = FooterProps {
        league_name: AttrValue::from("CPBRA"),
        year: None,
    };
    let html = block_on(LocalServerRenderer::<Footer>::with_props(props).render());
    let year = chrono::Local::now().year();
    assert!(html.contains(&format!("{year} CPBRA. All Rights Reserved.")));
}
