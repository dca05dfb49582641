pub mod banner;
pub mod content_band;
pub mod court_card;
pub mod cta;
pub mod footer;
pub mod gallery;
pub mod nav_item;
pub mod nav_menu;
pub mod schedule_card;
pub mod schedule_list;
pub mod scroll_button;
