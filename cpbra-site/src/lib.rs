//! CPBRA Site Core
//!
//! Platform-agnostic logic behind the league site: route resolution and
//! dispatch, the navigation emitter, remote feed payloads with their
//! fallbacks, court card simulation and the gallery carousel.
//! Nothing here touches the DOM.

pub mod config;
pub mod court;
pub mod dispatch;
pub mod feeds;
pub mod gallery;
pub mod location;
pub mod navigation;
pub mod route;
pub mod router;

pub use config::{ConfigError, SiteConfig};
pub use court::{ClockMode, CourtConfig, CourtState, GameClock, Scoreboard, format_time};
pub use dispatch::Fragment;
pub use feeds::{
    FeedClient, FeedError, Game, GameStatus, MediaItem, MenuItem, fallback_menu, load_media,
    load_menu, load_schedule,
};
pub use gallery::{Carousel, FetchDirection, Likes, Reaction};
pub use location::Location;
pub use navigation::{History, MemoryHistory, RouteChanged, RouteSink, navigate};
pub use route::{RouteStyle, resolve};
pub use router::{ActiveRoute, SiteRouter};
