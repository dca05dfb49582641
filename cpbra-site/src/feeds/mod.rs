//! Remote JSON feeds (menu, schedule, gallery media) and their degraded defaults.
//!
//! Every loader swallows failures: the error is logged and a fallback value
//! is returned so the view never sees it.

mod media;
mod menu;
mod schedule;

pub use media::{MediaItem, parse_media};
pub use menu::{MenuItem, fallback_menu, parse_menu};
pub use schedule::{Game, GameStatus, parse_schedule};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetches the body of a GET request as text.
///
/// Implemented over `fetch` in the browser and by canned responses in tests.
#[allow(async_fn_in_trait)]
pub trait FeedClient {
    /// # Errors
    ///
    /// Returns an error when the request fails or the response status is not a success.
    async fn get_text(&self, url: &str) -> Result<String, FeedError>;
}

/// Load the navigation menu, substituting [`fallback_menu`] on any failure.
pub async fn load_menu<C: FeedClient + ?Sized>(client: &C, url: &str) -> Vec<MenuItem> {
    match fetch_parsed(client, url, parse_menu).await {
        Ok(items) => items,
        Err(err) => {
            log::warn!("Error loading menu data from {url}: {err}");
            fallback_menu()
        }
    }
}

/// Load the schedule; any failure yields an empty schedule.
pub async fn load_schedule<C: FeedClient + ?Sized>(client: &C, url: &str) -> Vec<Game> {
    match fetch_parsed(client, url, parse_schedule).await {
        Ok(games) => games,
        Err(err) => {
            log::warn!("Error loading schedule data from {url}: {err}");
            Vec::new()
        }
    }
}

/// Load one gallery batch.
///
/// The carousel keeps its current list on failure, so the error is returned
/// after being logged rather than replaced.
///
/// # Errors
///
/// Returns the request or parse failure.
pub async fn load_media<C: FeedClient + ?Sized>(
    client: &C,
    url: &str,
) -> Result<Vec<MediaItem>, FeedError> {
    fetch_parsed(client, url, parse_media)
        .await
        .inspect_err(|err| log::warn!("Error fetching media from {url}: {err}"))
}

async fn fetch_parsed<C, T>(
    client: &C,
    url: &str,
    parse: fn(&str) -> Result<T, FeedError>,
) -> Result<T, FeedError>
where
    C: FeedClient + ?Sized,
{
    let body = client.get_text(url).await?;
    parse(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::collections::HashMap;

    struct CannedFeed(HashMap<&'static str, &'static str>);

    impl FeedClient for CannedFeed {
        async fn get_text(&self, url: &str) -> Result<String, FeedError> {
            self.0
                .get(url)
                .map(|body| (*body).to_string())
                .ok_or_else(|| FeedError::Status {
                    status: 404,
                    status_text: "Not Found".into(),
                })
        }
    }

    #[test]
    fn menu_failure_yields_fallback() {
        let feed = CannedFeed(HashMap::new());
        let items = block_on(load_menu(&feed, "/api/menu.json"));
        assert_eq!(items, fallback_menu());
    }

    #[test]
    fn malformed_menu_yields_fallback() {
        let feed = CannedFeed(HashMap::from([("/api/menu.json", "{not json")]));
        let items = block_on(load_menu(&feed, "/api/menu.json"));
        assert_eq!(items.len(), 4);
    }

    #[test]
    fn schedule_failure_is_empty() {
        let feed = CannedFeed(HashMap::new());
        assert!(block_on(load_schedule(&feed, "/api/schedule.json")).is_empty());
    }

    #[test]
    fn media_failure_is_reported() {
        let feed = CannedFeed(HashMap::new());
        let err = block_on(load_media(&feed, "/api/media.json")).expect_err("missing feed");
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn successful_loads_pass_through() {
        let feed = CannedFeed(HashMap::from([
            (
                "/m",
                r#"{"items":[{"label":"Rules","route":"/rules","icon":"book"}]}"#,
            ),
            (
                "/s",
                r#"[{"opponent":"Hawks","date":"Sat","time":"6 PM","location":"Gym","status":"Live"}]"#,
            ),
        ]));
        let menu = block_on(load_menu(&feed, "/m"));
        assert_eq!(menu[0].route, "/rules");
        let games = block_on(load_schedule(&feed, "/s"));
        assert_eq!(games[0].status, GameStatus::Live);
    }
}
