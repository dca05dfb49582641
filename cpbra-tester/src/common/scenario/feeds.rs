use anyhow::{Result, ensure};
use cpbra_site::route::{ROOT, SCHEDULE};
use cpbra_site::{
    Carousel, FeedClient, FeedError, FetchDirection, MediaItem, fallback_menu, load_media,
    load_menu, load_schedule,
};
use thirtyfour::prelude::*;

use super::{ScenarioCtx, SiteScenario};

/// Feed that answers every request the same way.
#[derive(Debug, Clone, Copy)]
enum CannedFeed {
    Unreachable,
    Status(u16),
    Body(&'static str),
}

impl FeedClient for CannedFeed {
    async fn get_text(&self, url: &str) -> Result<String, FeedError> {
        match *self {
            Self::Unreachable => Err(FeedError::Request(format!("{url}: connection refused"))),
            Self::Status(status) => Err(FeedError::Status {
                status,
                status_text: "Service Unavailable".to_string(),
            }),
            Self::Body(body) => Ok(body.to_string()),
        }
    }
}

const FAILURES: [CannedFeed; 3] = [
    CannedFeed::Unreachable,
    CannedFeed::Status(503),
    CannedFeed::Body("<!doctype html>"),
];

pub struct FeedFallbacks;

#[async_trait::async_trait(?Send)]
impl SiteScenario for FeedFallbacks {
    fn name(&self) -> &'static str {
        "Feed Fallbacks"
    }

    async fn run_logic(&self, _seed: u64) -> Result<()> {
        for feed in FAILURES {
            let menu = load_menu(&feed, "/api/menu.json").await;
            ensure!(menu == fallback_menu(), "{feed:?}: menu did not fall back");

            let games = load_schedule(&feed, "/api/schedule.json").await;
            ensure!(games.is_empty(), "{feed:?}: schedule should be empty");

            let mut carousel = Carousel::new(3);
            carousel.absorb(sample_media(4), FetchDirection::Right);
            let before = carousel.clone();
            if carousel.next().is_some() {
                carousel.begin_fetch();
            }
            if load_media(&feed, "/api/media.json").await.is_err() {
                carousel.fetch_failed();
            }
            ensure!(
                carousel.media() == before.media(),
                "{feed:?}: gallery list changed after a failed fetch"
            );
            ensure!(!carousel.is_loading(), "{feed:?}: gallery stuck loading");
        }

        let empty = load_menu(&CannedFeed::Body(r#"{"items":[]}"#), "/api/menu.json").await;
        ensure!(empty.is_empty(), "an empty remote menu is shown as empty");
        Ok(())
    }

    async fn run_browser(&self, _driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.page.open(ROOT).await?;
        ensure!(ctx.page.count(".menu-toggle").await? == 1, "menu chrome missing");

        ctx.page.open(SCHEDULE).await?;
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        let cards = ctx.page.count(".schedule-card").await?;
        let empty = ctx.page.count(".empty-indicator").await?;
        let loading = ctx.page.count(".loading-indicator").await?;
        ensure!(
            cards > 0 || empty == 1 || loading == 1,
            "schedule rendered neither games nor a placeholder"
        );
        Ok(())
    }
}

fn sample_media(n: usize) -> Vec<MediaItem> {
    (0..n)
        .map(|i| MediaItem {
            image: format!("/images/run-{i}.jpg"),
            title: format!("Run {i}"),
            description: String::new(),
        })
        .collect()
}
