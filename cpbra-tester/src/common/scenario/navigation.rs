use anyhow::{Result, ensure};
use cpbra_site::route::{GALLERY, HOME, JOIN, ROOT, SCHEDULE};
use cpbra_site::{Fragment, MemoryHistory, RouteStyle, SiteRouter};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use thirtyfour::prelude::*;

use super::{ScenarioCtx, SiteScenario};

const WALK_STEPS: usize = 24;
const WALK_POOL: [&str; 8] = [
    ROOT,
    HOME,
    SCHEDULE,
    JOIN,
    GALLERY,
    "/nonexistent",
    "/Schedule",
    "/join/extra",
];

fn router() -> SiteRouter<MemoryHistory> {
    SiteRouter::new(MemoryHistory::default(), RouteStyle::Query)
}

pub struct Smoke;

#[async_trait::async_trait(?Send)]
impl SiteScenario for Smoke {
    fn name(&self) -> &'static str {
        "Smoke Test"
    }

    async fn run_logic(&self, seed: u64) -> Result<()> {
        let mut router = router();
        ensure!(router.fragment() == Fragment::Home, "fresh session should land on Home");

        for fragment in Fragment::ALL {
            let landed = router.navigate(fragment.route());
            ensure!(landed == fragment, "{} rendered {landed:?}", fragment.route());
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for step in 0..WALK_STEPS {
            let Some(&route) = WALK_POOL.choose(&mut rng) else {
                break;
            };
            let before = router.history().len();
            let landed = router.navigate(route);
            ensure!(
                landed == Fragment::for_route(route),
                "step {step}: {route} rendered {landed:?}"
            );
            ensure!(router.active_route() == route, "step {step}: active route drifted");
            ensure!(router.history().len() == before + 1, "step {step}: no history entry");
        }
        Ok(())
    }

    async fn run_browser(&self, _driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        for fragment in Fragment::ALL {
            ctx.page.open(fragment.route()).await?;
            ctx.page.expect_fragment(fragment.id()).await?;
            if ctx.verbose {
                println!("  🌐 {} -> {}", fragment.route(), fragment.id());
            }
        }
        Ok(())
    }
}

pub struct JoinFromMenu;

#[async_trait::async_trait(?Send)]
impl SiteScenario for JoinFromMenu {
    fn name(&self) -> &'static str {
        "Join From Menu"
    }

    async fn run_logic(&self, _seed: u64) -> Result<()> {
        let mut router = router();
        let landed = router.navigate(JOIN);
        ensure!(landed == Fragment::Join, "join rendered {landed:?}");
        ensure!(
            router.history().current_href() == "/?page=join",
            "unexpected location {}",
            router.history().current_href()
        );
        ensure!(router.history().scroll_resets() == 1, "scroll not reset");
        Ok(())
    }

    async fn run_browser(&self, _driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.page.open(ROOT).await?;
        ctx.page.click_nav(JOIN).await?;
        ctx.page.expect_fragment(Fragment::Join.id()).await?;
        let url = ctx.page.current_url().await?;
        ensure!(url.contains("page=join"), "address bar shows {url}");
        ensure!(
            ctx.page.count(".court-card").await? == 0,
            "court cards visible on Join"
        );
        Ok(())
    }
}

pub struct UnknownRoute;

#[async_trait::async_trait(?Send)]
impl SiteScenario for UnknownRoute {
    fn name(&self) -> &'static str {
        "Unknown Route"
    }

    async fn run_logic(&self, _seed: u64) -> Result<()> {
        let mut router = router();
        for route in ["/nonexistent", "/Schedule", "/schedule/extra", "/404"] {
            let landed = router.navigate(route);
            ensure!(landed == Fragment::NotFound, "{route} rendered {landed:?}");
        }
        let deep = SiteRouter::new(MemoryHistory::new("/?page=missing"), RouteStyle::Query);
        ensure!(deep.fragment() == Fragment::NotFound, "deep link missed Not Found");
        Ok(())
    }

    async fn run_browser(&self, _driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.page.open("/nonexistent").await?;
        ctx.page.expect_fragment(Fragment::NotFound.id()).await
    }
}

pub struct BackTraversal;

#[async_trait::async_trait(?Send)]
impl SiteScenario for BackTraversal {
    fn name(&self) -> &'static str {
        "Back Traversal"
    }

    async fn run_logic(&self, _seed: u64) -> Result<()> {
        let mut router = router();
        router.navigate(SCHEDULE);
        router.navigate(JOIN);
        let resets = router.history().scroll_resets();
        ensure!(router.history_mut().back(), "no entry to go back to");
        let landed = router.sync_from_history();
        ensure!(landed == Fragment::Schedule, "back rendered {landed:?}");
        ensure!(
            router.history().scroll_resets() == resets,
            "traversal went through the navigation path"
        );
        ensure!(router.history_mut().forward(), "no entry to go forward to");
        let landed = router.sync_from_history();
        ensure!(landed == Fragment::Join, "forward rendered {landed:?}");
        Ok(())
    }

    async fn run_browser(&self, _driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.page.open(ROOT).await?;
        ctx.page.click_nav(SCHEDULE).await?;
        ctx.page.click_nav(JOIN).await?;
        ctx.page.expect_fragment(Fragment::Join.id()).await?;
        ctx.page.back().await?;
        ctx.page.expect_fragment(Fragment::Schedule.id()).await
    }
}

pub struct RepeatedNavigation;

#[async_trait::async_trait(?Send)]
impl SiteScenario for RepeatedNavigation {
    fn name(&self) -> &'static str {
        "Repeated Navigation"
    }

    async fn run_logic(&self, _seed: u64) -> Result<()> {
        let mut router = router();
        let first = router.navigate(SCHEDULE);
        let second = router.navigate(SCHEDULE);
        ensure!(first == second, "same route rendered {first:?} then {second:?}");
        ensure!(router.history().len() == 3, "each navigation pushes one entry");
        ensure!(router.history().scroll_resets() == 2, "each navigation resets scroll");
        Ok(())
    }

    async fn run_browser(&self, _driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.page.open(ROOT).await?;
        ctx.page.click_nav(SCHEDULE).await?;
        ctx.page.click_nav(SCHEDULE).await?;
        ctx.page.expect_fragment(Fragment::Schedule.id()).await
    }
}
