use anyhow::{Context, Result, bail};
use std::time::Duration;
use thirtyfour::prelude::*;

use crate::common::page_url;

const SETTLE: Duration = Duration::from_millis(250);

/// Thin driver wrapper that speaks in site routes rather than selectors.
#[derive(Debug, Clone)]
pub struct SitePage<'a> {
    driver: &'a WebDriver,
    base_url: &'a str,
}

impl<'a> SitePage<'a> {
    pub const fn new(driver: &'a WebDriver, base_url: &'a str) -> Self {
        Self { driver, base_url }
    }

    /// Deep-link to `route` and wait for the shell to mount.
    pub async fn open(&self, route: &str) -> Result<()> {
        let url = page_url(self.base_url, route);
        self.driver
            .goto(&url)
            .await
            .with_context(|| format!("loading {url}"))?;
        self.driver
            .find(By::Id("main"))
            .await
            .context("main landmark never rendered")?;
        Ok(())
    }

    /// Fragment id the view dispatcher rendered into `<main>`.
    pub async fn fragment(&self) -> Result<String> {
        let main = self.driver.find(By::Id("main")).await?;
        main.attr("data-fragment")
            .await?
            .context("<main> has no data-fragment attribute")
    }

    /// Click the menu entry whose href encodes `route`.
    pub async fn click_nav(&self, route: &str) -> Result<()> {
        let selector = nav_selector(route);
        let link = self
            .driver
            .find(By::Css(selector.as_str()))
            .await
            .with_context(|| format!("no menu entry for {route}"))?;
        if link.attr("aria-current").await?.is_some() {
            log::debug!("{route} is already the active entry");
        }
        link.click().await?;
        tokio::time::sleep(SETTLE).await;
        Ok(())
    }

    pub async fn back(&self) -> Result<()> {
        self.driver.back().await?;
        tokio::time::sleep(SETTLE).await;
        Ok(())
    }

    pub async fn current_url(&self) -> Result<String> {
        Ok(self.driver.current_url().await?.to_string())
    }

    pub async fn count(&self, css: &str) -> Result<usize> {
        Ok(self.driver.find_all(By::Css(css)).await?.len())
    }

    pub async fn expect_fragment(&self, expected: &str) -> Result<()> {
        let actual = self.fragment().await?;
        if actual != expected {
            bail!("expected fragment {expected}, found {actual}");
        }
        Ok(())
    }
}

fn nav_selector(route: &str) -> String {
    let page = route.trim_start_matches('/');
    if page.is_empty() {
        ".nav-menu a[href$='/']".to_string()
    } else {
        format!(".nav-menu a[href$='?page={page}']")
    }
}
