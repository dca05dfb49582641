use anyhow::{Context, Result};
use chrono::Utc;
use cpbra_site::RouteStyle;
use std::{fs, path::Path};
use thirtyfour::prelude::*;

pub fn artifacts_dir(base: &str, browser: &str, scenario: &str) -> String {
    let ts = Utc::now().format("%Y%m%dT%H%M%S");
    format!("{base}/{browser}/{scenario}/{ts}")
}

/// Absolute URL for `route` under the site's base URL, in query style.
pub fn page_url(base_url: &str, route: &str) -> String {
    let base = base_url.split(['?', '#']).next().unwrap_or_default();
    let href = RouteStyle::Query.href_for(route);
    format!("{}{href}", base.trim_end_matches('/'))
}

pub async fn capture_artifacts(driver: &WebDriver, dir: &str, err: &anyhow::Error) -> Result<()> {
    let screenshot = driver.screenshot_as_png().await.ok();
    let source = driver.source().await.ok();
    let url = driver.current_url().await.ok().map(|url| url.to_string());
    let chain = format!("{err:#}");

    write_artifact_files(
        Path::new(dir),
        screenshot.as_deref(),
        source.as_deref(),
        url.as_deref(),
        &chain,
    )
}

fn write_artifact_files(
    dir: &Path,
    screenshot: Option<&[u8]>,
    source: Option<&str>,
    url: Option<&str>,
    error_chain: &str,
) -> Result<()> {
    fs::create_dir_all(dir).context("creating artifacts dir")?;

    if let Some(png) = screenshot {
        write_or_warn(&dir.join("screenshot.png"), png);
    }

    if let Some(src) = source {
        write_or_warn(&dir.join("dom.html"), src);
    }

    if let Some(url) = url {
        write_or_warn(&dir.join("url.txt"), url);
    }

    write_or_warn(&dir.join("error.txt"), error_chain);

    Ok(())
}

/// Write one artifact file, logging a failure instead of returning it.
fn write_or_warn(path: &Path, contents: impl AsRef<[u8]>) -> bool {
    match fs::write(path, contents) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("could not write artifact {}: {err}", path.display());
            false
        }
    }
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" join, ,back-nav,  smoke ");
        assert_eq!(parts, vec!["join", "back-nav", "smoke"]);
    }

    #[test]
    fn artifacts_dir_includes_key_segments() {
        let dir = artifacts_dir("target/out", "chrome", "join");
        assert!(dir.starts_with("target/out/chrome/join/"));
    }

    #[test]
    fn page_url_keeps_base_path() {
        assert_eq!(
            page_url("http://localhost:8080/", "/join"),
            "http://localhost:8080/?page=join"
        );
        assert_eq!(
            page_url("https://example.org/cpbra/?page=gallery", "/schedule"),
            "https://example.org/cpbra/?page=schedule"
        );
        assert_eq!(page_url("http://localhost:8080", "/"), "http://localhost:8080/");
    }

    #[test]
    fn write_artifact_files_writes_expected_payloads() {
        let base = std::env::temp_dir().join(format!(
            "cpbra-artifacts-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        write_artifact_files(
            &base,
            Some(&[1, 2, 3]),
            Some("<html />"),
            Some("http://localhost:8080/?page=join"),
            "boom",
        )
        .expect("write artifacts");

        assert!(base.join("screenshot.png").exists());
        assert!(base.join("dom.html").exists());
        assert!(base.join("url.txt").exists());
        assert!(base.join("error.txt").exists());
    }

    #[test]
    fn unwritable_artifact_is_reported_not_fatal() {
        let missing = std::env::temp_dir()
            .join("cpbra-artifacts-missing-dir")
            .join("nested")
            .join("url.txt");
        assert!(!write_or_warn(&missing, "http://localhost:8080/"));
    }
}
