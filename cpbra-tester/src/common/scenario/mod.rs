use anyhow::Result;
use thirtyfour::prelude::*;

use crate::browser::SitePage;

pub mod feeds;
pub mod navigation;

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub page: SitePage<'a>,
    pub verbose: bool,
}

/// A check that runs against the pure router and, when a driver is available,
/// against the deployed site.
#[async_trait::async_trait(?Send)]
pub trait SiteScenario {
    fn name(&self) -> &'static str;

    /// Pure check over the core crate. `seed` drives any randomized input.
    async fn run_logic(&self, seed: u64) -> Result<()>;

    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

const CATALOG: [(&str, &str); 6] = [
    ("smoke", "Every fragment renders from its canonical route"),
    ("join", "Menu navigation to Join"),
    ("not-found", "Unknown routes fall back to Not Found"),
    ("back-nav", "Back traversal restores the previous view"),
    ("idempotent-nav", "Repeated navigation to the same route"),
    ("menu-fallback", "Failed feeds degrade to defaults"),
];

pub fn get_scenario(name: &str) -> Option<Box<dyn SiteScenario>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(navigation::Smoke)),
        "join" => Some(Box::new(navigation::JoinFromMenu)),
        "not-found" | "404" => Some(Box::new(navigation::UnknownRoute)),
        "back-nav" | "back" => Some(Box::new(navigation::BackTraversal)),
        "idempotent-nav" | "idempotent" => Some(Box::new(navigation::RepeatedNavigation)),
        "menu-fallback" | "feeds" => Some(Box::new(feeds::FeedFallbacks)),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG.to_vec()
}

/// Expand `all` into every catalogued scenario.
pub fn expand_scenarios(requested: Vec<String>) -> Vec<String> {
    let mut scenarios = Vec::new();
    for name in requested {
        if name.eq_ignore_ascii_case("all") {
            scenarios.extend(CATALOG.iter().map(|(key, _)| (*key).to_string()));
        } else {
            scenarios.push(name);
        }
    }
    scenarios.dedup();
    scenarios
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves() {
        for (key, _) in list_scenarios() {
            assert!(get_scenario(key).is_some(), "{key} missing");
        }
        assert!(get_scenario("nope").is_none());
    }

    #[test]
    fn all_expands_to_catalog() {
        let expanded = expand_scenarios(vec!["all".to_string()]);
        assert_eq!(expanded.len(), CATALOG.len());
        assert_eq!(expanded[0], "smoke");
    }
}
