//! Site configuration embedded at build time.

use cpbra_site::SiteConfig;
use once_cell::sync::Lazy;

const SITE_CONFIG_JSON: &str = include_str!("../static/config/site.json");

static SITE_CONFIG: Lazy<SiteConfig> = Lazy::new(load_from_static);

/// Parse the bundled `site.json`, falling back to defaults when it is unusable.
#[must_use]
pub fn load_from_static() -> SiteConfig {
    SiteConfig::from_json_or_default(SITE_CONFIG_JSON)
}

/// Shared configuration for the running site.
#[must_use]
pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}
