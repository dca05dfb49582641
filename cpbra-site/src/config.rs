use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::court::CourtConfig;
use crate::gallery::DEFAULT_WINDOW;
use crate::route::RouteStyle;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Site-wide settings: feed endpoints, URL convention and card defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub menu_api: String,
    pub schedule_api: String,
    pub media_api: String,
    pub route_style: RouteStyle,
    pub court: CourtConfig,
    pub gallery_window: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            menu_api: "/api/menu.json".to_string(),
            schedule_api: "/api/schedule.json".to_string(),
            media_api: "/api/media.json".to_string(),
            route_style: RouteStyle::Query,
            court: CourtConfig::default(),
            gallery_window: DEFAULT_WINDOW,
        }
    }
}

impl SiteConfig {
    /// Parse and validate. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON, an empty endpoint or a zero-width gallery.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`SiteConfig::from_json`], but logs the failure and returns defaults.
    #[must_use]
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|err| {
            log::error!("Failed to load site config, using defaults: {err}");
            Self::default()
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("menu_api", &self.menu_api),
            ("schedule_api", &self.schedule_api),
            ("media_api", &self.media_api),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{name} must not be empty")));
            }
        }
        if self.gallery_window == 0 {
            return Err(ConfigError::Invalid(
                "gallery_window must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::court::ClockMode;

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            SiteConfig::from_json(r#"{"route_style":"path","court":{"mode":"manual"}}"#)
                .expect("config");
        assert_eq!(config.route_style, RouteStyle::Path);
        assert_eq!(config.court.mode, ClockMode::Manual);
        assert_eq!(config.court.game_minutes, 12);
        assert_eq!(config.menu_api, "/api/menu.json");
    }

    #[test]
    fn empty_endpoint_is_rejected() {
        let err = SiteConfig::from_json(r#"{"media_api":" "}"#).expect_err("invalid");
        assert!(err.to_string().contains("media_api"));
    }

    #[test]
    fn broken_json_falls_back_to_defaults() {
        assert_eq!(SiteConfig::from_json_or_default("{"), SiteConfig::default());
    }
}
