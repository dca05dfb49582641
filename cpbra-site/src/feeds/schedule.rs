use serde::{Deserialize, Deserializer, Serialize};

use super::FeedError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Upcoming,
    Live,
    Completed,
    Canceled,
}

impl GameStatus {
    /// Case-insensitive; anything unrecognised reads as upcoming.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "live" => Self::Live,
            "completed" => Self::Completed,
            "canceled" | "cancelled" => Self::Canceled,
            _ => Self::Upcoming,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Live => "Live",
            Self::Completed => "Completed",
            Self::Canceled => "Canceled",
        }
    }

    /// Design-token color for the status pill, with its literal fallback.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Completed => "var(--ddd-theme-default-accentLight, #5D9981)",
            Self::Canceled => "var(--ddd-theme-default-error, #D7263D)",
            Self::Live => "var(--ddd-theme-default-yellow, #FFB81C)",
            Self::Upcoming => "var(--ddd-theme-default-linkLight, #89C7B8)",
        }
    }
}

impl<'de> Deserialize<'de> for GameStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse).unwrap_or_default())
    }
}

/// One fixture on the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub opponent: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(default)]
    pub status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            opponent: "Opposing Team Name".into(),
            date: "Mon, Oct 27".into(),
            time: "7:00 PM".into(),
            location: "Westgate Fieldhouse".into(),
            status: GameStatus::Upcoming,
        }
    }
}

/// # Errors
///
/// Returns [`FeedError::Parse`] when the body is not an array of games.
pub fn parse_schedule(body: &str) -> Result<Vec<Game>, FeedError> {
    Ok(serde_json::from_str(body)?)
}
