use serde::{Deserialize, Serialize};

use super::FeedError;

const DEFAULT_TITLE: &str = "Gallery Image";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub image: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize)]
struct RawMedia {
    url: Option<String>,
    src: Option<String>,
    title: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct MediaPayload {
    #[serde(default)]
    items: Vec<RawMedia>,
}

impl RawMedia {
    fn into_item(self) -> Option<MediaItem> {
        let image = self.url.or(self.src).filter(|s| !s.is_empty())?;
        Some(MediaItem {
            image,
            title: self
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: self.description.unwrap_or_default(),
        })
    }
}

/// Parse `{"items": [{url|src, title, description}]}`; entries without an image are dropped.
///
/// # Errors
///
/// Returns [`FeedError::Parse`] for a body that is not a media object.
pub fn parse_media(body: &str) -> Result<Vec<MediaItem>, FeedError> {
    let payload: MediaPayload = serde_json::from_str(body)?;
    Ok(payload
        .items
        .into_iter()
        .filter_map(RawMedia::into_item)
        .collect())
}
