use cpbra_site::{FeedClient, FeedError};

use crate::paths;

/// [`FeedClient`] over the browser `fetch` API. Endpoints are resolved
/// against the deployment base path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchClient;

impl FeedClient for FetchClient {
    async fn get_text(&self, url: &str) -> Result<String, FeedError> {
        crate::dom::fetch_text(&paths::api_url(url)).await
    }
}
