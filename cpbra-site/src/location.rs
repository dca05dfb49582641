use serde::{Deserialize, Serialize};
use url::{Url, form_urlencoded};

/// Relative hrefs are joined onto this origin; only path and query survive.
const HREF_BASE: &str = "http://site.invalid/";

/// Snapshot of the address bar: path plus the raw query string (no leading `?`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
    pub query: String,
}

impl Location {
    #[must_use]
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: query.into().trim_start_matches('?').to_string(),
        }
    }

    /// Parse an href such as `/gallery/?page=join#top`.
    ///
    /// Only the path and query are kept. Scheme and host are dropped when present,
    /// and an empty path becomes `/` the way browsers report it.
    #[must_use]
    pub fn from_href(href: &str) -> Self {
        match Url::parse(HREF_BASE).and_then(|base| base.join(href)) {
            Ok(url) => Self::new(url.path(), url.query().unwrap_or_default()),
            Err(err) => {
                log::debug!("unparseable href {href:?}: {err}");
                Self::new("/", "")
            }
        }
    }

    /// Decoded `key=value` pairs in query order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        form_urlencoded::parse(self.query.as_bytes())
            .into_owned()
            .collect()
    }

    /// First value of a query parameter, decoded.
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<String> {
        form_urlencoded::parse(self.query.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Rebuild the href for this location.
    #[must_use]
    pub fn href(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }
}
