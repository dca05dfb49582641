//! Helpers for building URLs that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/cpbra` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, public_url())
}

/// Resolve a feed endpoint. Absolute URLs pass through untouched.
#[must_use]
pub fn api_url(endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        asset_path(endpoint)
    }
}

/// Base path the site is mounted under, `None` at the root.
#[must_use]
pub fn base_path() -> Option<String> {
    base_path_with_base(public_url())
}

/// Href as it should appear in the address bar, base path included.
#[must_use]
pub fn with_base(href: &str) -> String {
    with_base_from(href, public_url())
}

fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn base_path_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

fn with_base_from(href: &str, base: &str) -> String {
    match base_path_with_base(base) {
        None => href.to_string(),
        Some(base) => format!("{base}{href}"),
    }
}
