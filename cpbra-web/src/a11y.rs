//! Focus styling and the route announcement region.

/// Id of the polite live region the shell renders.
pub const STATUS_REGION_ID: &str = "route-status";

/// Inline CSS the shell emits ahead of any stylesheet: a visible focus ring,
/// the `sr-only` utility, and a skip link that shows itself once focused.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    concat!(
        ":focus-visible{outline:3px solid #FFB81C;outline-offset:2px}",
        " .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}",
        " a.sr-only:focus{position:static;width:auto;height:auto;margin:0;clip:auto;}",
    )
}

/// Announce `msg` through the live region, if it is mounted.
pub fn set_status(msg: &str) {
    let region = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID));
    match region {
        Some(node) => node.set_text_content(Some(msg)),
        None => log::debug!("no live region for announcement: {msg}"),
    }
}
