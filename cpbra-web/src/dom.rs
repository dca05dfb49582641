use cpbra_site::FeedError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Response, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

fn request_error(value: &JsValue) -> FeedError {
    FeedError::Request(js_error_message(value))
}

/// GET `url` and return the body as text.
///
/// # Errors
/// Returns [`FeedError::Request`] when the fetch rejects or the body cannot be read,
/// and [`FeedError::Status`] for a non-success response.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_text(url: &str) -> Result<String, FeedError> {
    let resp_value = JsFuture::from(window().fetch_with_str(url))
        .await
        .map_err(|e| request_error(&e))?;
    let response: Response = resp_value.dyn_into().map_err(|e| request_error(&e))?;
    if !response.ok() {
        return Err(FeedError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }
    let body = JsFuture::from(response.text().map_err(|e| request_error(&e))?)
        .await
        .map_err(|e| request_error(&e))?;
    body.as_string()
        .ok_or_else(|| FeedError::Request(format!("response body from {url} is not text")))
}

/// Jump the viewport back to the top of the page.
pub fn scroll_to_top() {
    let Some(win) = web_sys::window() else {
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Instant);
    win.scroll_to_with_scroll_to_options(&opts);
}

/// Smooth-scroll the first element matching `selector` into view.
///
/// Returns `false` when nothing matches.
pub fn scroll_into_view(selector: &str) -> bool {
    let Some(target) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.query_selector(selector).ok().flatten())
    else {
        return false;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

/// Smooth-scroll down by one viewport height.
pub fn scroll_one_screen() {
    let Some(win) = web_sys::window() else {
        return;
    };
    let height = win
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    let opts = ScrollToOptions::new();
    opts.set_top(height);
    opts.set_behavior(ScrollBehavior::Smooth);
    win.scroll_by_with_scroll_to_options(&opts);
}

/// Write `text` to the system clipboard.
///
/// # Errors
/// Returns the rejection message when the clipboard refuses the write.
#[allow(clippy::future_not_send)]
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let clipboard = window().navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| js_error_message(&e))
}

/// Open `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    if let Some(win) = web_sys::window()
        && let Err(err) = win.open_with_url_and_target(url, "_blank")
    {
        log::warn!("Failed to open {url}: {}", js_error_message(&err));
    }
}
