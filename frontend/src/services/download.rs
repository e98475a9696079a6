//! Browser save-as for the processed result.

use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::types::{describe_js_error, AppError, AppResult};

/// Save `href` under `file_name` through a transient anchor.
///
/// The anchor is removed right after the click; `href` itself is left
/// alive for later downloads.
pub fn trigger_download(href: &str, file_name: &str) -> AppResult<()> {
    let document = gloo_utils::document();
    let body = document
        .body()
        .ok_or_else(|| AppError::Download("document has no body".to_string()))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| AppError::Browser(describe_js_error(&e)))?
        .dyn_into()
        .map_err(|_| AppError::Browser("created element is not an anchor".to_string()))?;
    anchor.set_href(href);
    anchor.set_download(file_name);

    body.append_child(&anchor)
        .map_err(|e| AppError::Download(describe_js_error(&e)))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| AppError::Download(describe_js_error(&e)))?;

    log::info!("💾 Download triggered: {}", file_name);
    Ok(())
}
