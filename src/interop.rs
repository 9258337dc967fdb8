//! Browser APIs the stopwatch UI touches directly.
//! Every helper degrades to a logged no-op when the API is unavailable.

use js_sys::{Array, Date, Reflect};
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Checks the standard property and Safari's prefixed one.
pub fn is_fullscreen() -> bool {
    let document = gloo_utils::document();
    document.fullscreen_element().is_some()
        || Reflect::get(&document, &JsValue::from_str("webkitFullscreenElement"))
            .is_ok_and(|el| !el.is_null() && !el.is_undefined())
}

pub fn toggle_fullscreen() {
    let document = gloo_utils::document();
    if is_fullscreen() {
        document.exit_fullscreen();
    } else if let Err(e) = gloo_utils::document_element().request_fullscreen() {
        warn!("Fullscreen unavailable: {:?}", e);
    }
}

pub fn apply_theme_attribute(theme: &str) {
    if let Err(e) = gloo_utils::document_element().set_attribute("data-theme", theme) {
        warn!("Could not apply theme: {:?}", e);
    }
}

/// Asks the user to confirm. A blocked dialog counts as "no".
pub fn confirm(message: &str) -> bool {
    gloo_utils::window()
        .confirm_with_message(message)
        .unwrap_or(false)
}

/// Local date and time, as shown in the report header.
pub fn local_timestamp() -> String {
    Date::new_0()
        .to_locale_string("default", &JsValue::UNDEFINED)
        .into()
}

pub fn iso_timestamp() -> String {
    Date::new_0().to_iso_string().into()
}

/// Saves `text` as a plain-text file through a temporary object URL.
pub fn download_text(file_name: &str, text: &str) {
    if let Err(e) = try_download_text(file_name, text) {
        warn!("Export download failed: {:?}", e);
    }
}

fn try_download_text(file_name: &str, text: &str) -> Result<(), JsValue> {
    let parts = Array::of1(&JsValue::from_str(text));
    let options = BlobPropertyBag::new();
    options.set_type("text/plain");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = gloo_utils::document();
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    let body = gloo_utils::body();
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Url::revoke_object_url(&url)
}
