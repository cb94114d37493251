//! The page's `#loading` banner.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const LOADING_ID: &str = "loading";

fn loading_element() -> Option<HtmlElement> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(LOADING_ID)?.dyn_into::<HtmlElement>().ok()
}

pub(super) fn hide_loading() {
    if let Some(el) = loading_element() {
        let _ = el.style().set_property("display", "none");
    }
}

pub(super) fn show_loading_error(message: &str) {
    match loading_element() {
        Some(el) => {
            el.set_inner_text(message);
            let _ = el.style().set_property("display", "block");
        }
        None => web_sys::console::error_1(&message.into()),
    }
}
