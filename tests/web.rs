#![cfg(all(target_arch = "wasm32", feature = "rapier"))]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

/// Fresh `#loading` banner in the page body
fn insert_loading_banner() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(old) = document.get_element_by_id("loading") {
        old.remove();
    }
    let el = document.create_element("div").unwrap();
    el.set_id("loading");
    el.set_text_content(Some("Loading physics..."));
    document.body().unwrap().append_child(&el).unwrap();
    el.dyn_into::<HtmlElement>().unwrap()
}

fn display_of(el: &HtmlElement) -> String {
    el.style().get_property_value("display").unwrap()
}

#[wasm_bindgen_test]
fn version_is_reported() {
    assert!(!sphere_drop::version().is_empty());
}

#[wasm_bindgen_test]
async fn demo_boots_and_runs_a_frame() {
    sphere_drop::init();
    let mut demo = sphere_drop::Demo::load(None).await.unwrap();
    assert_eq!(demo.status(), "ready");
    assert!(demo.on_key_down("Space", " "));
    demo.frame();
    assert_eq!(demo.transforms_len(), demo.entity_count() * 7);
}

#[wasm_bindgen_test]
async fn failed_start_shows_the_error_in_the_banner() {
    let banner = insert_loading_banner();

    let err = sphere_drop::start(Some("{bad".into())).await.err().unwrap();
    let message = err.as_string().unwrap();
    assert!(message.contains("Failed to initialize the physics engine"));

    assert!(banner.inner_text().contains("Failed to initialize the physics engine"));
    assert_eq!(display_of(&banner), "block");
    banner.remove();
}

#[wasm_bindgen_test]
async fn successful_start_hides_the_banner() {
    let banner = insert_loading_banner();

    let demo = sphere_drop::start(None).await.ok().unwrap();
    assert_eq!(demo.status(), "ready");
    assert_eq!(display_of(&banner), "none");
    banner.remove();
}
