use wasm_bindgen_test::*;
use yew::Renderer;

use lockwheel_web::app::App;
use lockwheel_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

#[wasm_bindgen_test]
fn app_boots_into_the_setup_screen() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    let doc = dom::document();
    let start = doc
        .query_selector(".btn--start")
        .expect("query start button")
        .expect("start button exists");
    assert_eq!(start.text_content().unwrap_or_default(), "Start the room");
    assert!(
        doc.query_selector(".setup-screen")
            .expect("query setup screen")
            .is_some()
    );
}
