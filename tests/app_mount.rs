#![cfg(target_arch = "wasm32")]

use motion_charts_wasm::app::App;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn page_mounts_a_single_aurora_background() {
    leptos::mount_to_body(App);
    let document = web_sys::window().unwrap().document().unwrap();

    let backgrounds = document.query_selector_all("canvas.motion-background").unwrap();
    assert_eq!(backgrounds.length(), 1);
    assert!(document.query_selector("canvas.motion-background--aurora").unwrap().is_some());
    assert!(document.query_selector("canvas.motion-background--flow").unwrap().is_none());
}
