//! Browser-only behavior, run with `wasm-pack test --headless` (or
//! `cargo test --target wasm32-unknown-unknown` under wasm-bindgen-test-runner).

#![cfg(target_arch = "wasm32")]

use kurasi_map_web::{validate_form, SessionStore};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn browser_storage_token_roundtrip() {
    let session = SessionStore::browser();
    session.clear_token();
    assert!(!session.is_authenticated());

    session.store_token("tok-browser");
    assert_eq!(session.token(), Some("tok-browser".to_string()));
    assert!(session.is_authenticated());

    session.clear_token();
    assert_eq!(session.token(), None);
}

fn required_input(document: &web_sys::Document, value: Option<&str>) -> Element {
    let input = document.create_element("input").unwrap();
    input.set_attribute("required", "").unwrap();
    if let Some(value) = value {
        input.set_attribute("value", value).unwrap();
    }
    input
}

#[wasm_bindgen_test]
fn form_validation_marks_only_empty_required_fields() {
    let document = web_sys::window().unwrap().document().unwrap();
    let form = document.create_element("form").unwrap();

    let empty = required_input(&document, None);
    let filled = required_input(&document, Some("hello"));
    form.append_child(&empty).unwrap();
    form.append_child(&filled).unwrap();

    assert!(!validate_form(&form));
    assert!(empty.class_list().contains("is-invalid"));
    assert!(!filled.class_list().contains("is-invalid"));

    // Filling the field and re-validating clears the marker.
    js_sys::Reflect::set(
        empty.as_ref(),
        &JsValue::from_str("value"),
        &JsValue::from_str("now filled"),
    )
    .unwrap();
    assert!(validate_form(&form));
    assert!(!empty.class_list().contains("is-invalid"));
}

#[wasm_bindgen_test]
fn form_without_required_fields_is_valid() {
    let document = web_sys::window().unwrap().document().unwrap();
    let form = document.create_element("form").unwrap();
    assert!(validate_form(&form));
}
