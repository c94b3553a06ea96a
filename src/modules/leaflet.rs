//! Thin bindings to the Leaflet mapping library (`window.L`).
//!
//! Only wrappers around the JS constructors; no state, no logic.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `L.divIcon(options)`: an icon definition built from raw HTML.
    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    pub fn div_icon(options: &JsValue) -> JsValue;

    /// `L.marker(latlng, options)`: a marker object at a coordinate.
    #[wasm_bindgen(js_namespace = L)]
    pub fn marker(latlng: &JsValue, options: &JsValue) -> JsValue;
}

/// Set a field on a plain JS options object, ignoring failures.
pub fn set_option(target: &js_sys::Object, key: &str, value: &JsValue) {
    let _ = js_sys::Reflect::set(target.as_ref(), &JsValue::from_str(key), value);
}

/// A two-element `[x, y]` array, the shape Leaflet accepts for points and
/// coordinates.
pub fn point(x: f64, y: f64) -> js_sys::Array {
    js_sys::Array::of2(&JsValue::from_f64(x), &JsValue::from_f64(y))
}
