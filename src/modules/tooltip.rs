//! Binding to the Bootstrap tooltip widget constructor.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    /// `bootstrap.Tooltip`: contextual text shown on hover/focus.
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap)]
    pub fn new(element: &Element) -> Tooltip;
}
