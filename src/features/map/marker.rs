use wasm_bindgen::JsValue;

use crate::features::map::style::{marker_html, MarkerStyle};
use crate::modules::leaflet;
use crate::shared::types::LatLng;

/// Icon box size in pixels
const ICON_SIZE: (f64, f64) = (30.0, 42.0);

/// Anchor point: bottom center of the pin
const ICON_ANCHOR: (f64, f64) = (15.0, 42.0);

/// Build a styled Leaflet marker for a category at the given coordinate.
///
/// Returns the opaque `L.marker` object; the caller adds it to a map layer.
pub fn create_custom_marker(category: &str, position: &LatLng) -> JsValue {
    let style = MarkerStyle::for_category(category);

    let icon_options = js_sys::Object::new();
    leaflet::set_option(
        &icon_options,
        "html",
        &JsValue::from_str(&marker_html(&style)),
    );
    leaflet::set_option(
        &icon_options,
        "className",
        &JsValue::from_str("custom-marker"),
    );
    leaflet::set_option(
        &icon_options,
        "iconSize",
        &leaflet::point(ICON_SIZE.0, ICON_SIZE.1),
    );
    leaflet::set_option(
        &icon_options,
        "iconAnchor",
        &leaflet::point(ICON_ANCHOR.0, ICON_ANCHOR.1),
    );
    let icon = leaflet::div_icon(&icon_options);

    let marker_options = js_sys::Object::new();
    leaflet::set_option(&marker_options, "icon", &icon);

    leaflet::marker(
        &leaflet::point(position.lat, position.lng),
        &marker_options,
    )
}
