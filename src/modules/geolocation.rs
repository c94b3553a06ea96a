//! One-shot wrapper over `navigator.geolocation`.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::core::error::{js_error_message, AppError, Result};
use crate::modules::dom;
use crate::shared::types::LatLng;

const UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported by this browser.";

/// Query the user's current position.
///
/// Resolves exactly once: with the coordinate on success, with
/// [`AppError::Geolocation`] carrying the platform error message on failure,
/// or with [`AppError::Unsupported`] when the platform has no geolocation
/// capability. There is no cancellation or retry.
pub async fn current_position() -> Result<LatLng> {
    let window =
        dom::window().ok_or_else(|| AppError::Unsupported(UNSUPPORTED_MESSAGE.to_string()))?;
    let geolocation = window
        .navigator()
        .geolocation()
        .map_err(|_| AppError::Unsupported(UNSUPPORTED_MESSAGE.to_string()))?;

    let (sender, receiver) = oneshot::channel::<std::result::Result<LatLng, String>>();
    let sender = Rc::new(RefCell::new(Some(sender)));

    let on_success = Closure::<dyn FnMut(JsValue)>::new({
        let sender = Rc::clone(&sender);
        move |position: JsValue| {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(extract_coordinates(&position));
            }
        }
    });
    let on_error = Closure::<dyn FnMut(JsValue)>::new({
        let sender = Rc::clone(&sender);
        move |error: JsValue| {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(Err(js_error_message(&error)));
            }
        }
    });

    geolocation
        .get_current_position_with_error_callback(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
        )
        .map_err(|err| AppError::Geolocation(js_error_message(&err)))?;

    match receiver.await {
        Ok(Ok(position)) => Ok(position),
        Ok(Err(message)) => Err(AppError::Geolocation(message)),
        Err(_) => Err(AppError::Geolocation(
            "position request was dropped".to_string(),
        )),
    }
}

fn extract_coordinates(position: &JsValue) -> std::result::Result<LatLng, String> {
    let coords = js_sys::Reflect::get(position, &JsValue::from_str("coords"))
        .map_err(|_| "position carried no coordinates".to_string())?;
    let lat = number_field(&coords, "latitude")?;
    let lng = number_field(&coords, "longitude")?;
    Ok(LatLng::new(lat, lng))
}

fn number_field(value: &JsValue, field: &str) -> std::result::Result<f64, String> {
    js_sys::Reflect::get(value, &JsValue::from_str(field))
        .ok()
        .and_then(|v| v.as_f64())
        .ok_or_else(|| format!("position field {} was not a number", field))
}
