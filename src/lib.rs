pub mod core;
pub mod features;
pub mod modules;
pub mod shared;

use std::sync::OnceLock;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub use crate::core::config::AppConfig;
pub use crate::core::error::{AppError, Result};
pub use crate::features::auth::{AuthService, AuthorizedClient, SessionStore};
pub use crate::features::forms::validate_form;
pub use crate::features::locations::{
    Category, Location, LocationCreate, LocationQuery, LocationService, LocationUpdate,
    SubscriptionPlan, UserSubscription,
};
pub use crate::features::map::{create_custom_marker, MarkerStyle};
pub use crate::modules::geolocation::current_position;
pub use crate::shared::format::{format_currency, format_operating_hours, OperatingHours};
pub use crate::shared::geo::calculate_distance;
pub use crate::shared::types::LatLng;

static PANIC_HOOK_SET: OnceLock<()> = OnceLock::new();

/// Wasm entry point: set up logging, then run the page bootstrap once the
/// DOM is fully parsed.
#[wasm_bindgen(start)]
pub fn start() {
    let config = AppConfig::default();
    init_tracing(&config.log_filter);
    init_panic_hook();

    let session = SessionStore::browser();
    wasm_bindgen_futures::spawn_local(async move {
        modules::dom::ready().await;
        init_page(&config, &session);
    });
}

/// One-shot page bootstrap: wire the logout link, then initialize tooltip
/// widgets. The two steps are independent and each is skipped silently when
/// the page has no matching elements.
pub fn init_page(config: &AppConfig, session: &SessionStore) {
    wire_logout_link(config, session);
    init_tooltips();
    tracing::debug!("Page bootstrap complete");
}

/// Intercept clicks on the logout anchor: clear the session token and
/// navigate to the login page instead of following the link.
fn wire_logout_link(config: &AppConfig, session: &SessionStore) {
    let selector = format!("a[href=\"{}\"]", config.logout_path);
    let Some(link) = modules::dom::query_selector(&selector) else {
        return;
    };

    let session = session.clone();
    let login_path = config.login_path.clone();
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        event.prevent_default();
        session.logout(&login_path);
    });

    if link
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .is_ok()
    {
        // The handler lives as long as the page does.
        on_click.forget();
    }
}

/// Construct a Bootstrap tooltip widget on every flagged element.
fn init_tooltips() {
    let triggers = modules::dom::query_selector_all("[data-bs-toggle=\"tooltip\"]");
    if triggers.is_empty() {
        return;
    }
    for element in &triggers {
        let _widget = modules::tooltip::Tooltip::new(element);
    }
    tracing::debug!("Initialized {} tooltip widgets", triggers.len());
}

fn init_tracing(filter: &str) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(fmt_layer)
        .try_init();
}

fn init_panic_hook() {
    PANIC_HOOK_SET.get_or_init(|| {
        std::panic::set_hook(Box::new(|info| {
            web_sys::console::error_1(&JsValue::from_str(&info.to_string()));
        }));
    });
}

// ---------------------------------------------------------------------------
// JS-facing exports for page scripts
// ---------------------------------------------------------------------------

#[wasm_bindgen(js_name = storeToken)]
pub fn js_store_token(token: &str) {
    SessionStore::browser().store_token(token);
}

#[wasm_bindgen(js_name = getToken)]
pub fn js_get_token() -> Option<String> {
    SessionStore::browser().token()
}

#[wasm_bindgen(js_name = removeToken)]
pub fn js_remove_token() {
    SessionStore::browser().clear_token();
}

#[wasm_bindgen(js_name = isAuthenticated)]
pub fn js_is_authenticated() -> bool {
    SessionStore::browser().is_authenticated()
}

#[wasm_bindgen(js_name = logout)]
pub fn js_logout() {
    SessionStore::browser().logout(&AppConfig::default().login_path);
}

#[wasm_bindgen(js_name = calculateDistance)]
pub fn js_calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    calculate_distance(lat1, lon1, lat2, lon2)
}

#[wasm_bindgen(js_name = formatCurrency)]
pub fn js_format_currency(amount: f64) -> String {
    format_currency(amount)
}

#[wasm_bindgen(js_name = formatOperatingHours)]
pub fn js_format_operating_hours(hours: JsValue) -> String {
    if hours.is_falsy() {
        return String::new();
    }
    let Ok(json) = js_sys::JSON::stringify(&hours) else {
        return String::new();
    };
    match serde_json::from_str::<OperatingHours>(&String::from(json)) {
        Ok(parsed) => format_operating_hours(Some(&parsed)),
        Err(_) => String::new(),
    }
}

#[wasm_bindgen(js_name = createCustomMarker)]
pub fn js_create_custom_marker(category: &str, lat: f64, lng: f64) -> JsValue {
    create_custom_marker(category, &LatLng::new(lat, lng))
}

#[wasm_bindgen(js_name = shareLocation)]
pub fn js_share_location(name: &str) {
    features::locations::share::share_named(name);
}

#[wasm_bindgen(js_name = getCurrentLocation)]
pub async fn js_get_current_location() -> std::result::Result<JsValue, JsValue> {
    let position = current_position().await?;
    let out = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        out.as_ref(),
        &JsValue::from_str("lat"),
        &JsValue::from_f64(position.lat),
    );
    let _ = js_sys::Reflect::set(
        out.as_ref(),
        &JsValue::from_str("lng"),
        &JsValue::from_f64(position.lng),
    );
    Ok(out.into())
}

#[wasm_bindgen(js_name = validateForm)]
pub fn js_validate_form(form: &web_sys::Element) -> bool {
    validate_form(form)
}
