use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::features::locations::model::Location;
use crate::modules::dom;
use crate::shared::constants::{APP_NAME, TWITTER_INTENT_URL};

/// Share message for a named location.
pub fn share_text(name: &str) -> String {
    format!("Check out {} on {}!", name, APP_NAME)
}

/// Pre-filled tweet composer URL used when the Web Share API is unavailable.
pub fn tweet_intent_url(text: &str, page_url: &str) -> String {
    format!(
        "{}?text={}&url={}",
        TWITTER_INTENT_URL,
        urlencoding::encode(text),
        urlencoding::encode(page_url)
    )
}

/// Share a location through the native share sheet when the platform has
/// one, else open a pre-filled tweet in a new tab.
///
/// Best-effort: failures are logged and swallowed, never propagated.
pub fn share_location(location: &Location) {
    share_named(&location.name);
}

pub fn share_named(name: &str) {
    let Some(window) = dom::window() else {
        return;
    };
    let page_url = dom::current_url();
    let text = share_text(name);

    let navigator = window.navigator();
    match native_share_function(navigator.as_ref()) {
        Some(share) => {
            let data = js_sys::Object::new();
            set_string(&data, "title", name);
            set_string(&data, "text", &text);
            set_string(&data, "url", &page_url);

            match share.call1(navigator.as_ref(), &data) {
                Ok(value) => spawn_local(async move {
                    let Ok(promise) = value.dyn_into::<js_sys::Promise>() else {
                        return;
                    };
                    if let Err(err) = JsFuture::from(promise).await {
                        tracing::warn!("Error sharing: {:?}", err);
                    }
                }),
                Err(err) => tracing::warn!("Error sharing: {:?}", err),
            }
        }
        None => {
            dom::open_in_new_tab(&tweet_intent_url(&text, &page_url));
        }
    }
}

fn native_share_function(navigator: &JsValue) -> Option<js_sys::Function> {
    js_sys::Reflect::get(navigator, &JsValue::from_str("share"))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

fn set_string(target: &js_sys::Object, key: &str, value: &str) {
    let _ = js_sys::Reflect::set(
        target.as_ref(),
        &JsValue::from_str(key),
        &JsValue::from_str(value),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_text_names_the_app() {
        assert_eq!(
            share_text("Warung Sate"),
            "Check out Warung Sate on Kurasi Map!"
        );
    }

    #[test]
    fn test_tweet_intent_url_encodes_components() {
        let url = tweet_intent_url(
            "Check out Warung Sate on Kurasi Map!",
            "https://kurasimap.example/locations/1?tab=hours",
        );
        assert!(url.starts_with("https://twitter.com/intent/tweet?text="));
        assert!(url.contains("Check%20out%20Warung%20Sate"));
        assert!(url.contains("url=https%3A%2F%2Fkurasimap.example%2Flocations%2F1%3Ftab%3Dhours"));
    }
}
