//! Window/document helpers and DOM lifecycle plumbing.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

/// Find an optional element by selector. None when the element is absent, the
/// selector is invalid, or there is no document.
pub fn query_selector(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// All elements matching a selector; empty when the document is unavailable.
pub fn query_selector_all(selector: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };

    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            elements.push(element);
        }
    }
    elements
}

/// Resolve once the DOM is fully parsed.
///
/// Resolves immediately when the document has already left the `loading`
/// state, otherwise waits for `DOMContentLoaded`. Exactly one resolution per
/// call.
pub async fn ready() {
    let Some(document) = document() else {
        return;
    };
    if document.ready_state() != "loading" {
        return;
    }

    let (sender, receiver) = oneshot::channel::<()>();
    let sender = Rc::new(RefCell::new(Some(sender)));
    let callback = Closure::<dyn FnMut()>::new({
        let sender = Rc::clone(&sender);
        move || {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(());
            }
        }
    });

    if document
        .add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())
        .is_err()
    {
        return;
    }
    let _ = receiver.await;
}

/// Navigate the current browsing context; best-effort.
pub fn navigate_to(path: &str) {
    if let Some(window) = window() {
        if let Err(err) = window.location().set_href(path) {
            tracing::warn!("Navigation to {} failed: {:?}", path, err);
        }
    }
}

/// Current page URL, empty when no window is available.
pub fn current_url() -> String {
    window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

/// Open a URL in a new browsing context; best-effort.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        if let Err(err) = window.open_with_url_and_target(url, "_blank") {
            tracing::warn!("window.open failed: {:?}", err);
        }
    }
}
