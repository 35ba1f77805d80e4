//! History API
//!
//! Client-side navigation without a router crate.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn origin() -> String {
    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

pub fn push_path(path: &str) {
    if current_path() == path {
        return;
    }
    let Some(history) = window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
        log::warn!("[history] push {} failed: {:?}", path, e);
    }
}

pub fn replace_path(path: &str) {
    let Some(history) = window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(path)) {
        log::warn!("[history] replace {} failed: {:?}", path, e);
    }
}

/// Call `on_change` on every back/forward; the listener lives for the page
pub fn on_popstate(on_change: impl Fn() + 'static) {
    let Some(window) = window() else {
        return;
    };
    let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| on_change());
    if let Err(e) =
        window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
    {
        log::warn!("[history] popstate listener failed: {:?}", e);
    }
    closure.forget();
}
