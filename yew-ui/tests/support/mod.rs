// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for landing-ui component tests.
//
// Provides mount/cleanup helpers, DOM event helpers that drive components
// the way a user would, and runtime-config injection.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventInit, HtmlButtonElement, HtmlInputElement, HtmlTextAreaElement};
use yew::platform::time::sleep;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Let Yew run pending renders and effects.
pub async fn settle() {
    sleep(Duration::ZERO).await;
}

/// Poll `done` every 50ms for up to two seconds. For browser callbacks
/// that land on a later frame, such as `IntersectionObserver`.
pub async fn wait_until(mut done: impl FnMut() -> bool) -> bool {
    for _ in 0..40 {
        if done() {
            return true;
        }
        sleep(Duration::from_millis(50)).await;
    }
    done()
}

pub fn query(mount: &Element, selector: &str) -> Element {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
}

// ---------------------------------------------------------------------------
// User interaction
// ---------------------------------------------------------------------------

fn bubbling(kind: &str, cancelable: bool) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(cancelable);
    Event::new_with_event_init_dict(kind, &init).unwrap()
}

/// Set an `<input>`'s value and fire `input`, as typing would.
pub fn type_into_input(mount: &Element, selector: &str, value: &str) {
    let input: HtmlInputElement = query(mount, selector).unchecked_into();
    input.set_value(value);
    input.dispatch_event(&bubbling("input", false)).unwrap();
}

/// Set a `<textarea>`'s value and fire `input`.
pub fn type_into_textarea(mount: &Element, selector: &str, value: &str) {
    let area: HtmlTextAreaElement = query(mount, selector).unchecked_into();
    area.set_value(value);
    area.dispatch_event(&bubbling("input", false)).unwrap();
}

/// Click a checkbox (toggles it and fires `change`).
pub fn click_checkbox(mount: &Element, selector: &str) {
    let input: HtmlInputElement = query(mount, selector).unchecked_into();
    input.click();
}

/// Fire a cancelable `submit` on the form. Returns `true` if the page
/// would have navigated, i.e. nobody called `preventDefault`.
pub fn submit_form(mount: &Element, selector: &str) -> bool {
    query(mount, selector)
        .dispatch_event(&bubbling("submit", true))
        .unwrap()
}

pub fn submit_button(mount: &Element) -> HtmlButtonElement {
    query(mount, "button[type=submit]").unchecked_into()
}

// ---------------------------------------------------------------------------
// Runtime config injection (integration tests)
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` with analytics disabled.
pub fn inject_app_config() {
    inject_app_config_with(|_| {});
}

/// Inject a `window.__APP_CONFIG`, letting the caller override keys.
pub fn inject_app_config_with(customize: impl FnOnce(&js_sys::Object)) {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &wasm_bindgen::JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("analyticsEnabled", &"false".into());
    set("highlightActiveSection", &"true".into());
    customize(&config);

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}
