// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the shared Button.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::cell::Cell;

use support::{cleanup, create_mount_point, query, settle};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlButtonElement;
use yew::prelude::*;

use landing_ui::components::button::{BtnVariant, Button};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn submit_button_is_typed_and_disabled() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <Button text="Отправить" submit=true disabled=true styles={classes!("extra")} />
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;

    let button: HtmlButtonElement = query(&mount, "button").unchecked_into();
    assert_eq!(button.type_(), "submit");
    assert!(button.disabled());
    assert_eq!(button.text_content().unwrap_or_default(), "Отправить");

    let classes = button.class_list();
    assert!(classes.contains("btn-black"), "default variant is black");
    assert!(classes.contains("extra"), "styles are appended");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn plain_button_fires_onclick() {
    thread_local! {
        static CLICKS: Cell<u32> = const { Cell::new(0) };
    }

    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        let onclick = Callback::from(|_: MouseEvent| CLICKS.with(|c| c.set(c.get() + 1)));
        html! {
            <Button text="Задать вопрос" variant={BtnVariant::Orange} {onclick} />
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;

    let button: HtmlButtonElement = query(&mount, "button").unchecked_into();
    assert_eq!(button.type_(), "button");
    assert!(button.class_list().contains("btn-orange"));

    button.click();
    settle().await;
    assert_eq!(CLICKS.with(|c| c.get()), 1);

    cleanup(&mount);
}
