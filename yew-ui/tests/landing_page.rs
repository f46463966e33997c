// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Integration test for the LandingPage coordinator.
//
// Checks that both sections and the anchor navigation render, and that the
// page still comes up when the runtime config is missing.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use landing_types::Section;
use support::{cleanup, create_mount_point, inject_app_config, remove_app_config, settle};
use wasm_bindgen_test::*;

use landing_ui::components::landing_page::LandingPage;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn page_renders_sections_and_navigation() {
    inject_app_config();

    let mount = create_mount_point();
    yew::Renderer::<LandingPage>::with_root(mount.clone()).render();
    settle().await;

    for section in Section::ALL {
        assert!(
            mount
                .query_selector(&format!("section#{}", section.as_id()))
                .unwrap()
                .is_some(),
            "section {section} missing"
        );
        assert!(
            mount
                .query_selector(&format!("a.nav-link[href='{}']", section.anchor()))
                .unwrap()
                .is_some(),
            "nav link for {section} missing"
        );
    }

    cleanup(&mount);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn page_renders_without_config() {
    remove_app_config();

    let mount = create_mount_point();
    yew::Renderer::<LandingPage>::with_root(mount.clone()).render();
    settle().await;

    assert!(
        mount.query_selector("section#formSection").unwrap().is_some(),
        "form section should render even without config"
    );

    cleanup(&mount);
}
