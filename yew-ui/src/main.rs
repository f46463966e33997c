/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use landing_ui::components::config_error::ConfigError;
use landing_ui::components::landing_page::LandingPage;
use landing_ui::constants::app_config;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    match app_config() {
        Ok(_) => html! { <LandingPage /> },
        Err(e) => html! { <ConfigError message={e} /> },
    }
}

/// Console + Matomo logging. Tracking is only wired up when the runtime
/// config enables analytics and names a tracker.
#[cfg(target_arch = "wasm32")]
fn init_logging() {
    use landing_ui::constants::analytics_enabled;
    use matomo_logger::{MatomoConfig, MatomoLogger};

    let config = app_config().ok();
    let analytics = analytics_enabled();
    let result = MatomoLogger::init(MatomoConfig {
        base_url: config
            .as_ref()
            .and_then(|c| c.matomo_base_url.clone())
            .filter(|_| analytics),
        site_id: config.as_ref().and_then(|c| c.matomo_site_id),
        console_level: if cfg!(feature = "debugAssertions") {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        },
        matomo_level: log::LevelFilter::Warn,
        inject_snippet: analytics,
        ..Default::default()
    });
    if let Err(e) = result {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {}

fn main() {
    init_logging();
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
