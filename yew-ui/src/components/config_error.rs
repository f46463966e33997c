/*
 * Copyright 2025 Security Union LLC
 * Licensed under MIT OR Apache-2.0
 */

use yew::prelude::*;

pub const CONFIG_HINT: &str =
    "The page expects a window.__APP_CONFIG object set by index.html; see the README for its keys.";

#[derive(Properties, Debug, PartialEq)]
pub struct ConfigErrorProps {
    pub message: String,
}

#[function_component(ConfigError)]
pub fn config_error(props: &ConfigErrorProps) -> Html {
    html! {
        <div class="error-container">
            <p class="error-message">{ &props.message }</p>
            <p class="error-hint">{ CONFIG_HINT }</p>
        </div>
    }
}
