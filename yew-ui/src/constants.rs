// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime configuration, read from `window.__APP_CONFIG` which the
//! deployment injects ahead of the wasm bundle.

use landing_types::truthy;
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "matomoBaseUrl")]
    #[serde(default)]
    pub matomo_base_url: Option<String>,
    #[serde(rename = "matomoSiteId")]
    #[serde(default)]
    pub matomo_site_id: Option<u32>,
    #[serde(rename = "analyticsEnabled")]
    #[serde(default)]
    pub analytics_enabled: String,
    #[serde(rename = "highlightActiveSection")]
    #[serde(default = "enabled_flag")]
    pub highlight_active_section: String,
}

fn enabled_flag() -> String {
    "true".to_string()
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let Some(win) = window() else {
        return Err("No window object; the landing page must run in a browser".to_string());
    };
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

pub fn analytics_enabled() -> bool {
    app_config()
        .map(|c| truthy(Some(c.analytics_enabled.as_str())))
        .unwrap_or(false)
}

/// Whether the section currently in view gets a highlight border.
/// Defaults to on, including when the config is missing.
pub fn highlight_active_section() -> bool {
    app_config()
        .map(|c| truthy(Some(c.highlight_active_section.as_str())))
        .unwrap_or(true)
}
