#![cfg(target_arch = "wasm32")]

//! Browser logger for the landing page.
//!
//! Every `log` record goes to the devtools console; records at or above
//! `matomo_level` are also pushed to Matomo as `RustLog` events so that
//! production warnings show up in analytics. [`track_event`] and
//! [`track_section_view`] record page interactions directly. All Matomo
//! calls are no-ops while `window._paq` does not exist.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;
use web_sys::{console, window};

/// Matomo event category used for landing-page interactions.
pub const LANDING_CATEGORY: &str = "Landing";

#[derive(Clone, Debug)]
pub struct MatomoConfig {
    /// Tracker root, with trailing slash (e.g. `https://matomo.example.com/`).
    pub base_url: Option<String>,
    pub site_id: Option<u32>,
    pub console_level: LevelFilter,
    pub matomo_level: LevelFilter,
    /// Inject the `matomo.js` snippet when the page did not ship one.
    pub inject_snippet: bool,
    /// Event names longer than this are truncated before sending.
    pub max_event_len: usize,
}

impl Default for MatomoConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            site_id: None,
            console_level: LevelFilter::Info,
            matomo_level: LevelFilter::Warn,
            inject_snippet: true,
            max_event_len: 300,
        }
    }
}

pub struct MatomoLogger {
    console_level: LevelFilter,
    matomo_level: LevelFilter,
    max_event_len: usize,
}

impl MatomoLogger {
    /// Install as the global `log` backend. Fails if a logger is already set.
    pub fn init(config: MatomoConfig) -> Result<(), log::SetLoggerError> {
        if config.inject_snippet {
            inject_snippet(&config);
        }

        let logger = MatomoLogger {
            console_level: config.console_level,
            matomo_level: config.matomo_level,
            max_event_len: config.max_event_len,
        };
        log::set_boxed_logger(Box::new(logger))?;
        log::set_max_level(config.console_level.max(config.matomo_level));
        Ok(())
    }
}

impl Log for MatomoLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level().to_level_filter() <= self.console_level.max(self.matomo_level)
    }

    fn log(&self, record: &Record) {
        let level = record.level().to_level_filter();
        if level <= self.console_level {
            write_console(record);
        }
        if level <= self.matomo_level {
            let name = truncate(
                format!("{} — {}", record.target(), record.args()),
                self.max_event_len,
            );
            let weight = match record.level() {
                Level::Error => 50.0,
                Level::Warn => 40.0,
                Level::Info => 30.0,
                Level::Debug => 20.0,
                Level::Trace => 10.0,
            };
            paq_push(&[
                "trackEvent".into(),
                "RustLog".into(),
                record.level().as_str().into(),
                name.into(),
                JsValue::from_f64(weight),
            ]);
        }
    }

    fn flush(&self) {}
}

/// Record a custom Matomo event.
pub fn track_event(category: &str, action: &str, name: &str) {
    paq_push(&[
        "trackEvent".into(),
        category.into(),
        action.into(),
        name.into(),
    ]);
}

/// Record that a landing-page section scrolled into view.
pub fn track_section_view(section_id: &str) {
    track_event(LANDING_CATEGORY, "SectionView", section_id);
}

fn write_console(record: &Record) {
    let msg = JsValue::from_str(&format!(
        "{}: {} — {}",
        record.level(),
        record.target(),
        record.args()
    ));
    match record.level() {
        Level::Error => console::error_1(&msg),
        Level::Warn => console::warn_1(&msg),
        Level::Info => console::info_1(&msg),
        Level::Debug => console::log_1(&msg),
        Level::Trace => console::debug_1(&msg),
    }
}

fn truncate(mut s: String, max_len: usize) -> String {
    if s.len() > max_len {
        let mut cut = max_len;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
    }
    s
}

fn paq() -> Option<JsValue> {
    let w = window()?;
    let paq = js_sys::Reflect::get(&w, &JsValue::from_str("_paq")).ok()?;
    (!paq.is_undefined() && !paq.is_null()).then_some(paq)
}

/// `window._paq.push([args...])`, if `_paq` exists.
fn paq_push(args: &[JsValue]) {
    let Some(paq) = paq() else {
        return;
    };
    let command: js_sys::Array = args.iter().collect();
    if let Ok(push) = js_sys::Reflect::get(&paq, &JsValue::from_str("push")) {
        if let Some(push) = push.dyn_ref::<js_sys::Function>() {
            let _ = push.call1(&paq, &command);
        }
    }
}

fn inject_snippet(config: &MatomoConfig) {
    let Some(w) = window() else {
        return;
    };
    if paq().is_some() {
        return;
    }
    let (Some(base), Some(site)) = (config.base_url.as_deref(), config.site_id) else {
        return;
    };

    let _ = js_sys::Reflect::set(&w, &JsValue::from_str("_paq"), &js_sys::Array::new());
    paq_push(&["setTrackerUrl".into(), format!("{base}matomo.php").into()]);
    paq_push(&["setSiteId".into(), site.to_string().into()]);
    paq_push(&["trackPageView".into()]);
    paq_push(&["enableLinkTracking".into()]);

    if let Some(doc) = w.document() {
        if let Ok(script) = doc.create_element("script") {
            script.set_attribute("async", "true").ok();
            script.set_attribute("src", &format!("{base}matomo.js")).ok();
            if let Some(head) = doc.head() {
                let _ = head.append_child(&script);
            }
        }
    }
}
