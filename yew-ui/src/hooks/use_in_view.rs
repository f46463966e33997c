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
 */

//! `IntersectionObserver`-backed viewport tracking.

use landing_form::{Threshold, ThresholdTracker, ViewportObserver, VisibilityError};
use landing_types::Callback as SinkCallback;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

type EntriesClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Browser implementation of [`ViewportObserver`].
///
/// Holds the JS observer and the Rust closure it calls; both are released
/// on [`ViewportObserver::disconnect`] or drop.
#[derive(Default)]
pub struct IntersectionViewportObserver {
    observer: Option<IntersectionObserver>,
    on_entries: Option<EntriesClosure>,
}

impl IntersectionViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewportObserver for IntersectionViewportObserver {
    type Target = Element;

    fn observe(
        &mut self,
        target: &Element,
        threshold: Threshold,
        on_change: SinkCallback<bool>,
    ) -> Result<(), VisibilityError> {
        self.disconnect();

        let mut tracker = ThresholdTracker::new(threshold);
        let on_entries = EntriesClosure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if let Some(in_view) =
                    tracker.update(entry.is_intersecting(), entry.intersection_ratio())
                {
                    on_change.emit(in_view);
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold.value()));
        let observer =
            IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &init)
                .map_err(|e| VisibilityError::ObserverUnavailable(format!("{e:?}")))?;
        observer.observe(target);

        self.observer = Some(observer);
        self.on_entries = Some(on_entries);
        Ok(())
    }

    fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.on_entries = None;
    }
}

impl Drop for IntersectionViewportObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Tracks whether the element behind `node` is in view at `threshold`.
///
/// Updates in both directions for as long as the component is mounted.
/// When observation cannot start (node not attached, no browser support)
/// the value stays `false` and a warning is logged.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: Threshold) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with((node, threshold), move |(node, threshold)| {
            let mut observer = IntersectionViewportObserver::new();
            let result = match node.cast::<Element>() {
                Some(element) => observer.observe(
                    &element,
                    *threshold,
                    SinkCallback::from(move |visible| in_view.set(visible)),
                ),
                None => Err(VisibilityError::TargetMissing),
            };
            if let Err(e) = result {
                log::warn!("viewport tracking disabled: {e}");
            }

            move || observer.disconnect()
        });
    }

    *in_view
}
