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

use landing_form::{Threshold, VisibilityReporter};
use landing_types::{Callback as SinkCallback, Section};
use yew::prelude::*;

use crate::hooks::use_in_view;

/// Reports `section` to the page through `on_in_view` each time it scrolls
/// into view at its [`Threshold::for_section`] threshold.
///
/// Returns the ref to attach to the section element.
#[hook]
pub fn use_section_visibility(section: Section, on_in_view: Callback<Section>) -> NodeRef {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), Threshold::for_section(section));
    let reporter = use_mut_ref(|| VisibilityReporter::new(section));

    // Handler first, so a section that mounts already in view reports to it.
    {
        let reporter = reporter.clone();
        use_effect_with(on_in_view, move |on_in_view| {
            let on_in_view = on_in_view.clone();
            reporter
                .borrow_mut()
                .set_handler(SinkCallback::from(move |section| on_in_view.emit(section)));
        });
    }
    use_effect_with(in_view, move |in_view| {
        reporter.borrow_mut().set_in_view(*in_view);
    });

    node
}
