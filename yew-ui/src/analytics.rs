// SPDX-License-Identifier: MIT OR Apache-2.0

//! Thin wrapper over the Matomo tracker so that components do not need to
//! care whether analytics is configured or which target they build for.

use landing_types::Section;

/// Record that `section` scrolled into view, if analytics is enabled.
pub fn record_section_view(section: Section) {
    log::debug!("section in view: {section}");
    if !crate::constants::analytics_enabled() {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    matomo_logger::track_section_view(section.as_id());
}
