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

//! Viewport visibility tracking for scroll-based navigation highlighting.
//!
//! The pieces stack up as follows:
//!
//! * a [`ViewportObserver`] watches an element and reports raw intersection
//!   samples (the browser implementation lives in `yew-ui` and wraps
//!   `IntersectionObserver`; [`RatioViewport`] is a hand-fed stand-in),
//! * a [`ThresholdTracker`] turns samples into an `in_view` boolean that
//!   flips in both directions as the threshold is crossed,
//! * a [`VisibilityReporter`] tells the parent page which section is in
//!   view.

use landing_types::{Callback, Section};
use log::debug;

use crate::error::VisibilityError;

/// Fraction of the form section that must be visible to count as in view.
pub const FORM_SECTION_THRESHOLD: f64 = 0.8;

/// The hero is taller than most viewports, so half of it is enough.
pub const HERO_SECTION_THRESHOLD: f64 = 0.5;

/// Visible-area fraction in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub const FORM_SECTION: Threshold = Threshold(FORM_SECTION_THRESHOLD);
    pub const HERO_SECTION: Threshold = Threshold(HERO_SECTION_THRESHOLD);

    /// Threshold a page section uses to decide it is in view.
    pub fn for_section(section: Section) -> Threshold {
        match section {
            Section::HeroSection => Threshold::HERO_SECTION,
            Section::FormSection => Threshold::FORM_SECTION,
        }
    }

    pub fn new(value: f64) -> Result<Self, VisibilityError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(VisibilityError::InvalidThreshold(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether a sample counts as in view. Matches how intersection
    /// entries are read: the element must intersect at all, and its
    /// visible ratio must reach the threshold.
    pub fn is_met(&self, is_intersecting: bool, ratio: f64) -> bool {
        is_intersecting && ratio >= self.0
    }
}

/// Collapses intersection samples into an `in_view` flag.
#[derive(Clone, Debug)]
pub struct ThresholdTracker {
    threshold: Threshold,
    in_view: bool,
}

impl ThresholdTracker {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            in_view: false,
        }
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    /// Feed one sample. Returns the new flag only when it changed.
    pub fn update(&mut self, is_intersecting: bool, ratio: f64) -> Option<bool> {
        let next = self.threshold.is_met(is_intersecting, ratio);
        if next == self.in_view {
            return None;
        }
        self.in_view = next;
        Some(next)
    }
}

/// Platform hook that watches a target and emits `in_view` transitions.
///
/// Implementations emit on `on_change` every time the tracked flag flips,
/// entering or leaving, for as long as the observation is live.
/// `disconnect` must release whatever the platform holds; it is called
/// when the owning component is torn down and may be called more than once.
pub trait ViewportObserver {
    type Target: ?Sized;

    fn observe(
        &mut self,
        target: &Self::Target,
        threshold: Threshold,
        on_change: Callback<bool>,
    ) -> Result<(), VisibilityError>;

    fn disconnect(&mut self);
}

/// Observer for hosts without a layout engine. Samples are pushed in by
/// hand (tests, polling loops).
#[derive(Default)]
pub struct RatioViewport {
    active: Option<(ThresholdTracker, Callback<bool>)>,
}

impl RatioViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_observing(&self) -> bool {
        self.active.is_some()
    }

    /// Push one intersection sample. Ignored when not observing.
    pub fn set_ratio(&mut self, is_intersecting: bool, ratio: f64) {
        if let Some((tracker, on_change)) = self.active.as_mut() {
            if let Some(in_view) = tracker.update(is_intersecting, ratio) {
                on_change.emit(in_view);
            }
        }
    }
}

impl ViewportObserver for RatioViewport {
    type Target = ();

    fn observe(
        &mut self,
        _target: &(),
        threshold: Threshold,
        on_change: Callback<bool>,
    ) -> Result<(), VisibilityError> {
        self.active = Some((ThresholdTracker::new(threshold), on_change));
        Ok(())
    }

    fn disconnect(&mut self) {
        self.active = None;
    }
}

/// Tells the parent page that `section` is in view.
///
/// The parent is notified whenever `in_view` turns true, and again if the
/// parent swaps in a different handler while the section is still in
/// view. Leaving the viewport updates the flag but does not notify.
pub struct VisibilityReporter {
    section: Section,
    in_view: bool,
    on_in_view: Callback<Section>,
}

impl VisibilityReporter {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            in_view: false,
            on_in_view: Callback::noop(),
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    pub fn set_in_view(&mut self, in_view: bool) {
        if in_view == self.in_view {
            return;
        }
        self.in_view = in_view;
        debug!("section {} in view: {in_view}", self.section);
        if in_view {
            self.on_in_view.emit(self.section);
        }
    }

    pub fn set_handler(&mut self, on_in_view: Callback<Section>) {
        if on_in_view == self.on_in_view {
            return;
        }
        self.on_in_view = on_in_view;
        if self.in_view {
            self.on_in_view.emit(self.section);
        }
    }
}
