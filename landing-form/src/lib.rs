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

//! Contact-form core.
//!
//! Everything here is plain Rust with no browser or UI framework
//! dependency: field state and its reducer, the email validator, an
//! observable store the view layer subscribes to, the submit gate, and the
//! viewport-visibility tracking used for navigation highlighting. The Yew
//! front end in `yew-ui` renders this state and feeds DOM events back in.

pub mod error;
pub mod state;
pub mod store;
pub mod submit;
pub mod validation;
pub mod visibility;

pub use error::VisibilityError;
pub use state::{FormAction, FormState};
pub use store::{FormStore, StoreSubscription};
pub use submit::SubmitOutcome;
pub use validation::{validate_email, EMAIL_ERROR_MESSAGE};
pub use visibility::{
    RatioViewport, Threshold, ThresholdTracker, ViewportObserver, VisibilityReporter,
    FORM_SECTION_THRESHOLD, HERO_SECTION_THRESHOLD,
};
