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

use crate::state::FormState;

/// What a submit attempt would have done. Nothing is sent either way; the
/// form has no backend yet, so this only feeds the debug log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The gate was closed (the button should not have been clickable).
    Blocked,
    /// All fields passed the gate.
    Ready,
}

impl From<&FormState> for SubmitOutcome {
    fn from(state: &FormState) -> Self {
        if state.is_submit_disabled() {
            SubmitOutcome::Blocked
        } else {
            SubmitOutcome::Ready
        }
    }
}
