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

use thiserror::Error;

/// Errors raised while setting up viewport observation.
///
/// None of these reach the user. The section simply never reports itself
/// as visible, and the caller logs the error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VisibilityError {
    /// Threshold outside `0.0..=1.0`, or NaN.
    #[error("visibility threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f64),

    /// The host has no usable intersection API.
    #[error("viewport observer unavailable: {0}")]
    ObserverUnavailable(String),

    /// The element to observe has not been mounted yet.
    #[error("observed element is not mounted")]
    TargetMissing,
}
