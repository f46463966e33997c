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

pub mod callback;
pub mod section;

pub use callback::Callback;
pub use section::Section;

/// Interprets a config flag the way the deploy scripts write them
/// (`"true"`, `"1"`, any case). Anything else, including `None`, is false.
pub fn truthy(s: Option<&str>) -> bool {
    matches!(s.map(str::to_lowercase).as_deref(), Some("true" | "1"))
}
