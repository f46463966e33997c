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

//! Email syntax check.
//!
//! This is a sanity check on shape only: something, an `@`, something, a
//! dot, something, with no whitespace and no second `@` anywhere. It does
//! not try to be RFC 5322 complete and never touches DNS.

use once_cell::sync::Lazy;

/// Hint rendered under the email field while the address is malformed.
pub const EMAIL_ERROR_MESSAGE: &str = "Неправильно указана почта";

static EMAIL_RE: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Returns `true` iff `value` looks like `local@domain.tld`.
pub fn validate_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// The error text to show for `value`, if any.
pub fn email_error(value: &str) -> Option<String> {
    if validate_email(value) {
        None
    } else {
        Some(EMAIL_ERROR_MESSAGE.to_string())
    }
}
