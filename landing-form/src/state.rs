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

//! Field state for one mounted form.

use crate::validation::email_error;

/// Editable fields plus the validation error derived from `email`.
///
/// `email_error` is recomputed on every [`FormState::set_email`], so after
/// any email edit it is `None` exactly when the address is well formed.
/// A fresh form has no error even though its email is empty; the hint only
/// appears once the user has typed something.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub message: String,
    pub email: String,
    pub is_checked: bool,
    pub email_error: Option<String>,
}

/// One user edit, as produced by the view layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormAction {
    SetMessage(String),
    SetEmail(String),
    ToggleChecked,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_message(&mut self, text: impl Into<String>) {
        self.message = text.into();
    }

    pub fn set_email(&mut self, text: impl Into<String>) {
        self.email = text.into();
        self.email_error = email_error(&self.email);
    }

    pub fn toggle_checked(&mut self) {
        self.is_checked = !self.is_checked;
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SetMessage(text) => self.set_message(text),
            FormAction::SetEmail(text) => self.set_email(text),
            FormAction::ToggleChecked => self.toggle_checked(),
        }
    }

    /// Submit gate: the button stays disabled until there is a valid
    /// address and the privacy policy has been acknowledged.
    pub fn is_submit_disabled(&self) -> bool {
        self.email.is_empty() || self.email_error.is_some() || !self.is_checked
    }
}
