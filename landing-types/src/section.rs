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

//! Page-region identifiers used for anchor navigation and scroll
//! highlighting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A region of the landing page. The serialized form is the DOM id of the
/// section element, so `#` + id is a valid anchor link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "heroSection")]
    HeroSection,
    #[serde(rename = "formSection")]
    FormSection,
}

impl Section {
    /// Every section, in page order.
    pub const ALL: [Section; 2] = [Section::HeroSection, Section::FormSection];

    pub fn as_id(&self) -> &'static str {
        match self {
            Section::HeroSection => "heroSection",
            Section::FormSection => "formSection",
        }
    }

    pub fn anchor(&self) -> String {
        format!("#{}", self.as_id())
    }

    /// Human-readable navigation label.
    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::HeroSection => "Главная",
            Section::FormSection => "Связаться с нами",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_id())
    }
}
