// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// An internal invariant violation found by a `validate` call.
///
/// The `validate` methods are `#[doc(hidden)]` test hooks; property tests
/// call them after every operation.
#[derive(Debug)]
pub struct ValidationError {
    container: &'static str,
    message: String,
}

impl ValidationError {
    pub(crate) fn new(
        container: &'static str,
        message: impl Into<String>,
    ) -> Self {
        ValidationError { container, message: message.into() }
    }

    pub(crate) fn relabel(self, container: &'static str) -> Self {
        ValidationError { container, message: self.message }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error in {}: {}", self.container, self.message)
    }
}

impl std::error::Error for ValidationError {}
